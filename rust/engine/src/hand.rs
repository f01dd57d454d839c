use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::combinations::combinations;
use crate::errors::EngineError;

/// The ten standard poker hand classes, worst to best.
/// The discriminant is the primary comparison key.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandClass {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandClass {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            HandClass::HighCard => "High Card",
            HandClass::Pair => "Pair",
            HandClass::TwoPair => "Two Pair",
            HandClass::ThreeOfAKind => "Three of a Kind",
            HandClass::Straight => "Straight",
            HandClass::Flush => "Flush",
            HandClass::FullHouse => "Full House",
            HandClass::FourOfAKind => "Four of a Kind",
            HandClass::StraightFlush => "Straight Flush",
            HandClass::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of evaluating exactly five cards.
///
/// Two evaluations describing the same strength in different suits are not
/// `==` (their cards differ); use [`compare_hands`] to order hands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub class: HandClass,
    /// The five cards, sorted by descending rank value.
    pub cards: [Card; 5],
    /// Secondary comparison key, shape fixed per class:
    /// quads `[quad, kicker]`, full house `[trips, pair]`,
    /// two pair `[high, low, kicker]`, flush/high card all five values.
    pub tiebreak: Vec<u8>,
    pub description: String,
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Classifies exactly five cards.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInputSize`] unless `cards.len() == 5`.
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::hand::{evaluate_five, HandClass};
///
/// let wheel = parse_cards("Ah 2c 3d 4s 5h").unwrap();
/// let eval = evaluate_five(&wheel).unwrap();
/// assert_eq!(eval.class, HandClass::Straight);
/// assert_eq!(eval.tiebreak, vec![5]);
/// ```
pub fn evaluate_five(cards: &[Card]) -> Result<HandEvaluation, EngineError> {
    let mut sorted: [Card; 5] =
        <[Card; 5]>::try_from(cards).map_err(|_| EngineError::InvalidInputSize {
            expected: "5",
            actual: cards.len(),
        })?;
    sorted.sort_by(|a, b| b.rank.cmp(&a.rank));

    let values: Vec<u8> = sorted.iter().map(|c| c.rank.value()).collect();
    let groups = group_ranks(&sorted);
    let is_flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
    let straight_high = straight_high(&sorted, groups.len());

    let (class, tiebreak, description) = match (straight_high, is_flush) {
        (Some(Rank::Ace), true) => (
            HandClass::RoyalFlush,
            vec![Rank::Ace.value()],
            "Royal Flush".to_string(),
        ),
        (Some(high), true) => (
            HandClass::StraightFlush,
            vec![high.value()],
            format!("Straight Flush, {} high", high.name()),
        ),
        _ if groups[0].0 == 4 => (
            HandClass::FourOfAKind,
            group_values(&groups),
            format!("Four of a Kind, {}", groups[0].1.plural()),
        ),
        _ if groups[0].0 == 3 && groups[1].0 == 2 => (
            HandClass::FullHouse,
            group_values(&groups),
            format!(
                "Full House, {} over {}",
                groups[0].1.plural(),
                groups[1].1.plural()
            ),
        ),
        (_, true) => (
            HandClass::Flush,
            values,
            format!("Flush, {} high", sorted[0].rank.name()),
        ),
        (Some(high), false) => (
            HandClass::Straight,
            vec![high.value()],
            format!("Straight, {} high", high.name()),
        ),
        _ if groups[0].0 == 3 => (
            HandClass::ThreeOfAKind,
            group_values(&groups),
            format!("Three of a Kind, {}", groups[0].1.plural()),
        ),
        _ if groups[0].0 == 2 && groups[1].0 == 2 => (
            HandClass::TwoPair,
            group_values(&groups),
            format!(
                "Two Pair, {} and {}",
                groups[0].1.plural(),
                groups[1].1.plural()
            ),
        ),
        _ if groups[0].0 == 2 => (
            HandClass::Pair,
            group_values(&groups),
            format!("Pair of {}", groups[0].1.plural()),
        ),
        _ => (
            HandClass::HighCard,
            values,
            format!("High Card, {}", sorted[0].rank.name()),
        ),
    };

    Ok(HandEvaluation {
        class,
        cards: sorted,
        tiebreak,
        description,
    })
}

/// `(count, rank)` pairs, largest group first, higher rank first within a size.
fn group_ranks(sorted: &[Card; 5]) -> Vec<(usize, Rank)> {
    let mut groups: Vec<(usize, Rank)> = Vec::with_capacity(5);
    for card in sorted {
        match groups.iter_mut().find(|(_, r)| *r == card.rank) {
            Some(group) => group.0 += 1,
            None => groups.push((1, card.rank)),
        }
    }
    groups.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));
    groups
}

fn group_values(groups: &[(usize, Rank)]) -> Vec<u8> {
    groups.iter().map(|(_, r)| r.value()).collect()
}

// Expects cards sorted high to low. The wheel A-5-4-3-2 is five high.
fn straight_high(sorted: &[Card; 5], distinct: usize) -> Option<Rank> {
    if distinct != 5 {
        return None;
    }
    let top = sorted[0].rank.value();
    let bottom = sorted[4].rank.value();
    if top - bottom == 4 {
        return Some(sorted[0].rank);
    }
    if sorted[0].rank == Rank::Ace && sorted[1].rank == Rank::Five && bottom == 2 {
        return Some(Rank::Five);
    }
    None
}

/// Total order over evaluated hands: class first, then the tiebreak
/// sequence element by element. Suits never decide.
pub fn compare_hands(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.class
        .cmp(&b.class)
        .then_with(|| a.tiebreak.cmp(&b.tiebreak))
}

/// Best five-card hand out of six or seven cards.
///
/// Every 5-card subset is evaluated; the first subset found wins ties.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInputSize`] unless given 6 or 7 cards.
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::hand::{best_hand, HandClass};
///
/// let cards = parse_cards("As Ks Qs Js Ts 2h").unwrap();
/// assert_eq!(best_hand(&cards).unwrap().class, HandClass::RoyalFlush);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<HandEvaluation, EngineError> {
    if !matches!(cards.len(), 6 | 7) {
        return Err(EngineError::InvalidInputSize {
            expected: "6 or 7",
            actual: cards.len(),
        });
    }

    let mut best: Option<HandEvaluation> = None;
    for subset in combinations(cards, 5) {
        let eval = evaluate_five(&subset)?;
        best = match best {
            Some(current) if compare_hands(&eval, &current).is_le() => Some(current),
            _ => Some(eval),
        };
    }
    best.ok_or_else(|| EngineError::InternalConsistency("no 5-card subset evaluated".into()))
}

/// Evaluates 5 cards directly, or picks the best five out of 6 or 7.
pub fn evaluate_cards(cards: &[Card]) -> Result<HandEvaluation, EngineError> {
    match cards.len() {
        5 => evaluate_five(cards),
        6 | 7 => best_hand(cards),
        actual => Err(EngineError::InvalidInputSize {
            expected: "5, 6 or 7",
            actual,
        }),
    }
}

/// Indices of every evaluation tied for the best hand.
///
/// ```
/// use showdown_engine::hand::determine_winners;
///
/// assert!(determine_winners(&[]).is_empty());
/// ```
pub fn determine_winners(evaluations: &[HandEvaluation]) -> Vec<usize> {
    let Some(best) = evaluations
        .iter()
        .reduce(|best, e| if compare_hands(e, best).is_gt() { e } else { best })
    else {
        return Vec::new();
    };
    evaluations
        .iter()
        .enumerate()
        .filter(|(_, e)| compare_hands(e, best).is_eq())
        .map(|(i, _)| i)
        .collect()
}
