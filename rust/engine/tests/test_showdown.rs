use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use showdown_engine::cards::parse_cards;
use showdown_engine::deck::Deck;
use showdown_engine::errors::EngineError;
use showdown_engine::hand::{evaluate_five, HandEvaluation};
use showdown_engine::player::Player;
use showdown_engine::showdown::{resolve_showdown, settle_hand};

fn eval(s: &str) -> HandEvaluation {
    evaluate_five(&parse_cards(s).unwrap()).unwrap()
}

fn table(bets: &[u32]) -> Vec<Player> {
    bets.iter()
        .enumerate()
        .map(|(i, &bet)| {
            let mut p = Player::new(i, format!("p{}", i), 0);
            p.total_bet = bet;
            p
        })
        .collect()
}

#[test]
fn short_stack_wins_main_pot_only() {
    let mut players = table(&[50, 100, 100]);
    let evals = vec![
        eval("As Ah Ad Kc Ks"),
        eval("Qs Qh 2d 3c 4s"),
        eval("Js Jh 2c 3d 4h"),
    ];
    let result = resolve_showdown(&mut players, &evals).unwrap();

    assert_eq!(result.pot_results.len(), 2);
    assert_eq!(result.pot_results[0].amount, 150);
    assert_eq!(result.pot_results[0].winner_ids, vec![0]);
    assert!(!result.pot_results[0].is_side_pot);
    assert_eq!(result.pot_results[1].amount, 100);
    assert_eq!(result.pot_results[1].winner_ids, vec![1]);
    assert_eq!(result.pot_results[1].winner_names, vec!["p1".to_string()]);
    assert!(result.pot_results[1].is_side_pot);
    assert_eq!(result.winner_ids, vec![0, 1]);

    assert_eq!(players[0].chips, 150);
    assert_eq!(players[1].chips, 100);
    assert_eq!(players[2].chips, 0);
    result.check_consistency().unwrap();
}

#[test]
fn split_pot_odd_chip_goes_to_lowest_seat() {
    let mut players = table(&[34, 34, 33]);
    let evals = vec![
        eval("Kh 9h 7h 4h 2h"),
        eval("Qs Qh 2d 3c 4s"),
        eval("Ks 9s 7s 4s 2s"),
    ];
    let result = resolve_showdown(&mut players, &evals).unwrap();

    assert_eq!(result.pot_results[0].amount, 99);
    assert_eq!(result.pot_results[0].winner_ids, vec![0, 2]);
    assert_eq!(result.pot_results[1].amount, 2);
    assert_eq!(result.pot_results[1].winner_ids, vec![0]);
    assert_eq!(players[0].chips, 50 + 2);
    assert_eq!(players[2].chips, 49);
    assert_eq!(result.total_awarded(), 101);
}

#[test]
fn folded_players_are_skipped_in_evaluations() {
    let mut players = table(&[100, 40, 100]);
    players[0].is_folded = true;
    // evaluations for p1 and p2 only
    let evals = vec![eval("Ts Th 2d 3c 4s"), eval("9s 9h 2c 3d 4h")];
    let result = resolve_showdown(&mut players, &evals).unwrap();

    // tier 40: 120 chips, p1 best; tier 100: 120 chips, only p2 live
    assert_eq!(result.pot_results[0].amount, 120);
    assert_eq!(result.pot_results[0].winner_ids, vec![1]);
    assert_eq!(result.pot_results[1].amount, 120);
    assert_eq!(result.pot_results[1].winner_ids, vec![2]);
    assert_eq!(players[0].chips, 0);
    assert_eq!(result.pot_results[0].hand_description.as_deref(), Some("Pair of Tens"));
}

#[test]
fn evaluation_count_must_match_live_players() {
    let mut players = table(&[10, 10, 10]);
    let err = resolve_showdown(&mut players, &[eval("Ts Th 2d 3c 4s")]).unwrap_err();
    assert_eq!(
        err,
        EngineError::EvaluationCountMismatch {
            expected: 3,
            actual: 1
        }
    );
    assert!(players.iter().all(|p| p.chips == 0));
}

#[test]
fn pot_without_contenders_is_surfaced_not_paid() {
    // the big bettor folded: nobody live reached the 100 tier
    let mut players = table(&[100, 50, 50]);
    players[0].is_folded = true;
    let evals = vec![eval("Ts Th 2d 3c 4s"), eval("9s 9h 2c 3d 4h")];
    let result = resolve_showdown(&mut players, &evals).unwrap();

    assert_eq!(result.pot_results.len(), 1);
    assert_eq!(result.pot_results[0].amount, 150);
    assert_eq!(result.unclaimed.len(), 1);
    assert_eq!(result.unclaimed[0].amount, 50);
    assert!(matches!(
        result.check_consistency(),
        Err(EngineError::InternalConsistency(_))
    ));
    assert_eq!(players.iter().map(|p| p.chips).sum::<u32>(), 150);
}

#[test]
fn random_hands_conserve_chips() {
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let mut deck = Deck::new_with_seed(9);
    for _ in 0..300 {
        deck.shuffle();
        let seats = rng.random_range(2..=6);
        let mut players: Vec<Player> = (0..seats)
            .map(|i| {
                let mut p = Player::new(i, format!("p{}", i), 0).with_seat(seats - i);
                p.hole = deck.deal_hole();
                p.total_bet = rng.random_range(1..=500);
                p.is_folded = rng.random_bool(0.3);
                p
            })
            .collect();
        if players.iter().all(|p| p.is_folded) {
            players[0].is_folded = false;
        }
        let board = deck.deal_n(5);
        let wagered: u32 = players.iter().map(|p| p.total_bet).sum();

        let result = settle_hand(&mut players, &board).unwrap();
        let unclaimed: u32 = result.unclaimed.iter().map(|p| p.amount).sum();
        let paid: u32 = players.iter().map(|p| p.chips).sum();
        assert_eq!(paid, result.total_awarded());
        assert_eq!(paid + unclaimed, wagered);
        for id in &result.winner_ids {
            assert!(!players[*id].is_folded);
        }
    }
}

#[test]
fn oversized_wagers_fail_before_any_payout() {
    let mut players = table(&[2_000_000_000; 3]);
    let evals = vec![
        eval("As Ah Ad Kc Ks"),
        eval("2c 3d 4h 5s 7c"),
        eval("2d 3c 4s 5h 7d"),
    ];
    let err = resolve_showdown(&mut players, &evals).unwrap_err();
    assert!(matches!(err, EngineError::InternalConsistency(_)));
    assert!(players.iter().all(|p| p.chips == 0));
}
