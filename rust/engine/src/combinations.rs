//! Lexicographic k-subset enumeration over a slice.
//!
//! Used by the best-hand selector to walk every 5-card subset of a 6 or
//! 7 card holding, but nothing here is poker specific.

/// Iterator over every `k`-element subset of a slice, in lexicographic
/// order of the chosen indices. Elements keep their original relative order.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

/// Enumerates all `C(items.len(), k)` subsets of `items`.
///
/// # Examples
///
/// ```
/// use showdown_engine::combinations::combinations;
///
/// let subsets: Vec<Vec<u8>> = combinations(&[1, 2, 3], 2).collect();
/// assert_eq!(subsets, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: (0..k).collect(),
        started: false,
        done: k > items.len(),
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started {
            let n = self.items.len();
            let k = self.indices.len();
            // rightmost index that can still move right
            let pivot = (0..k).rev().find(|&i| self.indices[i] != i + n - k);
            match pivot {
                Some(i) => {
                    self.indices[i] += 1;
                    for j in i + 1..k {
                        self.indices[j] = self.indices[j - 1] + 1;
                    }
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
        self.started = true;
        Some(self.indices.iter().map(|&i| self.items[i].clone()).collect())
    }
}
