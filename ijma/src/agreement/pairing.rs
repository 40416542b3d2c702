//! Unordered combination generation.
//!
//! The agreement engine needs every unordered pair of annotators who
//! finalized the same item. `combinations` is the general n-choose-k
//! primitive; `pairs` is the k = 2 case the engine actually drives.
//!
//! Order is deterministic: each combination preserves the relative order of
//! the input, and combinations are emitted in lexicographic index order.

/// All unordered k-combinations of `items`, first-encountered-first.
///
/// For k = 0 this yields the single empty combination; for k > `items.len()`
/// it yields nothing. No randomization: the output is a pure function of the
/// input order.
///
/// # Example
/// ```
/// use ijma::agreement::pairing::combinations;
/// let combos = combinations(&['a', 'b', 'c'], 2);
/// assert_eq!(combos, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
/// ```
#[must_use]
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(k);
    backtrack(items, k, 0, &mut current, &mut out);
    out
}

fn backtrack<T: Clone>(
    items: &[T],
    k: usize,
    start: usize,
    current: &mut Vec<T>,
    out: &mut Vec<Vec<T>>,
) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }
    for i in start..items.len() {
        current.push(items[i].clone());
        backtrack(items, k, i + 1, current, out);
        current.pop();
    }
}

/// All unordered pairs of `items`: n·(n−1)/2 tuples for n inputs.
#[must_use]
pub fn pairs<T: Clone>(items: &[T]) -> Vec<(T, T)> {
    let mut out = Vec::with_capacity(items.len().saturating_sub(1) * items.len() / 2);
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            out.push((a.clone(), b.clone()));
        }
    }
    out
}
