//! Uniform tie-breaking over candidate sets.
//!
//! Every strategy that picks among equally good options goes through these
//! helpers, so ties never favor neighbor insertion order.  An empty
//! candidate set yields `None`, which callers treat as "hold position".

use pe_core::AgentRng;

/// Uniform choice among the items with the smallest `key`.
pub fn choose_min_by_key<T, K, F>(items: &[T], mut key: F, rng: &mut AgentRng) -> Option<T>
where
    T: Copy,
    K: Ord,
    F: FnMut(T) -> K,
{
    let best = items.iter().map(|&t| key(t)).min()?;
    let ties: Vec<T> = items.iter().copied().filter(|&t| key(t) == best).collect();
    rng.choose(&ties).copied()
}

/// Uniform choice among the items with the largest `weight`.
///
/// Ties are exact float equality.  NaN weights never win.
pub fn choose_max_by_weight<T, F>(items: &[T], mut weight: F, rng: &mut AgentRng) -> Option<T>
where
    T: Copy,
    F: FnMut(T) -> f64,
{
    let best = items.iter().map(|&t| weight(t)).fold(f64::NEG_INFINITY, f64::max);
    let ties: Vec<T> = items.iter().copied().filter(|&t| weight(t) == best).collect();
    rng.choose(&ties).copied()
}
