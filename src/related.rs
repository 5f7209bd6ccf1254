//! Related engines - neighbor window selection
//!
//! Picks the engines shown in the "related engines" block of a page: a few
//! items before the current one and a few more after it, in published order.
//!
//! # Policy
//!
//! - Take up to `before` items preceding the target and `after` items following it
//! - If that is short of `total`, grow forward first, then backward
//! - Never include the target, never repeat an id, never exceed `total`
//! - If the target is not in the list, return the first `total` items
//!
//! Selection never fails; short or empty inputs just yield a smaller window.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Anything with a stable string identifier
pub trait Identified {
    fn id(&self) -> &str;
}

/// Window sizes used when selecting neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPolicy {
    /// Items wanted before the target
    #[serde(default = "default_before")]
    pub before: usize,

    /// Items wanted after the target
    #[serde(default = "default_after")]
    pub after: usize,

    /// Hard cap on the result size (independent of before + after)
    #[serde(default = "default_total")]
    pub total: usize,
}

fn default_before() -> usize {
    3
}

fn default_after() -> usize {
    4
}

fn default_total() -> usize {
    7
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            before: default_before(),
            after: default_after(),
            total: default_total(),
        }
    }
}

impl WindowPolicy {
    pub fn new(before: usize, after: usize, total: usize) -> Self {
        Self {
            before,
            after,
            total,
        }
    }
}

/// Select the neighbors of `target_id` from `items` according to `policy`.
pub fn select_window<'a, T: Identified>(
    items: &'a [T],
    target_id: &str,
    policy: WindowPolicy,
) -> Vec<&'a T> {
    let Some(index) = items.iter().position(|item| item.id() == target_id) else {
        return dedup_truncate(items.iter(), target_id, policy.total);
    };

    let mut start = index.saturating_sub(policy.before);
    let mut end = index
        .saturating_add(1)
        .saturating_add(policy.after)
        .min(items.len());

    // Grow forward first; only reach back before `prev` once the list end is hit
    while window_len(start, index, end) < policy.total && end < items.len() {
        end += 1;
    }
    while window_len(start, index, end) < policy.total && start > 0 {
        start -= 1;
    }

    let prev = items[start..index].iter();
    let next = items[index + 1..end].iter();
    dedup_truncate(prev.chain(next), target_id, policy.total)
}

/// Same as [`select_window`] but returns owned items.
pub fn select_window_cloned<T: Identified + Clone>(
    items: &[T],
    target_id: &str,
    policy: WindowPolicy,
) -> Vec<T> {
    select_window(items, target_id, policy)
        .into_iter()
        .cloned()
        .collect()
}

fn window_len(start: usize, index: usize, end: usize) -> usize {
    (index - start) + end.saturating_sub(index + 1)
}

fn dedup_truncate<'a, T: Identified + 'a>(
    candidates: impl Iterator<Item = &'a T>,
    target_id: &str,
    total: usize,
) -> Vec<&'a T> {
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut window = Vec::new();
    for item in candidates {
        if window.len() == total {
            break;
        }
        let id = item.id();
        if id != target_id && seen.insert(id) {
            window.push(item);
        }
    }
    window
}
