//! Stable sorting of parallel slices.
//!
//! The reconciler keeps the original listing and the edited listing as two
//! separate slices whose only link is the index. Sorting one of them must
//! therefore move the other in lock-step, which is what
//! [`sort_stable_in_lockstep`] does.

use std::cmp::Ordering;
use std::path::MAIN_SEPARATOR;

/// Sort `primary` stably by `less` and apply the same permutation to every
/// slice in `parallel`.
///
/// `less` must be a strict weak ordering. Elements it considers equal keep
/// their original relative order, in `primary` and in each parallel slice.
///
/// # Panics
///
/// Panics if any parallel slice has a different length than `primary`.
pub fn sort_stable_in_lockstep<T, F>(primary: &mut [T], parallel: &mut [&mut [T]], mut less: F)
where
  F: FnMut(&T, &T) -> bool,
{
  for (i, other) in parallel.iter().enumerate() {
    assert_eq!(
      other.len(),
      primary.len(),
      "parallel slice {} has length {}, expected {}",
      i,
      other.len(),
      primary.len()
    );
  }

  let mut order: Vec<usize> = (0..primary.len()).collect();
  order.sort_by(|&a, &b| {
    if less(&primary[a], &primary[b]) {
      Ordering::Less
    } else if less(&primary[b], &primary[a]) {
      Ordering::Greater
    } else {
      Ordering::Equal
    }
  });

  permute(primary, &order);
  for other in parallel.iter_mut() {
    permute(other, &order);
  }
}

/// Number of path separators in `path`.
///
/// The string is counted as-is: no normalization, so `a//b` is deeper than
/// `a/b` and a trailing separator adds one level.
pub fn path_depth(path: &str) -> usize {
  path.matches(MAIN_SEPARATOR).count()
}

/// Rearrange `items` in place so that `items[i]` becomes the old `items[order[i]]`.
fn permute<T>(items: &mut [T], order: &[usize]) {
  let mut done = vec![false; order.len()];
  for start in 0..order.len() {
    if done[start] {
      continue;
    }
    let mut current = start;
    loop {
      done[current] = true;
      let next = order[current];
      if next == start {
        break;
      }
      items.swap(current, next);
      current = next;
    }
  }
}
