//! Sort entry points (precompute-then-sort by mixed key).
//!
//! This module implements the natural-order sort: one [`MixedKey`] is built
//! per item up front, the keys are sorted alongside their item indices, and
//! ties on key order are broken with the plain lexicographic order of the
//! original strings.
//!
//! The main entry points are [`mixsort`] and [`mixsort_mut`].

use crate::core::{Keyed, MixedKey, StrAccessor};

/// Performs an index-based natural-order sort on the provided collection.
///
/// This function does not modify the input collection. Instead, it returns a
/// `Vec<usize>` containing the indices that order the collection
/// non-decreasing by mixed key.
///
/// The keys are precomputed at the point of construction, once per item, and
/// carried alongside the indices for the duration of the sort; they are never
/// re-parsed during comparisons.
///
/// Note that non-identical strings may have equal mixed keys, consider for
/// example `"xyzzy1"` and `"xyzzy01"`. To ensure a deterministic order, ties
/// on key order are broken using the lexicographic order of the original
/// strings.
///
/// The input collection must implement the [`StrAccessor`] trait, which
/// abstracts string access.
///
/// # Arguments
///
/// * `provider` - The collection to be sorted.
///
/// # Returns
///
/// A vector of indices such that the items they select are in natural order.
///
/// # Examples
///
/// ```
/// use mixsort::mixsort;
///
/// let data = vec!["file-10.png", "file-2.png", "file-1.png"];
/// let indices = mixsort(&data);
///
/// assert_eq!(indices, vec![2, 1, 0]); // file-1, file-2, file-10
/// ```
pub fn mixsort<T: StrAccessor + ?Sized>(provider: &T) -> Vec<usize> {
    let len = provider.len();
    if len == 0 {
        return vec![];
    }

    // Precompute one key per item, paired with its index.
    let mut entries: Vec<Keyed<'_>> = (0..len)
        .map(|index| Keyed {
            index,
            key: MixedKey::parse(provider.get_str(index)),
        })
        .collect();

    // Key order first, original string order on ties. The relation is total,
    // so an unstable sort still yields a deterministic result.
    entries.sort_unstable_by(|a, b| {
        a.key
            .cmp(&b.key)
            .then_with(|| provider.get_str(a.index).cmp(provider.get_str(b.index)))
    });

    entries.into_iter().map(|e| e.index).collect()
}

/// Sorts a mutable slice in-place into natural order.
///
/// This is a convenience wrapper for [`mixsort`] which computes the sorted
/// indices and then applies the permutation to the slice.
///
/// # Arguments
///
/// * `data` - A mutable slice of items that implement `AsRef<str>`.
///
/// # Examples
///
/// ```
/// use mixsort::mixsort_mut;
///
/// let mut data = vec!["file-10.png", "file-2.png", "file-1.png"];
/// mixsort_mut(&mut data);
///
/// assert_eq!(data, vec!["file-1.png", "file-2.png", "file-10.png"]);
/// ```
pub fn mixsort_mut<T: AsRef<str>>(data: &mut [T]) {
    // 1. Get indices (keys are dropped before any mutation happens)
    let indices = mixsort(data);

    // 2. Permute in-place by walking cycles with swaps
    apply_permutation(data, indices);
}

fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as visited/placed
            current = next;
        }
        indices[current] = current;
    }
}
