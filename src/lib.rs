//! # Mixsort
//!
//! `mixsort` is a natural-order ("mixed alphanumeric") sorting library for
//! strings containing embedded numbers.
//!
//! Ordinarily strings are sorted lexicographically by character. This is
//! simple and consistent, but when applied to UI elements it can be
//! unintuitive for users. For example, lexicographically sorting a list of
//! filenames will produce an order like
//!
//! ```text
//! file-1.png
//! file-10.png
//! file-2.png
//! ```
//!
//! That is, "file 2" is listed after "file 10". Mixsort addresses this by
//! treating runs of digits differently in comparison: instead of comparing
//! them digit-by-digit, the entire run is compared as a single value. This
//! emulates the ordering used by the macOS Finder for file names.
//!
//! ## Key Features
//!
//! - **Precomputed keys**: Each string is parsed into a [`MixedKey`] exactly
//!   once before sorting; comparisons never re-parse.
//! - **Deterministic order**: Distinct strings with equal keys (e.g.
//!   `"xyzzy1"` and `"xyzzy01"`) are tie-broken by plain lexicographic order,
//!   so the result is a total order.
//! - **Zero-Copy keys**: Keys borrow their text runs from the input strings;
//!   no string data is copied during the sort.
//! - **Pluggable storage**: The [`StrAccessor`] trait allows sorting arbitrary
//!   collections (e.g. flat offset-indexed buffers) without materializing a
//!   `Vec<String>`.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! For standard collections like `Vec<String>` or `Vec<&str>`, you can use
//! [`mixsort`] (index-based) or [`mixsort_mut`] (in-place).
//!
//! ```rust
//! use mixsort::mixsort_mut;
//!
//! let mut data = vec!["file-10.png", "file-2.png", "file-1.png"];
//! mixsort_mut(&mut data);
//!
//! assert_eq!(data, vec!["file-1.png", "file-2.png", "file-10.png"]);
//! ```
//!
//! ### Comparing keys directly
//!
//! [`MixedKey`] implements [`Ord`], so precomputed keys can be used with
//! binary search or any custom sort routine.
//!
//! ```rust
//! use mixsort::MixedKey;
//!
//! let shelf = vec!["disc 1", "disc 2", "disc 10"];
//! let keys: Vec<MixedKey<'_>> = shelf.iter().map(|s| MixedKey::parse(s)).collect();
//!
//! let needle = MixedKey::parse("disc 2");
//! assert_eq!(keys.binary_search_by(|k| k.cmp(&needle)), Ok(1));
//! ```
//!
//! ### Custom Types
//!
//! To sort custom types or complex data structures without creating
//! intermediate strings, implement the [`StrAccessor`] trait.
//!
//! ```rust
//! use mixsort::{mixsort, StrAccessor};
//!
//! struct Track {
//!     title: String,
//! }
//!
//! // Wrapper struct to avoid orphan rule violation (impl foreign trait on foreign type).
//! struct Album(Vec<Track>);
//!
//! impl StrAccessor for Album {
//!     fn get_str(&self, index: usize) -> &str {
//!         &self.0[index].title
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! let album = Album(vec![
//!     Track { title: "Track 10".to_string() },
//!     Track { title: "Track 2".to_string() },
//! ]);
//!
//! // Returns indices: [1, 0] (Track 2, Track 10)
//! let indices = mixsort(&album);
//! assert_eq!(indices, vec![1, 0]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Comparisons**: O(n log n), each O(min span count) over precomputed keys.
//! - **Memory Overhead**: One key per item for the duration of the sort,
//!   proportional to the number of digit runs in the input.
//!
//! The parser recognizes ASCII digits only; there is no locale-aware or
//! Unicode-normalized collation. Digit runs longer than a `u64` can hold are
//! a documented limitation of [`MixedKey::parse`].

pub mod algo;
pub mod core;
pub use algo::{mixsort, mixsort_mut};
pub use core::{MixedKey, Span, StrAccessor};

pub mod prelude {
    pub use crate::algo::{mixsort, mixsort_mut};
    pub use crate::core::{MixedKey, Span, StrAccessor};
}
