//! Editdist computes weighted edit distances between Unicode strings.
//!
//! The distance is Damerau-Levenshtein with the restricted (adjacent)
//! transposition rule: the minimum total cost to turn one sequence into the
//! other using insertions, deletions, substitutions and adjacent swaps, each
//! carrying a caller-chosen weight. The engine compares Unicode scalar
//! values, folds case by default, and runs in memory proportional to the
//! second sequence only, so it can be embedded in fuzzy matchers, spelling
//! correctors and diff tooling without surprises on long inputs.
//!
//! # Examples
//!
//! ```
//! use editdist::{EditDistance, OpCosts, distance, distance_with};
//!
//! // Uniform weights, case-insensitive.
//! assert_eq!(distance("kitten", "sitting"), 3);
//! assert_eq!(distance("ab", "ba"), 1); // one transposition, not two edits
//!
//! // A reusable computer keeps its scratch buffer between calls.
//! let matcher: EditDistance<usize> = EditDistance::default().respect_case();
//! assert_eq!(matcher.distance("Café", "café"), 1);
//!
//! // Weighted, typed costs.
//! let costs: OpCosts<u32> = OpCosts::default().replace(2).respect_case();
//! assert_eq!(distance_with("abc", "abd", &costs), 2);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod cost;
pub mod decode;
pub mod distance;

pub use crate::cost::{Cost, OpCosts};
pub use crate::decode::Codepoints;
pub use crate::distance::{
    DistanceError, EditDistance, distance, distance_with, distance_with_scratch, try_distance_with_scratch,
};

//------------------------------------------------------------------------------
/// Traversal direction over the input byte buffers.
///
/// [`Reverse`](Direction::Reverse) walks both sequences from their final
/// codepoint toward their first without physically reversing the buffers.
/// A linear-space divide-and-conquer aligner can combine one pass from each
/// end externally; the engine itself performs no such combination.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Direction {
    /// Walk both sequences from their first codepoint.
    #[default]
    Forward,
    /// Walk both sequences from their last codepoint.
    Reverse,
}
