/// Compiled path patterns with prefix-match semantics.
pub mod patterns;

/// Recursive tree scanning driven by pattern sets.
pub mod tree;

pub use patterns::{PatternSet, matches, normalize};
pub use tree::{ScanRequest, find, find_in, scan};
