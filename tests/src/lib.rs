//! # Integration tests
//!
//! Cross-module workflows over the public netspan-core API: target lists
//! mixing address notations, subnet and range arithmetic working together,
//! and template matching over enumerated blocks.

mod spans;
mod util;
