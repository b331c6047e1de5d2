/// Numeric conversion helpers.
///
/// This module provides safe functions for narrowing integer types without
/// silent truncation. Use these helpers whenever a parsed `i64` has to fit a
/// narrower type, such as an exponent.
///
/// All functions return a `Result`, which is `Ok` if the conversion is
/// lossless and valid, or the caller-supplied error if the value is out of
/// range.
pub mod num;
