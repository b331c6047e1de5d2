/// Core evaluation logic.
///
/// Contains the statement-walking executor and the recursive polynomial
/// evaluator, together with the `EvalResult` alias used throughout
/// execution.
pub mod core;

/// Lazy input-value reading.
///
/// Materializes the literal tail of the program in batches and serves
/// values to `INPUT` statements through a consumption cursor.
pub mod input;
