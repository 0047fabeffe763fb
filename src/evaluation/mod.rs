//! Route cost evaluation and input validation.

mod evaluator;
mod validation;

pub use evaluator::CostEvaluator;
pub use validation::validate_input;
