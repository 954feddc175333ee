mod error;
mod evaluator;

pub use error::EvalError;
pub use evaluator::evaluate;
