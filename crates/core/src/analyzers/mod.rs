//! Rule evaluators, one module per analysis category.
//!
//! Each evaluator is a pure function of the parsed document (plus fetch
//! metadata for performance) and its threshold configuration. Evaluators
//! never fail and never mutate shared state: absence of an expected element
//! is reported as a finding, not an error, and the four evaluators can run
//! in any order.

pub mod conversion;
pub mod mobile;
pub mod performance;
pub mod seo;
