pub mod calculator;
pub mod measurement;
pub mod validate;

pub use calculator::DomainError;
pub use measurement::{BmiRequest, BmiResult, BmrRequest, BmrResult, Gender};
pub use validate::{Field, ValidationError};
