//! Consistency validation for configuration records.
//!
//! Violations are data, not errors: every check returns
//! [`rules::ValidationOutcome`] and the caller decides how to surface it.
//! Only a failure to read the existing record set is an `Err`.

pub mod evaluator;
pub mod fields;
pub mod keys;
pub mod rules;
pub mod validator;
