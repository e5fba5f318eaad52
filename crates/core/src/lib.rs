//! Consistency rules for EDI routing configuration records.
//!
//! Pure domain logic: record types, the per-record validation rules, duplicate
//! key detection and an in-memory record store. No I/O happens here; callers
//! supply the existing record set through [`store::RecordSource`].

pub mod activation;
pub mod error;
pub mod records;
pub mod store;
pub mod types;
pub mod validation;
