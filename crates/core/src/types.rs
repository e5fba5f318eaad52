/// Surrogate ids of records without a natural key (translations, confirm rules).
pub type DbId = i64;

/// Natural key of a record, one string per key column.
///
/// Numeric key columns (a route's `seq`) are rendered in decimal.
pub type NaturalKey = Vec<String>;
