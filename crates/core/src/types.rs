/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// An ordinal performance level: `0` (below every breakpoint) up to `5`
/// (at or above the top breakpoint). Also used for listening grades,
/// where the scale is `0` (unconstrained) to `4` (grade A).
pub type Level = u8;
