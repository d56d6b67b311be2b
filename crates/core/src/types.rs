/// Store identifiers. Assigned from 1 upwards and never reused.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
