/// Reference-data primary keys (users, roles, faculties, problem types,
/// project types) are PostgreSQL BIGINT values supplied by external systems.
pub type DbId = i64;

/// Applications and projects are identified by UUIDs minted at insert time.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Deadlines are calendar dates compared at day granularity in UTC.
pub type Date = chrono::NaiveDate;
