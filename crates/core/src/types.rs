//! Shared primitive types.

/// All entity identifiers are UUID v4 strings.
pub type Id = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates carry no time component (ISO `YYYY-MM-DD`).
pub type Date = chrono::NaiveDate;

/// Generate a fresh entity identifier.
pub fn new_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}

/// Current UTC timestamp, assigned server-side on every record creation.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}
