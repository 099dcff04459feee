//! Time related utils.

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Create a new DateTime with the current UTC time.
pub fn now() -> DateTime {
    chrono::Utc::now()
}
