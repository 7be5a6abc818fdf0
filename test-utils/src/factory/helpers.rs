//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
///
/// Each factory-created snowflake or name takes the next value so rows never collide within
/// a test binary.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique counter value formatted as a Discord snowflake string.
///
/// Values are offset so they read like real snowflakes in test output.
pub fn next_snowflake() -> String {
    (100_000_000_000_000_000 + next_id()).to_string()
}
