//! Background jobs.
//!
//! - `expiry` - Polls for expired grants and bans, and clears lapsed application cooldowns

pub mod expiry;
