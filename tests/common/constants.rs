//! Shared constants for end-to-end tests

// ============================================================================
// Songs known to the mock details service
// ============================================================================

pub const KNOWN_GROUP: &str = "Muse";
pub const KNOWN_SONG: &str = "Supermassive Black Hole";
pub const KNOWN_RELEASE_DATE: &str = "16.07.2006";
pub const KNOWN_LINK: &str = "https://www.youtube.com/watch?v=Xsp3_a-PMTw";
pub const KNOWN_TEXT: &str = "Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?\n\nOoh\nWe're so cold\n\nI thought I was a fool for no one";

pub const CYRILLIC_GROUP: &str = "Кино";
pub const CYRILLIC_SONG: &str = "Группа крови";

/// The mock details service answers 404 for this group.
pub const UNKNOWN_GROUP: &str = "Nobody Knows";

// ============================================================================
// Timeouts
// ============================================================================

pub const REQUEST_TIMEOUT_SECS: u64 = 5;
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
