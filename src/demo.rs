//! Built-in demo roster, parsed from an embedded JSON seed.
//! There is no persistence; this is what a fresh session starts with.

use crate::models::Friend;

const DEMO_FRIENDS_JSON: &str = include_str!("../assets/demo_friends.json");

/// Three friends covering the three balance cases (you owe, they owe, even).
/// Falls back to an empty roster if the seed is malformed.
pub fn demo_friends() -> Vec<Friend> {
    serde_json::from_str(DEMO_FRIENDS_JSON).unwrap_or_else(|e| {
        eprintln!("Warning: failed to parse demo roster: {}. Starting empty.", e);
        Vec::new()
    })
}
