// src/rules.rs

/// The one message the server recognizes. Matching is exact: case-sensitive,
/// whole-string, no trimming.
pub const GREETING: &str = "HELLO CS 616";

pub const REPLY_MATCH: &str = "Voila! You got it right...";
pub const REPLY_MISS: &str = "Oops... That's does not look legitimate!";

pub fn classify(message: &str) -> &'static str {
    if message == GREETING {
        REPLY_MATCH
    } else {
        REPLY_MISS
    }
}
