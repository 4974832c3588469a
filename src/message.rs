// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct MessageRequest {
    // Absent field reads as "", never a parse error.
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MessageReply {
    pub response: String,
}
