// src/client.rs
use thiserror::Error;

use crate::message::{MessageReply, MessageRequest};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to server failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Thin wrapper around one server address. One request in flight at a time;
/// callers await the reply before sending the next.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn send_message(&self, text: &str) -> Result<MessageReply, ClientError> {
        let reply = self
            .http
            .post(format!("{}/message", self.base_url))
            .json(&MessageRequest {
                message: text.to_string(),
            })
            .send()
            .await?
            .json::<MessageReply>()
            .await?;

        Ok(reply)
    }
}
