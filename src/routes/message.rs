use axum::Json;

use crate::{
    message::{MessageReply, MessageRequest},
    rules::classify,
};

// Stateless: every request is classified on its own, nothing carries over.
pub async fn post_message(Json(payload): Json<MessageRequest>) -> Json<MessageReply> {
    let response = classify(&payload.message);
    tracing::debug!(text = %payload.message, response, "classified message");

    Json(MessageReply {
        response: response.to_string(),
    })
}
