pub mod client;
pub mod message;
pub mod routes;
pub mod rules;
