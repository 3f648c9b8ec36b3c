pub mod client;
pub mod dto;
pub mod extract;

pub use client::{ChatClient, GatewayClient, GatewayError};
pub use dto::ChatMessage;
pub use extract::FormatError;
