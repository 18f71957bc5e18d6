//! Typed Rust client for the HighLevel (GoHighLevel) conversations HTTP API.
//!
//! The crate covers the "send a conversation message" operation: a domain
//! layer of typed request/response values, a transport layer for the wire
//! format, and a small client layer orchestrating the call. Required fields
//! are checked locally before any network traffic; channel-specific rules
//! (phone numbers for SMS, subject/html for email, mentions for internal
//! comments) are left to the API, which enforces them server-side.
//!
//! ```rust,no_run
//! use gohighlevel::{AccessToken, HighLevelClient, MessageStatus, MessageType, SendMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gohighlevel::HighLevelError> {
//!     let client = HighLevelClient::new(AccessToken::new("pit-...")?);
//!
//!     let mut request = SendMessage::new(MessageType::Sms, "contact-id", MessageStatus::Pending);
//!     request.to_number = Some("+15550100".to_owned());
//!     request.from_number = Some("+15550199".to_owned());
//!     request.message = Some("hello".to_owned());
//!
//!     let response = client.send_message(request).await?;
//!     println!("message id: {}", response.message_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{HighLevelClient, HighLevelClientBuilder, HighLevelError};
pub use domain::{
    AccessToken, EmailReplyMode, MessageStatus, MessageType, SendMessage, SendMessageResponse,
    UnixTimestamp, ValidationError,
};
