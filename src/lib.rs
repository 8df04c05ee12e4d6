//! # cakemail-client
//!
//! A Rust client library for the CakeMail email marketing REST API.
//!
//! This crate provides a type-safe, async interface to CakeMail: one-off
//! (relay) sends and their logs, and mailing list management.
//!
//! ## Features
//!
//! - 📨 Relay sends with or without open/click tracking
//! - 📜 Sent, open, click and bounce log retrieval
//! - 📋 Mailing list lookup, search, count and deletion
//! - 🛡️ Typed errors carrying the HTTP status and request URI
//!
//! Every response goes through [`decode`], which unwraps CakeMail's
//! `{"status": ..., "data": ...}` envelope.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cakemail_client::CakeMailClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CakeMailClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     client
//!         .relays()
//!         .send("user-key", "jane@example.com", "news@example.com")
//!         .subject("Hello")
//!         .text("Hello Jane")
//!         .send()
//!         .await?;
//!
//!     let logs = client.relays().sent_logs("user-key").limit(10).send().await?;
//!     for log in logs {
//!         println!("{} -> {:?}", log.email, log.time);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
pub mod date;
mod decode;
mod error;
pub mod models;
mod params;

pub use api::list::{
    CountListsBuilder, DeleteListBuilder, GetListBuilder, ListHandler, ListListsBuilder,
};
pub use api::relay::{RelayHandler, RelayLogsBuilder, SendRelayBuilder};
pub use client::{CakeMailClient, CakeMailClientBuilder, DEFAULT_BASE_URL};
pub use decode::decode;
pub use error::{CakeMailError, CakeMailResult, UrlParseError};
pub use models::api_response::ApiResponse;
pub use models::enums::{ListStatus, ListsSortBy, MessageEncoding, SortDirection, UnknownWireToken};
pub use models::list::{List, ListCount};
pub use models::relay::{RelayBounceLog, RelayClickLog, RelayLog, RelayLogKind, RelayOpenLog};
pub use params::{Parameters, WireValue};
