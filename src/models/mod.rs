//! Data models for the CakeMail API.
//!
//! This module contains the various data structures used in the CakeMail API.

pub mod api_response;
pub mod enums;
pub mod list;
pub mod relay;

pub use api_response::ApiResponse;
