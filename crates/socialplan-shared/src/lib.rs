//! # Socialplan Shared
//!
//! Wire types of the post API: request bodies, response payloads and the
//! success/error envelopes every endpoint answers with.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
