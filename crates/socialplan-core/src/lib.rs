//! # Socialplan Core
//!
//! The domain layer of the post scheduling API.
//! This crate contains the post model, its validation rules and the ports
//! that storage and rate limiting backends implement. It has no
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
