//! External communication.
//!
//! # Services
//!
//! - [`upload`] - receipt upload and connectivity probe against the webhook

pub mod upload;

pub use upload::*;
