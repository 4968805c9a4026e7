//! Purl Client - HTTP client for the knitting club member service
//!
//! Provides typed calls against the member API. Used by the acceptance
//! suite's fixture layer and usable standalone.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::MemberClient;

// Re-export shared types for convenience
pub use shared::{Member, MemberList, MemberListItem, MemberPayload};
