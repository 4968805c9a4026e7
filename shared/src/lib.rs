//! Shared types for the Purl knitting club service.
//!
//! Wire-level models used by both `purl-server` and `purl-client`, so the
//! two sides can never drift apart on field names or enum spellings.

pub mod models;

// Re-export commonly used types
pub use models::{
    Address, AddressPayload, KnittingStitch, Member, MemberList, MemberListItem, MemberPayload,
    NewMember, Role,
};
