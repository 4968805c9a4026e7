//! Data models shared across the workspace

pub mod member;
pub mod role;
pub mod stitch;

pub use member::{
    Address, AddressPayload, Member, MemberList, MemberListItem, MemberPayload, NewMember,
};
pub use role::Role;
pub use stitch::KnittingStitch;
