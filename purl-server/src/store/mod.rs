//! Storage layer - in-memory repositories

pub mod members;

pub use members::MemberStore;
