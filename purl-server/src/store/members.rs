//! In-memory member repository

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shared::{Member, MemberListItem, NewMember};

/// Concurrent member store
///
/// DashMap keyed by member id with an atomic id allocator starting at 1.
/// Clones share the underlying storage. Absence is expressed through the
/// return types; no operation fails.
#[derive(Debug, Clone)]
pub struct MemberStore {
    members: Arc<DashMap<i64, Member>>,
    next_id: Arc<AtomicI64>,
}

impl MemberStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            members: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// All members projected to the list view, ordered by id
    pub fn list(&self) -> Vec<MemberListItem> {
        let mut items: Vec<MemberListItem> = self
            .members
            .iter()
            .map(|entry| MemberListItem::from(entry.value()))
            .collect();
        items.sort_by_key(|item| item.id);
        items
    }

    /// Fetch a member in full
    pub fn find_by_id(&self, id: i64) -> Option<Member> {
        self.members.get(&id).map(|entry| entry.value().clone())
    }

    /// Insert a new member under a freshly assigned id
    pub fn create(&self, new_member: NewMember) -> Member {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let member = new_member.with_id(id);
        self.members.insert(id, member.clone());
        member
    }

    /// Replace an existing member wholesale, keeping its id
    ///
    /// Returns `None` when the id is not present.
    pub fn update(&self, id: i64, new_member: NewMember) -> Option<Member> {
        match self.members.entry(id) {
            Entry::Occupied(mut entry) => {
                let member = new_member.with_id(id);
                entry.insert(member.clone());
                Some(member)
            }
            Entry::Vacant(_) => None,
        }
    }

    /// Remove a member, reporting whether it existed
    pub fn delete(&self, id: i64) -> bool {
        self.members.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for MemberStore {
    fn default() -> Self {
        Self::new()
    }
}
