use crate::models::user::UserRecord;
use crate::stores::repository::Repository;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// In-memory collection of user records keyed by id
pub struct UserStore {
    users: DashMap<String, Arc<UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: DashMap::with_capacity(capacity),
        }
    }

    /// Add a user to the store
    /// If a user with the same id already exists, it will be replaced
    /// and the previous record is returned
    pub fn add_user(&self, user: UserRecord) -> Option<Arc<UserRecord>> {
        let id = user.id().to_string();
        let previous = self.users.insert(id, Arc::new(user));

        debug!(
            users = self.users.len(),
            replaced = previous.is_some(),
            "User added to store"
        );

        previous
    }

    /// Remove a user by id
    /// Returns the removed user if it existed
    pub fn remove_user(&self, id: &str) -> Option<Arc<UserRecord>> {
        let removed = self.users.remove(id).map(|(_, user)| user);

        if removed.is_some() {
            debug!(user_id = id, "User removed from store");
        }

        removed
    }

    pub fn get_user(&self, id: &str) -> Option<Arc<UserRecord>> {
        self.users.get(id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    /// Snapshot of all users, sorted by id
    pub fn users(&self) -> Vec<Arc<UserRecord>> {
        let mut users: Vec<Arc<UserRecord>> = self
            .users
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        users.sort_by(|a, b| a.id().cmp(b.id()));
        users
    }

    pub fn clear(&self) {
        self.users.clear();
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for UserStore {
    type Entity = Arc<UserRecord>;

    fn get_by_id(&self, id: &str) -> Option<Arc<UserRecord>> {
        self.get_user(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_user() {
        let store = UserStore::new();
        assert!(store.is_empty());

        assert!(store.add_user(UserRecord::new("U001", "Alice")).is_none());

        let user = store.get_user("U001").expect("user should be stored");
        assert_eq!(*user, UserRecord::new("U001", "Alice"));
        assert_eq!(store.len(), 1);
        assert!(store.contains("U001"));
    }

    #[test]
    fn test_get_missing_user() {
        let store = UserStore::with_capacity(4);
        assert!(store.get_user("nobody").is_none());
        assert!(!store.contains("nobody"));
    }

    #[test]
    fn test_add_same_id_replaces() {
        let store = UserStore::new();
        store.add_user(UserRecord::new("U003", "Alice"));

        let previous = store.add_user(UserRecord::new("U003", "Adolf"));
        assert_eq!(previous.as_deref(), Some(&UserRecord::new("U003", "Alice")));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_user("U003").unwrap().name(), "Adolf");
    }

    #[test]
    fn test_remove_user() {
        let store = UserStore::new();
        store.add_user(UserRecord::new("U002", "Maria"));

        let removed = store.remove_user("U002");
        assert_eq!(removed.unwrap().name(), "Maria");
        assert!(store.is_empty());
        assert!(store.remove_user("U002").is_none());
    }

    #[test]
    fn test_users_sorted_by_id() {
        let store = UserStore::new();
        store.add_user(UserRecord::new("U003", "Alice"));
        store.add_user(UserRecord::new("U001", "Alice"));
        store.add_user(UserRecord::new("U002", "Maria"));

        let ids: Vec<String> = store.users().iter().map(|u| u.id().to_string()).collect();
        assert_eq!(ids, vec!["U001", "U002", "U003"]);
    }

    #[test]
    fn test_stored_record_is_shared_not_copied() {
        let store = UserStore::new();
        store.add_user(UserRecord::new("U001", "Alice"));

        let first = store.get_user("U001").unwrap();
        let second = store.get_user("U001").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_clear() {
        let store = UserStore::new();
        store.add_user(UserRecord::new("U001", "Alice"));
        store.add_user(UserRecord::new("U002", "Maria"));
        store.clear();
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_repository_lookup() {
        let store = UserStore::new();
        store.add_user(UserRecord::new("U002", "Maria"));

        let found: Option<Arc<UserRecord>> = store.get_by_id("U002");
        assert_eq!(found.unwrap().name(), "Maria");
        assert!(store.get_by_id("U404").is_none());
    }
}
