//! In-memory user store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::users::types::User;

/// Thread-safe in-memory store of users with monotonic id issuance.
///
/// The id counter and the map sit behind one reader/writer lock, so id
/// assignment and insert form a single critical section: a reader can never
/// observe an id that was issued but not yet inserted.
#[derive(Debug, Default)]
pub struct UserRepository {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    users: HashMap<u64, User>,
    next_id: u64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            next_id: 1,
        }
    }
}

impl UserRepository {
    /// Create an empty repository; ids start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all current users keyed by id.
    pub fn list(&self) -> HashMap<u64, User> {
        self.inner
            .read()
            .expect("user store lock poisoned")
            .users
            .clone()
    }

    /// Point lookup. `None` signals absence, not failure.
    pub fn find(&self, id: u64) -> Option<User> {
        self.inner
            .read()
            .expect("user store lock poisoned")
            .users
            .get(&id)
            .cloned()
    }

    /// Store a user under a freshly issued id, ignoring any caller-supplied id.
    ///
    /// Ids are never reused, even after deletion.
    pub fn save(&self, mut user: User) -> User {
        let mut inner = self.inner.write().expect("user store lock poisoned");
        user.id = inner.next_id;
        inner.next_id += 1;
        inner.users.insert(user.id, user.clone());
        user
    }

    /// Remove a user if present. Deleting an absent id is a no-op.
    pub fn delete(&self, id: u64) {
        self.inner
            .write()
            .expect("user store lock poisoned")
            .users
            .remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> User {
        User {
            id: 0,
            name: name.to_string(),
        }
    }

    #[test]
    fn save_assigns_strictly_increasing_ids_from_one() {
        let repo = UserRepository::new();
        let a = repo.save(named("a"));
        let b = repo.save(named("b"));
        let c = repo.save(named("c"));
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[test]
    fn save_ignores_caller_supplied_id() {
        let repo = UserRepository::new();
        let first = repo.save(User {
            id: 999,
            name: "a".to_string(),
        });
        let second = repo.save(User {
            id: 999,
            name: "b".to_string(),
        });
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.list().len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let repo = UserRepository::new();
        let a = repo.save(named("a"));
        repo.delete(a.id);
        let b = repo.save(named("b"));
        assert_eq!(b.id, 2);
    }

    #[test]
    fn delete_then_find_yields_none() {
        let repo = UserRepository::new();
        let user = repo.save(named("a"));
        repo.delete(user.id);
        assert_eq!(repo.find(user.id), None);
    }

    #[test]
    fn delete_of_absent_id_leaves_list_unchanged() {
        let repo = UserRepository::new();
        repo.save(named("a"));
        let before = repo.list();
        repo.delete(42);
        assert_eq!(repo.list(), before);
    }

    #[test]
    fn find_returns_the_stored_user() {
        let repo = UserRepository::new();
        let stored = repo.save(named("Ada"));
        assert_eq!(repo.find(stored.id), Some(stored));
    }

    #[test]
    fn concurrent_saves_assign_unique_ids() {
        let repo = UserRepository::new();
        std::thread::scope(|scope| {
            for _ in 0..100 {
                scope.spawn(|| {
                    repo.save(named("load"));
                });
            }
        });

        let mut ids: Vec<u64> = repo.list().into_keys().collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=100).collect::<Vec<u64>>());
    }
}
