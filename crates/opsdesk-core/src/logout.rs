use crate::session::SessionStore;

/// Collaborator performing the post-logout navigation.
pub trait Navigator: Send + Sync {
    /// Navigate the user to `path`.
    fn navigate(&self, path: &str);
}

/// Terminate the session unconditionally and redirect to the login route.
///
/// A hard reset: the stored record is cleared whether or not one exists,
/// then the navigator is invoked exactly once. Server-side token
/// revocation is the login collaborator's concern, not handled here.
pub fn force_logout(store: &SessionStore, navigator: &dyn Navigator, login_path: &str) {
    store.clear();
    navigator.navigate(login_path);
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::session::memory_store::MemoryStorage;
    use crate::session::LoginPayload;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visits.lock().unwrap().push(path.to_string());
        }
    }

    #[test]
    fn test_force_logout_clears_store_and_navigates_once() {
        let store = SessionStore::new(Box::new(MemoryStorage::new()));
        store
            .store(LoginPayload {
                access_token: "tok".to_string(),
                token_type: "Bearer".to_string(),
                id: 1,
                username: "admin7".to_string(),
                first_name: String::new(),
                last_name: String::new(),
                gender: String::new(),
                mail: String::new(),
                admin_role: Some("admin".to_string()),
                admin_status: Some("active".to_string()),
            })
            .unwrap();

        let navigator = RecordingNavigator::default();
        force_logout(&store, &navigator, "/login");

        assert!(store.get().is_none());
        assert_eq!(*navigator.visits.lock().unwrap(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_force_logout_is_safe_with_no_session() {
        let store = SessionStore::new(Box::new(MemoryStorage::new()));
        let navigator = RecordingNavigator::default();

        force_logout(&store, &navigator, "/login");

        assert!(store.get().is_none());
        assert_eq!(navigator.visits.lock().unwrap().len(), 1);
    }
}
