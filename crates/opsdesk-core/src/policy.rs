use crate::session::{SessionRecord, SessionStore};

/// Status value a stored session must carry to count as active.
pub const STATUS_ACTIVE: &str = "active";

/// Whether a stored session may be used to act as an admin.
///
/// True iff the record is present, its access token is non-empty, a role
/// has been assigned and the status is exactly `"active"`. A record can sit
/// in storage without satisfying this (mid-provisioning), which is why
/// "stored" and "active" are separate notions.
pub fn is_active(record: Option<&SessionRecord>) -> bool {
    let Some(record) = record else {
        return false;
    };
    !record.access_token.is_empty()
        && record.user.role.as_deref().is_some_and(|role| !role.is_empty())
        && record.user.status.as_deref() == Some(STATUS_ACTIVE)
}

/// Read the stored session, returning it only if it is active.
///
/// The only accessor authorization decisions should go through; display
/// code reads the store directly instead.
pub fn get_active(store: &SessionStore) -> Option<SessionRecord> {
    store.get().filter(|record| is_active(Some(record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::memory_store::MemoryStorage;
    use crate::session::{LoginPayload, SessionUser};

    fn record(token: &str, role: Option<&str>, status: Option<&str>) -> SessionRecord {
        SessionRecord {
            access_token: token.to_string(),
            token_type: "Bearer".to_string(),
            user: SessionUser {
                id: 1,
                username: "admin7".to_string(),
                first_name: String::new(),
                last_name: String::new(),
                gender: String::new(),
                mail: String::new(),
                role: role.map(str::to_string),
                status: status.map(str::to_string),
            },
            stored_at: None,
        }
    }

    #[test]
    fn test_active_requires_all_conditions() {
        let all_true = record("tok", Some("admin"), Some("active"));
        assert!(is_active(Some(&all_true)));

        // Flipping any single condition yields false.
        assert!(!is_active(Some(&record("", Some("admin"), Some("active")))));
        assert!(!is_active(Some(&record("tok", None, Some("active")))));
        assert!(!is_active(Some(&record("tok", Some("admin"), Some("pending")))));

        assert!(!is_active(Some(&record("", None, None))));
        assert!(!is_active(None));
    }

    #[test]
    fn test_empty_role_is_not_a_role() {
        assert!(!is_active(Some(&record("tok", Some(""), Some("active")))));
    }

    #[test]
    fn test_missing_status_is_not_active() {
        assert!(!is_active(Some(&record("tok", Some("admin"), None))));
    }

    #[test]
    fn test_get_active_filters_inactive_sessions() {
        let store = SessionStore::new(Box::new(MemoryStorage::new()));
        assert!(get_active(&store).is_none());

        // Stored but not yet provisioned: visible to get(), not get_active().
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
                admin_role: None,
                admin_status: None,
            })
            .unwrap();
        assert!(store.get().is_some());
        assert!(get_active(&store).is_none());

        // Provisioning assigns role and status; the session becomes active.
        store
            .update_user(crate::session::UserPatch {
                role: Some("admin".to_string()),
                status: Some("active".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(get_active(&store).is_some());
    }
}
