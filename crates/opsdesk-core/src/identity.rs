use serde::{Deserialize, Serialize};

use crate::session::SessionStore;

/// Display-ready admin identity, derived fresh on every resolution and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminIdentity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
}

impl Default for AdminIdentity {
    fn default() -> Self {
        Self {
            id: 0,
            name: "Administrator".to_string(),
            email: "admin@opsdesk.local".to_string(),
            username: "admin".to_string(),
        }
    }
}

/// Resolve the acting admin's identity for display.
///
/// Reads the stored record directly rather than through the activation
/// policy: a not-yet-active session still has a displayable identity
/// (pending-activation states), and with no record at all the seeded
/// default is returned unchanged. Every branch terminates in a defined
/// identity.
pub fn resolve(store: &SessionStore, default: &AdminIdentity) -> AdminIdentity {
    let Some(record) = store.get() else {
        return default.clone();
    };
    let user = record.user;

    let composed = [user.first_name.trim(), user.last_name.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let name = if !composed.is_empty() {
        composed
    } else if !user.username.is_empty() {
        user.username.clone()
    } else {
        default.name.clone()
    };

    let email = if user.mail.is_empty() {
        default.email.clone()
    } else {
        user.mail
    };

    AdminIdentity {
        id: user.id,
        name,
        email,
        username: user.username,
    }
}
