pub mod memory_store;
pub mod store;

#[cfg(feature = "file-backend")]
pub mod file_store;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SessionError;

use store::StorageBackend;

/// Storage key the single session record is persisted under.
pub const SESSION_KEY: &str = "session";

/// Credential payload handed over by the login collaborator.
///
/// Field names follow the provider's wire format; the store renames them
/// onto the internal record shape on ingestion.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    pub access_token: String,
    pub token_type: String,
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub mail: String,
    #[serde(default)]
    pub admin_role: Option<String>,
    #[serde(default)]
    pub admin_status: Option<String>,
}

/// The persisted session record: the single authoritative representation
/// of the logged-in admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub access_token: String,
    pub token_type: String,
    pub user: SessionUser,
    /// When the record was written. Records from older versions may lack it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_at: Option<String>,
}

/// User fields carried by a session record.
///
/// `role` and `status` are optional: a freshly stored session may not yet
/// carry the authorization metadata assigned by a later provisioning step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub mail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Partial update applied to the `user` sub-object of the stored record.
///
/// `Some` replaces the field, `None` leaves it untouched. The user id is
/// the record's identity and cannot be patched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub mail: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

impl UserPatch {
    fn apply_to(self, user: &mut SessionUser) {
        if let Some(v) = self.username {
            user.username = v;
        }
        if let Some(v) = self.first_name {
            user.first_name = v;
        }
        if let Some(v) = self.last_name {
            user.last_name = v;
        }
        if let Some(v) = self.gender {
            user.gender = v;
        }
        if let Some(v) = self.mail {
            user.mail = v;
        }
        if let Some(v) = self.role {
            user.role = Some(v);
        }
        if let Some(v) = self.status {
            user.status = Some(v);
        }
    }
}

impl SessionRecord {
    fn from_payload(payload: LoginPayload) -> Self {
        Self {
            access_token: payload.access_token,
            token_type: payload.token_type,
            user: SessionUser {
                id: payload.id,
                username: payload.username,
                first_name: payload.first_name,
                last_name: payload.last_name,
                gender: payload.gender,
                mail: payload.mail,
                role: payload.admin_role,
                status: payload.admin_status,
            },
            stored_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }
}

/// Durable persistence of exactly one session record under a fixed key.
///
/// Built around an injected storage backend so callers choose the
/// persistence medium.
pub struct SessionStore {
    backend: Box<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Persist `payload` as the current session record, overwriting any
    /// previous record. Write failures of the storage medium propagate;
    /// there is no local recovery for them.
    pub fn store(&self, payload: LoginPayload) -> Result<SessionRecord, SessionError> {
        let record = SessionRecord::from_payload(payload);
        self.write(&record)?;
        Ok(record)
    }

    /// Read the current session record.
    ///
    /// Absent and undecodable data both yield `None`: a corrupted record
    /// must read as "no session", never crash the reader.
    pub fn get(&self) -> Option<SessionRecord> {
        let raw = self.backend.read(SESSION_KEY)?;
        match decode(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Discarding unreadable session record: {}", e);
                None
            }
        }
    }

    /// Shallow-merge `patch` into the stored record's `user` fields,
    /// leaving the credential fields untouched.
    ///
    /// Returns `Ok(None)` when no record exists; there is nothing to patch.
    pub fn update_user(&self, patch: UserPatch) -> Result<Option<SessionRecord>, SessionError> {
        let Some(mut record) = self.get() else {
            return Ok(None);
        };
        patch.apply_to(&mut record.user);
        self.write(&record)?;
        Ok(Some(record))
    }

    /// Remove the stored record. Clearing an empty store is a no-op.
    pub fn clear(&self) {
        self.backend.remove(SESSION_KEY);
    }

    fn write(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let json = serde_json::to_string(record).map_err(SessionError::Serialize)?;
        self.backend.write(SESSION_KEY, &json)
    }
}

/// Decode a raw storage value into a session record.
///
/// The failure is explicit here; `get` collapses it to absent.
fn decode(raw: &str) -> Result<SessionRecord, SessionError> {
    serde_json::from_str(raw).map_err(SessionError::Decode)
}
