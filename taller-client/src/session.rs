//! Session token access
//!
//! The dashboard views used to read the stored credential ad hoc;
//! here the capability is injected as a [`SessionProvider`] so callers
//! never touch storage directly. Reading is side-effect free: an
//! absent or expired token simply yields `None` and the caller aborts
//! before any network call.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only access to the current bearer credential
pub trait SessionProvider: Send + Sync {
    /// The current token, or `None` when no usable session exists
    fn token(&self) -> Option<String>;
}

/// Stored session file contents: `{dir}/auth/session.json`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct StoredSession {
    token: String,
    /// Unix timestamp taken from the JWT `exp` claim, when present
    expires_at: Option<u64>,
}

/// File-backed session store
///
/// Written by whoever performs the login flow; this crate reads and
/// clears it.
pub struct FileSessionStore {
    file_path: PathBuf,
    data: Mutex<Option<StoredSession>>,
}

impl FileSessionStore {
    /// Load the session file under `dir`, tolerating its absence
    pub fn load(dir: &Path) -> Result<Self, SessionError> {
        let file_path = dir.join("auth/session.json");

        let data = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            Some(serde_json::from_str(&content)?)
        } else {
            None
        };

        Ok(Self {
            file_path,
            data: Mutex::new(data),
        })
    }

    /// Store a token, extracting its expiry from the JWT `exp` claim
    pub fn save_token(&self, token: &str) -> Result<(), SessionError> {
        let session = StoredSession {
            token: token.to_string(),
            expires_at: parse_jwt_exp(token),
        };

        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&session)?;
        std::fs::write(&self.file_path, content)?;

        *self.data.lock().unwrap_or_else(|e| e.into_inner()) = Some(session);
        tracing::debug!("Session token saved");
        Ok(())
    }

    /// Drop the stored session
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
        }
        *self.data.lock().unwrap_or_else(|e| e.into_inner()) = None;
        tracing::debug!("Session cleared");
        Ok(())
    }
}

impl SessionProvider for FileSessionStore {
    fn token(&self) -> Option<String> {
        let guard = self.data.lock().unwrap_or_else(|e| e.into_inner());
        let session = guard.as_ref()?;

        if let Some(expires_at) = session.expires_at {
            if now_unix() > expires_at {
                tracing::info!("Cached session expired");
                return None;
            }
        }

        Some(session.token.clone())
    }
}

/// Fixed in-memory session, mainly for tests and short-lived tools
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    token: Option<String>,
}

impl MemorySession {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn absent() -> Self {
        Self { token: None }
    }
}

impl SessionProvider for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// Extract the `exp` claim (Unix timestamp) from a JWT without
/// verifying it; validation is the server's job.
pub fn parse_jwt_exp(token: &str) -> Option<u64> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.get("exp")?.as_u64()
}

fn now_unix() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
