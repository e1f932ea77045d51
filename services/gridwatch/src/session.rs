//! Single-slot session token storage
//!
//! The client holds at most one bearer token at a time. The store is injected
//! into [`ApiClient`](crate::client::ApiClient) so its lifecycle is explicit:
//! empty at start, written on login, cleared on logout or on a failed session
//! restore, read before every request.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Key under which the token is persisted
pub const TOKEN_KEY: &str = "token";

/// Storage for the session token
#[async_trait]
pub trait TokenStore: Send + Sync + std::fmt::Debug {
    /// Current token, if any
    async fn get_token(&self) -> crate::Result<Option<String>>;

    /// Overwrite the stored token unconditionally
    async fn set_token(&self, token: &str) -> crate::Result<()>;

    /// Remove the stored token
    async fn clear_token(&self) -> crate::Result<()>;
}

/// In-process token slot. Starts empty.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get_token(&self) -> crate::Result<Option<String>> {
        Ok(self.slot.read().await.clone())
    }

    async fn set_token(&self, token: &str) -> crate::Result<()> {
        *self.slot.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear_token(&self) -> crate::Result<()> {
        self.slot.write().await.take();
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// Token slot persisted to a JSON file, surviving process restarts.
///
/// A missing file reads as "no token". An unreadable file is logged and also
/// reads as "no token", so a corrupt session never blocks unauthenticated use.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        tracing::debug!("Using token file {:?}", path);
        Self {
            path,
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get_token(&self) -> crate::Result<Option<String>> {
        let _guard = self.lock.read().await;
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str::<PersistedSession>(&content) {
            Ok(session) => Ok(session.token),
            Err(e) => {
                tracing::warn!("Ignoring unreadable token file {:?}: {}", self.path, e);
                Ok(None)
            }
        }
    }

    async fn set_token(&self, token: &str) -> crate::Result<()> {
        let _guard = self.lock.write().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string(&PersistedSession {
            token: Some(token.to_string()),
        })?;
        tokio::fs::write(&self.path, content).await?;
        tracing::debug!("Stored session token in {:?}", self.path);
        Ok(())
    }

    async fn clear_token(&self) -> crate::Result<()> {
        let _guard = self.lock.write().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!("Removed token file {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
