//! Session persistence.
//!
//! Stores the session in the platform-specific config directory:
//! - Linux/macOS: ~/.config/restbench/session.json
//! - Windows: %APPDATA%/restbench/session.json

use std::path::PathBuf;

use tokio::fs;

use restbench_application::ports::SessionStore;
use restbench_application::{ApplicationError, ApplicationResult, Session};

/// File-backed implementation of the session store.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store at the platform config location.
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined.
    pub fn new() -> ApplicationResult<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ApplicationError::Session("no config directory".to_string()))?;
        Ok(Self::at(config_dir.join("restbench").join("session.json")))
    }

    /// Creates a store at an explicit path.
    #[must_use]
    pub const fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file the session is stored in.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    async fn load(&self) -> ApplicationResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read(&self.path)
            .await
            .map_err(|e| ApplicationError::Session(e.to_string()))?;
        let session = serde_json::from_slice(&content)
            .map_err(|e| ApplicationError::Session(format!("corrupt session file: {e}")))?;
        Ok(Some(session))
    }

    async fn store(&self, session: &Session) -> ApplicationResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ApplicationError::Session(e.to_string()))?;
        }
        let content = serde_json::to_vec_pretty(session)
            .map_err(|e| ApplicationError::Session(e.to_string()))?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| ApplicationError::Session(e.to_string()))
    }

    async fn clear(&self) -> ApplicationResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApplicationError::Session(e.to_string())),
        }
    }
}
