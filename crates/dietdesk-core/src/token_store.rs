use crate::Result;
use dietdesk_types::SessionToken;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed store for the session token.
///
/// One token per data directory, owned by the login/logout flow; every
/// other component treats the store as read-only. The file itself is the
/// shared signal: another process clearing it is how this one learns the
/// session ended (see [`crate::watcher::TokenWatcher`]).
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("token"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token. An absent file or a blank file both read
    /// as no session.
    pub fn load(&self) -> Result<Option<SessionToken>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let trimmed = content.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(SessionToken::new(trimmed)))
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, token: &SessionToken) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token.as_str())?;
        Ok(())
    }

    /// Remove the stored token. Clearing an already-absent token is not
    /// an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_no_session() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::new(temp_dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::new(temp_dir.path());
        store.save(&SessionToken::new("abc123")).unwrap();
        assert_eq!(store.load().unwrap(), Some(SessionToken::new("abc123")));
    }

    #[test]
    fn test_load_trims_whitespace() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::new(temp_dir.path());
        std::fs::write(store.path(), "abc123\n").unwrap();
        assert_eq!(store.load().unwrap(), Some(SessionToken::new("abc123")));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::new(temp_dir.path());
        store.save(&SessionToken::new("abc123")).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_blank_file_is_no_session() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::new(temp_dir.path());
        std::fs::write(store.path(), "   \n").unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
