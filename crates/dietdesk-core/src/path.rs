use crate::{Error, Result};
use std::path::PathBuf;

/// Resolve the client data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DIETDESK_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.dietdesk (fallback for systems without standard data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: DIETDESK_PATH environment variable
    if let Ok(env_path) = std::env::var("DIETDESK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: System data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("dietdesk"));
    }

    // Priority 4: Fallback to ~/.dietdesk (last resort for systems without standard data directory)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".dietdesk"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let dir = resolve_data_dir(Some("/tmp/dietdesk-test")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/dietdesk-test"));
    }

    #[test]
    fn test_expand_tilde_plain_path_unchanged() {
        assert_eq!(expand_tilde("/opt/data"), PathBuf::from("/opt/data"));
    }

    #[test]
    fn test_expand_tilde_home_prefix() {
        if let Some(home) = std::env::var_os("HOME") {
            let expanded = expand_tilde("~/x");
            assert_eq!(expanded, PathBuf::from(home).join("x"));
        }
    }
}
