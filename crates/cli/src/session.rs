//! Session token storage (`~/.tally/session`)

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const DEFAULT_SESSION_PATH: &str = "~/.tally/session";

pub fn default_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_SESSION_PATH).into_owned())
}

pub fn load(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

pub fn save(path: &Path, token: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, token).with_context(|| format!("Failed to write {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
            .with_context(|| format!("Failed to restrict {}", path.display()))?;
    }
    Ok(())
}

pub fn clear(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let dir = std::env::temp_dir().join(format!("tally-cli-test-{}", std::process::id()));
        let path = dir.join("session");

        assert_eq!(load(&path), None);
        save(&path, "abc123").unwrap();
        assert_eq!(load(&path).as_deref(), Some("abc123"));

        clear(&path).unwrap();
        clear(&path).unwrap();
        assert_eq!(load(&path), None);

        let _ = std::fs::remove_dir_all(dir);
    }
}
