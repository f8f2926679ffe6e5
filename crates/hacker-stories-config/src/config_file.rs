//! Config file discovery
//!
//! `.hacker-stories.toml` is looked up in the working directory first and
//! in the home directory second.

use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".hacker-stories.toml";

/// Load config file content from CWD first, then home directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    let home = dirs::home_dir();
    read_first_config(&[
        Some(PathBuf::from(CONFIG_FILE)),
        home.map(|h| h.join(CONFIG_FILE)),
    ])
}

/// Content of the first readable file among `candidates`
fn read_first_config(candidates: &[Option<PathBuf>]) -> Option<String> {
    candidates.iter().flatten().find_map(|path| read_config(path))
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(e) => {
            log::trace!("No config at {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_working_directory_wins_over_home() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        fs::write(cwd.path().join(CONFIG_FILE), "default_search = \"Redux\"").unwrap();
        fs::write(home.path().join(CONFIG_FILE), "default_search = \"Rust\"").unwrap();

        let content = read_first_config(&[
            Some(cwd.path().join(CONFIG_FILE)),
            Some(home.path().join(CONFIG_FILE)),
        ]);
        assert_eq!(content.as_deref(), Some("default_search = \"Redux\""));
    }

    #[test]
    fn test_falls_back_to_home() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        fs::write(home.path().join(CONFIG_FILE), "fetch_delay_ms = 10").unwrap();

        let content = read_first_config(&[
            Some(cwd.path().join(CONFIG_FILE)),
            Some(home.path().join(CONFIG_FILE)),
        ]);
        assert_eq!(content.as_deref(), Some("fetch_delay_ms = 10"));
    }

    #[test]
    fn test_none_without_any_file_or_home() {
        let cwd = tempfile::tempdir().unwrap();
        assert_eq!(
            read_first_config(&[Some(cwd.path().join(CONFIG_FILE)), None]),
            None
        );
    }
}
