//! Properties file location
//!
//! The location is a resource name such as `/log4jdbc.log4j2.properties`.
//! A leading `/` means "the root of the resource path", so the name is joined
//! onto each resource root in turn. If no root holds the file, the name is
//! tried as a plain filesystem path.
//!
//! # Resource roots
//!
//! 1. Roots passed explicitly by the caller
//! 2. `SPYLOG_RESOURCE_PATH` (OS path list, like `PATH`)
//! 3. The current working directory

use std::path::{Path, PathBuf};

/// Environment variable listing resource roots
pub const RESOURCE_PATH_ENV: &str = "SPYLOG_RESOURCE_PATH";

/// Default resource roots: `SPYLOG_RESOURCE_PATH` entries, then the current
/// directory.
pub fn default_resource_roots() -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = std::env::var_os(RESOURCE_PATH_ENV)
        .map(|paths| {
            std::env::split_paths(&paths)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    roots
}

/// Find the file named by `resource` under `roots`.
///
/// Returns `None` when no candidate exists; that is not an error.
pub fn locate(resource: &str, roots: &[PathBuf]) -> Option<PathBuf> {
    let resource = resource.trim();
    if resource.is_empty() {
        return None;
    }

    let relative = resource.trim_start_matches(['/', '\\']);
    if !relative.is_empty() {
        for root in roots {
            let candidate = root.join(relative);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    let literal = Path::new(resource);
    literal.is_file().then(|| literal.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_locate_under_resource_root() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("test.properties"), "a=1\n").unwrap();

        let roots = vec![temp_dir.path().to_path_buf()];
        let found = locate("/test.properties", &roots).unwrap();
        assert_eq!(found, temp_dir.path().join("test.properties"));
    }

    #[test]
    fn test_first_root_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        std::fs::write(first.path().join("x.properties"), "a=1\n").unwrap();
        std::fs::write(second.path().join("x.properties"), "a=2\n").unwrap();

        let roots = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(
            locate("/x.properties", &roots),
            Some(first.path().join("x.properties"))
        );
    }

    #[test]
    fn test_locate_literal_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("abs.properties");
        std::fs::write(&path, "a=1\n").unwrap();

        let empty = TempDir::new().unwrap();
        let roots = vec![empty.path().to_path_buf()];
        assert_eq!(locate(path.to_str().unwrap(), &roots), Some(path));
    }

    #[test]
    fn test_missing_resource_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let roots = vec![temp_dir.path().to_path_buf()];
        assert!(locate("/none", &roots).is_none());
        assert!(locate("   ", &roots).is_none());
    }

    #[test]
    fn test_directory_is_not_a_properties_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("conf")).unwrap();
        let roots = vec![temp_dir.path().to_path_buf()];
        assert!(locate("/conf", &roots).is_none());
    }
}
