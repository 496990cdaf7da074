use std::path::{Component, Path, PathBuf};

use anyhow::Context;

/// Resolves `input` to an absolute path without touching the filesystem.
///
/// A leading `~` expands to `home`, relative paths are joined onto `cwd`,
/// and `.`/`..` components are folded lexically. Symlinks are left alone.
pub fn normalize_path(cwd: &Path, home: Option<&Path>, input: &str) -> anyhow::Result<PathBuf> {
    let expanded = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => home
            .with_context(|| format!("Cannot expand '~' in {input}: home directory is unknown"))?
            .join(rest.trim_start_matches('/')),
        _ => PathBuf::from(input),
    };

    let joined = if expanded.is_absolute() { expanded } else { cwd.join(expanded) };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn normalize(input: &str) -> PathBuf {
        normalize_path(Path::new("/repo/src"), Some(Path::new("/home/user")), input).unwrap()
    }

    #[test]
    fn test_absolute_path_is_kept() {
        assert_eq!(normalize("/etc/hosts"), PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn test_relative_path_joins_cwd() {
        assert_eq!(normalize("bin/run.sh"), PathBuf::from("/repo/src/bin/run.sh"));
    }

    #[test]
    fn test_dot_components_fold() {
        assert_eq!(normalize("./a/../b/./c.sh"), PathBuf::from("/repo/src/b/c.sh"));
        assert_eq!(normalize("../run.sh"), PathBuf::from("/repo/run.sh"));
    }

    #[test]
    fn test_parent_of_root_stays_at_root() {
        assert_eq!(normalize("/../../run.sh"), PathBuf::from("/run.sh"));
    }

    #[test]
    fn test_home_expansion() {
        assert_eq!(normalize("~/bin/run.sh"), PathBuf::from("/home/user/bin/run.sh"));
        assert_eq!(normalize("~"), PathBuf::from("/home/user"));
    }

    #[test]
    fn test_tilde_inside_name_is_literal() {
        assert_eq!(normalize("~backup"), PathBuf::from("/repo/src/~backup"));
    }

    #[test]
    fn test_home_expansion_without_home_fails() {
        let actual = normalize_path(Path::new("/repo"), None, "~/run.sh");
        assert!(actual.is_err());
    }
}
