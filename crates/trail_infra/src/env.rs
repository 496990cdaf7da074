use std::path::{Path, PathBuf};
use std::str::FromStr;

use trail_app::EnvironmentInfra;
use trail_domain::Environment;

const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 300;

#[derive(Clone)]
pub struct TrailEnvironmentInfra {
    cwd: PathBuf,
}

impl TrailEnvironmentInfra {
    /// Creates the environment for `cwd`, loading `.env` files from it and
    /// its ancestors first.
    pub fn new(cwd: PathBuf) -> Self {
        Self::dot_env(&cwd);
        Self { cwd }
    }

    fn get(&self) -> Environment {
        Environment {
            cwd: self.cwd.clone(),
            home: dirs::home_dir(),
            base_path: dirs::home_dir()
                .map(|a| a.join("trail"))
                .unwrap_or(PathBuf::from(".").join("trail")),
            tool_timeout: parse_env::<u64>("TRAIL_TOOL_TIMEOUT")
                .unwrap_or(DEFAULT_TOOL_TIMEOUT_SECS),
            committer_name: parse_env::<String>("TRAIL_COMMITTER_NAME"),
            committer_email: parse_env::<String>("TRAIL_COMMITTER_EMAIL"),
        }
    }

    /// Load all `.env` files with priority to lower (closer) files.
    fn dot_env(cwd: &Path) -> Option<()> {
        let mut paths = vec![];
        let mut current = PathBuf::new();

        for component in cwd.components() {
            current.push(component);
            paths.push(current.clone());
        }

        paths.reverse();

        for path in paths {
            let env_file = path.join(".env");
            if env_file.is_file() {
                dotenvy::from_path(&env_file).ok();
            }
        }

        Some(())
    }
}

impl EnvironmentInfra for TrailEnvironmentInfra {
    fn get_environment(&self) -> Environment {
        self.get()
    }
}

/// Trait for parsing environment variable values with custom logic for
/// different types
trait FromEnvStr: Sized {
    fn from_env_str(s: &str) -> Option<Self>;
}

impl FromEnvStr for String {
    fn from_env_str(s: &str) -> Option<Self> {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    }
}

impl FromEnvStr for u64 {
    fn from_env_str(s: &str) -> Option<Self> {
        u64::from_str(s.trim()).ok()
    }
}

fn parse_env<T: FromEnvStr>(name: &str) -> Option<T> {
    std::env::var(name)
        .ok()
        .and_then(|val| T::from_env_str(&val))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_number_from_env_str() {
        assert_eq!(u64::from_env_str(" 120 "), Some(120));
        assert_eq!(u64::from_env_str("two minutes"), None);
    }

    #[test]
    fn test_blank_string_is_unset() {
        assert_eq!(String::from_env_str("  "), None);
        assert_eq!(String::from_env_str(" Trail "), Some("Trail".to_string()));
    }

    #[test]
    fn test_environment_uses_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = TrailEnvironmentInfra::new(dir.path().to_path_buf());

        let actual = fixture.get_environment();

        assert_eq!(actual.cwd, dir.path().to_path_buf());
        assert!(actual.base_path.ends_with("trail"));
    }

    #[test]
    fn test_dot_env_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("project");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join(".env"), "TRAIL_DOT_ENV_NESTING=outer\n").unwrap();
        std::fs::write(nested.join(".env"), "TRAIL_DOT_ENV_NESTING=inner\n").unwrap();

        let fixture = TrailEnvironmentInfra::new(nested);

        let actual = std::env::var("TRAIL_DOT_ENV_NESTING").ok();
        assert_eq!(actual, Some("inner".to_string()));
        assert_eq!(fixture.get_environment().cwd, dir.path().join("project"));
    }
}
