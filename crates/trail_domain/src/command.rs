use serde::{Deserialize, Serialize};

/// Captured result of a finished subprocess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    /// The argv that was executed, joined with spaces.
    pub command: String,
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(exit_code: Option<i32>) -> CommandOutput {
        CommandOutput {
            command: "chmod a+x /tmp/run.sh".to_string(),
            stdout: String::new(),
            stderr: String::new(),
            exit_code,
        }
    }

    #[test]
    fn test_success_only_for_zero_exit() {
        assert!(fixture(Some(0)).success());
        assert!(!fixture(Some(1)).success());
        assert!(!fixture(None).success());
    }
}
