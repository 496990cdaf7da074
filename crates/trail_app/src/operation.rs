use std::time::Duration;

use trail_domain::{Chmod, ToolOutput};

use crate::{ChmodOutcome, ChmodOutput};

/// A tool call that ran to completion, paired with its input so the result
/// can be phrased in the caller's own terms.
#[derive(Debug, derive_more::From)]
pub enum ToolOperation {
    Chmod { input: Chmod, output: ChmodOutput },
}

impl ToolOperation {
    pub fn into_tool_output(self, elapsed: Duration) -> ToolOutput {
        match self {
            ToolOperation::Chmod { input, output } => {
                let mode = output.mode;
                let message = match output.outcome {
                    ChmodOutcome::AlreadySatisfied => mode.already_satisfied_message(&input.path),
                    ChmodOutcome::Committed => {
                        format!("{} and committed changes", mode.action_message(&input.path))
                    }
                    ChmodOutcome::CommitFailed { reason } => format!(
                        "{}, but failed to commit changes: {reason}",
                        mode.action_message(&input.path)
                    ),
                };
                ToolOutput::new(message, elapsed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use trail_domain::ChmodMode;

    use super::*;

    fn operation(mode: ChmodMode, outcome: ChmodOutcome) -> ToolOperation {
        let input = Chmod::new("bin/run.sh", mode.to_string());
        let output = ChmodOutput { path: PathBuf::from("/repo/bin/run.sh"), mode, outcome };
        (input, output).into()
    }

    #[test]
    fn test_committed_grant() {
        let fixture = operation(ChmodMode::AddExecute, ChmodOutcome::Committed);
        let actual = fixture.into_tool_output(Duration::from_millis(3)).output;
        let expected = "Made file 'bin/run.sh' executable and committed changes";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_committed_revoke() {
        let fixture = operation(ChmodMode::RemoveExecute, ChmodOutcome::Committed);
        let actual = fixture.into_tool_output(Duration::ZERO).output;
        let expected =
            "Removed executable permission from file 'bin/run.sh' and committed changes";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_commit_failure_keeps_reason_verbatim() {
        let fixture = operation(
            ChmodMode::AddExecute,
            ChmodOutcome::CommitFailed { reason: "index.lock exists".to_string() },
        );
        let actual = fixture.into_tool_output(Duration::from_millis(9));
        let expected = ToolOutput::new(
            "Made file 'bin/run.sh' executable, but failed to commit changes: index.lock exists",
            Duration::from_millis(9),
        );
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_already_satisfied() {
        let fixture = operation(ChmodMode::RemoveExecute, ChmodOutcome::AlreadySatisfied);
        let actual = fixture.into_tool_output(Duration::ZERO).output;
        let expected = "File 'bin/run.sh' is already non-executable";
        assert_eq!(actual, expected);
    }
}
