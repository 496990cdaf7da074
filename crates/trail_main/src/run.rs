use anyhow::Context;
use tokio_util::sync::CancellationToken;
use trail_api::{API, ToolCallContext, ToolCallFull};

use crate::TopLevelCommand;

/// Runs one command and returns what should be printed on stdout.
pub async fn run(
    api: &impl API,
    command: TopLevelCommand,
    cancel: CancellationToken,
) -> anyhow::Result<String> {
    let context = |session_id: Option<String>| {
        let context = ToolCallContext::default().cancel(cancel.clone());
        match session_id {
            Some(id) => context.session_id(id),
            None => context,
        }
    };

    let value = match command {
        TopLevelCommand::Tools => serde_json::to_value(api.tools())?,
        TopLevelCommand::Chmod { path, mode, session_id } => {
            let output = api.chmod(path, mode, context(session_id)).await;
            serde_json::to_value(output)?
        }
        TopLevelCommand::Call { json, session_id } => {
            let call: ToolCallFull =
                serde_json::from_str(&json).context("Failed to parse tool call JSON")?;
            let output = api.call(call, context(session_id)).await;
            serde_json::to_value(output)?
        }
    };

    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(all(test, unix))]
mod tests {
    use pretty_assertions::assert_eq;
    use trail_api::TrailAPI;

    use super::*;

    #[tokio::test]
    async fn test_tools_prints_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = TrailAPI::init(dir.path().to_path_buf());

        let actual = run(&fixture, TopLevelCommand::Tools, CancellationToken::new())
            .await
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&actual).unwrap();
        assert_eq!(parsed[0]["name"], "chmod");
        let required = parsed[0]["input_schema"]["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("path")));
        assert!(required.contains(&serde_json::json!("mode")));
    }

    #[tokio::test]
    async fn test_call_with_bad_mode_still_produces_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("run.sh"), "").unwrap();
        let fixture = TrailAPI::init(dir.path().to_path_buf());
        let command = TopLevelCommand::Call {
            json: r#"{"name":"chmod","arguments":{"path":"run.sh","mode":"755"}}"#.to_string(),
            session_id: None,
        };

        let actual = run(&fixture, command, CancellationToken::new()).await.unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&actual).unwrap();
        let expected = "Error executing chmod: Unsupported chmod mode: 755. Only 'a+x' and 'a-x' are supported.";
        assert_eq!(parsed["output"], expected);
        assert_eq!(parsed["assistant_rendering"], expected);
    }

    #[tokio::test]
    async fn test_call_with_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = TrailAPI::init(dir.path().to_path_buf());
        let command = TopLevelCommand::Call { json: "{".to_string(), session_id: None };

        let actual = run(&fixture, command, CancellationToken::new()).await;

        assert!(actual.is_err());
    }
}
