use std::path::Path;

use anyhow::Context;
use trail_app::FileInfoInfra;

pub struct TrailFileMeta;

#[async_trait::async_trait]
impl FileInfoInfra for TrailFileMeta {
    async fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        tokio::fs::try_exists(path)
            .await
            .with_context(|| format!("Failed to check whether {} exists", path.display()))
    }

    async fn is_executable(&self, path: &Path) -> anyhow::Result<bool> {
        let metadata = tokio::fs::metadata(path)
            .await
            .with_context(|| format!("Failed to read metadata of {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            Ok(metadata.permissions().mode() & 0o100 != 0)
        }

        #[cfg(not(unix))]
        {
            let _ = metadata;
            anyhow::bail!("Executable permissions are not supported on this platform")
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::fs::PermissionsExt;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_file(dir: &Path, name: &str, mode: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[tokio::test]
    async fn test_exists() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(dir.path(), "run.sh", 0o644);

        assert!(TrailFileMeta.exists(&file).await.unwrap());
        assert!(!TrailFileMeta.exists(&dir.path().join("missing")).await.unwrap());
    }

    #[tokio::test]
    async fn test_is_executable_reads_owner_bit() {
        let dir = tempfile::tempdir().unwrap();
        let owner = write_file(dir.path(), "owner.sh", 0o744);
        let others_only = write_file(dir.path(), "others.sh", 0o655);
        let plain = write_file(dir.path(), "plain.txt", 0o644);

        assert_eq!(TrailFileMeta.is_executable(&owner).await.unwrap(), true);
        assert_eq!(TrailFileMeta.is_executable(&others_only).await.unwrap(), false);
        assert_eq!(TrailFileMeta.is_executable(&plain).await.unwrap(), false);
    }

    #[tokio::test]
    async fn test_is_executable_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let actual = TrailFileMeta.is_executable(&dir.path().join("missing")).await;
        assert!(actual.is_err());
    }
}
