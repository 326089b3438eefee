use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Where the exported CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    /// In-memory content, used by tests and embedding callers.
    Text(String),
}

impl InputSource {
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Text(_) => "<memory>".to_string(),
        }
    }

    pub async fn read_to_string(&self) -> Result<String> {
        match self {
            InputSource::Stdin => read_all(tokio::io::stdin()).await,
            InputSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
            InputSource::Text(text) => Ok(text.clone()),
        }
    }
}

async fn read_all<R: AsyncRead + Unpin>(mut reader: R) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).await?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some(PathBuf::from("plan.csv"))),
            InputSource::File(PathBuf::from("plan.csv"))
        );
    }

    #[tokio::test]
    async fn test_read_file_source() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "Task,End\n").unwrap();

        let source = InputSource::File(file.path().to_path_buf());
        assert_eq!(source.read_to_string().await.unwrap(), "Task,End\n");
    }

    #[test]
    fn test_describe() {
        assert_eq!(InputSource::Stdin.describe(), "<stdin>");
        assert_eq!(
            InputSource::File(PathBuf::from("plan.csv")).describe(),
            "plan.csv"
        );
    }

    #[tokio::test]
    async fn test_read_all_from_stream() {
        let stream: &[u8] = b"Task,End\nKickoff,1/5/24\n";
        assert_eq!(read_all(stream).await.unwrap(), "Task,End\nKickoff,1/5/24\n");
    }

    #[tokio::test]
    async fn test_read_all_rejects_invalid_utf8() {
        let stream: &[u8] = &[0xff, 0xfe, b'\n'];
        assert!(matches!(
            read_all(stream).await,
            Err(crate::utils::error::SyncError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = InputSource::File(PathBuf::from("/nonexistent/plan.csv"));
        assert!(matches!(
            source.read_to_string().await,
            Err(crate::utils::error::SyncError::Io(_))
        ));
    }
}
