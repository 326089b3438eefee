use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("CSV parse error{}: {message}", .line.map(|l| format!(" at record {}", l)).unwrap_or_default())]
    Parse { line: Option<u64>, message: String },

    #[error("Basecamp API returned {status} for {url}")]
    Remote { url: String, status: u16, body: String },

    #[error("Unexpected response format: {message}")]
    Format { message: String },

    #[error("No Basecamp id found for {name}")]
    UnresolvedAssignee { name: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad input data: CSV rows, assignee names, response shape.
    Data,
    /// The remote service or the transport failed.
    Remote,
    /// Local setup: configuration files, filesystem.
    System,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Data => 1,
            ErrorSeverity::Remote => 2,
            ErrorSeverity::System => 3,
        }
    }
}

impl SyncError {
    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        SyncError::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        SyncError::Format {
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SyncError::Parse { .. }
            | SyncError::Format { .. }
            | SyncError::UnresolvedAssignee { .. }
            | SyncError::Csv(_)
            | SyncError::Validation { .. } => ErrorSeverity::Data,
            SyncError::Remote { .. } | SyncError::Http(_) => ErrorSeverity::Remote,
            SyncError::Io(_)
            | SyncError::Config { .. }
            | SyncError::MissingConfig { .. }
            | SyncError::InvalidConfigValue { .. } => ErrorSeverity::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SyncError::Remote { url, status, body } => {
                format!("Basecamp rejected the request to {} (HTTP {}):\n{}", url, status, body)
            }
            SyncError::UnresolvedAssignee { name } => {
                format!("Assignee '{}' is not a member of the Basecamp project", name)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SyncError::Parse { .. } | SyncError::Csv(_) => {
                "Check that the CSV has Task, Start, Assigned, Completed and End columns and that End looks like M/D/YY"
            }
            SyncError::Remote { .. } => {
                "Check the token, the project id and the response body above; entries submitted before the failure were kept"
            }
            SyncError::Http(_) => "Check network connectivity and the configured Basecamp URL",
            SyncError::Format { .. } => "Check that the configured URL points at the Basecamp XML API",
            SyncError::UnresolvedAssignee { .. } => {
                "Add the person to the project, fix the Assigned column, or toggle use_only_first_name"
            }
            SyncError::Io(_) => "Check that the input file exists and is readable",
            SyncError::Config { .. }
            | SyncError::MissingConfig { .. }
            | SyncError::InvalidConfigValue { .. } => {
                "Review config.defaults.toml and config.local.toml"
            }
            SyncError::Validation { .. } => "Resolve every assignee before submitting milestones",
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
