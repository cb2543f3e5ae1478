use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED_TO_LOAD_DATA: i32 = 1;
pub const EXIT_FAILED_TO_WRITE_FILE: i32 = 3;
pub const EXIT_MALFORMED_ENTRY: i32 = 4;
pub const EXIT_CONFIGURATION: i32 = 5;

/// A list item under the changelog heading that is not `type: text`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed changelog entry: {entry:?}")]
pub struct MalformedEntry {
    pub entry: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("{message}")]
    LoadData { message: String, detail: String },
    #[error("{}", no_pull_requests_message(.filtered))]
    NoPullRequests { filtered: bool },
    #[error(transparent)]
    MalformedEntry(#[from] MalformedEntry),
    #[error("{}", write_failure_message(.source))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn load_data(message: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::LoadData {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Configuration(_) => EXIT_CONFIGURATION,
            AppError::LoadData { .. } | AppError::NoPullRequests { .. } => EXIT_FAILED_TO_LOAD_DATA,
            AppError::MalformedEntry(_) => EXIT_MALFORMED_ENTRY,
            AppError::Write { .. } => EXIT_FAILED_TO_WRITE_FILE,
        }
    }

    /// Underlying cause, only shown to the user in verbose mode.
    pub fn detail(&self) -> Option<String> {
        match self {
            AppError::LoadData { detail, .. } => Some(detail.clone()),
            AppError::NoPullRequests { .. } => {
                Some("The request succeeded but no pull request matched.".to_string())
            }
            AppError::Write { path, source } => Some(format!("{}: {source}", path.display())),
            AppError::Configuration(_) | AppError::MalformedEntry(_) => None,
        }
    }
}

fn no_pull_requests_message(filtered: &bool) -> &'static str {
    if *filtered {
        "Failed to load any pull request matching the filter."
    } else {
        "Failed to load any pull request."
    }
}

fn write_failure_message(source: &io::Error) -> &'static str {
    match source.kind() {
        io::ErrorKind::PermissionDenied => "You have no permission to write the file.",
        io::ErrorKind::NotFound => "The specified output path is invalid.",
        io::ErrorKind::InvalidInput => {
            "Output path is empty, contains only white space, or is otherwise invalid."
        }
        _ => "Failed to write file.",
    }
}
