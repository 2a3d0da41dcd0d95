use std::fmt;

/// Application error taxonomy.
///
/// Session errors are the fatal class: they abort the remaining locations.
/// Filter and extraction problems never reach this type — they are handled
/// locally (`FilterOutcome`, per-card drops) and the run continues.
#[derive(Debug)]
pub enum AppError {
    /// Browser/session-level failure (launch, navigation, script execution)
    Session(SessionError),
    /// Configuration loading failure
    Config(ConfigError),
    /// Export sink failure
    Export(ExportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Session(e) => write!(f, "session error: {}", e),
            AppError::Config(e) => write!(f, "config error: {}", e),
            AppError::Export(e) => write!(f, "export error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Session(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Export(e) => Some(e),
        }
    }
}

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Driver/session-level failures. All of these are fatal to the run.
#[derive(Debug)]
pub enum SessionError {
    /// Launching the headless browser failed
    LaunchFailed { source: BoxedSource },
    /// Navigating to a URL failed
    NavigationFailed { url: String, source: BoxedSource },
    /// An element the flow cannot continue without is missing
    ElementMissing { selector: String },
    /// Evaluating a script in the page failed
    ScriptFailed { source: BoxedSource },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::LaunchFailed { source } => {
                write!(f, "failed to launch browser: {}", source)
            }
            SessionError::NavigationFailed { url, source } => {
                write!(f, "failed to navigate to {}: {}", url, source)
            }
            SessionError::ElementMissing { selector } => {
                write!(f, "required element not found: {}", selector)
            }
            SessionError::ScriptFailed { source } => {
                write!(f, "script evaluation failed: {}", source)
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::LaunchFailed { source }
            | SessionError::NavigationFailed { source, .. }
            | SessionError::ScriptFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            SessionError::ElementMissing { .. } => None,
        }
    }
}

/// Configuration loading failures.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the config file failed
    ReadFailed { path: String, source: BoxedSource },
    /// Parsing the config file failed (includes missing credentials)
    ParseFailed { path: String, source: BoxedSource },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadFailed { path, source } => {
                write!(f, "failed to read {}: {}", path, source)
            }
            ConfigError::ParseFailed { path, source } => {
                write!(f, "failed to parse {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadFailed { source, .. } | ConfigError::ParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// Export sink failures.
#[derive(Debug)]
pub enum ExportError {
    /// Writing the CSV file failed
    CsvWriteFailed { path: String, source: BoxedSource },
    /// Writing the spreadsheet failed
    SpreadsheetWriteFailed { path: String, source: BoxedSource },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::CsvWriteFailed { path, source } => {
                write!(f, "failed to write CSV {}: {}", path, source)
            }
            ExportError::SpreadsheetWriteFailed { path, source } => {
                write!(f, "failed to write spreadsheet {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::CsvWriteFailed { source, .. }
            | ExportError::SpreadsheetWriteFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== Convenience constructors ==========

impl AppError {
    pub fn launch_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Session(SessionError::LaunchFailed {
            source: Box::new(source),
        })
    }

    pub fn navigation_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Session(SessionError::NavigationFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    pub fn element_missing(selector: impl Into<String>) -> Self {
        AppError::Session(SessionError::ElementMissing {
            selector: selector.into(),
        })
    }

    pub fn script_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Session(SessionError::ScriptFailed {
            source: Box::new(source),
        })
    }

    pub fn config_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Config(ConfigError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    pub fn config_parse_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Config(ConfigError::ParseFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    pub fn csv_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Export(ExportError::CsvWriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    pub fn spreadsheet_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Export(ExportError::SpreadsheetWriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

/// Application result type
pub type AppResult<T> = std::result::Result<T, AppError>;
