use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Settings file missing, unreadable or incomplete
    ConfigError(String),
    /// A non-comment line of the city list lacks a name or a URL
    MalformedCityLine { line: usize, content: String },
    /// Network request failed
    NetworkError(String),
    /// Invalid URL format
    UrlError(String),
    /// The HTML-to-PDF renderer failed
    RenderError(String),
    /// IO operation failed
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            AppError::MalformedCityLine { line, content } => {
                write!(
                    f,
                    "Malformed name, url pair in line {line}: '{}'",
                    content.trim_end()
                )
            }
            AppError::NetworkError(msg) => write!(f, "Network error: {msg}"),
            AppError::UrlError(msg) => write!(f, "Invalid URL: {msg}"),
            AppError::RenderError(msg) => write!(f, "Render error: {msg}"),
            AppError::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

// Conversion implementations for common errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn test_malformed_city_line_display() {
        let err = AppError::MalformedCityLine {
            line: 3,
            content: "Athens\n".to_string(),
        };

        let error_msg = err.to_string();
        assert!(error_msg.contains("line 3"));
        assert!(error_msg.contains("'Athens'"));
    }

    #[test]
    fn test_network_error_display() {
        let err = AppError::NetworkError("Connection timeout".to_string());
        assert!(err.to_string().contains("Network error"));
        assert!(err.to_string().contains("Connection timeout"));
    }

    #[test]
    fn test_config_error_display() {
        let err = AppError::ConfigError("missing field `output_directory`".to_string());
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(err.to_string().contains("output_directory"));
    }

    #[test]
    fn test_render_error_display() {
        let err = AppError::RenderError("wkhtmltopdf exited with 1".to_string());
        assert!(err.to_string().contains("Render error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::IoError(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_app_error_implements_error_trait() {
        use std::error::Error;
        let err: Box<dyn Error> = Box::new(AppError::NetworkError("test".to_string()));
        assert!(!err.to_string().is_empty());
    }
}
