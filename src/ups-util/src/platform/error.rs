use std::fmt;

/// A requested application name could not be resolved in the current space.
///
/// A failed lookup request is reported the same way as an empty result; the
/// request error is kept as the source.
#[derive(Debug)]
pub struct ResolutionError {
    pub app_name: String,
    pub lookup: Option<FetchError>,
}

impl ResolutionError {
    pub fn not_found(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            lookup: None,
        }
    }

    pub fn lookup_failed(app_name: &str, err: FetchError) -> Self {
        Self {
            app_name: app_name.to_string(),
            lookup: Some(err),
        }
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Application '{}' not found", self.app_name)
    }
}

impl std::error::Error for ResolutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.lookup
            .as_ref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

/// A read of application or environment data did not succeed.
#[derive(Debug)]
pub enum FetchError {
    /// The request URL could not be built from the API base address
    InvalidUrl(url::ParseError),

    /// Network request failed
    Network { url: String, source: reqwest::Error },

    /// Server returned a non-200 status code
    Status { url: String, status: u16, body: String },

    /// Response body is not the expected JSON document
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(_) => write!(f, "Invalid platform URL"),
            FetchError::Network { url, .. } => write!(f, "GET {} failed", url),
            FetchError::Status { url, status, body } => {
                write!(f, "GET {} returned status {}: {}", url, status, body)
            }
            FetchError::Decode { url, .. } => {
                write!(f, "GET {} returned an unexpected body", url)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::InvalidUrl(e) => Some(e),
            FetchError::Network { source, .. } => Some(source),
            FetchError::Status { .. } => None,
            FetchError::Decode { source, .. } => Some(source),
        }
    }
}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::InvalidUrl(err)
    }
}

impl FetchError {
    /// Create a status error from response details
    pub fn status(url: &str, status: u16, body: String) -> Self {
        FetchError::Status {
            url: url.to_string(),
            status,
            body,
        }
    }

    /// HTTP status of the failed read, when the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Any failure while talking to the platform. Every variant is fatal to the run.
///
/// Transparent: `Display` and `source` are the wrapped error's own.
#[derive(Debug)]
pub enum PlatformError {
    Resolution(ResolutionError),
    Fetch(FetchError),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Resolution(e) => write!(f, "{}", e),
            PlatformError::Fetch(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlatformError::Resolution(e) => std::error::Error::source(e),
            PlatformError::Fetch(e) => std::error::Error::source(e),
        }
    }
}

impl From<ResolutionError> for PlatformError {
    fn from(err: ResolutionError) -> Self {
        PlatformError::Resolution(err)
    }
}

impl From<FetchError> for PlatformError {
    fn from(err: FetchError) -> Self {
        PlatformError::Fetch(err)
    }
}

impl From<url::ParseError> for PlatformError {
    fn from(err: url::ParseError) -> Self {
        PlatformError::Fetch(err.into())
    }
}

/// Result type for platform reads
pub type PlatformResult<T> = Result<T, PlatformError>;
