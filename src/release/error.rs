use reqwest::StatusCode;

/// Terminal outcome of a failed release lookup.
///
/// Both variants degrade to the same fallback link in the UI; the
/// distinction only changes the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseError {
    /// The repository has no published release (HTTP 404)
    NotFound,
    /// Network error, unexpected status, or unreadable payload
    FetchFailed(String),
}

impl ReleaseError {
    pub fn from_anyhow(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ReleaseError>() {
            Some(known) => known.clone(),
            None => ReleaseError::FetchFailed(format!("{:#}", error)),
        }
    }
}

impl std::fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseError::NotFound => write!(f, "No releases found"),
            ReleaseError::FetchFailed(msg) => write!(f, "Failed to fetch release: {}", msg),
        }
    }
}

impl std::error::Error for ReleaseError {}

/// Maps an error from `error_for_status()` onto the release error taxonomy.
pub fn check_status(error: reqwest::Error) -> anyhow::Error {
    let classified = match error.status() {
        Some(StatusCode::NOT_FOUND) => ReleaseError::NotFound,
        Some(status) => ReleaseError::FetchFailed(format!("HTTP {} error", status.as_u16())),
        None => ReleaseError::FetchFailed(error.to_string()),
    };
    anyhow::Error::from(classified)
}
