//! Repository error taxonomy

/// Failure of an upstream lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure or non-success HTTP status. Surfaced to the user, never retried.
    UpstreamUnavailable { url: String, reason: String },
    /// The provider has no record for the requested code
    NotFound { code: String },
    /// The response body did not have the expected shape
    Decode { url: String, reason: String },
}

impl ApiError {
    pub fn upstream(url: &str, reason: impl ToString) -> Self {
        ApiError::UpstreamUnavailable {
            url: redact_url(url),
            reason: reason.to_string(),
        }
    }

    pub fn decode(url: &str, reason: impl ToString) -> Self {
        ApiError::Decode {
            url: redact_url(url),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(code: &str) -> Self {
        ApiError::NotFound {
            code: code.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::UpstreamUnavailable { url, reason } => {
                write!(f, "upstream unavailable ({}): {}", url, reason)
            }
            ApiError::NotFound { code } => write!(f, "no country found for code '{}'", code),
            ApiError::Decode { url, reason } => {
                write!(f, "unexpected response from {}: {}", url, reason)
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Mask the `appid` query parameter so API keys never reach logs or error messages
pub fn redact_url(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let masked: Vec<String> = query
        .split('&')
        .map(|pair| {
            if pair.starts_with("appid=") {
                "appid=***".to_string()
            } else {
                pair.to_string()
            }
        })
        .collect();

    format!("{}?{}", base, masked.join("&"))
}
