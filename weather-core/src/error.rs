use thiserror::Error;

/// Every way a weather lookup can fail.
///
/// Variants carry plain strings instead of transport errors so the value can
/// be cloned into UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("too many redirects: {0}")]
    TooManyRedirects(String),

    #[error("HTTP status {status}: {detail}")]
    HttpStatus { status: u16, detail: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("unexpected response status in body: {0}")]
    UnexpectedBody(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl FetchError {
    /// Classify a transport error. Order matters: a connect timeout is a
    /// connection failure first.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        let detail = err.to_string();

        if err.is_connect() {
            FetchError::Connection(detail)
        } else if err.is_timeout() {
            FetchError::Timeout(detail)
        } else if err.is_redirect() {
            FetchError::TooManyRedirects(detail)
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus {
                status: status.as_u16(),
                detail,
            }
        } else {
            FetchError::Request(detail)
        }
    }

    /// Two-line text shown in place of the temperature.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Connection(_) => "Connection Error:\nCheck your internet connection".into(),
            FetchError::Timeout(_) => "Timeout Error:\nThe request timed out".into(),
            FetchError::TooManyRedirects(_) => "Too many Redirects:\nCheck the URL".into(),
            FetchError::HttpStatus { status, detail } => match status {
                400 => "Bad Request:\nPlease check your input".into(),
                401 => "Unauthorized:\nInvalid API key".into(),
                403 => "Forbidden:\nAccess is denied".into(),
                404 => "Not found:\nCity not found".into(),
                500 => "Internal Server Error:\nPlease try again later".into(),
                502 => "Bad Gateway:\nInvalid response from the server".into(),
                503 => "Service Unavailable:\nServer is down".into(),
                504 => "Gateway Timeout:\nNo response from the server".into(),
                _ => format!("HTTP error occurred:\n{detail}"),
            },
            FetchError::MalformedResponse(_) => {
                "Malformed Response:\nUnexpected data from the server".into()
            }
            FetchError::UnexpectedBody(cod) => {
                format!("Unexpected Response:\nServer reported status {cod}")
            }
            FetchError::Request(detail) => format!("Request Error:\n{detail}"),
        }
    }
}
