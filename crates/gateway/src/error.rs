#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid gateway host {host}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to access node failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("access node responded with {status} for {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    #[error("failed to decode access node response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Validation(String),
}
