#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("invalid regex pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unsupported http method: {0:?}")]
    UnsupportedMethod(String),

    #[error("request uri is not valid utf-8 after decoding: {0:?}")]
    InvalidUri(String),
}
