/// Errors from the JPDB parse endpoint.
///
/// Display texts are user-facing; the UI shows them verbatim.
#[derive(Debug, thiserror::Error)]
pub enum JpdbError {
    #[error("JPDB API key not configured. Please set it in settings.")]
    MissingApiKey,

    #[error("Failed to connect to JPDB API. Check your internet connection.")]
    Connection(#[source] reqwest::Error),

    #[error("Invalid JPDB API key. Check your configuration.")]
    InvalidApiKey,

    #[error("Access forbidden. Check your JPDB account.")]
    Forbidden,

    #[error("Rate limit exceeded. Try again later.")]
    RateLimited,

    #[error("API returned error {code}. Response: {body}")]
    Api { code: u16, body: String },
}
