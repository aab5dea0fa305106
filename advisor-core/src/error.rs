use thiserror::Error;

/// Errors surfaced to API callers.
///
/// The `Display` strings are exactly the messages returned in error response
/// bodies; underlying provider errors ride along as sources for server-side
/// logging and are never shown to the caller.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request did not include a usable city name.
    #[error("Please enter a city name")]
    InvalidCity,

    /// The provider could not supply a current observation for the city.
    #[error("City not found or API error")]
    CityNotFound(#[source] anyhow::Error),

    /// Anything else that went wrong while assembling the response.
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}
