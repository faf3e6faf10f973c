use thiserror::Error;

/// Failure taxonomy for the fetch pipeline.
///
/// All stages let these bubble unmodified to the orchestrator; there is no
/// retry or fallback layer. The message of each variant is meant to be shown
/// to the user verbatim.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Geocoding returned zero matches. User-correctable.
    #[error("City not found: {0}")]
    NotFound(String),

    /// Network or response-decoding failure.
    #[error("{context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    /// The provider answered but the payload itself signalled an error.
    #[error("Weather provider error: {reason}")]
    Provider { reason: String },
}

impl WeatherError {
    pub(crate) fn transport(
        context: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        WeatherError::Transport {
            context: context.into(),
            source: source.into(),
        }
    }
}
