use thiserror::Error;

/// Failures raised by the match data source. These never reach the user
/// directly; the CLI translates them through [`AppError::upstream`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataSourceError {
    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("could not decode upstream response: {0}")]
    Decode(String),
}

impl DataSourceError {
    /// Upstream status code, or 500 when the request never produced one.
    pub fn status(&self) -> u16 {
        match self {
            DataSourceError::Upstream { status, .. } => *status,
            DataSourceError::Transport(_) | DataSourceError::Decode(_) => 500,
        }
    }

    fn upstream_message(&self) -> Option<&str> {
        match self {
            DataSourceError::Upstream { message, .. } if !message.trim().is_empty() => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message} (status {status})")]
    Upstream { status: u16, message: String },

    #[error("Invalid Riot ID format. Use format: Name#TAG")]
    InvalidRiotId,

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    JsonError(String),
}

impl AppError {
    /// Boundary translation of a data source failure: keep the upstream
    /// status, prefer Riot's own message and fall back to `context`.
    pub fn upstream(context: &'static str, err: DataSourceError) -> Self {
        log::debug!("{}: {}", context, err);
        let message = err
            .upstream_message()
            .map(str::to_string)
            .unwrap_or_else(|| context.to_string());

        AppError::Upstream {
            status: err.status(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_defaults_to_500_without_response() {
        assert_eq!(DataSourceError::Transport("dns".into()).status(), 500);
        assert_eq!(DataSourceError::Decode("eof".into()).status(), 500);
        let err = DataSourceError::Upstream {
            status: 429,
            message: "Rate limit exceeded".into(),
        };
        assert_eq!(err.status(), 429);
    }

    #[test]
    fn test_upstream_prefers_riot_message() {
        let err = DataSourceError::Upstream {
            status: 404,
            message: "Data not found - match file not found".into(),
        };
        let app = AppError::upstream("Error fetching match details", err);
        assert_eq!(
            app.to_string(),
            "Data not found - match file not found (status 404)"
        );
    }

    #[test]
    fn test_upstream_falls_back_to_context() {
        let app = AppError::upstream(
            "Error calculating player stats",
            DataSourceError::Transport("connection reset".into()),
        );
        match app {
            AppError::Upstream { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Error calculating player stats");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let blank = DataSourceError::Upstream {
            status: 403,
            message: "  ".into(),
        };
        let app = AppError::upstream("Error fetching match IDs", blank);
        assert_eq!(app.to_string(), "Error fetching match IDs (status 403)");
    }
}
