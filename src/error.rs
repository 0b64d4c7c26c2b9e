use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaylistsError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(std::io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for PlaylistsError {
    fn from(err: std::io::Error) -> Self {
        PlaylistsError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, PlaylistsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: PlaylistsError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, PlaylistsError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn json_errors_convert() {
        let err: PlaylistsError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, PlaylistsError::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }
}
