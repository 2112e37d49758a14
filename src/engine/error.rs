use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlphabetError {
    #[error("terminal I/O error: {0}")]
    Terminal(#[from] io::Error),

    #[error("speech engine unavailable: {0}")]
    SpeechUnavailable(String),

    #[error("speech request failed: {0}")]
    Speech(String),

    #[error("cannot set up logging: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_to_terminal() {
        let err: AlphabetError = io::Error::new(io::ErrorKind::Other, "tty gone").into();
        match err {
            AlphabetError::Terminal(_) => (),
            _ => panic!("Expected Terminal error"),
        }
    }

    #[test]
    fn test_display_messages() {
        let err = AlphabetError::SpeechUnavailable("no engine".to_string());
        assert_eq!(err.to_string(), "speech engine unavailable: no engine");

        let err = AlphabetError::Speech("busy".to_string());
        assert_eq!(err.to_string(), "speech request failed: busy");
    }
}
