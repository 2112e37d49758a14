use super::SpeechService;
use crate::engine::config::SpeechConfig;
use crate::engine::error::AlphabetError;
use tracing::{debug, info, warn};

/// Owns the speech engine for as long as the screen is active.
///
/// Acquisition never fails: if the engine cannot start, the session runs
/// without one and announcements are dropped. Dropping the session stops
/// any utterance and releases the engine, including during unwinding.
pub struct SpeechSession {
    engine: Option<Box<dyn SpeechService>>,
}

impl SpeechSession {
    pub fn acquire(config: &SpeechConfig) -> Self {
        if !config.enabled {
            info!("speech disabled, announcements will be silent");
            return Self::unavailable();
        }

        match open_engine(config) {
            Ok(engine) => {
                info!("speech engine acquired");
                Self::with_engine(engine)
            }
            Err(err) => {
                warn!(error = %err, "speech engine unavailable, continuing without announcements");
                Self::unavailable()
            }
        }
    }

    pub fn with_engine(engine: Box<dyn SpeechService>) -> Self {
        Self {
            engine: Some(engine),
        }
    }

    pub fn unavailable() -> Self {
        Self { engine: None }
    }

    pub fn is_available(&self) -> bool {
        self.engine.is_some()
    }
}

impl SpeechService for SpeechSession {
    fn speak(&mut self, text: &str) -> Result<(), AlphabetError> {
        match self.engine.as_mut() {
            Some(engine) => engine.speak(text),
            None => {
                debug!(text, "no speech engine, announcement dropped");
                Ok(())
            }
        }
    }

    fn stop(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.stop();
        }
    }
}

impl Drop for SpeechSession {
    fn drop(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.stop();
            info!("speech engine released");
        }
    }
}

#[cfg(feature = "speech")]
fn open_engine(config: &SpeechConfig) -> Result<Box<dyn SpeechService>, AlphabetError> {
    Ok(Box::new(super::system::SystemSpeech::open(config)?))
}

#[cfg(not(feature = "speech"))]
fn open_engine(_config: &SpeechConfig) -> Result<Box<dyn SpeechService>, AlphabetError> {
    Err(AlphabetError::SpeechUnavailable(
        "built without the `speech` feature".to_string(),
    ))
}
