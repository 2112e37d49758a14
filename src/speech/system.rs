use super::{pick_voice, scaled_rate, SpeechService};
use crate::engine::config::SpeechConfig;
use crate::engine::error::AlphabetError;
use tracing::{debug, warn};
use tts::Tts;

/// The platform's speech engine, through the `tts` crate
pub struct SystemSpeech {
    tts: Tts,
    interrupt: bool,
}

impl SystemSpeech {
    pub fn open(config: &SpeechConfig) -> Result<Self, AlphabetError> {
        let mut tts =
            Tts::default().map_err(|err| AlphabetError::SpeechUnavailable(err.to_string()))?;

        if tts.supported_features().rate {
            let rate = scaled_rate(
                config.rate_factor,
                tts.min_rate(),
                tts.normal_rate(),
                tts.max_rate(),
            );
            match tts.set_rate(rate) {
                Ok(_) => debug!(rate, "speech rate set"),
                Err(err) => warn!(error = %err, "could not set speech rate"),
            }
        }

        if tts.supported_features().voice {
            select_voice(&mut tts, &config.language);
        }

        Ok(Self {
            tts,
            interrupt: config.interrupt,
        })
    }
}

/// Switch to a voice for `language`, keeping the engine default on any failure
fn select_voice(tts: &mut Tts, language: &str) {
    let voices = match tts.voices() {
        Ok(voices) => voices,
        Err(err) => {
            warn!(error = %err, "could not list voices, keeping default");
            return;
        }
    };

    let languages: Vec<String> = voices
        .iter()
        .map(|voice| voice.language().as_str().to_owned())
        .collect();

    let Some(index) = pick_voice(languages.as_slice(), language) else {
        warn!(language, "no voice for language, keeping default");
        return;
    };

    match tts.set_voice(&voices[index]) {
        Ok(_) => debug!(language = %languages[index], voice = %voices[index].name(), "speech voice set"),
        Err(err) => warn!(error = %err, language, "could not set voice, keeping default"),
    }
}

impl SpeechService for SystemSpeech {
    fn speak(&mut self, text: &str) -> Result<(), AlphabetError> {
        self.tts
            .speak(text, self.interrupt)
            .map(|_| ())
            .map_err(|err| AlphabetError::Speech(err.to_string()))
    }

    fn stop(&mut self) {
        if !self.tts.supported_features().stop {
            return;
        }
        if let Err(err) = self.tts.stop() {
            warn!(error = %err, "could not stop speech");
        }
    }
}
