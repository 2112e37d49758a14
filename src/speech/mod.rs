pub mod haptics;
pub mod session;
#[cfg(feature = "speech")]
pub mod system;

pub use haptics::FlashHaptics;
pub use session::SpeechSession;
#[cfg(feature = "speech")]
pub use system::SystemSpeech;

use crate::engine::error::AlphabetError;

/// Host text-to-speech. Each `speak` supersedes whatever is still being
/// spoken; requests never queue.
pub trait SpeechService {
    fn speak(&mut self, text: &str) -> Result<(), AlphabetError>;

    /// Cut off the current utterance, if any
    fn stop(&mut self);
}

/// Host feedback pulse sent alongside every announcement
pub trait HapticService {
    fn pulse(&mut self);
}

/// Speech and haptics that do nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SpeechService for Silent {
    fn speak(&mut self, _text: &str) -> Result<(), AlphabetError> {
        Ok(())
    }

    fn stop(&mut self) {}
}

impl HapticService for Silent {
    fn pulse(&mut self) {}
}

/// Map a rate factor (1.0 = normal) onto an engine's `[min, normal, max]`
/// rate scale. Engines disagree on units, so the factor interpolates toward
/// `min` below 1.0 and toward `max` above it.
pub fn scaled_rate(factor: f32, min: f32, normal: f32, max: f32) -> f32 {
    let factor = factor.max(0.0);
    let rate = if factor < 1.0 {
        normal - (normal - min) * (1.0 - factor)
    } else {
        normal + (max - normal) * (factor - 1.0)
    };
    rate.clamp(min, max)
}

/// Index of the voice to use for `wanted` among the engine's voice
/// languages. An exact tag match wins; otherwise the first voice with the
/// same primary language ("en" for "en-US"). Case and `_`/`-` are ignored.
pub fn pick_voice<S: AsRef<str>>(languages: &[S], wanted: &str) -> Option<usize> {
    let normalize = |tag: &str| tag.trim().replace('_', "-").to_ascii_lowercase();
    let wanted = normalize(wanted);
    let primary = wanted.split('-').next().unwrap_or_default().to_string();
    if primary.is_empty() {
        return None;
    }

    let tags: Vec<String> = languages.iter().map(|l| normalize(l.as_ref())).collect();
    tags.iter().position(|tag| *tag == wanted).or_else(|| {
        tags.iter()
            .position(|tag| tag.split('-').next() == Some(primary.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_scaled_rate_speech_dispatcher_scale() {
        assert!(approx(scaled_rate(0.8, -100.0, 0.0, 100.0), -20.0));
        assert!(approx(scaled_rate(1.0, -100.0, 0.0, 100.0), 0.0));
    }

    #[test]
    fn test_scaled_rate_avfoundation_scale() {
        assert!(approx(scaled_rate(0.8, 0.1, 0.5, 2.0), 0.42));
        assert!(approx(scaled_rate(1.5, 0.1, 0.5, 2.0), 1.25));
    }

    #[test]
    fn test_scaled_rate_clamps() {
        assert!(approx(scaled_rate(-3.0, 0.1, 0.5, 2.0), 0.1));
        assert!(approx(scaled_rate(10.0, 0.1, 0.5, 2.0), 2.0));
    }

    #[test]
    fn test_pick_voice_prefers_exact_tag() {
        let voices = ["de-DE", "en-GB", "en-US", "fr-FR"];
        assert_eq!(pick_voice(&voices, "en-US"), Some(2));
    }

    #[test]
    fn test_pick_voice_falls_back_to_primary_language() {
        let voices = ["de-DE", "en_GB", "en-AU"];
        assert_eq!(pick_voice(&voices, "en-US"), Some(1));
        assert_eq!(pick_voice(&["es", "EN"], "en-us"), Some(1));
    }

    #[test]
    fn test_pick_voice_does_not_match_other_languages() {
        let voices = ["eng-x-test", "de-DE", "es-ES"];
        assert_eq!(pick_voice(&voices, "en-US"), None);
        assert_eq!(pick_voice(&voices, ""), None);
        assert_eq!(pick_voice::<&str>(&[], "en-US"), None);
    }

    #[test]
    fn test_silent_accepts_everything() {
        let mut silent = Silent;
        assert!(silent.speak("Letter A. Apple.").is_ok());
        silent.stop();
        silent.pulse();
    }
}
