// Compiled-in settings for the alphabet screen. There is no config file;
// these defaults are the whole configuration surface.

/// Text-to-speech settings
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechConfig {
    /// Set to false to run without acquiring a speech engine
    pub enabled: bool,

    /// Speaking rate relative to the engine's normal rate (default 0.8, slower for kids)
    pub rate_factor: f32,

    /// Interrupt the utterance in flight on each new announcement
    pub interrupt: bool,

    /// BCP 47 tag of the preferred voice language; falls back to any voice
    /// sharing the primary subtag, then to the engine default
    pub language: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rate_factor: 0.8,
            interrupt: true,
            language: "en-US".to_string(),
        }
    }
}

/// Swipe recognition on the letter card
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Minimum horizontal drag, in terminal columns, that counts as a swipe
    pub swipe_threshold: u16,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self { swipe_threshold: 6 }
    }
}

/// Event loop and presentation timing
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Input poll timeout in milliseconds
    pub poll_ms: u64,

    /// How long the card border flashes after an announcement
    pub flash_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_ms: 50,
            flash_ms: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub speech: SpeechConfig,
    pub gesture: GestureConfig,
    pub ui: UiConfig,
}
