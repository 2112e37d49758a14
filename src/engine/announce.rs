use crate::catalog::LearningItem;
use crate::speech::{HapticService, Silent, SpeechService};
use tracing::warn;

/// Spoken form of a catalog entry
pub fn phrase(item: &LearningItem) -> String {
    format!("Letter {}. {}.", item.symbol, item.label)
}

/// Fire-and-forget announcement: speech request plus a haptic pulse.
/// Failures never reach the caller.
pub struct Announcer {
    speech: Box<dyn SpeechService>,
    haptics: Box<dyn HapticService>,
}

impl Announcer {
    pub fn new(speech: Box<dyn SpeechService>, haptics: Box<dyn HapticService>) -> Self {
        Self { speech, haptics }
    }

    pub fn silent() -> Self {
        Self::new(Box::new(Silent), Box::new(Silent))
    }

    pub fn announce(&mut self, item: &LearningItem) {
        let text = phrase(item);
        if let Err(err) = self.speech.speak(&text) {
            warn!(error = %err, symbol = item.symbol, "announcement not spoken");
        }
        self.haptics.pulse();
    }
}
