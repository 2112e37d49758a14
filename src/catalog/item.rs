/// One entry of the alphabet: a letter, the word it stands for, and the picture shown with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningItem {
    /// Uppercase letter, "A" through "Z"
    pub symbol: &'static str,
    /// Word that starts with the letter
    pub label: &'static str,
    /// Emoji shown when no image is bundled
    pub glyph: &'static str,
    /// Optional image handle; `None` falls back to `glyph`
    pub media_ref: Option<&'static str>,
}

impl LearningItem {
    pub const fn new(symbol: &'static str, label: &'static str, glyph: &'static str) -> Self {
        Self {
            symbol,
            label,
            glyph,
            media_ref: None,
        }
    }

    /// What the card shows as the picture: the image handle if one exists, otherwise the emoji
    pub fn picture(&self) -> Picture {
        match self.media_ref {
            Some(media) => Picture::Media(media),
            None => Picture::Glyph(self.glyph),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picture {
    Glyph(&'static str),
    Media(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_falls_back_to_glyph() {
        let item = LearningItem::new("A", "Apple", "🍎");
        assert_eq!(item.picture(), Picture::Glyph("🍎"));
    }

    #[test]
    fn test_picture_prefers_media() {
        let item = LearningItem {
            media_ref: Some("apple.png"),
            ..LearningItem::new("A", "Apple", "🍎")
        };
        assert_eq!(item.picture(), Picture::Media("apple.png"));
    }
}
