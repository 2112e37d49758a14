use crate::catalog::LetterClass;
use ratatui::style::Color;

/// Playroom theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub anchor: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::playroom()
    }
}

impl Theme {
    pub fn playroom() -> Self {
        Self {
            background: Color::Rgb(45, 55, 72), // #2D3748 Slate
            surface: Color::Rgb(0, 0, 0),       // card face
            text: Color::Rgb(255, 255, 255),
            anchor: Color::Rgb(255, 107, 107), // #FF6B6B Coral
            dimmed: Color::Rgb(160, 174, 192), // #A0AEC0 Mist
        }
    }

    pub fn current() -> Self {
        Self::playroom()
    }
}

/// Tint for a letter group
pub fn letter_color(class: LetterClass) -> Color {
    match class {
        LetterClass::Vowel => Color::Rgb(255, 107, 107), // #FF6B6B red
        LetterClass::BToF => Color::Rgb(78, 205, 196),   // #4ECDC4 teal
        LetterClass::GToL => Color::Rgb(69, 183, 209),   // #45B7D1 blue
        LetterClass::MToR => Color::Rgb(150, 206, 180),  // #96CEB4 green
        LetterClass::SToZ => Color::Rgb(254, 202, 87),   // #FECA57 yellow
        LetterClass::Other => Color::Cyan,
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn surface() -> Color {
        Theme::current().surface
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn anchor() -> Color {
        Theme::current().anchor
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::classify;

    #[test]
    fn test_letter_colors_follow_classes() {
        assert_eq!(letter_color(classify("A")), letter_color(classify("E")));
        assert_ne!(letter_color(classify("B")), letter_color(classify("G")));
        assert_eq!(letter_color(classify("Z")), Color::Rgb(254, 202, 87));
        assert_eq!(letter_color(classify("?")), Color::Cyan);
    }

    #[test]
    fn test_every_class_has_a_distinct_color() {
        let classes = [
            LetterClass::Vowel,
            LetterClass::BToF,
            LetterClass::GToL,
            LetterClass::MToR,
            LetterClass::SToZ,
            LetterClass::Other,
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(letter_color(*a), letter_color(*b));
            }
        }
    }
}
