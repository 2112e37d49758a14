/// Colour-coding groups used to tint letters on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    Vowel,
    BToF,
    GToL,
    MToR,
    SToZ,
    Other,
}

/// Classify a symbol. Vowels win over the consonant ranges; anything that
/// is not a single letter A-Z lands in `Other`.
pub fn classify(symbol: &str) -> LetterClass {
    let mut chars = symbol.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return LetterClass::Other,
    };

    match letter {
        'A' | 'E' | 'I' | 'O' | 'U' => LetterClass::Vowel,
        'B'..='F' => LetterClass::BToF,
        'G'..='L' => LetterClass::GToL,
        'M'..='R' => LetterClass::MToR,
        'S'..='Z' => LetterClass::SToZ,
        _ => LetterClass::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowels_share_a_class() {
        assert_eq!(classify("A"), classify("E"));
        for vowel in ["A", "E", "I", "O", "U"] {
            assert_eq!(classify(vowel), LetterClass::Vowel);
        }
    }

    #[test]
    fn test_consonant_ranges() {
        assert_ne!(classify("B"), classify("G"));
        assert_eq!(classify("B"), LetterClass::BToF);
        assert_eq!(classify("F"), LetterClass::BToF);
        assert_eq!(classify("L"), LetterClass::GToL);
        assert_eq!(classify("M"), LetterClass::MToR);
        assert_eq!(classify("R"), LetterClass::MToR);
        assert_eq!(classify("S"), LetterClass::SToZ);
        assert_eq!(classify("Z"), LetterClass::SToZ);
    }

    #[test]
    fn test_other_symbols_fall_back() {
        assert_eq!(classify(""), LetterClass::Other);
        assert_eq!(classify("a"), LetterClass::Other);
        assert_eq!(classify("7"), LetterClass::Other);
        assert_eq!(classify("BA"), LetterClass::Other);
    }
}
