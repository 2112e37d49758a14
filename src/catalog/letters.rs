use super::item::LearningItem;

/// Number of letters in the catalog
pub const CATALOG_SIZE: usize = 26;

/// The compiled-in alphabet, A to Z
pub static CATALOG: [LearningItem; CATALOG_SIZE] = [
    LearningItem::new("A", "Apple", "🍎"),
    LearningItem::new("B", "Ball", "⚽"),
    LearningItem::new("C", "Cat", "🐱"),
    LearningItem::new("D", "Dog", "🐶"),
    LearningItem::new("E", "Elephant", "🐘"),
    LearningItem::new("F", "Fish", "🐠"),
    LearningItem::new("G", "Giraffe", "🦒"),
    LearningItem::new("H", "House", "🏠"),
    LearningItem::new("I", "Ice Cream", "🍦"),
    LearningItem::new("J", "Juice", "🧃"),
    LearningItem::new("K", "Kite", "🪁"),
    LearningItem::new("L", "Lion", "🦁"),
    LearningItem::new("M", "Monkey", "🐵"),
    LearningItem::new("N", "Nest", "🪺"),
    LearningItem::new("O", "Orange", "🍊"),
    LearningItem::new("P", "Penguin", "🐧"),
    LearningItem::new("Q", "Queen", "👸"),
    LearningItem::new("R", "Rabbit", "🐰"),
    LearningItem::new("S", "Sun", "☀️"),
    LearningItem::new("T", "Tiger", "🐅"),
    LearningItem::new("U", "Umbrella", "☂️"),
    LearningItem::new("V", "Violin", "🎻"),
    LearningItem::new("W", "Whale", "🐋"),
    LearningItem::new("X", "Xylophone", "🎵"),
    LearningItem::new("Y", "Yacht", "🛥️"),
    LearningItem::new("Z", "Zebra", "🦓"),
];

/// Index of the catalog entry for a letter, case-insensitive
pub fn index_of(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some((upper as u8 - b'A') as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_twenty_six_letters_in_order() {
        assert_eq!(CATALOG.len(), 26);
        for (i, item) in CATALOG.iter().enumerate() {
            let expected = ((b'A' + i as u8) as char).to_string();
            assert_eq!(item.symbol, expected);
        }
    }

    #[test]
    fn test_catalog_symbols_are_unique() {
        let symbols: HashSet<&str> = CATALOG.iter().map(|item| item.symbol).collect();
        assert_eq!(symbols.len(), CATALOG_SIZE);
    }

    #[test]
    fn test_catalog_labels_start_with_their_letter() {
        for item in CATALOG.iter() {
            assert!(item.label.starts_with(item.symbol), "{} / {}", item.symbol, item.label);
            assert!(!item.glyph.is_empty());
            assert_eq!(item.media_ref, None);
        }
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of('a'), Some(0));
        assert_eq!(index_of('Z'), Some(25));
        assert_eq!(index_of('m'), Some(12));
        assert_eq!(index_of('1'), None);
        assert_eq!(index_of('é'), None);
    }
}
