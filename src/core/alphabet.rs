// File: src/core/alphabet.rs

/// First codepoint of the Devanagari block (U+0900).
pub const DEVANAGARI_BASE: u32 = 0x0900;

/// Number of codepoints the tries can index directly.
pub const WINDOW_WIDTH: usize = 128;

/// Inter-token boundary symbol inside n-gram phrase keys.
pub const SEPARATOR: char = ' ';

/// Maps characters to bounded child-slot indices and back.
///
/// `Word` covers the 128-codepoint Devanagari window. `Phrase` additionally
/// reserves slot 0 for the separator and shifts all codepoint slots by one,
/// so phrase keys can carry token boundaries. Characters outside the window
/// encode to `None` and are skipped by every trie walk; they are never
/// stored and never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Word,
    Phrase,
}

impl Alphabet {
    /// Width of the child-slot array for tries over this alphabet.
    pub const fn width(self) -> usize {
        match self {
            Alphabet::Word => WINDOW_WIDTH,
            Alphabet::Phrase => WINDOW_WIDTH + 1,
        }
    }

    /// Encodes a character to its child slot, or `None` if unsupported.
    pub fn encode(self, ch: char) -> Option<usize> {
        match self {
            Alphabet::Word => Self::window_offset(ch),
            Alphabet::Phrase => {
                if ch == SEPARATOR {
                    Some(0)
                } else {
                    Self::window_offset(ch).map(|slot| slot + 1)
                }
            }
        }
    }

    /// Exact inverse of [`encode`](Self::encode) for valid slots.
    pub fn decode(self, slot: usize) -> char {
        debug_assert!(slot < self.width());
        match self {
            Alphabet::Word => Self::window_char(slot),
            Alphabet::Phrase => {
                if slot == 0 {
                    SEPARATOR
                } else {
                    Self::window_char(slot - 1)
                }
            }
        }
    }

    fn window_offset(ch: char) -> Option<usize> {
        let offset = (ch as u32).wrapping_sub(DEVANAGARI_BASE) as usize;
        (offset < WINDOW_WIDTH).then_some(offset)
    }

    fn window_char(offset: usize) -> char {
        // Slots only ever come from encode(), so the codepoint is valid.
        char::from_u32(DEVANAGARI_BASE + offset as u32).unwrap_or('\u{fffd}')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_devanagari_window() {
        assert_eq!(Alphabet::Word.encode('अ'), Some(0x05));
        assert_eq!(Alphabet::Word.encode('र'), Some(0x30));
        assert_eq!(Alphabet::Word.encode('\u{0900}'), Some(0));
        assert_eq!(Alphabet::Word.encode('\u{097F}'), Some(127));
    }

    #[test]
    fn rejects_characters_outside_window() {
        assert_eq!(Alphabet::Word.encode('a'), None);
        assert_eq!(Alphabet::Word.encode('1'), None);
        assert_eq!(Alphabet::Word.encode(' '), None);
        // First codepoint past the window (Devanagari Extended).
        assert_eq!(Alphabet::Word.encode('\u{0980}'), None);
    }

    #[test]
    fn phrase_codec_reserves_slot_zero_for_separator() {
        assert_eq!(Alphabet::Phrase.encode(' '), Some(0));
        assert_eq!(Alphabet::Phrase.encode('\u{0900}'), Some(1));
        assert_eq!(Alphabet::Phrase.encode('र'), Some(0x31));
        assert_eq!(Alphabet::Phrase.width(), 129);
    }

    #[test]
    fn decode_inverts_encode() {
        for alphabet in [Alphabet::Word, Alphabet::Phrase] {
            for ch in ['क', 'र', 'ा', 'ँ', '\u{0900}'] {
                let slot = alphabet.encode(ch).unwrap();
                assert_eq!(alphabet.decode(slot), ch);
            }
        }
        assert_eq!(Alphabet::Phrase.decode(0), ' ');
    }
}
