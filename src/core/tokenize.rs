// File: src/core/tokenize.rs
use crate::core::alphabet::Alphabet;

/// Longest token kept; anything beyond this is cut and counted.
pub const MAX_TOKEN_CHARS: usize = 100;

const PUNCTUATION: [char; 10] = [',', '.', ':', ';', '!', '?', '\'', '"', '|', '।'];

/// True for the fixed punctuation set that ends a token.
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

/// Removes punctuation from a dictionary line, keeping everything else.
pub fn clean_punctuation(word: &str) -> String {
    word.chars().filter(|ch| !is_punctuation(*ch)).collect()
}

/// Counters for character-level anomalies absorbed during tokenization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerStats {
    /// Characters outside the Devanagari window, dropped in place.
    pub skipped_chars: u64,
    /// Tokens cut at [`MAX_TOKEN_CHARS`].
    pub truncated_tokens: u64,
}

/// Splits raw document text into Devanagari-window tokens.
///
/// A token ends at whitespace or at punctuation. Only window characters
/// accumulate; any other character is dropped where it stands without
/// ending the token, so "रा1म" comes out as the single token "राम".
/// Zero-length tokens are discarded.
pub struct CorpusTokenizer {
    stats: TokenizerStats,
}

impl CorpusTokenizer {
    pub fn new() -> Self {
        Self {
            stats: TokenizerStats::default(),
        }
    }

    pub fn stats(&self) -> TokenizerStats {
        self.stats
    }

    /// Tokenizes one document. Callers keep documents separate so that
    /// n-gram windows never cross a document boundary.
    pub fn tokenize(&mut self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut current_chars = 0usize;
        let mut cut = false;

        for ch in text.chars() {
            if ch.is_whitespace() || is_punctuation(ch) {
                self.flush(&mut tokens, &mut current, &mut current_chars, &mut cut);
            } else if Alphabet::Word.encode(ch).is_some() {
                if current_chars < MAX_TOKEN_CHARS {
                    current.push(ch);
                    current_chars += 1;
                } else if !cut {
                    cut = true;
                    self.stats.truncated_tokens += 1;
                    log::warn!("token cut at {} characters", MAX_TOKEN_CHARS);
                }
            } else {
                self.stats.skipped_chars += 1;
            }
        }
        self.flush(&mut tokens, &mut current, &mut current_chars, &mut cut);
        tokens
    }

    fn flush(
        &mut self,
        tokens: &mut Vec<String>,
        current: &mut String,
        current_chars: &mut usize,
        cut: &mut bool,
    ) {
        if !current.is_empty() {
            tokens.push(std::mem::take(current));
        }
        *current_chars = 0;
        *cut = false;
    }
}

impl Default for CorpusTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_of(text: &str) -> Vec<String> {
        CorpusTokenizer::new().tokenize(text)
    }

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        assert_eq!(
            tokens_of("मैं घर जाता हूँ।"),
            ["मैं", "घर", "जाता", "हूँ"]
        );
        assert_eq!(tokens_of("राम,घर"), ["राम", "घर"]);
    }

    #[test]
    fn drops_unsupported_characters_in_place() {
        // The digit neither accumulates nor ends the token.
        assert_eq!(tokens_of("रा1म"), ["राम"]);
        assert_eq!(tokens_of("abc राम xyz"), ["राम"]);
    }

    #[test]
    fn discards_zero_length_tokens() {
        assert_eq!(tokens_of("  । , ! 123  "), Vec::<String>::new());
    }

    #[test]
    fn counts_skipped_characters() {
        let mut tokenizer = CorpusTokenizer::new();
        tokenizer.tokenize("रा1म ab");
        assert_eq!(tokenizer.stats().skipped_chars, 3);
    }

    #[test]
    fn cuts_overlong_tokens_once() {
        let long: String = std::iter::repeat('क').take(MAX_TOKEN_CHARS + 20).collect();
        let mut tokenizer = CorpusTokenizer::new();
        let tokens = tokenizer.tokenize(&long);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].chars().count(), MAX_TOKEN_CHARS);
        assert_eq!(tokenizer.stats().truncated_tokens, 1);
    }

    #[test]
    fn cleans_punctuation_from_dictionary_lines() {
        assert_eq!(clean_punctuation("राम।"), "राम");
        assert_eq!(clean_punctuation("\"घर,\""), "घर");
    }
}
