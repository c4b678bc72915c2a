// File: src/core/ngram.rs
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::core::alphabet::SEPARATOR;
use crate::core::trie::{InsertMode, Trie};
use crate::errors::{BuildError, Result};

/// Smallest and largest n-gram order kept in the model.
pub const MIN_ORDER: usize = 2;
pub const MAX_ORDER: usize = 5;

/// Number of n-gram orders (2 through 5).
pub const ORDER_COUNT: usize = MAX_ORDER - MIN_ORDER + 1;

/// Phrases longer than this are rejected outright rather than stored.
pub const MAX_PHRASE_CHARS: usize = 512;

/// Arena index for an order: 2 → 0, 5 → 3.
pub fn order_index(order: usize) -> usize {
    debug_assert!((MIN_ORDER..=MAX_ORDER).contains(&order));
    order - MIN_ORDER
}

/// Conventional file name for an order's phrase file ("2grms.txt" …).
pub fn phrase_file_name(order: usize) -> String {
    format!("{}grms.txt", order)
}

/// Slides windows of 2..=5 tokens over per-document token streams and
/// aggregates the resulting phrases per order.
///
/// Windows never cross a document boundary: each call to
/// [`process_document`](Self::process_document) starts fresh.
pub struct NgramExtractor {
    phrases: [Vec<String>; ORDER_COUNT],
    rejected_phrases: u64,
}

impl NgramExtractor {
    pub fn new() -> Self {
        Self {
            phrases: Default::default(),
            rejected_phrases: 0,
        }
    }

    /// Emits every contiguous window of 2..=5 tokens from one document.
    /// A document shorter than an order contributes nothing to that order.
    pub fn process_document(&mut self, tokens: &[String]) {
        for order in MIN_ORDER..=MAX_ORDER {
            if tokens.len() < order {
                continue;
            }
            for window in tokens.windows(order) {
                let phrase = window.join(&SEPARATOR.to_string());
                if phrase.chars().count() > MAX_PHRASE_CHARS {
                    self.rejected_phrases += 1;
                    log::warn!("rejecting phrase over {} characters", MAX_PHRASE_CHARS);
                    continue;
                }
                self.phrases[order_index(order)].push(phrase);
            }
        }
    }

    pub fn phrase_count(&self, order: usize) -> usize {
        self.phrases[order_index(order)].len()
    }

    pub fn phrases(&self, order: usize) -> &[String] {
        &self.phrases[order_index(order)]
    }

    /// Phrases rejected for exceeding [`MAX_PHRASE_CHARS`].
    pub fn rejected_phrases(&self) -> u64 {
        self.rejected_phrases
    }

    /// Writes one phrase file per order into `dir`, one phrase per line,
    /// tokens joined by a literal space. Each file is written to a temporary
    /// file first and atomically renamed into place.
    pub fn write_phrase_files(&self, dir: &Path) -> Result<[PathBuf; ORDER_COUNT]> {
        std::fs::create_dir_all(dir)?;
        let mut paths: [PathBuf; ORDER_COUNT] = Default::default();
        for order in MIN_ORDER..=MAX_ORDER {
            let path = dir.join(phrase_file_name(order));
            let mut temp = NamedTempFile::new_in(dir)?;
            for phrase in self.phrases(order) {
                writeln!(temp, "{}", phrase)?;
            }
            temp.persist(&path).map_err(|e| e.error)?;
            log::info!(
                "wrote {} phrases of order {} to {}",
                self.phrase_count(order),
                order,
                path.display()
            );
            paths[order_index(order)] = path;
        }
        Ok(paths)
    }

    /// Hands the aggregated phrases over, consuming the extractor.
    pub fn into_phrases(self) -> [Vec<String>; ORDER_COUNT] {
        self.phrases
    }
}

impl Default for NgramExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a per-order phrase file back and inserts each line into `trie`,
/// marking terminality and bumping frequency so repeats accumulate.
/// Returns the number of phrases inserted.
pub fn load_phrase_file(path: &Path, trie: &mut Trie) -> Result<u64> {
    let file = File::open(path).map_err(|e| BuildError::source_unavailable(path, e))?;
    let reader = BufReader::new(file);
    let mut inserted = 0u64;
    for line in reader.lines() {
        let line = line.map_err(|e| BuildError::source_unavailable(path, e))?;
        let phrase = line.trim_end_matches(['\n', '\r']);
        if phrase.is_empty() || phrase.chars().count() > MAX_PHRASE_CHARS {
            continue;
        }
        trie.insert(phrase, InsertMode::Both)?;
        inserted += 1;
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::Alphabet;

    fn doc(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn windows_cover_every_order() {
        let mut extractor = NgramExtractor::new();
        extractor.process_document(&doc(&["मैं", "घर", "जाता", "हूँ"]));

        assert_eq!(
            extractor.phrases(2),
            ["मैं घर", "घर जाता", "जाता हूँ"]
        );
        assert_eq!(extractor.phrases(3), ["मैं घर जाता", "घर जाता हूँ"]);
        assert_eq!(extractor.phrases(4), ["मैं घर जाता हूँ"]);
        assert_eq!(extractor.phrase_count(5), 0);
    }

    #[test]
    fn windows_do_not_cross_documents() {
        let mut extractor = NgramExtractor::new();
        extractor.process_document(&doc(&["मैं", "घर"]));
        extractor.process_document(&doc(&["जाता", "हूँ"]));
        assert_eq!(extractor.phrases(2), ["मैं घर", "जाता हूँ"]);
        assert_eq!(extractor.phrase_count(3), 0);
    }

    #[test]
    fn phrase_files_round_trip_into_a_trie() {
        let mut extractor = NgramExtractor::new();
        extractor.process_document(&doc(&["मैं", "घर", "जाता"]));
        extractor.process_document(&doc(&["मैं", "घर", "आया"]));

        let dir = tempfile::tempdir().unwrap();
        let paths = extractor.write_phrase_files(dir.path()).unwrap();

        let mut bigrams = Trie::new(Alphabet::Phrase);
        let inserted = load_phrase_file(&paths[order_index(2)], &mut bigrams).unwrap();
        assert_eq!(inserted, 4);
        // "मैं घर" occurred in both documents.
        assert_eq!(bigrams.lookup_exact("मैं घर"), Some((true, 2)));
        assert_eq!(bigrams.lookup_exact("घर जाता"), Some((true, 1)));
    }

    #[test]
    fn missing_phrase_file_reports_its_path() {
        let mut trie = Trie::new(Alphabet::Phrase);
        let err = load_phrase_file(Path::new("no_such_dir/2grms.txt"), &mut trie).unwrap_err();
        match err {
            BuildError::SourceUnavailable { path, .. } => {
                assert!(path.ends_with("2grms.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn overlong_phrases_are_rejected() {
        let long: String = std::iter::repeat('क').take(MAX_PHRASE_CHARS).collect();
        let mut extractor = NgramExtractor::new();
        extractor.process_document(&doc(&[long.as_str(), long.as_str()]));
        assert_eq!(extractor.phrase_count(2), 0);
        assert_eq!(extractor.rejected_phrases(), 1);
    }
}
