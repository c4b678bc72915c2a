// src/core/types.rs

/// A ranked prediction: the suggested phrase (or word) plus the corpus
/// frequency backing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub phrase: String,
    pub frequency: u64,
}

impl Suggestion {
    pub fn new(phrase: impl Into<String>, frequency: u64) -> Self {
        Self {
            phrase: phrase.into(),
            frequency,
        }
    }
}

/// Sorts suggestions by frequency descending, breaking ties by phrase so the
/// ordering is identical across runs.
pub fn rank_suggestions(suggestions: &mut Vec<Suggestion>) {
    suggestions.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.phrase.cmp(&b.phrase))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_is_frequency_descending_with_lexicographic_ties() {
        let mut suggestions = vec![
            Suggestion::new("घर", 2),
            Suggestion::new("राम", 5),
            Suggestion::new("आम", 2),
        ];
        rank_suggestions(&mut suggestions);
        let phrases: Vec<&str> = suggestions.iter().map(|s| s.phrase.as_str()).collect();
        assert_eq!(phrases, ["राम", "आम", "घर"]);
    }
}
