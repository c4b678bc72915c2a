use crate::core::alphabet::{Alphabet, SEPARATOR};
use crate::core::ngram::{order_index, MAX_ORDER, MIN_ORDER, ORDER_COUNT};
use crate::core::tokenize::clean_punctuation;
use crate::core::trie::{InsertMode, Trie};
use crate::core::types::{rank_suggestions, Suggestion};
use crate::errors::Result;
use crate::fuzzy;

/// Longest context (in tokens) consulted for n-gram suggestions.
pub const CONTEXT_WINDOW: usize = 4;

/// Hard cap on suggestion lines per response, regardless of source.
pub const MAX_SUGGESTIONS: usize = 10;

/// How many continuations are gathered from a context node before ranking.
const CONTEXT_ENUM_LIMIT: usize = 20;

/// Mismatch budget for fuzzy fallback searches.
pub const DEFAULT_FUZZY_BUDGET: i32 = 2;

/// Counters collected over a whole build, reported once at completion.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct BuildStats {
    pub documents: usize,
    pub dictionary_words: u64,
    pub corpus_tokens: u64,
    pub skipped_chars: u64,
    pub truncated_tokens: u64,
    pub rejected_phrases: u64,
    /// Phrases inserted per order, 2-gram first.
    pub phrases: [u64; ORDER_COUNT],
}

/// Mutable model under construction. All insertion happens here, on one
/// thread, before anything is looked up; [`finish`](Self::finish) then
/// freezes the result into a read-only [`LanguageModel`].
pub struct ModelBuilder {
    vocabulary: Trie,
    ngrams: [Trie; ORDER_COUNT],
    stats: BuildStats,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self {
            vocabulary: Trie::new(Alphabet::Word),
            ngrams: [
                Trie::new(Alphabet::Phrase),
                Trie::new(Alphabet::Phrase),
                Trie::new(Alphabet::Phrase),
                Trie::new(Alphabet::Phrase),
            ],
            stats: BuildStats::default(),
        }
    }

    /// One dictionary line: punctuation stripped, then stored as a known
    /// word. Frequency is untouched; corpus occurrences own that signal.
    pub fn add_dictionary_word(&mut self, line: &str) -> Result<()> {
        let word = clean_punctuation(line.trim_end_matches(['\n', '\r']));
        if word.is_empty() {
            return Ok(());
        }
        self.vocabulary.insert(&word, InsertMode::MarkTerminal)?;
        self.stats.dictionary_words += 1;
        Ok(())
    }

    /// One corpus token occurrence: bumps frequency, leaves terminality to
    /// the dictionary.
    pub fn add_corpus_token(&mut self, token: &str) -> Result<()> {
        self.vocabulary
            .insert(token, InsertMode::IncrementFrequency)?;
        self.stats.corpus_tokens += 1;
        Ok(())
    }

    /// One observed n-gram phrase. Repeats of the same phrase accumulate.
    pub fn add_phrase(&mut self, order: usize, phrase: &str) -> Result<()> {
        self.ngrams[order_index(order)].insert(phrase, InsertMode::Both)?;
        self.stats.phrases[order_index(order)] += 1;
        Ok(())
    }

    /// Direct access for building an order from a phrase file.
    pub fn ngram_trie_mut(&mut self, order: usize) -> &mut Trie {
        &mut self.ngrams[order_index(order)]
    }

    pub fn record_phrases(&mut self, order: usize, count: u64) {
        self.stats.phrases[order_index(order)] += count;
    }

    pub fn stats_mut(&mut self) -> &mut BuildStats {
        &mut self.stats
    }

    /// Freezes the builder. Orders that never saw a phrase become absent so
    /// the orchestrator backs off past them.
    pub fn finish(mut self) -> LanguageModel {
        self.stats.skipped_chars += self.vocabulary.skipped_chars();
        for trie in &self.ngrams {
            self.stats.skipped_chars += trie.skipped_chars();
        }
        let ngrams = self
            .ngrams
            .map(|trie| if trie.is_empty() { None } else { Some(trie) });
        LanguageModel {
            vocabulary: self.vocabulary,
            ngrams,
            stats: self.stats,
        }
    }
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The frozen prediction model: the vocabulary trie plus one trie per
/// n-gram order that had data. No mutation after construction, so shared
/// read-only access from any number of threads is sound.
#[derive(Debug)]
pub struct LanguageModel {
    vocabulary: Trie,
    ngrams: [Option<Trie>; ORDER_COUNT],
    stats: BuildStats,
}

impl LanguageModel {
    pub fn vocabulary(&self) -> &Trie {
        &self.vocabulary
    }

    /// The order-n trie, or `None` when that order is absent or empty.
    pub fn ngram(&self, order: usize) -> Option<&Trie> {
        self.ngrams[order_index(order)].as_ref()
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }
}

/// Which branch of the decision procedure produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestState {
    /// Known last word; continuations from the most specific n-gram order.
    ContextSuggest,
    /// Unknown last word that is a prefix of known words.
    PrefixComplete,
    /// Approximate matches within the mismatch budget.
    FuzzyFallback,
    /// Known last word but no usable context: global frequency ranking.
    UnigramFallback,
    /// Empty or whitespace-only query.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestResponse {
    pub state: SuggestState,
    pub suggestions: Vec<Suggestion>,
}

impl SuggestResponse {
    fn new(state: SuggestState, mut suggestions: Vec<Suggestion>) -> Self {
        suggestions.truncate(MAX_SUGGESTIONS);
        Self { state, suggestions }
    }
}

/// Read-only query orchestrator over a frozen [`LanguageModel`].
///
/// A pure function of (query, model): safe to call concurrently and
/// repeatedly, never mutates the tries, never fails. The worst outcome is
/// an empty suggestion list.
pub struct SuggestEngine<'a> {
    model: &'a LanguageModel,
    fuzzy_budget: i32,
}

impl<'a> SuggestEngine<'a> {
    pub fn new(model: &'a LanguageModel) -> Self {
        Self {
            model,
            fuzzy_budget: DEFAULT_FUZZY_BUDGET,
        }
    }

    pub fn with_fuzzy_budget(model: &'a LanguageModel, fuzzy_budget: i32) -> Self {
        Self {
            model,
            fuzzy_budget,
        }
    }

    /// Answers one free-text query line.
    ///
    /// The query is split on whitespace only, not the corpus cleaning
    /// rules, so a trailing "घर।" is looked up punctuation and all (and
    /// will typically miss, landing in the fuzzy branch).
    pub fn suggest(&self, query: &str) -> SuggestResponse {
        let tokens: Vec<&str> = query.split_whitespace().collect();
        let Some(&last) = tokens.last() else {
            return SuggestResponse::new(SuggestState::Empty, Vec::new());
        };
        let vocabulary = self.model.vocabulary();

        let known = vocabulary
            .lookup_exact(last)
            .map_or(false, |(terminal, frequency)| terminal || frequency > 0);

        if known {
            let start = tokens.len().saturating_sub(CONTEXT_WINDOW);
            if let Some(suggestions) = self.context_suggestions(&tokens[start..]) {
                return SuggestResponse::new(SuggestState::ContextSuggest, suggestions);
            }
            let ranked = self.unigram_ranking();
            if !ranked.is_empty() {
                return SuggestResponse::new(SuggestState::UnigramFallback, ranked);
            }
            return SuggestResponse::new(
                SuggestState::FuzzyFallback,
                fuzzy::search(vocabulary, last, self.fuzzy_budget),
            );
        }

        if let Some(node) = vocabulary.lookup_prefix_node(last) {
            let completions: Vec<Suggestion> = vocabulary
                .enumerate(node, MAX_SUGGESTIONS)
                .into_iter()
                .map(|entry| Suggestion::new(format!("{last}{}", entry.key), entry.frequency))
                .collect();
            return SuggestResponse::new(SuggestState::PrefixComplete, completions);
        }

        SuggestResponse::new(
            SuggestState::FuzzyFallback,
            fuzzy::search(vocabulary, last, self.fuzzy_budget),
        )
    }

    /// Context backoff: try the most specific order the context can feed,
    /// then fall through to lower orders when the trie is absent, the
    /// context path is missing, or it has no stored continuation.
    fn context_suggestions(&self, context: &[&str]) -> Option<Vec<Suggestion>> {
        for order in (MIN_ORDER..=MAX_ORDER).rev() {
            let need = order - 1;
            if context.len() < need {
                continue;
            }
            let Some(trie) = self.model.ngram(order) else {
                continue;
            };
            let key = context[context.len() - need..].join(&SEPARATOR.to_string());
            let Some(node) = trie.lookup_prefix_node(&key) else {
                continue;
            };
            let entries = trie.enumerate(node, CONTEXT_ENUM_LIMIT);
            if entries.is_empty() {
                continue;
            }
            let mut suggestions: Vec<Suggestion> = entries
                .into_iter()
                .map(|entry| Suggestion::new(format!("{key}{}", entry.key), entry.frequency))
                .collect();
            rank_suggestions(&mut suggestions);
            suggestions.truncate(MAX_SUGGESTIONS);
            return Some(suggestions);
        }
        None
    }

    /// Every dictionary word ranked by corpus frequency.
    fn unigram_ranking(&self) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = self
            .model
            .vocabulary()
            .enumerate(crate::core::trie::ROOT, usize::MAX)
            .into_iter()
            .map(|entry| Suggestion::new(entry.key, entry.frequency))
            .collect();
        rank_suggestions(&mut suggestions);
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}
