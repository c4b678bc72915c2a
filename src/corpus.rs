// File: src/corpus.rs
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::config::EngineConfig;
use crate::core::engine::{LanguageModel, ModelBuilder};
use crate::core::ngram::{
    load_phrase_file, order_index, NgramExtractor, MAX_ORDER, MIN_ORDER,
};
use crate::core::tokenize::CorpusTokenizer;
use crate::errors::{BuildError, Result};

/// Regular files directly inside `dir`, optionally keeping only names that
/// contain `filter`. Sorted by path so builds are reproducible.
pub fn collect_files(dir: &Path, filter: Option<&str>) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| BuildError::source_unavailable(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BuildError::source_unavailable(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(keyword) = filter {
            let name = entry.file_name();
            if !name.to_string_lossy().contains(keyword) {
                continue;
            }
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Builds the whole model from the configured sources.
///
/// Single-threaded by design: every insert completes before the model is
/// frozen and the first lookup happens. Dictionary and corpus sources are
/// required; a failing per-order phrase file only degrades that order.
pub fn build_model(config: &EngineConfig) -> Result<LanguageModel> {
    let mut builder = ModelBuilder::new();

    let dict_files = collect_files(&config.dictionary_dir, None)?;
    log::info!(
        "building dictionary from {} file(s) in {}",
        dict_files.len(),
        config.dictionary_dir.display()
    );
    for path in &dict_files {
        load_dictionary_file(path, &mut builder)?;
    }

    let corpus_files = collect_files(&config.corpus_dir, config.corpus_filter.as_deref())?;
    log::info!(
        "mining {} corpus file(s) in {}",
        corpus_files.len(),
        config.corpus_dir.display()
    );
    let mut tokenizer = CorpusTokenizer::new();
    let mut extractor = NgramExtractor::new();
    for path in &corpus_files {
        let text =
            fs::read_to_string(path).map_err(|e| BuildError::source_unavailable(path, e))?;
        let tokens = tokenizer.tokenize(&text);
        for token in &tokens {
            builder.add_corpus_token(token)?;
        }
        extractor.process_document(&tokens);
        builder.stats_mut().documents += 1;
    }
    let tokenizer_stats = tokenizer.stats();
    builder.stats_mut().skipped_chars += tokenizer_stats.skipped_chars;
    builder.stats_mut().truncated_tokens += tokenizer_stats.truncated_tokens;
    builder.stats_mut().rejected_phrases += extractor.rejected_phrases();

    match &config.phrase_dir {
        Some(dir) => {
            // Hand the phrases over through per-order files, then build each
            // order back from its file. A broken order degrades on its own.
            let paths = extractor.write_phrase_files(dir)?;
            for order in MIN_ORDER..=MAX_ORDER {
                let path = &paths[order_index(order)];
                match load_phrase_file(path, builder.ngram_trie_mut(order)) {
                    Ok(count) => builder.record_phrases(order, count),
                    Err(err) => {
                        log::warn!("dropping order {}: {}", order, err);
                    }
                }
            }
        }
        None => {
            let per_order = extractor.into_phrases();
            for order in MIN_ORDER..=MAX_ORDER {
                for phrase in &per_order[order_index(order)] {
                    builder.add_phrase(order, phrase)?;
                }
            }
        }
    }

    let model = builder.finish();
    let stats = model.stats();
    log::info!(
        "model ready: {} document(s), {} dictionary word(s), {} token(s), phrases {:?}",
        stats.documents,
        stats.dictionary_words,
        stats.corpus_tokens,
        stats.phrases
    );
    if stats.skipped_chars > 0 || stats.truncated_tokens > 0 || stats.rejected_phrases > 0 {
        log::info!(
            "absorbed anomalies: {} unsupported char(s), {} truncated token(s), {} rejected phrase(s)",
            stats.skipped_chars,
            stats.truncated_tokens,
            stats.rejected_phrases
        );
    }
    Ok(model)
}

/// One word per line; newlines stripped, punctuation cleaned, then stored.
fn load_dictionary_file(path: &Path, builder: &mut ModelBuilder) -> Result<()> {
    let file = fs::File::open(path).map_err(|e| BuildError::source_unavailable(path, e))?;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| BuildError::source_unavailable(path, e))?;
        builder.add_dictionary_word(&line)?;
    }
    Ok(())
}
