// Minimal test harness for the suggestion pipeline
// Run with: cargo run --bin suggest_test
// src/bin/suggest_test.rs
use suggest_core::{ModelBuilder, SuggestEngine};

fn main() {
    let mut builder = ModelBuilder::new();
    for word in ["मैं", "घर", "जाता", "हूँ", "राम", "आया", "पानी"] {
        builder.add_dictionary_word(word).unwrap();
    }
    for phrase in [
        "मैं घर जाता",
        "मैं घर जाता",
        "मैं घर आया",
        "घर जाता हूँ",
    ] {
        builder.add_phrase(3, phrase).unwrap();
    }
    builder.add_phrase(2, "राम घर").unwrap();
    let model = builder.finish();
    let engine = SuggestEngine::new(&model);

    let queries = ["मैं घर", "रीम", "पा", "राम", ""];
    for query in queries {
        let response = engine.suggest(query);
        println!("{:?} => {:?}", query, response.state);
        for suggestion in response.suggestions {
            println!("    {} ({})", suggestion.phrase, suggestion.frequency);
        }
    }
}
