use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use suggest_core::{corpus, EngineConfig, SuggestEngine, SuggestState};

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <dictionary_directory> <corpus_directory>", args[0]);
        std::process::exit(1);
    }

    let config = EngineConfig::with_dirs(&args[1], &args[2]);
    let model = match corpus::build_model(&config) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("[ERROR] Build failed: {e}");
            std::process::exit(1);
        }
    };
    let engine = SuggestEngine::with_fuzzy_budget(&model, config.fuzzy_budget);

    println!("{}", "Hindi Suggestion Simulator".bold());
    println!("---------------------------------------------------------------");
    println!("Type Hindi text and press [Enter] for predictions. 'exit' to quit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let query = line?;
        if query.trim() == "exit" {
            break;
        }

        let response = engine.suggest(&query);
        println!("Source: {}", state_label(response.state).cyan());
        if response.suggestions.is_empty() {
            println!("{}", "No suggestions found.".dark_grey());
        } else {
            for (i, suggestion) in response.suggestions.iter().enumerate() {
                println!(
                    "  {}: {} {}",
                    i + 1,
                    suggestion.phrase.as_str().green(),
                    format!("(freq {})", suggestion.frequency).dark_grey()
                );
            }
        }

        print!("\n> ");
        stdout.flush()?;
    }

    Ok(())
}

fn state_label(state: SuggestState) -> &'static str {
    match state {
        SuggestState::ContextSuggest => "context",
        SuggestState::PrefixComplete => "prefix completion",
        SuggestState::FuzzyFallback => "fuzzy match",
        SuggestState::UnigramFallback => "unigram ranking",
        SuggestState::Empty => "empty query",
    }
}
