use std::fs::{File, OpenOptions};
use std::io::{stdin, stdout, BufReader, BufWriter};
use std::path::Path;
use std::time::Duration;

use suggest_core::{corpus, serve, EngineConfig, SuggestEngine};

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(usage) => {
            eprintln!("{usage}");
            std::process::exit(1);
        }
    };

    let model = match corpus::build_model(&config) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("[ERROR] Build failed: {e}");
            std::process::exit(1);
        }
    };
    log::debug!(
        "build stats: {}",
        serde_json::to_string(model.stats()).unwrap_or_default()
    );
    let engine = SuggestEngine::with_fuzzy_budget(&model, config.fuzzy_budget);
    log::info!("all tries created, serving");

    match (&config.request_pipe, &config.response_pipe) {
        (Some(request), Some(response)) => serve_pipes(&engine, request, response),
        _ => {
            if let Err(e) = serve::serve(&engine, stdin().lock(), &mut stdout().lock()) {
                eprintln!("[ERROR] Serving failed: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn parse_args() -> Result<EngineConfig, String> {
    let args: Vec<String> = std::env::args().collect();
    match args.as_slice() {
        [_, flag, path] if flag == "--config" => {
            EngineConfig::load(Path::new(path)).map_err(|e| e.to_string())
        }
        [_, dictionary_dir, corpus_dir] => {
            Ok(EngineConfig::with_dirs(dictionary_dir, corpus_dir))
        }
        [name, ..] => Err(format!(
            "Usage: {name} <dictionary_directory> <corpus_directory>\n       {name} --config <engine.json>"
        )),
        [] => Err("missing program name".to_string()),
    }
}

/// Serves over a named-pipe pair, reopening after each client hangs up.
fn serve_pipes(engine: &SuggestEngine, request: &Path, response: &Path) {
    loop {
        let input = match File::open(request) {
            Ok(file) => BufReader::new(file),
            Err(e) => {
                log::warn!("cannot open request pipe {}: {e}", request.display());
                std::thread::sleep(Duration::from_secs(1));
                continue;
            }
        };
        let mut output = match OpenOptions::new().write(true).open(response) {
            Ok(file) => BufWriter::new(file),
            Err(e) => {
                log::warn!("cannot open response pipe {}: {e}", response.display());
                std::thread::sleep(Duration::from_secs(1));
                continue;
            }
        };
        if let Err(e) = serve::serve(engine, input, &mut output) {
            log::warn!("serving interrupted: {e}");
        }
    }
}
