// File: src/serve.rs
use std::io::{BufRead, Write};

use crate::core::engine::SuggestEngine;

/// Answers line-oriented requests until the reader is exhausted.
///
/// Request: one line of free UTF-8 text. Response: a decimal count line,
/// then exactly that many suggestion lines, flushed as a batch. The count
/// prefix gives the reading client an unambiguous frame, unlike a bare
/// line stream. Queries are handled one at a time to completion and never
/// touch the model, so any I/O pair can drive this, including an in-memory
/// one under test.
pub fn serve<R: BufRead, W: Write>(
    engine: &SuggestEngine,
    input: R,
    output: &mut W,
) -> std::io::Result<()> {
    for line in input.lines() {
        let line = line?;
        respond(engine, &line, output)?;
    }
    Ok(())
}

/// Writes the framed response for a single query line.
pub fn respond<W: Write>(
    engine: &SuggestEngine,
    query: &str,
    output: &mut W,
) -> std::io::Result<()> {
    let query = query.trim_end_matches(['\n', '\r']);
    let response = engine.suggest(query);
    log::debug!(
        "query {:?} -> {:?}, {} suggestion(s)",
        query,
        response.state,
        response.suggestions.len()
    );
    writeln!(output, "{}", response.suggestions.len())?;
    for suggestion in &response.suggestions {
        writeln!(output, "{}", suggestion.phrase)?;
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::ModelBuilder;

    fn answer(queries: &str) -> String {
        let mut builder = ModelBuilder::new();
        builder.add_dictionary_word("घर").unwrap();
        builder.add_phrase(2, "घर जाता").unwrap();
        builder.add_phrase(2, "घर जाता").unwrap();
        builder.add_phrase(2, "घर आया").unwrap();
        let model = builder.finish();
        let engine = SuggestEngine::new(&model);

        let mut output = Vec::new();
        serve(&engine, queries.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn responses_are_count_framed() {
        assert_eq!(answer("घर\n"), "2\nघर जाता\nघर आया\n");
    }

    #[test]
    fn empty_request_line_frames_zero_suggestions() {
        assert_eq!(answer("\n"), "0\n");
    }

    #[test]
    fn each_request_gets_its_own_frame() {
        assert_eq!(
            answer("घर\n\nघर\n"),
            "2\nघर जाता\nघर आया\n0\n2\nघर जाता\nघर आया\n"
        );
    }
}
