//! Interactive read-answer-print loop.

use std::io::{self, BufRead, Write};

use crate::domain::Answer;
use crate::llm::CompletionClient;
use crate::router::Assistant;

pub const PROMPT: &str = "Ask about your Git repo: ";

/// Words that end the session, compared case-insensitively.
pub const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

pub fn is_exit(line: &str) -> bool {
    let lowered = line.to_lowercase();
    EXIT_WORDS.contains(&lowered.as_str())
}

/// Prompt, read one line, answer it, repeat until an exit word or end of input.
///
/// A completion service failure is printed as an answer and the loop goes on.
pub fn run_loop<C, R, W>(assistant: &Assistant<C>, mut input: R, mut output: W) -> io::Result<()>
where
    C: CompletionClient,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let question = line.trim_end_matches(['\n', '\r']);

        if is_exit(question) {
            break;
        }

        let answer = assistant.answer(question).unwrap_or_else(|err| {
            tracing::warn!("Completion request failed: {}", err);
            Answer::RemoteService(err.to_string())
        });
        writeln!(output, "Answer: {answer}")?;
    }
    Ok(())
}
