//! Yes/no prompts and the session configuration dialogue

use crate::config::Config;
use std::io::{BufRead, Write};

/// Answers accepted as "yes", case-insensitively
const TRUTHY_STRINGS: &[&str] = &["true", "t", "y", "yes", "1"];

/// Whether an answer string counts as affirmative
pub fn is_truthy(answer: &str) -> bool {
    let lowered = answer.trim().to_lowercase();
    TRUTHY_STRINGS.contains(&lowered.as_str())
}

/// Ask a yes/no question and read one line of answer.
///
/// An empty answer (or end of input) takes the default; any other answer
/// is affirmative only if it is in the truthy set.
pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: bool,
) -> std::io::Result<bool> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(default);
    }

    let answer = line.trim();
    if answer.is_empty() {
        Ok(default)
    } else {
        Ok(is_truthy(answer))
    }
}

/// Run the three-question configuration dialogue.
///
/// File caching is only offered when caching is wanted at all; the
/// `use_file_cache` / `use_cache` coupling itself lives in `Config::new`.
pub fn configure<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<Config> {
    let use_cache = ask_yes_no(
        input,
        output,
        "Do you want to use caching [Y/N] (Default: Y)? ",
        true,
    )?;

    let use_file_cache = if use_cache {
        ask_yes_no(
            input,
            output,
            "Do you want to use file caching [Y/N] (Default: Y)? ",
            true,
        )?
    } else {
        false
    };

    let verbose = ask_yes_no(
        input,
        output,
        "Do you want verbose output [Y/N] (Default: N)? ",
        false,
    )?;

    Ok(Config::new(use_cache, use_file_cache, verbose))
}
