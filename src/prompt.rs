//! Console yes/no prompt.

use std::io::{self, BufRead, Write};

pub const VISUALIZE_QUESTION: &str = "Would you like to visualize the data? (yes/no): ";

/// Print `question` and read one line; only "yes" (any case, trimmed) counts.
///
/// End of input counts as "no".
pub fn ask_yes_no<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    write!(output, "\n{question}")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

/// Ask on the process console. Read failures count as "no".
pub fn console_yes_no(question: &str) -> bool {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ask_yes_no(question, &mut stdin.lock(), &mut stdout.lock()).unwrap_or_else(|err| {
        log::warn!("Could not read an answer from the console: {err}");
        false
    })
}
