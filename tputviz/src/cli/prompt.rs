//! Interactive fallback for a missing FILE argument.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const PROMPT: &str = "Result file: ";

/// Print the prompt to `output` and read one path from `input`.
///
/// Surrounding whitespace is dropped; `None` means end of input or an empty
/// answer.
///
/// # Errors
///
/// Returns an error if writing the prompt or reading the answer fails.
pub fn prompt_for_path<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<Option<PathBuf>> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(None);
    }
    let path = answer.trim();
    Ok((!path.is_empty()).then(|| PathBuf::from(path)))
}
