use std::io::{self, BufRead, Write};
use std::path::Path;

/// Ask before overwriting `path`. Only an interactive stdin is asked; piped runs proceed.
pub fn confirm_overwrite(path: &Path, assume_yes: bool) -> bool {
    if assume_yes || !atty::is(atty::Stream::Stdin) {
        return true;
    }

    let mut stderr = io::stderr();
    let _ = write!(stderr, "Overwrite {}? [y/N] ", path.display());
    let _ = stderr.flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => parse_answer(&line),
        Err(e) => {
            tracing::warn!("Could not read answer: {e}");
            false
        }
    }
}

/// `y`/`yes` in any case; everything else, including an empty line, is no
pub fn parse_answer(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}
