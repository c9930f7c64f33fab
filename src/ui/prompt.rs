use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no confirmation from the user on stdin.
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    read_confirmation(&mut io::stdin().lock())
}

/// `y`/`yes` (any case) confirms; anything else, including EOF, declines.
pub fn read_confirmation<R: BufRead>(input: &mut R) -> bool {
    let mut s = String::new();
    if input.read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
