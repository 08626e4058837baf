use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::warn;

use booking_widget_cell::Dialogs;

/// Prints `prompt` and reads one line from stdin. `None` on end of input.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Like [`read_line`], returning `default` when the answer is blank.
pub fn read_with_default(label: &str, default: &str) -> io::Result<Option<String>> {
    let prompt = if default.is_empty() {
        format!("{}: ", label)
    } else {
        format!("{} [{}]: ", label, default)
    };

    Ok(read_line(&prompt)?.map(|answer| {
        if answer.trim().is_empty() {
            default.to_string()
        } else {
            answer.trim().to_string()
        }
    }))
}

pub struct TerminalDialogs;

impl Dialogs for TerminalDialogs {
    fn alert(&self, message: &str) {
        println!("{}", message.yellow().bold());
    }

    fn confirm(&self, message: &str) -> bool {
        match read_line(&format!("{} [y/N] ", message)) {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }

    fn reload(&self) {
        println!("{}", "Reloading...".dimmed());
    }
}
