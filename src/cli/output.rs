//! Output formatting for CLI commands

use colored::{ColoredString, Colorize};

use crate::domain::{StatusCategory, Task};

/// Output helper for consistent formatting
pub struct Output {
    verbose: bool,
}

impl Output {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        println!("{}", message.green());
    }

    /// Prints a reported (non-fatal) failure
    pub fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    /// Prints a status change or other notice
    pub fn notice(&self, message: &str) {
        println!("{}", message.yellow());
    }

    /// Prints a section header
    pub fn header(&self, message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a plain line
    pub fn line(&self, message: &str) {
        println!("{}", message);
    }

    /// Prints a task at its 1-based position, coloured by status
    pub fn task(&self, position: usize, task: &Task) {
        let text = format!(
            "[{}] - {} - {} - Status: ({})",
            position, task.name, task.description, task.status
        );
        println!("{}", paint(&text, task.status.category()));
    }

    /// Prints a blank line
    pub fn blank(&self) {
        println!();
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

fn paint(text: &str, category: StatusCategory) -> ColoredString {
    match category {
        StatusCategory::Warm => text.yellow(),
        StatusCategory::Halted => text.red(),
        StatusCategory::Done => text.green(),
        StatusCategory::Neutral => text.white(),
    }
}
