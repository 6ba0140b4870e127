//! tasklist - track tasks in named, file-backed lists

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tasklist::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
