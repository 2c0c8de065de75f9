//! `glossary` binary
//!
//! Argument parsing, configuration and startup all live in [`glossary::cli`];
//! this only turns a failed run into a non-zero exit.

fn main() {
    if let Err(e) = glossary::cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
