// src/prompt.rs
use crate::core::terms::{ReplaceTerms, is_blank};
use crate::error::SetupError;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub const DIRECTORY_PROMPT: &str = "Enter directory path: ";
pub const SEARCH_PROMPT: &str = "Enter the text to replace: ";
pub const REPLACEMENT_PROMPT: &str = "Enter the replacement text: ";
pub const PAUSE_PROMPT: &str = "Press Enter to continue";

/// Line-oriented console over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    #[inline]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `message` on its own line.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written or flushed.
    #[inline]
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    /// Prints `question` and reads one line of answer.
    ///
    /// The line terminator is removed and nothing else. End of input reads as
    /// an empty answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written to or read from.
    #[inline]
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        self.say(question)?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        strip_line_ending(&mut line);
        Ok(line)
    }

    /// Uses `prefilled` when given, otherwise asks.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written to or read from.
    #[inline]
    pub fn answer(&mut self, prefilled: Option<&str>, question: &str) -> io::Result<String> {
        match prefilled {
            Some(value) => Ok(value.to_owned()),
            None => self.ask(question),
        }
    }

    /// Waits for the user to press Enter.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written to or read from.
    #[inline]
    pub fn pause(&mut self) -> io::Result<()> {
        self.ask(PAUSE_PROMPT).map(drop)
    }

    #[inline]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Everything a run needs once the prompts have been answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub root: PathBuf,
    pub terms: ReplaceTerms,
}

/// Collects the directory, search term and replacement term in that order.
///
/// Each answer is validated before the next question is asked, so an invalid
/// directory stops the run without asking for the terms.
///
/// # Arguments
///
/// * `console` - Where the questions are asked
/// * `directory` - Pre-filled directory, skips the first question
/// * `search` - Pre-filled search term, skips the second question
/// * `replacement` - Pre-filled replacement term, skips the third question
///
/// # Returns
///
/// * `Ok(Ok(Setup))` - All answers are valid
/// * `Ok(Err(SetupError))` - An answer was rejected
///
/// # Errors
///
/// Returns an error only if the console itself fails.
#[inline]
pub fn read_setup<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    directory: Option<&Path>,
    search: Option<&str>,
    replacement: Option<&str>,
) -> io::Result<Result<Setup, SetupError>> {
    let root = match directory {
        Some(dir) => dir.to_path_buf(),
        None => PathBuf::from(console.ask(DIRECTORY_PROMPT)?),
    };
    if let Err(err) = validate_directory(&root) {
        return Ok(Err(err));
    }

    let search = console.answer(search, SEARCH_PROMPT)?;
    if is_blank(&search) {
        return Ok(Err(SetupError::EmptySearchTerm));
    }

    let replacement = console.answer(replacement, REPLACEMENT_PROMPT)?;
    Ok(ReplaceTerms::new(&search, &replacement).map(|terms| Setup { root, terms }))
}

/// The directory must be named and must exist.
///
/// # Errors
///
/// Returns `SetupError::MissingDirectory` if `root` is blank or not a directory.
#[inline]
pub fn validate_directory(root: &Path) -> Result<(), SetupError> {
    if is_blank(&root.to_string_lossy()) || !root.is_dir() {
        return Err(SetupError::MissingDirectory);
    }
    Ok(())
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
