//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`]; the terminal implementation wraps
//! rustyline with history hints and keyword completion.

use std::borrow::Cow;

use castaway_foundation::{Action, Error, ErrorKind, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use strum::IntoEnumIterator;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set the words offered for completion.
    fn set_keywords(&mut self, keywords: Vec<String>);
}

#[derive(Helper, Completer, Hinter, Validator)]
struct CastawayHelper {
    #[rustyline(Completer)]
    completer: KeywordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for CastawayHelper {
    // Bold the action word once it is recognised.
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let trimmed = line.trim_start();
        let start = line.len() - trimmed.len();
        let end = trimmed.find(char::is_whitespace).map_or(line.len(), |i| start + i);
        if Action::parse(&line[start..end]).is_some() {
            Cow::Owned(format!(
                "{}\x1b[1m{}\x1b[0m{}",
                &line[..start],
                &line[start..end],
                &line[end..]
            ))
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes the word under the cursor from a keyword list.
///
/// Keywords are stored uppercase and matched ignoring case; a lowercase
/// prefix completes to lowercase.
#[derive(Debug, Default)]
pub struct KeywordCompleter {
    keywords: Vec<String>,
}

impl KeywordCompleter {
    /// Creates a completer over the action keywords.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keywords: Action::iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Replaces the keyword list.
    pub fn set_keywords(&mut self, keywords: Vec<String>) {
        self.keywords = keywords;
    }

    /// Returns the start of the current word and the matching keywords.
    #[must_use]
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        let word = &line[start..pos];
        let prefix = word.to_uppercase();
        let lower = !word.is_empty() && !word.chars().any(char::is_uppercase);

        let matches = self
            .keywords
            .iter()
            .filter(|kw| kw.starts_with(&prefix))
            .map(|kw| if lower { kw.to_lowercase() } else { kw.clone() })
            .collect();
        (start, matches)
    }
}

impl Completer for KeywordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(line, pos);
        let pairs = words
            .into_iter()
            .map(|w| Pair {
                display: w.clone(),
                replacement: w,
            })
            .collect();
        Ok((start, pairs))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<CastawayHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(internal)?
            .build();

        let helper = CastawayHelper {
            completer: KeywordCompleter::new(),
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(internal)?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

fn internal(err: ReadlineError) -> Error {
    Error::new(ErrorKind::Internal(err.to_string()))
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(ReadlineError::Io(e)) => Err(e.into()),
            Err(e) => Err(internal(e)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.set_keywords(keywords);
        }
    }
}
