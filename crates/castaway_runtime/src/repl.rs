//! The main REPL implementation.
//!
//! One iteration reads a line, executes it against the [`Session`], and
//! prints the resulting [`Turn`]:
//!
//! ```text
//!   read_line ──▶ Session::execute ──▶ Turn
//!                        │               ├─ Narrate/Help ─▶ stdout, loop
//!                        │               ├─ GameOver ─────▶ stdout, stop
//!                        │               └─ Quit ─────────▶ stop
//!                        └─ validation error ─▶ stderr, loop
//! ```
//!
//! End of input stops the loop as well. Errors that are not validation
//! errors end the REPL and are returned to the caller. A game over ends the
//! run on its final passage; every other stop says goodbye.

use std::io::{self, Write};

use castaway_foundation::{Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{Session, Turn};

/// What the loop does after one iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    /// Read another line.
    Continue,
    /// The player quit or input ran out.
    Stop,
    /// The final passage has been printed.
    GameOver,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The game being played.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_keywords(session.keywords());
        Self {
            editor,
            session,
            show_banner: true,
            prompt: crate::config::DEFAULT_PROMPT.to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until the game ends, the player quits, or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        let flow = loop {
            match self.read_eval_print() {
                Ok(Flow::Continue) => {}
                Ok(flow) => break flow,
                Err(e) if e.is_validation() => self.print_error(&e),
                Err(e) => return Err(e),
            }
        };

        if flow == Flow::Stop {
            if !self.session.is_over() {
                println!();
            }
            println!("Goodbye!");
        }
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    fn read_eval_print(&mut self) -> Result<Flow> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(Flow::Continue);
            }
            ReadResult::Eof => return Ok(Flow::Stop),
        };

        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        self.editor.add_history(&line);

        let turn = self.session.execute(&line)?;
        Self::print_turn(&turn);
        Ok(match turn {
            Turn::GameOver(_) => Flow::GameOver,
            Turn::Quit => Flow::Stop,
            _ => Flow::Continue,
        })
    }

    fn print_turn(turn: &Turn) {
        match turn {
            Turn::Idle | Turn::Quit => {}
            Turn::Narrate(text) | Turn::Help(text) => println!("{text}"),
            Turn::GameOver(text) => println!("\n\x1b[1m{text}\x1b[0m\n"),
        }
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31m{error}\x1b[0m");
    }

    /// Prints the welcome banner and the starting room.
    fn print_banner(&self) {
        println!("\x1b[1;36m");
        println!("   ___          _                         ");
        println!("  / __|__ _ ___| |_ __ ___ __ ____ _ _  _ ");
        println!(" | (__/ _` (_-<|  _/ _` \\ V  V / _` | || |");
        println!("  \\___\\__,_/__/ \\__\\__,_|\\_/\\_/\\__,_|\\_, |");
        println!("                                     |__/ ");
        println!("\x1b[0m");
        println!("Castaway v{}", env!("CARGO_PKG_VERSION"));
        println!("Type HELP for commands, QUIT or Ctrl+D to leave.\n");
        println!("{}", self.session.look());

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}
