//! The interactive loop and the batch script runner.

use std::io::{self, Write};

use waymark_foundation::constants::SAVE_SLOTS_DISPLAYED;
use waymark_foundation::{Error, Result};
use waymark_storage::LifecycleState;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::engine::GameEngine;
use crate::snapshot::GameSnapshot;

const EMPTY_SLOT: &str = "That slot is empty";

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The game being played.
    engine: GameEngine,

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
    pub fn new(engine: GameEngine) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, engine))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, engine: GameEngine) -> Self {
        editor.set_keywords(engine.vocabulary().verbs().map(String::from).collect());
        Self {
            editor,
            engine,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The game being played.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Runs the REPL loop on stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Runs the REPL loop, printing to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run_with<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.show_banner {
            print_banner(out)?;
        }
        self.report(out)?;

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);
            if !self.handle_line(&line, out)? {
                return Ok(());
            }
        }

        writeln!(out, "\nGoodbye!").map_err(write_error)
    }

    /// Plays each line of a script without prompting.
    ///
    /// Stops early if the game ends.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn run_script<W, I, S>(&mut self, lines: I, out: &mut W) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            writeln!(out, "> {line}").map_err(write_error)?;
            if !self.handle_line(line, out)? {
                break;
            }
        }
        Ok(())
    }

    /// Runs one line. Returns false once the game is over.
    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        self.engine.advance_intro();

        if self.engine.state() == LifecycleState::SavedGames {
            if !self.browse(line.trim())? {
                self.engine.process_command(line);
            }
        } else {
            self.engine.process_command(line);
        }

        match self.engine.state() {
            LifecycleState::Ended => {
                self.report(out)?;
                writeln!(out, "Final score: {}", self.engine.final_score()).map_err(write_error)?;
                Ok(false)
            }
            LifecycleState::Restart => {
                self.engine.restart()?;
                writeln!(out, "Starting over.").map_err(write_error)?;
                self.report(out)?;
                Ok(true)
            }
            _ => {
                self.report(out)?;
                Ok(true)
            }
        }
    }

    /// Save-browsing keys. Returns false when the line is an ordinary command.
    fn browse(&mut self, line: &str) -> Result<bool> {
        match line {
            ">" | "next" => self.engine.increase_load_position(),
            "<" | "prev" => self.engine.decrease_load_position(),
            _ => match line.parse::<usize>() {
                Ok(n) if (1..=SAVE_SLOTS_DISPLAYED).contains(&n) => {
                    if !self.engine.select_saved_game(n - 1) {
                        self.engine.add_message(EMPTY_SLOT, true, false);
                    }
                }
                _ => {
                    self.engine.set_running_state()?;
                    return Ok(false);
                }
            },
        }
        Ok(true)
    }

    fn report<W: Write>(&self, out: &mut W) -> Result<()> {
        let snapshot = self.engine.snapshot()?;
        for line in snapshot.render() {
            writeln!(out, "{line}").map_err(write_error)?;
        }
        if snapshot.is_saved_games() {
            print_saves(&snapshot, out)?;
        }
        Ok(())
    }
}

fn print_saves<W: Write>(snapshot: &GameSnapshot, out: &mut W) -> Result<()> {
    writeln!(out, "Saved games:").map_err(write_error)?;
    for (i, label) in snapshot.save_slots.iter().enumerate() {
        if !label.is_empty() {
            writeln!(out, "  {}. {label}", i + 1).map_err(write_error)?;
        }
    }
    let mut keys = vec!["number to load"];
    if !snapshot.lower_limit {
        keys.push("< previous");
    }
    if !snapshot.upper_limit {
        keys.push("> next");
    }
    writeln!(out, "({})", keys.join(", ")).map_err(write_error)
}

fn print_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\x1b[1;36mWaymark v{}\x1b[0m", env!("CARGO_PKG_VERSION")).map_err(write_error)?;
    writeln!(out, "Type commands to play. Use Ctrl+D to leave.\n").map_err(write_error)?;
    out.flush().map_err(write_error)
}

fn write_error(e: io::Error) -> Error {
    Error::io(format!("failed to write output: {e}"))
}
