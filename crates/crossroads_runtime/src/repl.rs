//! The main REPL implementation.

use std::io::{self, Write};

use crossroads_engine::{Event, Game};
use crossroads_parser::CommandParser;
use tracing::debug;

use crate::config::{DEFAULT_PROMPT, DEFAULT_WIDTH, GameConfig};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::error::Result;
use crate::format::{describe_action_error, describe_event, describe_parse_error, format_room};
use crate::help::BANNER;

/// The interactive game loop.
///
/// Reads a line, parses it, applies it to the [`Game`], and writes the
/// response. Refused commands are reported and the loop continues; only
/// editor or output failures end it with an error.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = io::Stdout> {
    /// The line editor for input.
    editor: E,

    /// Where responses are written.
    out: W,

    /// The running game.
    game: Game,

    /// Command parser with the standard vocabulary.
    parser: CommandParser,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Input prompt.
    prompt: String,

    /// Wrap width for descriptions.
    width: usize,

    /// Whether to write each input line back out after the prompt.
    echo: bool,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL on the terminal with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(game: Game) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, game))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor, writing to stdout.
    pub fn with_editor(editor: E, game: Game) -> Self {
        Self {
            editor,
            out: io::stdout(),
            game,
            parser: CommandParser::default(),
            show_banner: true,
            prompt: DEFAULT_PROMPT.to_string(),
            width: DEFAULT_WIDTH,
            echo: false,
        }
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Redirects output to another writer.
    #[must_use]
    pub fn with_output<W2: Write>(self, out: W2) -> Repl<E, W2> {
        Repl {
            editor: self.editor,
            out,
            game: self.game,
            parser: self.parser,
            show_banner: self.show_banner,
            prompt: self.prompt,
            width: self.width,
            echo: self.echo,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the wrap width.
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Echoes input lines to the output, as when replaying a script.
    #[must_use]
    pub const fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Applies the presentation settings of a [`GameConfig`].
    #[must_use]
    pub fn configure(self, config: &GameConfig) -> Self {
        let repl = self
            .with_prompt(config.prompt.clone())
            .with_width(config.width);
        if config.banner { repl } else { repl.without_banner() }
    }

    /// Returns the game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the REPL, returning its output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        let mut keywords = self.parser.vocabulary().words();
        keywords.extend(self.game.catalog().vocabulary());
        keywords.sort();
        keywords.dedup();
        self.editor.set_keywords(keywords);

        if self.show_banner {
            self.out.write_all(BANNER.as_bytes())?;
            self.out.write_all(b"\n")?;
        }
        self.print_room()?;

        while self.read_eval_print()? {}

        self.out.flush()?;
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        self.out.flush()?;
        match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => {
                if self.echo {
                    writeln!(self.out, "{}{line}", self.prompt)?;
                }
                if !line.trim().is_empty() {
                    self.editor.add_history(&line);
                }
                self.handle_line(&line)
            }
            ReadResult::Interrupted => {
                writeln!(self.out)?;
                Ok(true)
            }
            ReadResult::Eof => {
                debug!("end of input");
                writeln!(self.out)?;
                Ok(false)
            }
        }
    }

    /// Handles one line of player input and writes the response.
    ///
    /// Returns `Ok(false)` once the player has quit.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        let command = match self.parser.parse(line) {
            Ok(command) => command,
            Err(err) => {
                self.out.write_all(describe_parse_error(&err).as_bytes())?;
                return Ok(true);
            }
        };

        let response = match self.game.apply(&command) {
            Ok(event) => {
                let text = describe_event(self.game.catalog(), &event, self.width);
                if event == Event::Quit {
                    self.out.write_all(text.as_bytes())?;
                    return Ok(false);
                }
                text
            }
            Err(err) => describe_action_error(self.game.catalog(), &err),
        };
        self.out.write_all(response.as_bytes())?;
        Ok(true)
    }

    fn print_room(&mut self) -> Result<()> {
        let view = self.game.view()?;
        self.out
            .write_all(format_room(&view, self.width).as_bytes())?;
        Ok(())
    }
}
