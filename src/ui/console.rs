use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crossterm::style::Stylize;

use crate::game::{Board, Cell};

/// Player-facing text channel: print a line, or prompt and read one.
///
/// Move sources talk to the player through this trait; tests script it with
/// an in-memory [`Console`].
pub trait UserIo {
    /// Print a line to the player-facing output.
    fn say(&mut self, msg: &str) -> io::Result<()>;

    /// Print a prompt (no newline) and read one line of input.
    /// Returns `Ok(None)` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Line-oriented console over any reader/writer pair. Production wires it to
/// stdin/stdout; tests to a `Cursor` and a `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console over the process stdin/stdout.
    pub fn stdio() -> Self {
        Console::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Consume the console and return everything written to it.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Draw the grid: column headers 1..cols, then each row with cell
    /// markers. Colors are purely cosmetic.
    pub fn render_board(&mut self, board: &Board) -> io::Result<()> {
        // Column numbers
        write!(self.output, " ")?;
        for col in 1..=board.cols() {
            write!(self.output, " {col}  ")?;
        }
        writeln!(self.output)?;

        for row in 0..board.rows() {
            write!(self.output, "|")?;
            for col in 0..board.cols() {
                match board.get(row, col) {
                    Cell::Empty => write!(self.output, " . ")?,
                    Cell::Red => write!(self.output, " {} ", "X".red())?,
                    Cell::Yellow => write!(self.output, " {} ", "O".yellow())?,
                }
                write!(self.output, "|")?;
            }
            writeln!(self.output)?;

            // Separator line
            write!(self.output, " ")?;
            for _ in 0..board.cols() {
                write!(self.output, "--- ")?;
            }
            writeln!(self.output)?;
        }
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> UserIo for Console<R, W> {
    fn say(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{msg}")?;
        self.output.flush()
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
