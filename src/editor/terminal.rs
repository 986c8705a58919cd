//! Line-oriented ANSI terminal frontend for the grid editor
//!
//! Reads editing commands one line at a time, redrawing the grid and
//! palette after each change. The loop is generic over its reader and
//! writer so tests can drive it with in-memory buffers.

use std::io::{self, BufRead, Write};

use ansi_term::{Colour, Style};

use crate::editor::session::{BLANK_DISPLAY, EditorSession};
use crate::io::error::Result;
use crate::spatial::board::{BOARD_SIZE, Board, HOUSE_SIZE};

enum Command {
    Pick(usize),
    Set(usize, usize),
    Show,
    Help,
    Done,
    Quit,
    Empty,
    Unknown,
}

/// Run the editing loop until the input commits, aborts, or ends
///
/// Commits (`done`) export the session as a board; `quit` and end of input
/// abort and return `None`. Painting and selection errors are reported on
/// the output stream and leave the session unchanged.
///
/// # Errors
///
/// Returns an error when reading a command line or writing the display
/// fails.
pub fn run_editor<R: BufRead, W: Write>(
    session: &mut EditorSession,
    input: R,
    output: &mut W,
) -> Result<Option<Board>> {
    draw(session, output)?;
    write_help(output)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Pick(index) => {
                if let Some(symbol) = session.select(index) {
                    writeln!(output, "painting with '{symbol}'")?;
                    draw(session, output)?;
                } else {
                    writeln!(output, "no palette entry {index}")?;
                }
            }
            Command::Set(row, col) => {
                if session.paint(row, col) {
                    draw(session, output)?;
                } else {
                    writeln!(output, "({row}, {col}) is outside the grid")?;
                }
            }
            Command::Show => draw(session, output)?,
            Command::Help => write_help(output)?,
            Command::Done => return Ok(Some(session.export()?)),
            Command::Quit => return Ok(None),
            Command::Empty => {}
            Command::Unknown => {
                writeln!(output, "unrecognized command; try 'help'")?;
            }
        }
        output.flush()?;
    }

    Ok(None)
}

/// Run the editor on the process terminal with a fresh session
///
/// # Errors
///
/// Returns an error when terminal I/O fails.
pub fn edit_board_interactive() -> Result<Option<Board>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = EditorSession::new();
    run_editor(&mut session, stdin.lock(), &mut stdout.lock())
}

fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    match words.next() {
        None => Command::Empty,
        Some("pick" | "p") => words
            .next()
            .and_then(|word| word.parse().ok())
            .map_or(Command::Unknown, Command::Pick),
        Some("set" | "s") => {
            let row = words.next().and_then(|word| word.parse().ok());
            let col = words.next().and_then(|word| word.parse().ok());
            match (row, col) {
                (Some(row), Some(col)) => Command::Set(row, col),
                _ => Command::Unknown,
            }
        }
        Some("show") => Command::Show,
        Some("help" | "h") => Command::Help,
        Some("done" | "d") => Command::Done,
        Some("quit" | "q") => Command::Quit,
        Some(_) => Command::Unknown,
    }
}

fn draw<W: Write>(session: &EditorSession, output: &mut W) -> Result<()> {
    write!(output, "\n   ")?;
    for col in 0..BOARD_SIZE {
        if col > 0 && col % HOUSE_SIZE == 0 {
            write!(output, " ")?;
        }
        write!(output, " {col}")?;
    }
    writeln!(output)?;

    for row in 0..BOARD_SIZE {
        if row > 0 && row % HOUSE_SIZE == 0 {
            writeln!(output)?;
        }
        write!(output, " {row} ")?;
        for col in 0..BOARD_SIZE {
            if col > 0 && col % HOUSE_SIZE == 0 {
                write!(output, " ")?;
            }
            let token = session.token_at(row, col).unwrap_or(BLANK_DISPLAY);
            write!(output, " {}", styled_token(token))?;
        }
        writeln!(output)?;
    }

    write!(output, "\npalette:")?;
    for (index, &symbol) in session.palette().iter().enumerate() {
        let label = if symbol == BLANK_DISPLAY {
            format!("{index}:blank")
        } else {
            format!("{index}:{symbol}")
        };
        if index == session.selected_index() {
            write!(output, "  {}", Style::new().reverse().paint(label))?;
        } else {
            write!(output, "  {label}")?;
        }
    }
    writeln!(output)?;
    Ok(())
}

fn write_help<W: Write>(output: &mut W) -> Result<()> {
    writeln!(
        output,
        "commands: pick <palette index> | set <row> <col> | show | help | done | quit"
    )?;
    Ok(())
}

fn styled_token(token: char) -> String {
    let style = match token {
        BLANK_DISPLAY => return Colour::Fixed(8).paint("·").to_string(),
        'f' => Colour::Green.normal(),
        'w' => Colour::Blue.normal(),
        'e' => Colour::Yellow.normal(),
        'a' => Colour::Purple.normal(),
        's' => Colour::Red.normal(),
        _ => Style::new().bold(),
    };
    style.paint(token.to_string()).to_string()
}
