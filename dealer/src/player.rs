use std::io::{BufRead, Write};

use tracing::trace;
use unolite::{Card, Controller, EngineError, Move, TurnView, MAX_PLAYERS, MIN_PLAYERS};

/// All participants sharing one terminal, taking turns at the keyboard.
pub struct TerminalPlayer<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for IO.
    // Should always be empty before and after read_line().
    buf: String,
}

/// Parses a selection like `0`, `3,4` or `3, 4`. `-1` or `d` means drawing.
///
/// Returns `None` for anything that isn't a list of indices.
pub fn parse_selection(line: &str) -> Option<Move> {
    let line = line.trim();
    if line == "-1" || line.eq_ignore_ascii_case("d") {
        return Some(Move::Draw);
    }
    let indices = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<usize>().ok())
        .collect::<Option<Vec<usize>>>()?;
    if indices.is_empty() {
        None
    } else {
        Some(Move::Play { indices })
    }
}

impl<R: BufRead, W: Write> TerminalPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    /// Where announcements go.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn prompt(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            anyhow::bail!("Input was closed");
        }
        let line = self.buf.trim_end().to_owned();
        self.buf.clear();
        trace!(name: "Read input", line = %line);
        Ok(line)
    }

    /// Asks for the number of players until a valid one is given.
    pub fn prompt_player_count(&mut self) -> anyhow::Result<usize> {
        loop {
            let prompt = format!("\nEnter number of players ({}-{}): ", MIN_PLAYERS, MAX_PLAYERS);
            match self.prompt(&prompt)?.trim().parse::<usize>() {
                Ok(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => return Ok(n),
                _ => writeln!(
                    self.output,
                    "Please enter a number between {} and {}.",
                    MIN_PLAYERS, MAX_PLAYERS
                )?,
            }
        }
    }

    /// Asks for a name for each player. Empty names become "Player N".
    pub fn prompt_names(&mut self, count: usize) -> anyhow::Result<Vec<String>> {
        let mut names = Vec::with_capacity(count);
        for i in 1..=count {
            let name = self.prompt(&format!("Enter name for Player {}: ", i))?;
            let name = name.trim();
            if name.is_empty() {
                names.push(format!("Player {}", i));
            } else {
                names.push(String::from(name));
            }
        }
        Ok(names)
    }
}

impl<R: BufRead, W: Write> Controller for TerminalPlayer<R, W> {
    fn choose_move(&mut self, _view: &TurnView) -> anyhow::Result<Move> {
        loop {
            let line = self.prompt("\nPlay card(s) (e.g. 0 or 0,2) or -1 to draw: ")?;
            match parse_selection(&line) {
                Some(mv) => return Ok(mv),
                None => writeln!(self.output, "Invalid input. Try again.")?,
            }
        }
    }

    fn play_drawn_card(&mut self, _view: &TurnView, drawn: Card) -> anyhow::Result<bool> {
        let prompt = format!("You drew {}, which can be played! Play it? (y/n): ", drawn);
        let answer = self.prompt(&prompt)?;
        Ok(answer.starts_with(['y', 'Y']))
    }

    fn move_rejected(&mut self, _view: &TurnView, err: &EngineError) -> anyhow::Result<()> {
        match err {
            EngineError::InvalidStack(reason) => writeln!(self.output, "{}. Try again.", reason)?,
            _ => writeln!(self.output, "{}. Try again.", err)?,
        }
        Ok(())
    }
}
