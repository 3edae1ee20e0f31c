use std::io;

use wordle_assistant::{CellColor, WORD_LENGTH};

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Type these letters into the in-progress row.
    Type(String),
    /// Remove the last letter.
    Backspace,
    /// Advance the color of the cell at this zero-based index.
    Cycle(usize),
    /// Set the colors of the cells. `None` leaves a cell as it is.
    Mark(Vec<Option<CellColor>>),
    Submit,
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  <letters>     type letters into the current row (at most 5)
  - | del       remove the last letter
  c <n>         cycle the color of cell n (1-5): empty -> green -> yellow -> gray
  m <pattern>   mark every cell at once, e.g. \"m g.y._\":
                  'g' = this letter is in the word and in the right location
                  'y' = this letter is in the word, but not in this location
                  '.' = this letter is not in the word
                  '_' = leave this cell as it is
  s | submit    submit the current row
  r | reset     start over
  h | help      show this help
  q | quit      exit";

/// Parses one line of input.
pub fn parse_command(line: &str) -> io::Result<Command> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    match (head, rest) {
        ("", _) => Err(invalid_input("Type some letters, or 'h' for help.")),
        ("-" | "del", "") => Ok(Command::Backspace),
        ("s" | "submit", "") => Ok(Command::Submit),
        ("r" | "reset", "") => Ok(Command::Reset),
        ("h" | "help" | "?", "") => Ok(Command::Help),
        ("q" | "quit", "") => Ok(Command::Quit),
        ("c", position) => parse_position(position).map(Command::Cycle),
        ("m", pattern) => parse_pattern(pattern).map(Command::Mark),
        (letters, "") => Ok(Command::Type(letters.to_string())),
        _ => Err(invalid_input(&format!(
            "Didn't understand \"{}\". Type 'h' for help.",
            line
        ))),
    }
}

fn parse_position(position: &str) -> io::Result<usize> {
    match position.parse::<usize>() {
        Ok(number) if (1..=WORD_LENGTH).contains(&number) => Ok(number - 1),
        _ => Err(invalid_input(&format!(
            "Cell must be a number from 1 to {}.",
            WORD_LENGTH
        ))),
    }
}

fn parse_pattern(pattern: &str) -> io::Result<Vec<Option<CellColor>>> {
    if pattern.chars().count() != WORD_LENGTH {
        return Err(invalid_input(&format!(
            "Pattern \"{}\" must have exactly {} characters. Try again.",
            pattern, WORD_LENGTH
        )));
    }
    pattern
        .chars()
        .map(|mark| match mark {
            'g' => Ok(Some(CellColor::Correct)),
            'y' => Ok(Some(CellColor::Misplaced)),
            '.' => Ok(Some(CellColor::Wrong)),
            '_' => Ok(None),
            _ => Err(invalid_input(
                "Must enter only the characters '.', 'y', 'g', or '_'. Try again.",
            )),
        })
        .collect()
}

fn invalid_input(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}
