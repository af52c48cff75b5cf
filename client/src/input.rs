use common::engine::tictactoe::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    Restart,
    Score,
    Help,
    Quit,
}

/// Cells are typed 1-9, matching the numbers drawn on the empty grid.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let input = line.trim().to_ascii_lowercase();

    match input.as_str() {
        "" => Err("Type a cell number from 1 to 9, or 'h' for help".to_string()),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "n" | "new" | "restart" => Ok(Command::Restart),
        "s" | "score" => Ok(Command::Score),
        "h" | "help" | "?" => Ok(Command::Help),
        other => match other.parse::<usize>() {
            Ok(cell) if (1..=BOARD_SIZE).contains(&cell) => Ok(Command::Place(cell - 1)),
            Ok(cell) => Err(format!("Cell {} does not exist, use 1 to {}", cell, BOARD_SIZE)),
            Err(_) => Err(format!("Unknown command '{}', type 'h' for help", other)),
        },
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9      place X on that cell
  n        restart the current game (score is kept)
  s        show the score
  h        show this help
  q        quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_map_to_indices() {
        assert_eq!(parse_command("1"), Ok(Command::Place(0)));
        assert_eq!(parse_command(" 9 \n"), Ok(Command::Place(8)));
    }

    #[test]
    fn test_cell_out_of_range() {
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").unwrap_err().contains("does not exist"));
    }

    #[test]
    fn test_named_commands() {
        assert_eq!(parse_command("Q"), Ok(Command::Quit));
        assert_eq!(parse_command("new"), Ok(Command::Restart));
        assert_eq!(parse_command("s"), Ok(Command::Score));
        assert_eq!(parse_command("?"), Ok(Command::Help));
    }

    #[test]
    fn test_unknown_and_empty_input() {
        assert!(parse_command("").is_err());
        assert!(parse_command("move").unwrap_err().contains("Unknown command"));
    }
}
