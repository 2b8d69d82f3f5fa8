#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{AttackOutcome, BoardError, ColumnLabel, Location, TargetingError, TurnControl},
    grid::GridView,
    player::Player,
    ship::Orientation,
    ui::{render_enemy_view, render_own_board},
};

/// Human player reading commands from a line-based input, stdin by default.
pub struct CliPlayer<R> {
    input: R,
}

impl CliPlayer<StdinLock<'static>> {
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> CliPlayer<R> {
    pub fn with_input(input: R) -> Self {
        Self { input }
    }

    /// Next trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

fn prompt(text: &str) {
    print!("{}", text);
    let _ = io::stdout().flush();
}

/// Parse `A5`-style coordinates against a `width × height` grid. Columns
/// past `Z` continue as `AA`, `AB`, ...
pub fn parse_coord(input: &str, width: usize, height: usize) -> Result<Location, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let split = input
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(input.len());
    let (label, row_str) = input.split_at(split);
    let col = ColumnLabel::parse(label)
        .ok_or_else(|| format!("Invalid column in '{}' - must start with letters", input))?;
    if col >= width {
        return Err(format!(
            "Column '{}' out of bounds - must be A-{}",
            label.to_ascii_uppercase(),
            ColumnLabel(width - 1)
        ));
    }
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, height))?;
    if row == 0 || row > height {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, height));
    }
    Ok(Location::new(row - 1, col))
}

/// Parse a placement such as `B2 V`; orientation defaults to horizontal.
fn parse_placement(
    input: &str,
    width: usize,
    height: usize,
) -> Result<(Location, Orientation), String> {
    let mut parts = input.split_whitespace();
    let at = parse_coord(parts.next().unwrap_or(""), width, height)?;
    let orientation = match parts.next().and_then(|p| p.chars().next()) {
        Some('v') | Some('V') => Orientation::Vertical,
        Some('h') | Some('H') | None => Orientation::Horizontal,
        Some(other) => return Err(format!("Unknown orientation '{}' - use H or V", other)),
    };
    Ok((at, orientation))
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn name(&self) -> &str {
        "You"
    }

    fn deploy(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        println!("Place your ships (e.g. A5 H). Press enter for random placement.");
        for i in 0..board.fleet().len() {
            let def = board.fleet()[i];
            loop {
                print!("{}", render_own_board(board));
                prompt(&format!("Place {} (length {}): ", def.name(), def.length()));
                let Some(line) = self.read_line() else {
                    board.deploy_randomly(rng)?;
                    return Ok(());
                };
                if line.is_empty() {
                    let (at, orientation) = board.random_placement(rng, i)?;
                    board.place(i, at, orientation)?;
                    break;
                }
                match parse_placement(&line, board.width(), board.height()) {
                    Ok((at, orientation)) => match board.place(i, at, orientation) {
                        Ok(()) => break,
                        Err(e) => println!("Error: {}", e),
                    },
                    Err(msg) => println!("{}", msg),
                }
            }
        }
        Ok(())
    }

    fn choose_shot(
        &mut self,
        _rng: &mut SmallRng,
        enemy: &dyn GridView,
    ) -> Result<Location, TargetingError> {
        if !enemy.has_unattacked() {
            return Err(TargetingError::NoLegalCell);
        }
        print!("{}", render_enemy_view(enemy));
        loop {
            prompt("Enter target: ");
            let line = self.read_line().ok_or(TargetingError::Forfeit)?;
            match parse_coord(&line, enemy.width(), enemy.height()) {
                Ok(at) if enemy.is_unattacked(at) => return Ok(at),
                Ok(at) => println!("{} was already attacked", at),
                Err(msg) => println!("{}", msg),
            }
        }
    }

    fn shot_resolved(
        &mut self,
        _enemy: &dyn GridView,
        at: Location,
        outcome: AttackOutcome,
    ) -> TurnControl {
        println!("You fired at {} and {}", at, outcome);
        TurnControl::after(outcome)
    }

    fn opponent_shot(&mut self, at: Location, outcome: AttackOutcome) {
        println!("The AI fired at {} and {}", at, outcome);
    }
}
