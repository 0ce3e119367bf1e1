use std::{fmt, io::BufRead, str::FromStr};

use super::coord::Coord;
use super::error::{BotError, Result};
use super::grid::Grid;
use super::world::EntityRecord;

/// Match constants sent once after the map. The bot reads them to stay aligned with the stream
/// but its decisions do not depend on them.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameConstants {
    pub sanity_loss_lonely: i32,
    pub sanity_loss_group: i32,
    pub wanderer_spawn_time: i32,
    pub wanderer_life_time: i32,
}

impl FromStr for GameConstants {
    type Err = BotError;

    fn from_str(line: &str) -> Result<Self> {
        let values = line
            .split_whitespace()
            .map(|v| v.parse::<i32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|err| BotError::malformed(line, err.to_string()))?;

        match values[..] {
            [sanity_loss_lonely, sanity_loss_group, wanderer_spawn_time, wanderer_life_time] => {
                Ok(GameConstants {
                    sanity_loss_lonely,
                    sanity_loss_group,
                    wanderer_spawn_time,
                    wanderer_life_time,
                })
            }
            _ => Err(BotError::malformed(
                line,
                format!("expected 4 constants, found {}", values.len()),
            )),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Coord),
    Wait,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(target) => write!(f, "MOVE {target}"),
            Command::Wait => write!(f, "WAIT"),
        }
    }
}

/// Line-oriented reader over the referee's input stream.
pub struct Input<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> Input<R> {
    pub fn new(reader: R) -> Self {
        Input {
            reader,
            line: String::new(),
        }
    }

    /// Next line without its terminator, `None` once the stream is exhausted.
    pub fn next_line(&mut self) -> Result<Option<&str>> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim_end_matches(&['\n', '\r'][..])))
    }

    fn expect_line(&mut self, what: &'static str) -> Result<&str> {
        self.next_line()?.ok_or(BotError::UnexpectedEof(what))
    }

    pub fn read_value<T: FromStr>(&mut self, what: &'static str) -> Result<T>
    where
        T::Err: fmt::Display,
    {
        let line = self.expect_line(what)?;
        line.trim()
            .parse::<T>()
            .map_err(|err| BotError::malformed(line, format!("{what}: {err}")))
    }

    /// Map dimensions, map rows and game constants, in that order.
    pub fn read_setup(&mut self) -> Result<(Grid, GameConstants)> {
        let width = self.read_value::<usize>("map width")?;
        let height = self.read_value::<usize>("map height")?;

        let mut grid = Grid::build_walls(width, height);
        for row in 0..height {
            let line = self.expect_line("map rows")?;
            grid.load_row(row, line)?;
        }

        let constants = self.read_value::<GameConstants>("game constants")?;
        Ok((grid, constants))
    }

    /// One turn's entity lines. `None` when the stream ends cleanly before the turn starts.
    pub fn read_turn(&mut self) -> Result<Option<Vec<EntityRecord>>> {
        let entity_count = match self.next_line()? {
            None => return Ok(None),
            Some(line) => line
                .trim()
                .parse::<usize>()
                .map_err(|err| BotError::malformed(line, format!("entity count: {err}")))?,
        };

        let mut records = Vec::with_capacity(entity_count);
        for _ in 0..entity_count {
            records.push(self.expect_line("entities")?.parse::<EntityRecord>()?);
        }
        Ok(Some(records))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::super::grid::Cell;
    use super::*;

    fn input(text: &str) -> Input<Cursor<Vec<u8>>> {
        Input::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn commands_render_in_wire_format() {
        assert_eq!(Command::Move(Coord::new(4, 9)).to_string(), "MOVE 4 9");
        assert_eq!(Command::Wait.to_string(), "WAIT");
    }

    #[test]
    fn parses_game_constants() {
        let constants: GameConstants = "3 1 3 40".parse().unwrap();
        assert_eq!(
            constants,
            GameConstants {
                sanity_loss_lonely: 3,
                sanity_loss_group: 1,
                wanderer_spawn_time: 3,
                wanderer_life_time: 40,
            }
        );
        assert!("3 1 3".parse::<GameConstants>().is_err());
        assert!("3 1 x 40".parse::<GameConstants>().is_err());
    }

    #[test]
    fn reads_setup_block() {
        let mut input = input("3\n2\n#w.\r\n...\n3 1 3 40\n");
        let (grid, constants) = input.read_setup().unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.cell(Coord::new(1, 0)), Some(Cell::SpawnPoint));
        assert_eq!(grid.empty_cells().count(), 4);
        assert_eq!(constants.wanderer_life_time, 40);
    }

    #[test]
    fn setup_cut_short_is_an_error() {
        let mut input = input("3\n2\n#w.\n");
        assert!(matches!(
            input.read_setup(),
            Err(BotError::UnexpectedEof("map rows"))
        ));
    }

    #[test]
    fn reads_turns_until_end_of_stream() {
        let mut input = input("2\nEXPLORER 0 1 1 250 2 3\nWANDERER 4 2 2 10 1 0\n0\n");
        let first = input.read_turn().unwrap().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[1].entity_type, "WANDERER");
        assert_eq!(input.read_turn().unwrap(), Some(Vec::new()));
        assert_eq!(input.read_turn().unwrap(), None);
    }

    #[test]
    fn turn_cut_short_is_an_error() {
        let mut input = input("2\nEXPLORER 0 1 1 250 2 3\n");
        assert!(matches!(
            input.read_turn(),
            Err(BotError::UnexpectedEof("entities"))
        ));
    }

    #[test]
    fn bad_entity_count_is_an_error() {
        let mut input = input("many\n");
        assert!(matches!(
            input.read_turn(),
            Err(BotError::MalformedLine { .. })
        ));
    }
}
