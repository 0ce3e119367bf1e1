pub mod kutulu {
pub mod coord {
use std::fmt;
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}
impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
    pub fn distance(self, other: Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
    pub fn step_toward(self, to: Coord) -> Coord {
        if self.x != to.x {
            Coord::new(self.x + (to.x - self.x).signum(), self.y)
        } else {
            Coord::new(self.x, self.y + (to.y - self.y).signum())
        }
    }
}
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
}
pub mod driver {
use std::io::{BufRead, Write};
use log::info;
use super::error::Result;
use super::protocol::Input;
use super::strategy::Strategy;
use super::world::World;
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    let mut input = Input::new(input);
    let (grid, constants) = input.read_setup()?;
    info!("\n{grid}");
    info!("{constants:?}");
    let strategy = Strategy::new(grid, constants);
    let mut turn = 0;
    while let Some(records) = input.read_turn()? {
        turn += 1;
        info!("turn {turn}: {} entities", records.len());
        let world = World::classify(&records)?;
        let command = strategy.play(&world)?;
        writeln!(output, "{command}")?;
        output.flush()?;
    }
    info!("input closed after {turn} turns");
    Ok(())
}
}
pub mod error {
use std::io;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum BotError {
    #[error("unrecognized cell '{0}'")]
    UnknownCell(char),
    #[error("map row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("map row {row} is outside a grid of height {height}")]
    RowOutOfBounds { row: usize, height: usize },
    #[error("unrecognized entity type '{0}'")]
    UnknownEntityType(String),
    #[error("unrecognized minion state {0}")]
    UnknownMinionState(i32),
    #[error("malformed line '{line}': {reason}")]
    MalformedLine { line: String, reason: String },
    #[error("cannot search {0} in an empty collection")]
    EmptyInput(&'static str),
    #[error("no explorer reported this turn")]
    NoExplorer,
    #[error("input ended while reading {0}")]
    UnexpectedEof(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
}
impl BotError {
    pub fn malformed(line: &str, reason: impl Into<String>) -> Self {
        BotError::MalformedLine {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}
pub type Result<T> = std::result::Result<T, BotError>;
}
pub mod grid {
use std::fmt;
use super::coord::Coord;
use super::error::{BotError, Result};
pub const EVASION_RADIUS: i32 = 4;
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cell {
    Wall,
    SpawnPoint,
    Empty,
}
impl Cell {
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            '#' => Ok(Cell::Wall),
            'w' => Ok(Cell::SpawnPoint),
            '.' => Ok(Cell::Empty),
            _ => Err(BotError::UnknownCell(c)),
        }
    }
    pub fn to_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::SpawnPoint => 'w',
            Cell::Empty => '.',
        }
    }
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}
impl Grid {
    pub fn build_walls(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![vec![Cell::Wall; width]; height],
        }
    }
    pub fn parse<'a>(
        width: usize,
        height: usize,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        let mut grid = Grid::build_walls(width, height);
        let mut loaded = 0;
        for (row, line) in lines.into_iter().enumerate() {
            grid.load_row(row, line)?;
            loaded += 1;
        }
        if loaded < height {
            return Err(BotError::UnexpectedEof("map rows"));
        }
        Ok(grid)
    }
    pub fn load_row(&mut self, row: usize, line: &str) -> Result<()> {
        if row >= self.height {
            return Err(BotError::RowOutOfBounds {
                row,
                height: self.height,
            });
        }
        let cells = line
            .trim_end()
            .chars()
            .map(Cell::from_char)
            .collect::<Result<Vec<_>>>()?;
        if cells.len() != self.width {
            return Err(BotError::RowLength {
                row,
                expected: self.width,
                found: cells.len(),
            });
        }
        self.cells[row] = cells;
        Ok(())
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        self.cells
            .get(coord.y as usize)
            .and_then(|row| row.get(coord.x as usize))
            .copied()
    }
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| {
                if *cell == Cell::Empty {
                    Some(Coord::new(x as i32, y as i32))
                } else {
                    None
                }
            })
        })
    }
    pub fn empty_cells_within(
        &self,
        origin: Coord,
        radius: i32,
    ) -> impl Iterator<Item = Coord> + '_ {
        self.empty_cells()
            .filter(move |coord| coord.distance(origin) <= radius)
    }
}
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|cell| cell.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
}
pub mod protocol {
use std::{fmt, io::BufRead, str::FromStr};
use super::coord::Coord;
use super::error::{BotError, Result};
use super::grid::Grid;
use super::world::EntityRecord;
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
}
pub mod search {
use super::coord::Coord;
use super::error::{BotError, Result};
use super::grid::{Grid, EVASION_RADIUS};
use super::world::{Explorer, SpawningMinion, Wanderer};
pub trait Located {
    fn coord(&self) -> Coord;
}
impl Located for Coord {
    fn coord(&self) -> Coord {
        *self
    }
}
impl Located for Explorer {
    fn coord(&self) -> Coord {
        self.coord
    }
}
impl Located for Wanderer {
    fn coord(&self) -> Coord {
        self.coord
    }
}
impl Located for SpawningMinion {
    fn coord(&self) -> Coord {
        self.coord
    }
}
impl<T: Located + ?Sized> Located for &T {
    fn coord(&self) -> Coord {
        (**self).coord()
    }
}
pub fn nearest<T: Located>(from: Coord, candidates: impl IntoIterator<Item = T>) -> Result<T> {
    candidates
        .into_iter()
        .min_by_key(|c| c.coord().distance(from))
        .ok_or(BotError::EmptyInput("nearest"))
}
pub fn farthest<T: Located>(from: Coord, candidates: impl IntoIterator<Item = T>) -> Result<T> {
    farthest_by_key(candidates, |c| c.distance(from))
}
fn farthest_by_key<T: Located, K: Ord>(
    candidates: impl IntoIterator<Item = T>,
    key: impl Fn(Coord) -> K,
) -> Result<T> {
    let mut best: Option<(K, T)> = None;
    for candidate in candidates {
        let k = key(candidate.coord());
        let better = match &best {
            Some((best_key, _)) => k > *best_key,
            None => true,
        };
        if better {
            best = Some((k, candidate));
        }
    }
    best.map(|(_, c)| c).ok_or(BotError::EmptyInput("farthest"))
}
fn squared_euclidean(a: Coord, b: Coord) -> i32 {
    let (dx, dy) = (a.x - b.x, a.y - b.y);
    dx * dx + dy * dy
}
pub fn away_from_nearest_wanderer(
    grid: &Grid,
    me: &Explorer,
    wanderers: &[Wanderer],
) -> Result<Coord> {
    let closest = nearest(me.coord, wanderers)?;
    log::debug!("closest wanderer: {closest}");
    let threat = closest.coord;
    farthest_by_key(grid.empty_cells_within(me.coord, EVASION_RADIUS), |c| {
        (c.distance(threat), squared_euclidean(c, threat))
    })
}
}
pub mod strategy {
use log::{debug, info};
use super::error::Result;
use super::grid::Grid;
use super::protocol::{Command, GameConstants};
use super::search::away_from_nearest_wanderer;
use super::world::World;
pub struct Strategy {
    pub grid: Grid,
    pub constants: GameConstants,
}
impl Strategy {
    pub fn new(grid: Grid, constants: GameConstants) -> Self {
        Strategy { grid, constants }
    }
}
impl Strategy {
    pub fn play(&self, world: &World) -> Result<Command> {
        for e in &world.explorers {
            info!("{e}");
        }
        for w in &world.wanderers {
            info!("{w}");
        }
        for s in &world.spawning {
            info!("{s}");
        }
        let me = world.me()?;
        info!("Me : {me}");
        if world.wanderers.is_empty() {
            return Ok(Command::Wait);
        }
        let away = away_from_nearest_wanderer(&self.grid, me, &world.wanderers)?;
        debug!("fleeing to {away}");
        Ok(Command::Move(away))
    }
}
#[cfg(test)]
mod tests {
    use super::super::coord::Coord;
    use super::super::world::{Explorer, MinionState, SpawningMinion, Wanderer};
    use super::*;
    fn strategy() -> Strategy {
        let grid = Grid::parse(3, 3, ["#.#", "...", "#.#"]).unwrap();
        Strategy::new(grid, GameConstants::default())
    }
    fn me() -> Explorer {
        Explorer {
            id: 0,
            coord: Coord::new(1, 1),
        }
    }
    fn wanderer(id: i32, x: i32, y: i32) -> Wanderer {
        Wanderer {
            id,
            coord: Coord::new(x, y),
            state: MinionState::Active,
            target: 0,
            recall_time: 40,
        }
    }
    #[test]
    fn waits_without_active_wanderers() {
        let world = World {
            explorers: vec![me()],
            wanderers: Vec::new(),
            spawning: vec![SpawningMinion {
                id: 3,
                coord: Coord::new(1, 0),
                state: MinionState::Spawning,
                target: 0,
                spawn_time: 2,
            }],
        };
        assert_eq!(strategy().play(&world).unwrap(), Command::Wait);
    }
    #[test]
    fn moves_away_from_active_wanderer() {
        let world = World {
            explorers: vec![me()],
            wanderers: vec![wanderer(1, 1, 0)],
            spawning: Vec::new(),
        };
        assert_eq!(
            strategy().play(&world).unwrap(),
            Command::Move(Coord::new(1, 2))
        );
    }
    #[test]
    fn reacts_to_the_closest_of_several_wanderers() {
        let world = World {
            explorers: vec![me()],
            wanderers: vec![wanderer(1, 0, 1), wanderer(2, 2, 1)],
            spawning: Vec::new(),
        };
        assert_eq!(
            strategy().play(&world).unwrap(),
            Command::Move(Coord::new(2, 1))
        );
    }
    #[test]
    fn acts_for_the_first_explorer_only() {
        let world = World {
            explorers: vec![
                me(),
                Explorer {
                    id: 1,
                    coord: Coord::new(1, 0),
                },
            ],
            wanderers: vec![wanderer(4, 1, 2)],
            spawning: Vec::new(),
        };
        assert_eq!(
            strategy().play(&world).unwrap(),
            Command::Move(Coord::new(1, 0))
        );
    }
    #[test]
    fn missing_explorer_is_an_error() {
        let world = World::default();
        assert!(strategy().play(&world).is_err());
    }
}
}
pub mod world {
use std::{fmt, str::FromStr};
use super::coord::Coord;
use super::error::{BotError, Result};
pub const ENTITY_TYPE_EXPLORER: &str = "EXPLORER";
pub const ENTITY_TYPE_WANDERER: &str = "WANDERER";
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MinionState {
    Spawning,
    Active,
}
impl MinionState {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(MinionState::Spawning),
            1 => Ok(MinionState::Active),
            _ => Err(BotError::UnknownMinionState(code)),
        }
    }
    pub fn code(self) -> i32 {
        match self {
            MinionState::Spawning => 0,
            MinionState::Active => 1,
        }
    }
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub entity_type: String,
    pub id: i32,
    pub coord: Coord,
    pub params: [i32; 3],
}
impl FromStr for EntityRecord {
    type Err = BotError;
    fn from_str(line: &str) -> Result<Self> {
        let inputs = line.split_whitespace().collect::<Vec<_>>();
        if inputs.len() != 7 {
            return Err(BotError::malformed(
                line,
                format!("expected 7 fields, found {}", inputs.len()),
            ));
        }
        let mut numbers = [0; 6];
        for (slot, input) in numbers.iter_mut().zip(&inputs[1..]) {
            *slot = input
                .parse::<i32>()
                .map_err(|err| BotError::malformed(line, err.to_string()))?;
        }
        Ok(EntityRecord {
            entity_type: inputs[0].to_string(),
            id: numbers[0],
            coord: Coord::new(numbers[1], numbers[2]),
            params: [numbers[3], numbers[4], numbers[5]],
        })
    }
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explorer {
    pub id: i32,
    pub coord: Coord,
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wanderer {
    pub id: i32,
    pub coord: Coord,
    pub state: MinionState,
    pub target: i32,
    pub recall_time: i32,
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawningMinion {
    pub id: i32,
    pub coord: Coord,
    pub state: MinionState,
    pub target: i32,
    pub spawn_time: i32,
}
impl fmt::Display for Explorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "explorer {} {}", self.id, self.coord)
    }
}
impl fmt::Display for Wanderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wanderer {} {} {} {} {}",
            self.id,
            self.coord,
            self.state.code(),
            self.target,
            self.recall_time
        )
    }
}
impl fmt::Display for SpawningMinion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "spawningMinion {} {} {} {} {}",
            self.id,
            self.coord,
            self.state.code(),
            self.target,
            self.spawn_time
        )
    }
}
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct World {
    pub explorers: Vec<Explorer>,
    pub wanderers: Vec<Wanderer>,
    pub spawning: Vec<SpawningMinion>,
}
impl World {
    pub fn classify<'a>(records: impl IntoIterator<Item = &'a EntityRecord>) -> Result<Self> {
        let mut world = World::default();
        for record in records {
            world.push(record)?;
        }
        Ok(world)
    }
    fn push(&mut self, record: &EntityRecord) -> Result<()> {
        let [param0, param1, param2] = record.params;
        match record.entity_type.as_str() {
            ENTITY_TYPE_EXPLORER => self.explorers.push(Explorer {
                id: record.id,
                coord: record.coord,
            }),
            ENTITY_TYPE_WANDERER => match MinionState::from_code(param1)? {
                MinionState::Spawning => self.spawning.push(SpawningMinion {
                    id: record.id,
                    coord: record.coord,
                    state: MinionState::Spawning,
                    target: param2,
                    spawn_time: param0,
                }),
                MinionState::Active => self.wanderers.push(Wanderer {
                    id: record.id,
                    coord: record.coord,
                    state: MinionState::Active,
                    target: param2,
                    recall_time: param0,
                }),
            },
            other => return Err(BotError::UnknownEntityType(other.to_string())),
        }
        Ok(())
    }
    pub fn me(&self) -> Result<&Explorer> {
        self.explorers.first().ok_or(BotError::NoExplorer)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn record(line: &str) -> EntityRecord {
        line.parse().unwrap()
    }
    #[test]
    fn parses_entity_line() {
        let parsed = record("WANDERER 4 7 2 35 1 -1\n");
        assert_eq!(parsed.entity_type, "WANDERER");
        assert_eq!(parsed.id, 4);
        assert_eq!(parsed.coord, Coord::new(7, 2));
        assert_eq!(parsed.params, [35, 1, -1]);
    }
    #[test]
    fn rejects_short_or_garbled_lines() {
        assert!(matches!(
            "EXPLORER 0 1 1 250".parse::<EntityRecord>(),
            Err(BotError::MalformedLine { .. })
        ));
        assert!(matches!(
            "EXPLORER 0 one 1 250 2 3".parse::<EntityRecord>(),
            Err(BotError::MalformedLine { .. })
        ));
    }
    #[test]
    fn classifies_by_type_and_state() {
        let records = [
            record("EXPLORER 0 1 1 250 2 3"),
            record("WANDERER 5 4 4 3 0 -1"),
            record("WANDERER 6 2 3 40 1 0"),
        ];
        let world = World::classify(&records).unwrap();
        assert_eq!(
            world.explorers,
            vec![Explorer {
                id: 0,
                coord: Coord::new(1, 1)
            }]
        );
        assert_eq!(
            world.spawning,
            vec![SpawningMinion {
                id: 5,
                coord: Coord::new(4, 4),
                state: MinionState::Spawning,
                target: -1,
                spawn_time: 3,
            }]
        );
        assert_eq!(
            world.wanderers,
            vec![Wanderer {
                id: 6,
                coord: Coord::new(2, 3),
                state: MinionState::Active,
                target: 0,
                recall_time: 40,
            }]
        );
    }
    #[test]
    fn classification_keeps_input_order() {
        let records = [
            record("WANDERER 9 0 0 10 1 0"),
            record("EXPLORER 2 1 1 250 2 3"),
            record("WANDERER 3 0 0 4 0 0"),
            record("WANDERER 1 0 0 10 1 0"),
            record("EXPLORER 0 1 1 250 2 3"),
            record("WANDERER 7 0 0 4 0 0"),
            record("WANDERER 4 0 0 10 1 0"),
        ];
        let world = World::classify(&records).unwrap();
        let explorers: Vec<_> = world.explorers.iter().map(|e| e.id).collect();
        let wanderers: Vec<_> = world.wanderers.iter().map(|w| w.id).collect();
        let spawning: Vec<_> = world.spawning.iter().map(|s| s.id).collect();
        assert_eq!(explorers, [2, 0]);
        assert_eq!(wanderers, [9, 1, 4]);
        assert_eq!(spawning, [3, 7]);
        assert_eq!(world.me().unwrap().id, 2);
    }
    #[test]
    fn unknown_entity_type_is_fatal() {
        let records = [record("EXPLORER 0 1 1 250 2 3"), record("SLASHER 1 0 0 0 0 0")];
        let err = World::classify(&records).unwrap_err();
        assert!(matches!(err, BotError::UnknownEntityType(ref t) if t == "SLASHER"));
    }
    #[test]
    fn unknown_minion_state_is_fatal() {
        let records = [record("WANDERER 1 0 0 0 2 0")];
        assert!(matches!(
            World::classify(&records).unwrap_err(),
            BotError::UnknownMinionState(2)
        ));
    }
    #[test]
    fn me_requires_an_explorer() {
        assert!(matches!(World::default().me(), Err(BotError::NoExplorer)));
    }
    #[test]
    fn renders_each_kind() {
        let world = World::classify(&[
            record("EXPLORER 0 1 2 250 2 3"),
            record("WANDERER 5 4 4 3 0 -1"),
            record("WANDERER 6 2 3 40 1 0"),
        ])
        .unwrap();
        assert_eq!(world.explorers[0].to_string(), "explorer 0 1 2");
        assert_eq!(world.spawning[0].to_string(), "spawningMinion 5 4 4 0 -1 3");
        assert_eq!(world.wanderers[0].to_string(), "wanderer 6 2 3 1 0 40");
    }
}
}
pub use coord::*;
pub use driver::*;
pub use error::*;
pub use grid::*;
pub use protocol::*;
pub use search::*;
pub use strategy::*;
pub use world::*;
}
use std::io;
use env_logger::Env;
use self::kutulu::driver::run;
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(stdin.lock(), stdout.lock()) {
        log::error!("{err}");
        return Err(err.into());
    }
    Ok(())
}
