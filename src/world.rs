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

/// One entity line as it arrives: `<TYPE> <id> <x> <y> <param0> <param1> <param2>`.
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

/// Everything reported for a single turn, split by kind. Rebuilt from scratch every turn.
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

    /// The explorer this bot controls: the first one reported.
    pub fn me(&self) -> Result<&Explorer> {
        self.explorers.first().ok_or(BotError::NoExplorer)
    }
}
