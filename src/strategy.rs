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
    /// Picks this turn's command: flee the closest active wanderer if there is one, otherwise
    /// stay put. Spawning minions are ignored.
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
