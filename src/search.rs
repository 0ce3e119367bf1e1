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

/// Candidate closest to `from`; on equal distances the earliest candidate wins.
pub fn nearest<T: Located>(from: Coord, candidates: impl IntoIterator<Item = T>) -> Result<T> {
    candidates
        .into_iter()
        .min_by_key(|c| c.coord().distance(from))
        .ok_or(BotError::EmptyInput("nearest"))
}

/// Candidate farthest from `from`; on equal distances the earliest candidate wins.
pub fn farthest<T: Located>(from: Coord, candidates: impl IntoIterator<Item = T>) -> Result<T> {
    farthest_by_key(candidates, |c| c.distance(from))
}

/// Candidate with the greatest `key`, the earliest one on ties.
fn farthest_by_key<T: Located, K: Ord>(
    candidates: impl IntoIterator<Item = T>,
    key: impl Fn(Coord) -> K,
) -> Result<T> {
    // max_by_key keeps the last maximum, so fold by hand to keep the first.
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

/// Empty cell within reach of `me` that puts the most distance between it and the closest
/// wanderer. Other wanderers are not taken into account.
///
/// Cells at the same Manhattan distance are ranked by straight-line distance, so the explorer
/// backs off along the wanderer's axis rather than sidestepping; remaining ties go to the
/// first cell in row-major order.
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
