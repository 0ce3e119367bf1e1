use std::fmt;

use super::coord::Coord;
use super::error::{BotError, Result};

/// How far (Manhattan) the evasion search looks for a destination cell.
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

    /// Replaces row `row` with the cells spelled out by `line`. The line must hold exactly
    /// `width` cell characters; trailing whitespace is ignored.
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

    /// Every empty cell, row by row.
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
