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

    /// Manhattan distance.
    pub fn distance(self, other: Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// One grid step from `self` toward `to`, horizontal axis first.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_manhattan_and_symmetric() {
        let a = Coord::new(1, 4);
        let b = Coord::new(-2, 0);
        assert_eq!(a.distance(b), 7);
        assert_eq!(b.distance(a), 7);
        assert_eq!(a.distance(a), 0);
    }

    #[test]
    fn step_toward_moves_one_cell() {
        let from = Coord::new(2, 2);
        assert_eq!(from.step_toward(Coord::new(5, 0)), Coord::new(3, 2));
        assert_eq!(from.step_toward(Coord::new(2, 0)), Coord::new(2, 1));
        assert_eq!(from.step_toward(from), from);
    }

    #[test]
    fn displays_as_command_arguments() {
        assert_eq!(Coord::new(3, 7).to_string(), "3 7");
    }
}
