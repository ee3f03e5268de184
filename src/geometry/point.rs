use crate::Arbitrary;
use crate::Coord;
use crate::Distance;
use crate::RANDOM_GRID;
use serde::Deserialize;
use serde::Serialize;

/// A city or tower location on the integer grid.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    x: Coord,
    y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
    pub fn x(&self) -> Coord {
        self.x
    }
    pub fn y(&self) -> Coord {
        self.y
    }
    /// Exact squared Euclidean distance. Computed in i128 so that points
    /// at opposite ends of the i32 range do not overflow.
    pub fn distance_sq(&self, other: &Self) -> i128 {
        let dx = self.x as i128 - other.x as i128;
        let dy = self.y as i128 - other.y as i128;
        dx * dx + dy * dy
    }
    pub fn distance(&self, other: &Self) -> Distance {
        (self.distance_sq(other) as Distance).sqrt()
    }
}

impl From<(Coord, Coord)> for Point {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self::new(x, y)
    }
}

/// "x y", whitespace separated
impl TryFrom<&str> for Point {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut tokens = s.split_whitespace();
        let x = tokens
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing x coordinate in {:?}", s))?
            .parse::<Coord>()
            .map_err(|e| anyhow::anyhow!("invalid x coordinate in {:?}: {}", s, e))?;
        let y = tokens
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing y coordinate in {:?}", s))?
            .parse::<Coord>()
            .map_err(|e| anyhow::anyhow!("invalid y coordinate in {:?}: {}", s, e))?;
        match tokens.next() {
            Some(extra) => Err(anyhow::anyhow!("unexpected token {:?} in {:?}", extra, s)),
            None => Ok(Self::new(x, y)),
        }
    }
}

impl Arbitrary for Point {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self::new(
            rng.random_range(0..RANDOM_GRID),
            rng.random_range(0..RANDOM_GRID),
        )
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
