use crate::Coord;
use crate::geometry::Point;
use crate::geometry::Radius;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

/// A tower placement problem: cities on a `grid_side × grid_side` grid,
/// each of which must lie within `coverage_radius` of some tower.
/// Towers within `penalty_radius` of each other raise the cost.
///
/// Text format, `#` lines being comments:
///
/// ```text
/// N
/// D
/// R_s
/// R_p
/// x_1 y_1
/// ...
/// x_N y_N
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    grid_side: u32,
    coverage_radius: u32,
    penalty_radius: u32,
    cities: Vec<Point>,
}

impl Instance {
    pub fn new(grid_side: u32, coverage_radius: u32, penalty_radius: u32, cities: Vec<Point>) -> Self {
        Self {
            grid_side,
            coverage_radius,
            penalty_radius,
            cities,
        }
    }

    pub fn grid_side(&self) -> u32 {
        self.grid_side
    }
    pub fn coverage_radius(&self) -> u32 {
        self.coverage_radius
    }
    pub fn penalty_radius(&self) -> u32 {
        self.penalty_radius
    }
    pub fn cities(&self) -> &[Point] {
        &self.cities
    }
    pub fn radius(&self) -> Radius {
        Radius::from(self.coverage_radius)
    }

    /// Whether `point` lies on the grid, i.e. in `[0, D)²`.
    pub fn contains(&self, point: &Point) -> bool {
        let side = self.grid_side as i64;
        (0..side).contains(&(point.x() as i64)) && (0..side).contains(&(point.y() as i64))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.grid_side == 0 {
            anyhow::bail!("grid side must be positive");
        }
        if self.grid_side > Coord::MAX as u32 {
            anyhow::bail!("grid side {} exceeds coordinate range", self.grid_side);
        }
        if let Some(city) = self.cities.iter().find(|c| !self.contains(c)) {
            anyhow::bail!("city {} outside the {}x{} grid", city, self.grid_side, self.grid_side);
        }
        let mut seen = HashSet::with_capacity(self.cities.len());
        if let Some(city) = self.cities.iter().find(|c| !seen.insert(**c)) {
            anyhow::bail!("duplicate city {}", city);
        }
        Ok(())
    }

    pub fn parse<I, S>(lines: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_ref().trim().to_string()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));
        let mut header = |name: &str| -> anyhow::Result<u32> {
            let (i, line) = lines
                .next()
                .ok_or_else(|| anyhow::anyhow!("missing {}", name))?;
            line.parse::<u32>()
                .with_context(|| format!("line {}: invalid {} {:?}", i, name, line))
        };
        let n = header("city count")? as usize;
        let grid_side = header("grid side")?;
        let coverage_radius = header("coverage radius")?;
        let penalty_radius = header("penalty radius")?;
        let cities = lines
            .map(|(i, line)| {
                Point::try_from(line.as_str()).with_context(|| format!("line {}", i))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        if cities.len() != n {
            anyhow::bail!("expected {} cities, found {}", n, cities.len());
        }
        Ok(Self::new(grid_side, coverage_radius, penalty_radius, cities))
    }

    pub fn serialize<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.cities.len())?;
        writeln!(out, "{}", self.grid_side)?;
        writeln!(out, "{}", self.coverage_radius)?;
        writeln!(out, "{}", self.penalty_radius)?;
        for city in self.cities.iter() {
            writeln!(out, "{}", city)?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Instance {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s.lines())
    }
}

impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Instance : {} cities, D={}, R_s={}, R_p={}",
            self.cities.len(),
            self.grid_side,
            self.coverage_radius,
            self.penalty_radius
        )
    }
}
