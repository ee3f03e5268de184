use super::Point;
use crate::Distance;

/// Coverage radius shared by every group of one run.
///
/// Only non-negative, finite radii can be constructed, so everything
/// downstream may assume a well-formed covering problem.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Radius(Distance);

impl Radius {
    pub fn value(&self) -> Distance {
        self.0
    }
    /// Two points further apart than this can never share a center.
    pub fn reach(&self) -> Distance {
        2.0 * self.0
    }
    pub fn covers(&self, center: &Point, point: &Point) -> bool {
        center.distance(point) <= self.0
    }
}

impl TryFrom<Distance> for Radius {
    type Error = anyhow::Error;
    fn try_from(r: Distance) -> Result<Self, Self::Error> {
        if r.is_nan() {
            Err(anyhow::anyhow!("radius must be a number"))
        } else if r.is_infinite() {
            Err(anyhow::anyhow!("radius must be finite, got {}", r))
        } else if r < 0.0 {
            Err(anyhow::anyhow!("radius must be non-negative, got {}", r))
        } else {
            Ok(Self(r))
        }
    }
}

impl From<u32> for Radius {
    fn from(r: u32) -> Self {
        Self(r as Distance)
    }
}

impl std::fmt::Display for Radius {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
