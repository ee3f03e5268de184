use super::Instance;
use crate::PENALTY_BASE;
use crate::PENALTY_EXPONENT;
use crate::Penalty;
use crate::geometry::Point;
use anyhow::Context;
use rayon::prelude::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

/// A set of tower locations answering an [`Instance`].
///
/// Text format mirrors the instance format: an optional `# Penalty:`
/// comment, the tower count, then one `x y` line per tower.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    towers: Vec<Point>,
}

impl Solution {
    pub fn towers(&self) -> &[Point] {
        &self.towers
    }

    /// Towers must sit on the grid, be distinct, and leave no city
    /// further than the coverage radius from its nearest tower.
    pub fn valid(&self, instance: &Instance) -> anyhow::Result<()> {
        if let Some(tower) = self.towers.iter().find(|t| !instance.contains(t)) {
            anyhow::bail!("tower {} outside the grid", tower);
        }
        let mut seen = HashSet::with_capacity(self.towers.len());
        if let Some(tower) = self.towers.iter().find(|t| !seen.insert(**t)) {
            anyhow::bail!("duplicate tower {}", tower);
        }
        let reach = instance.coverage_radius() as i128 * instance.coverage_radius() as i128;
        let uncovered = instance
            .cities()
            .par_iter()
            .filter(|city| self.towers.iter().all(|t| t.distance_sq(city) > reach))
            .count();
        if uncovered > 0 {
            anyhow::bail!("{} of {} cities uncovered", uncovered, instance.cities().len());
        }
        Ok(())
    }

    /// Σ PENALTY_BASE · exp(PENALTY_EXPONENT · w) over towers, where w
    /// counts the other towers within the penalty radius.
    pub fn penalty(&self, instance: &Instance) -> Penalty {
        let reach = instance.penalty_radius() as i128 * instance.penalty_radius() as i128;
        self.towers
            .par_iter()
            .enumerate()
            .map(|(i, a)| {
                self.towers
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .filter(|(_, b)| a.distance_sq(b) <= reach)
                    .count()
            })
            .map(|w| PENALTY_BASE * (PENALTY_EXPONENT * w as Penalty).exp())
            .sum()
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
        let (i, count) = lines
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing tower count"))?;
        let m = count
            .parse::<usize>()
            .with_context(|| format!("line {}: invalid tower count {:?}", i, count))?;
        let towers = lines
            .map(|(i, line)| {
                Point::try_from(line.as_str()).with_context(|| format!("line {}", i))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        if towers.len() != m {
            anyhow::bail!("expected {} towers, found {}", m, towers.len());
        }
        Ok(Self::from(towers))
    }

    pub fn serialize<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.towers.len())?;
        for tower in self.towers.iter() {
            writeln!(out, "{}", tower)?;
        }
        Ok(())
    }
}

impl From<Vec<Point>> for Solution {
    fn from(towers: Vec<Point>) -> Self {
        Self { towers }
    }
}

impl TryFrom<&str> for Solution {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s.lines())
    }
}
