use super::Instance;
use super::Solution;
use crate::grouping::Group;
use crate::grouping::greedy_groups;

/// Strategy for turning an [`Instance`] into a [`Solution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Solver {
    /// One tower on every city.
    Naive,
    /// One tower at the center of every greedy group.
    Group,
}

impl Solver {
    pub fn solve(&self, instance: &Instance) -> Solution {
        let towers = match self {
            Self::Naive => instance.cities().to_vec(),
            Self::Group => greedy_groups(instance.cities().to_vec(), instance.radius())
                .iter()
                .map(Group::center)
                .collect(),
        };
        log::info!(
            "{} solver placed {} towers for {} cities",
            self,
            towers.len(),
            instance.cities().len()
        );
        Solution::from(towers)
    }
}

impl TryFrom<&str> for Solver {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "naive" => Ok(Self::Naive),
            "group" => Ok(Self::Group),
            _ => Err(anyhow::anyhow!("unknown solver {:?}", s)),
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Naive => write!(f, "naive"),
            Self::Group => write!(f, "group"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;
    use crate::geometry::Point;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::BTreeSet;

    fn random_instance(seed: u64, n: usize, side: u32, r_s: u32, r_p: u32) -> Instance {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let cities = (0..n)
            .map(|_| {
                Point::new(
                    rng.random_range(0..side as Coord),
                    rng.random_range(0..side as Coord),
                )
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Instance::new(side, r_s, r_p, cities)
    }

    #[test]
    fn naive_places_tower_on_every_city() {
        let instance = random_instance(3, 50, 100, 3, 10);
        let solution = Solver::Naive.solve(&instance);
        assert_eq!(solution.towers(), instance.cities());
        assert!(solution.valid(&instance).is_ok());
    }

    #[test]
    fn group_solution_is_valid() {
        for (seed, r) in [(1, 0), (2, 1), (3, 3), (4, 8), (5, 20)] {
            let instance = random_instance(seed, 300, 100, r, 2 * r);
            instance.validate().unwrap();
            let solution = Solver::Group.solve(&instance);
            assert!(solution.valid(&instance).is_ok(), "invalid at R_s={}", r);
            assert!(solution.towers().len() <= instance.cities().len());
        }
    }

    #[test]
    fn group_with_widest_radius_places_one_tower() {
        let instance = random_instance(9, 100, 100, u32::MAX, u32::MAX);
        instance.validate().unwrap();
        let solution = Solver::Group.solve(&instance);
        assert_eq!(solution.towers().len(), 1);
        assert!(solution.valid(&instance).is_ok());
    }

    #[test]
    fn group_merges_nearby_cities() {
        let cities = (1..=7).map(|i| Point::new(i, i)).collect();
        let instance = Instance::new(10, 2, 3, cities);
        let solution = Solver::Group.solve(&instance);
        assert_eq!(
            solution.towers(),
            &[Point::new(2, 2), Point::new(5, 5), Point::new(7, 7)]
        );
        assert!(solution.penalty(&instance) < Solver::Naive.solve(&instance).penalty(&instance));
    }

    #[test]
    fn solver_names() {
        assert_eq!(Solver::try_from("naive").unwrap(), Solver::Naive);
        assert_eq!(Solver::try_from("group").unwrap(), Solver::Group);
        assert!(Solver::try_from("greedy").is_err());
        assert_eq!(Solver::Group.to_string(), "group");
    }
}
