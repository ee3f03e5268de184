use super::Group;
use crate::geometry::Point;
use crate::geometry::Radius;
use std::collections::HashSet;

/// One round: offer every point, in order, to `group`.
/// Returns the grown group and the rejected points in encounter order.
pub fn sweep(points: Vec<Point>, mut group: Group) -> (Group, Vec<Point>) {
    let remaining = points
        .into_iter()
        .filter(|p| !group.try_add(*p))
        .collect::<Vec<_>>();
    (group, remaining)
}

/// Rounds of the greedy partition, one fresh [`Group`] per round.
///
/// The first point offered to an empty group is always admitted, so each
/// round consumes at least one point and `n` points yield at most `n`
/// rounds.
#[derive(Debug, Clone)]
pub struct Greedy {
    remaining: Vec<Point>,
    radius: Radius,
}

impl Greedy {
    pub fn new(points: Vec<Point>, radius: Radius) -> Self {
        Self {
            remaining: points,
            radius,
        }
    }
}

impl Iterator for Greedy {
    type Item = Group;
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let points = std::mem::take(&mut self.remaining);
        let (group, remaining) = sweep(points, Group::new(self.radius));
        debug_assert!(!group.is_empty());
        self.remaining = remaining;
        Some(group)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.len() {
            0 => (0, Some(0)),
            n => (1, Some(n)),
        }
    }
}

/// Partition `points` into radius-bounded groups, one greedy round at a
/// time, then collapse groups whose centers coincide.
///
/// Every input point ends up in exactly one round's group, and every
/// surviving group's center is within `radius` of each of its members.
/// A dropped duplicate's members are covered by the survivor's center,
/// since it is the same point. Survivors are listed in round order, but
/// that order is incidental.
pub fn greedy_groups(points: Vec<Point>, radius: Radius) -> Vec<Group> {
    let n = points.len();
    let mut seen = HashSet::new();
    let groups = Greedy::new(points, radius)
        .enumerate()
        .inspect(|(i, g)| log::debug!("round {:>4} {}", i + 1, g))
        .map(|(_, g)| g)
        .collect::<Vec<_>>();
    let rounds = groups.len();
    let groups = groups
        .into_iter()
        .filter(|g| seen.insert(g.key()))
        .collect::<Vec<_>>();
    log::debug!(
        "grouped {} points into {} groups over {} rounds",
        n,
        groups.len(),
        rounds
    );
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn points(coords: &[(Coord, Coord)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn scatter(seed: u64, n: usize, side: Coord) -> Vec<Point> {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        (0..n)
            .map(|_| Point::new(rng.random_range(0..side), rng.random_range(0..side)))
            .collect()
    }

    #[test]
    fn diagonal_collapses_into_three_groups() {
        let input = points(&[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6), (7, 7)]);
        let groups = greedy_groups(input.clone(), Radius::from(2));
        let centers = groups.iter().map(Group::center).collect::<Vec<_>>();
        assert_eq!(centers, points(&[(2, 2), (5, 5), (7, 7)]));
        for g in groups.iter() {
            assert!(g.points().iter().all(|p| g.center().distance(p) <= 2.0));
        }
        let mut members = groups
            .iter()
            .flat_map(|g| g.points().iter().copied())
            .collect::<Vec<_>>();
        members.sort();
        assert_eq!(members, input);
    }

    #[test]
    fn single_point_zero_radius() {
        let groups = greedy_groups(points(&[(0, 0)]), Radius::from(0));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].center(), Point::new(0, 0));
        assert_eq!(groups[0].points(), &[Point::new(0, 0)]);
    }

    #[test]
    fn distant_points_stay_apart() {
        let groups = greedy_groups(points(&[(0, 0), (100, 100)]), Radius::from(1));
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.len() == 1));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(greedy_groups(Vec::new(), Radius::from(3)).is_empty());
        assert_eq!(Greedy::new(Vec::new(), Radius::from(3)).count(), 0);
    }

    #[test]
    fn sweep_keeps_rejects_in_order() {
        let input = points(&[(0, 0), (9, 9), (1, 0), (8, 8), (0, 1)]);
        let (group, rest) = sweep(input, Group::new(Radius::from(1)));
        assert_eq!(group.points(), points(&[(0, 0), (1, 0), (0, 1)]).as_slice());
        assert_eq!(rest, points(&[(9, 9), (8, 8)]));
    }

    #[test]
    fn coinciding_centers_are_deduplicated() {
        // round 1 takes (10,10) and (14,10); both others would drag the
        // center too far. round 2 pairs them around the same center.
        let input = points(&[(10, 10), (14, 10), (12, 12), (12, 8)]);
        let rounds = Greedy::new(input.clone(), Radius::from(2)).collect::<Vec<_>>();
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].center(), rounds[1].center());
        let groups = greedy_groups(input.clone(), Radius::from(2));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].center(), Point::new(12, 10));
        assert!(input.iter().all(|p| groups[0].center().distance(p) <= 2.0));
    }

    #[test]
    fn duplicate_cities_share_a_group() {
        let input = points(&[(5, 5), (5, 5), (5, 5)]);
        let groups = greedy_groups(input, Radius::from(0));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn every_point_is_covered() {
        for (seed, r) in [(1, 0), (2, 1), (3, 3), (4, 7), (5, 15)] {
            let input = scatter(seed, 200, 60);
            let radius = Radius::from(r);
            let groups = greedy_groups(input.clone(), radius);
            for p in input.iter() {
                assert!(
                    groups
                        .iter()
                        .any(|g| radius.covers(&g.center(), p)),
                    "{} uncovered at r={}",
                    p,
                    r
                );
            }
        }
    }

    #[test]
    fn rounds_partition_the_input() {
        let input = scatter(7, 150, 40);
        let mut members = Greedy::new(input.clone(), Radius::from(4))
            .flat_map(|g| g.points().to_vec())
            .collect::<Vec<_>>();
        let mut expected = input;
        members.sort();
        expected.sort();
        assert_eq!(members, expected);
    }

    #[test]
    fn no_group_spans_more_than_twice_the_radius() {
        let input = scatter(11, 120, 50);
        let radius = Radius::from(5);
        for g in Greedy::new(input, radius) {
            for a in g.points() {
                for b in g.points() {
                    assert!(a.distance(b) <= radius.reach());
                }
            }
        }
    }

    #[test]
    fn terminates_within_n_rounds() {
        let input = scatter(13, 80, 1000);
        let n = input.len();
        let rounds = Greedy::new(input, Radius::from(0)).count();
        assert!(rounds <= n);
        // zero radius on mostly distinct points is the worst case
        let spread = points(&[(0, 0), (3, 0), (6, 0), (9, 0)]);
        assert_eq!(Greedy::new(spread, Radius::from(1)).count(), 4);
    }

    #[test]
    fn result_depends_on_input_order() {
        let forward = points(&[(0, 0), (2, 0), (4, 0)]);
        let backward = points(&[(4, 0), (2, 0), (0, 0)]);
        let a = greedy_groups(forward, Radius::from(1));
        let b = greedy_groups(backward, Radius::from(1));
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
        assert_eq!(a[0].center(), Point::new(1, 0));
        assert_eq!(b[0].center(), Point::new(3, 0));
    }
}
