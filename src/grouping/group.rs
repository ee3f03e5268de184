use crate::Coord;
use crate::geometry::Point;
use crate::geometry::Radius;

/// A cluster of cities that all lie within `radius` of the cluster center.
///
/// The center is the per-axis mean of the members, rounded half away
/// from zero. Running coordinate sums are kept alongside the members so
/// that computing a center is O(1) rather than a pass over the members.
///
/// Membership only grows through [`Group::try_add`], which checks a
/// candidate against the center it *would* produce before committing it.
/// A rejected candidate therefore leaves the group untouched, and
/// duplicate-valued members are harmless.
#[derive(Debug, Clone)]
pub struct Group {
    points: Vec<Point>,
    radius: Radius,
    sum_x: i64,
    sum_y: i64,
}

impl Group {
    pub fn new(radius: Radius) -> Self {
        Self {
            points: Vec::new(),
            radius,
            sum_x: 0,
            sum_y: 0,
        }
    }

    /// Seed a group with members as-is. No radius check is performed.
    pub fn from_points(points: Vec<Point>, radius: Radius) -> Self {
        let sum_x = points.iter().map(|p| p.x() as i64).sum();
        let sum_y = points.iter().map(|p| p.y() as i64).sum();
        Self {
            points,
            radius,
            sum_x,
            sum_y,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn radius(&self) -> Radius {
        self.radius
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Admit `point` if every member, `point` included, stays within
    /// `radius` of the recomputed center.
    ///
    /// 1. reachability gate: any member further than `2 * radius` rejects
    /// 2. tentative center over members plus `point`
    /// 3. every member and `point` must be covered by that center
    /// 4. commit
    ///
    /// Members admitted earlier are rechecked against the shifted center
    /// but never evicted. Rejection leaves the group exactly as it was.
    pub fn try_add(&mut self, point: Point) -> bool {
        let reach = self.radius.reach();
        if self.points.iter().any(|p| point.distance(p) > reach) {
            log::trace!("{} unreachable from {}", point, self);
            return false;
        }
        let sum_x = self.sum_x + point.x() as i64;
        let sum_y = self.sum_y + point.y() as i64;
        let n = self.points.len() as i64 + 1;
        let center = Point::new(mean(sum_x, n), mean(sum_y, n));
        let covered = self
            .points
            .iter()
            .chain(std::iter::once(&point))
            .all(|p| self.radius.covers(&center, p));
        if !covered {
            log::trace!("{} would uncover members of {}", point, self);
            return false;
        }
        self.points.push(point);
        self.sum_x = sum_x;
        self.sum_y = sum_y;
        debug_assert!(self.sum_x == self.points.iter().map(|p| p.x() as i64).sum::<i64>());
        debug_assert!(self.sum_y == self.points.iter().map(|p| p.y() as i64).sum::<i64>());
        true
    }

    /// Rounded mean of the members, or the `(0, 0)` sentinel when empty.
    /// The sentinel is not a location; use [`Group::centroid`] to tell
    /// the two apart.
    pub fn center(&self) -> Point {
        self.centroid().unwrap_or_default()
    }

    pub fn centroid(&self) -> Option<Point> {
        match self.points.len() as i64 {
            0 => None,
            n => Some(Point::new(mean(self.sum_x, n), mean(self.sum_y, n))),
        }
    }

    /// Deduplication key. Groups whose centers coincide place the same
    /// tower and are interchangeable, whatever their members.
    pub fn key(&self) -> Point {
        self.center()
    }
}

/// sum / n rounded half away from zero, in exact integer arithmetic.
/// Agrees with `(sum / n + 0.5) as int` whenever `sum >= 0`.
fn mean(sum: i64, n: i64) -> Coord {
    debug_assert!(n > 0);
    let magnitude = (2 * sum.unsigned_abs() + n as u64) / (2 * n as u64);
    let rounded = if sum < 0 {
        -(magnitude as i64)
    } else {
        magnitude as i64
    };
    rounded as Coord
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Group : {} points, r={}, @{}",
            self.len(),
            self.radius,
            self.center()
        )
    }
}
