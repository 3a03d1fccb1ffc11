//! Programmed motion for blocks.
//!
//! Position motion is a cyclic track of offsets, each paired with the time
//! spent travelling to the next offset (the last one loops back to the
//! first). Offsets are local to the block: they are added to the block's
//! position at the start of every loop.
//!
//! Two timings share the same track shape:
//!
//! - [`PositionTiming::SpeedDerived`]: durations come from segment length
//!   divided by a single travel speed and are recomputed whenever the track
//!   changes.
//! - [`PositionTiming::TimeExplicit`]: every point carries its own duration.
//!   A zero duration is an instant jump and is written as a literal `0`.

use crate::util::{euler_matrix, Error, Result, Vector3};
use glam::DVec3;

/// How segment durations are obtained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PositionTiming {
    /// Durations supplied per point.
    TimeExplicit,
    /// Durations derived from distance and a constant speed.
    SpeedDerived { speed: f64 },
}

impl PositionTiming {
    #[inline]
    pub fn is_speed_derived(&self) -> bool {
        matches!(self, Self::SpeedDerived { .. })
    }

    /// Travel speed, or 0 for time-explicit tracks.
    #[inline]
    pub fn speed(&self) -> f64 {
        match self {
            Self::TimeExplicit => 0.0,
            Self::SpeedDerived { speed } => *speed,
        }
    }
}

impl Default for PositionTiming {
    fn default() -> Self {
        Self::TimeExplicit
    }
}

fn check_duration(duration: f64) -> Result<f64> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(Error::invalid(
            "position_travel_times",
            format!("duration must be a finite, non-negative number of seconds (got {})", duration),
        ));
    }
    Ok(duration)
}

fn check_speed(speed: f64) -> Result<f64> {
    if !speed.is_finite() || speed < 0.0 {
        return Err(Error::invalid(
            "position_travel_speed",
            format!("speed must be finite and non-negative (got {})", speed),
        ));
    }
    Ok(speed)
}

/// Position track of a block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionKinematics {
    /// Whether the block follows the track at all.
    pub enabled: bool,
    timing: PositionTiming,
    points: Vec<Vector3>,
    times: Vec<f64>,
}

impl PositionKinematics {
    /// Empty, disabled, time-explicit track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty, enabled track driven by `speed`.
    pub fn with_speed(speed: f64) -> Result<Self> {
        let mut k = Self { enabled: true, ..Self::default() };
        k.set_travel_speed(speed)?;
        Ok(k)
    }

    /// Empty, enabled, time-explicit track.
    pub fn timed() -> Self {
        Self { enabled: true, ..Self::default() }
    }

    #[inline]
    pub fn timing(&self) -> PositionTiming {
        self.timing
    }

    /// Travel speed, or 0 for time-explicit tracks.
    #[inline]
    pub fn travel_speed(&self) -> f64 {
        self.timing.speed()
    }

    /// Switch timing. A non-zero speed makes the track speed-derived and
    /// recomputes every duration; zero makes it time-explicit and keeps the
    /// current durations as explicit values.
    pub fn set_travel_speed(&mut self, speed: f64) -> Result<()> {
        let speed = check_speed(speed)?;
        if speed == 0.0 {
            self.timing = PositionTiming::TimeExplicit;
        } else {
            self.timing = PositionTiming::SpeedDerived { speed };
            self.refresh_all();
        }
        Ok(())
    }

    /// Append one point. `duration` is ignored on speed-derived tracks,
    /// where the new segment and the one leading into it are recomputed.
    pub fn add_point(&mut self, offset: Vector3, duration: f64) -> Result<()> {
        let duration = check_duration(duration)?;
        self.points.push(offset);
        match self.timing {
            PositionTiming::TimeExplicit => self.times.push(duration),
            PositionTiming::SpeedDerived { .. } => {
                self.times.push(0.0);
                let last = self.points.len() - 1;
                if last > 0 {
                    self.refresh_segment(last - 1);
                }
                self.refresh_segment(last);
            }
        }
        Ok(())
    }

    /// Batch append for speed-derived tracks. Each inner segment is derived
    /// once; the segment closing the loop is derived after the last point.
    pub fn extend_points<I>(&mut self, offsets: I) -> Result<()>
    where
        I: IntoIterator<Item = Vector3>,
    {
        if !self.timing.is_speed_derived() {
            return Err(Error::KinematicsMode(
                "plain offsets need a travel speed; use extend_timed or set a speed first",
            ));
        }
        let start = self.points.len();
        for offset in offsets {
            self.points.push(offset);
            self.times.push(0.0);
            let last = self.points.len() - 1;
            if last > 0 {
                self.refresh_segment(last - 1);
            }
        }
        if self.points.len() > start {
            self.refresh_segment(self.points.len() - 1);
        }
        Ok(())
    }

    /// Batch append for time-explicit tracks. Either every pair is stored or
    /// none is.
    pub fn extend_timed<I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (Vector3, f64)>,
    {
        if self.timing.is_speed_derived() {
            return Err(Error::KinematicsMode(
                "timed offsets on a speed-derived track; set the travel speed to 0 or use extend_points",
            ));
        }
        let pairs = pairs
            .into_iter()
            .map(|(p, t)| check_duration(t).map(|t| (p, t)))
            .collect::<Result<Vec<_>>>()?;
        for (p, t) in pairs {
            self.points.push(p);
            self.times.push(t);
        }
        Ok(())
    }

    pub fn point(&self, index: usize) -> Result<Vector3> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    /// Time spent travelling from point `index` to the next one.
    pub fn travel_time(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.times[index])
    }

    /// Replace a point. On speed-derived tracks `duration` is ignored and
    /// both segments touching the point are recomputed.
    pub fn set_point(&mut self, index: usize, offset: Vector3, duration: f64) -> Result<()> {
        self.check_index(index)?;
        let duration = check_duration(duration)?;
        self.points[index] = offset;
        match self.timing {
            PositionTiming::TimeExplicit => self.times[index] = duration,
            PositionTiming::SpeedDerived { .. } => {
                let n = self.points.len();
                self.refresh_segment((index + n - 1) % n);
                self.refresh_segment(index);
            }
        }
        Ok(())
    }

    /// Remove a point and return it with the duration it carried.
    pub fn remove_point(&mut self, index: usize) -> Result<(Vector3, f64)> {
        self.check_index(index)?;
        let point = self.points.remove(index);
        let time = self.times.remove(index);
        if self.timing.is_speed_derived() && !self.points.is_empty() {
            let n = self.points.len();
            self.refresh_segment((index + n - 1) % n);
        }
        Ok((point, time))
    }

    /// Drop every point. Timing and the enabled flag are kept.
    pub fn clear(&mut self) {
        self.points.clear();
        self.times.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Local offsets, in order.
    pub fn points(&self) -> &[Vector3] {
        &self.points
    }

    /// Durations, parallel to [`points`](Self::points).
    pub fn travel_times(&self) -> &[f64] {
        &self.times
    }

    /// `(offset, duration)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Vector3, f64)> + '_ {
        self.points.iter().copied().zip(self.times.iter().copied())
    }

    /// Total duration of one loop.
    pub fn loop_duration(&self) -> f64 {
        self.times.iter().sum()
    }

    /// Offsets resolved against the block position at the start of a loop.
    pub fn world_path(&self, origin: Vector3) -> Vec<Vector3> {
        self.points.iter().map(|p| origin + *p).collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.points.len() {
            return Err(Error::IndexOutOfBounds { index, len: self.points.len() });
        }
        Ok(())
    }

    // Duration of the segment leaving `index`, wrapping to the first point.
    fn refresh_segment(&mut self, index: usize) {
        let speed = self.timing.speed();
        if speed == 0.0 {
            return;
        }
        let next = self.points[(index + 1) % self.points.len()];
        self.times[index] = self.points[index].distance(next) / speed;
    }

    fn refresh_all(&mut self) {
        for i in 0..self.points.len() {
            self.refresh_segment(i);
        }
    }
}

/// Continuous spin, optionally orbiting a pivot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationKinematics {
    pub enabled: bool,
    /// Spin axis weights. Meant to sum to 1; not enforced.
    pub direction: Vector3,
    /// Angular speed.
    pub speed: f64,
    /// Pivot in the block's own (rotated) frame.
    pub pivot_offset: Vector3,
}

impl Default for RotationKinematics {
    fn default() -> Self {
        Self {
            enabled: false,
            direction: Vector3::ZERO,
            speed: 1.0,
            pivot_offset: Vector3::ZERO,
        }
    }
}

impl RotationKinematics {
    /// Enabled rotation about `direction` at `speed`.
    pub fn spinning(direction: Vector3, speed: f64) -> Self {
        Self {
            enabled: true,
            direction,
            speed,
            ..Self::default()
        }
    }

    /// Pivot offset after applying the block's rotation (degrees).
    pub fn world_pivot(&self, rotation_degrees: Vector3) -> Vector3 {
        let r = rotation_degrees.to_radians();
        (euler_matrix(r.x, r.y, r.z) * DVec3::from(self.pivot_offset)).into()
    }

    /// True if the direction components sum to 1.
    pub fn is_unit_direction(&self) -> bool {
        (self.direction.component_sum() - 1.0).abs() < 1e-6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn test_speed_derived_duration() {
        let mut k = PositionKinematics::with_speed(4.0).unwrap();
        k.add_point(Vector3::ZERO, 99.0).unwrap();
        k.add_point(v(0.0, 0.0, 10.0), 99.0).unwrap();
        // Forward leg and return leg both cover 10 units.
        assert!((k.travel_time(0).unwrap() - 2.5).abs() < EPS);
        assert!((k.travel_time(1).unwrap() - 2.5).abs() < EPS);
    }

    #[test]
    fn test_reversed_insertion_starts_at_far_point() {
        let mut k = PositionKinematics::with_speed(1.0).unwrap();
        k.extend_points([v(0.0, 0.0, 3.0), Vector3::ZERO]).unwrap();
        assert_eq!(k.point(0).unwrap(), v(0.0, 0.0, 3.0));
        assert!((k.travel_time(0).unwrap() - 3.0).abs() < EPS);
    }

    #[test]
    fn test_batch_matches_single_appends() {
        let pts = [Vector3::ZERO, v(3.0, 4.0, 0.0), v(3.0, 4.0, 12.0), v(0.0, 1.0, 0.0)];
        let mut single = PositionKinematics::with_speed(2.0).unwrap();
        for p in pts {
            single.add_point(p, 0.0).unwrap();
        }
        let mut batch = PositionKinematics::with_speed(2.0).unwrap();
        batch.extend_points(pts).unwrap();
        for (a, b) in single.travel_times().iter().zip(batch.travel_times()) {
            assert!((a - b).abs() < EPS);
        }
        assert!((batch.travel_time(0).unwrap() - 2.5).abs() < EPS);
        assert!((batch.travel_time(1).unwrap() - 6.0).abs() < EPS);
    }

    #[test]
    fn test_batch_mode_mismatch() {
        let mut timed = PositionKinematics::timed();
        assert!(matches!(timed.extend_points([Vector3::ZERO]), Err(Error::KinematicsMode(_))));
        let mut speedy = PositionKinematics::with_speed(1.0).unwrap();
        assert!(matches!(
            speedy.extend_timed([(Vector3::ZERO, 1.0)]),
            Err(Error::KinematicsMode(_))
        ));
        assert!(timed.is_empty() && speedy.is_empty());
    }

    #[test]
    fn test_zero_duration_is_literal() {
        let mut k = PositionKinematics::timed();
        k.extend_timed([(Vector3::ZERO, 1.5), (Vector3::ZERO, 0.0), (v(5.0, 0.0, 0.0), 2.0)])
            .unwrap();
        assert_eq!(k.travel_times(), &[1.5, 0.0, 2.0]);
        assert_eq!(k.loop_duration(), 3.5);
    }

    #[test]
    fn test_extend_timed_all_or_nothing() {
        let mut k = PositionKinematics::timed();
        let err = k.extend_timed([(Vector3::ZERO, 1.0), (Vector3::ONE, -1.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
        assert!(k.is_empty());
    }

    #[test]
    fn test_switching_speed_recomputes() {
        let mut k = PositionKinematics::timed();
        k.extend_timed([(Vector3::ZERO, 7.0), (v(0.0, 6.0, 0.0), 7.0)]).unwrap();
        k.set_travel_speed(3.0).unwrap();
        assert_eq!(k.travel_times(), &[2.0, 2.0]);
        k.set_travel_speed(0.0).unwrap();
        assert_eq!(k.timing(), PositionTiming::TimeExplicit);
        assert_eq!(k.travel_times(), &[2.0, 2.0]);
        assert!(k.set_travel_speed(-1.0).is_err());
    }

    #[test]
    fn test_set_and_remove_recompute_neighbours() {
        let mut k = PositionKinematics::with_speed(1.0).unwrap();
        k.extend_points([Vector3::ZERO, v(1.0, 0.0, 0.0), v(2.0, 0.0, 0.0)]).unwrap();
        assert_eq!(k.travel_times(), &[1.0, 1.0, 2.0]);

        k.set_point(1, v(4.0, 0.0, 0.0), 0.0).unwrap();
        assert_eq!(k.travel_times(), &[4.0, 2.0, 2.0]);

        let (p, t) = k.remove_point(2).unwrap();
        assert_eq!(p, v(2.0, 0.0, 0.0));
        assert_eq!(t, 2.0);
        assert_eq!(k.travel_times(), &[4.0, 4.0]);

        assert!(matches!(k.point(2), Err(Error::IndexOutOfBounds { index: 2, len: 2 })));
    }

    #[test]
    fn test_offsets_are_local() {
        let mut k = PositionKinematics::timed();
        k.extend_timed([(Vector3::ZERO, 1.0), (v(0.0, 5.0, 0.0), 1.0)]).unwrap();
        let path = k.world_path(v(10.0, 0.0, -2.0));
        assert_eq!(path, vec![v(10.0, 0.0, -2.0), v(10.0, 5.0, -2.0)]);
    }

    #[test]
    fn test_pivot_follows_block_yaw() {
        let rot = RotationKinematics {
            pivot_offset: v(3.0, 0.0, 0.0),
            ..RotationKinematics::spinning(v(0.0, 1.0, 0.0), 2.0)
        };
        assert!(rot.world_pivot(Vector3::ZERO).abs_diff_eq(v(3.0, 0.0, 0.0), EPS));
        let flipped = rot.world_pivot(v(0.0, 180.0, 0.0));
        assert!(flipped.abs_diff_eq(v(-3.0, 0.0, 0.0), 1e-9));
        // The axis itself is untouched by the block's rotation.
        assert_eq!(rot.direction, v(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_unit_direction_not_enforced() {
        // Non-unit axes are accepted as-is; only the helper reports them.
        let rot = RotationKinematics::spinning(v(1.0, 1.0, 0.0), 1.0);
        assert!(!rot.is_unit_direction());
        assert!(RotationKinematics::spinning(v(0.5, 0.5, 0.0), 1.0).is_unit_direction());
    }
}
