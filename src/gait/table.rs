//! Key-frame gait tables and the interpolating playback engine.
use log::warn;

use crate::kinematics::Locations;
use crate::robot::config;

/// Immutable, compiled-in key-frame sequence for one movement mode.
///
/// `entry` indexes the frame designated as the support-stable hand-off point;
/// playback always starts there, never at frame 0. `step_duration_ms` is the
/// per-frame duration at speed 1.0.
#[derive(Debug)]
pub struct GaitTable<const N: usize> {
    pub frames: &'static [Locations<N>],
    pub step_duration_ms: u32,
    pub entry: usize,
}

impl<const N: usize> GaitTable<N> {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn entry_frame(&self) -> &Locations<N> {
        &self.frames[self.entry]
    }

    /// Wall-clock duration of one full cycle at the given speed. Exact and
    /// monotonic: halving the speed doubles the duration.
    pub fn cycle_duration_ms(&self, speed: f32) -> f32 {
        self.frames.len() as f32 * (self.step_duration_ms as f32 / speed)
    }
}

/// Advances a [`GaitTable`] one tick at a time, linearly interpolating the
/// chassis position toward the current key frame.
#[derive(Debug)]
pub struct Playback<const N: usize> {
    table: &'static GaitTable<N>,
    position: Locations<N>,
    index: usize,
    remain_ms: i32,
    speed: f32,
}

impl<const N: usize> Playback<N> {
    pub fn new(table: &'static GaitTable<N>) -> Self {
        let mut playback = Self {
            table,
            position: Locations::default(),
            index: 0,
            remain_ms: 0,
            speed: config::DEFAULT_SPEED,
        };
        playback.set_table(table);
        playback
    }

    /// Switch to a new table: jump to its entry frame and allow a blend of
    /// at least the configured switch duration, so the first interpolation
    /// cannot sweep through an unreachable pose.
    pub fn set_table(&mut self, table: &'static GaitTable<N>) {
        self.table = table;
        self.index = table.entry;

        let step = (table.step_duration_ms as f32 / self.speed) as i32;
        let switch = (config::MOVEMENT_SWITCH_DURATION_MS as f32 / self.speed) as i32;
        self.remain_ms = switch.max(step);

        self.position = *table.entry_frame();
    }

    /// Swap tables without snapping: keep the current frame index and
    /// interpolated position, restart the step timer with a soft blend.
    /// Only meaningful between same-length tables.
    pub fn switch_preserving_index(&mut self, table: &'static GaitTable<N>) {
        self.table = table;
        let step = (table.step_duration_ms as f32 / self.speed) as i32;
        let switch = (config::MOVEMENT_SWITCH_DURATION_MS as f32 / self.speed) as i32;
        self.remain_ms = switch.max(step);
    }

    /// Advance by `elapsed_ms` and return the interpolated chassis position.
    /// Non-positive elapsed time is treated as one default step.
    pub fn next(&mut self, mut elapsed_ms: i32) -> &Locations<N> {
        let step = (self.table.step_duration_ms as f32 / self.speed) as i32;
        if elapsed_ms <= 0 {
            elapsed_ms = step;
        }

        if self.remain_ms <= 0 {
            self.index = (self.index + 1) % self.table.len();
            self.remain_ms = step;
        }
        if elapsed_ms >= self.remain_ms {
            elapsed_ms = self.remain_ms;
        }

        let ratio = elapsed_ms as f32 / self.remain_ms as f32;
        self.position.lerp_toward(&self.table.frames[self.index], ratio);

        self.remain_ms -= elapsed_ms;
        &self.position
    }

    /// Speed multiplier. Takes effect on future step computations only; time
    /// already spent in the current step is not rescaled.
    pub fn set_speed(&mut self, speed: f32) {
        if !(config::MIN_SPEED..=config::MAX_SPEED).contains(&speed) {
            warn!(
                "speed {speed} outside [{}, {}], clamping",
                config::MIN_SPEED,
                config::MAX_SPEED
            );
        }
        self.speed = speed.clamp(config::MIN_SPEED, config::MAX_SPEED);
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn table(&self) -> &'static GaitTable<N> {
        self.table
    }

    pub fn position(&self) -> &Locations<N> {
        &self.position
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn remaining_ms(&self) -> i32 {
        self.remain_ms
    }

    /// True when playback sits exactly on the current table's entry frame
    /// boundary.
    pub fn at_entry(&self) -> bool {
        self.index == self.table.entry && self.remain_ms <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::Point3D;

    const fn frame(x: f32) -> Locations<4> {
        Locations::new([
            Point3D::new(x, 0.0, 0.0),
            Point3D::new(x, 1.0, 0.0),
            Point3D::new(x, 2.0, 0.0),
            Point3D::new(x, 3.0, 0.0),
        ])
    }

    static FRAMES: [Locations<4>; 4] = [frame(0.0), frame(10.0), frame(20.0), frame(30.0)];
    static TABLE: GaitTable<4> = GaitTable {
        frames: &FRAMES,
        step_duration_ms: 200,
        entry: 2,
    };

    fn fresh() -> Playback<4> {
        let mut p = Playback::new(&TABLE);
        p.set_speed(1.0);
        p.set_table(&TABLE);
        p
    }

    #[test]
    fn set_table_snaps_to_entry() {
        let p = fresh();
        assert_eq!(p.index(), 2);
        assert_eq!(*p.position(), FRAMES[2]);
        // switch duration (150) < step duration (200): step wins
        assert_eq!(p.remaining_ms(), 200);
    }

    #[test]
    fn four_quarter_ticks_complete_one_step_exactly() {
        let mut p = fresh();
        for _ in 0..4 {
            p.next(50);
        }
        assert_eq!(p.index(), 2);
        assert_eq!(*p.position(), FRAMES[2]);
        assert_eq!(p.remaining_ms(), 0);
    }

    #[test]
    fn full_cycle_returns_to_entry_frame() {
        let mut p = fresh();
        // burn the initial blend step
        p.next(200);
        // one full cycle of whole steps
        for _ in 0..4 {
            p.next(200);
        }
        assert_eq!(p.index(), 2);
        assert_eq!(*p.position(), FRAMES[2]);
    }

    #[test]
    fn non_positive_elapsed_advances_one_default_step() {
        let mut p = fresh();
        p.next(0);
        assert_eq!(p.remaining_ms(), 0);
        assert_eq!(*p.position(), FRAMES[2]);
    }

    #[test]
    fn interpolation_is_linear_within_a_step() {
        let mut p = fresh();
        p.next(200);
        // halfway into the next step, toward frame 3
        p.next(100);
        let expected = FRAMES[2][0].x + (FRAMES[3][0].x - FRAMES[2][0].x) * 0.5;
        assert!((p.position()[0].x - expected).abs() < 1e-5);
    }

    #[test]
    fn speed_change_is_not_retroactive() {
        let mut p = fresh();
        p.next(50);
        let remain_before = p.remaining_ms();
        p.set_speed(0.5);
        assert_eq!(p.remaining_ms(), remain_before);
        // but the next step reset uses the new speed
        p.next(remain_before);
        p.next(10);
        assert_eq!(p.remaining_ms(), 400 - 10);
    }

    #[test]
    fn cycle_duration_doubles_when_speed_halves() {
        assert_eq!(TABLE.cycle_duration_ms(0.5), 2.0 * TABLE.cycle_duration_ms(1.0));
    }
}
