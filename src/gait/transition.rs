//! Quadruped gait-transition state machine.
//!
//! Gait tables for different movement modes are generally not
//! frame-compatible: hopping tables mid-stride can put two diagonal legs in
//! the air at once and tip the robot. This module wraps the plain
//! [`Playback`] engine and sequences safe hand-offs instead:
//!
//! - within a pair group (forward/backward, the turns, the shifts) the entry
//!   frames are equivalent by construction, so the hop happens the moment
//!   playback reaches its entry;
//! - across groups, the machine first grounds the airborne legs of the
//!   current entry, then re-aligns each differing leg through an individual
//!   lift/translate/lower arc, moving exactly one leg at a time with the
//!   air-ending legs saved for last.
//!
//! A new mode request while a transition is in flight discards it and
//! replans from the current, possibly mid-arc position. There is no rollback.
use heapless::Vec;
use log::{info, warn};

use crate::gait::quad_tables;
use crate::gait::table::{GaitTable, Playback};
use crate::gait::{MovementMode, QuadGait};
use crate::kinematics::{Locations, Point3D};
use crate::robot::config;

/// A gait-family switch was requested outside stable standby.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaitSwitchRejected;

/// Feet within this height above the support plane count as grounded.
const GROUND_EPSILON: f32 = 0.1;

/// Alignment moves ground-ending legs first, diagonal pairs back to back,
/// so the support polygon stays as wide as possible throughout.
const ALIGN_LEG_ORDER: [usize; 4] = [0, 2, 1, 3]; // FR, BL, BR, FL

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArcPhase {
    Lift,
    Translate,
    Lower,
}

#[derive(Debug)]
enum TransitionState {
    Idle,
    WaitingForEntry {
        target: MovementMode,
        align: bool,
    },
    Grounding {
        target_mode: MovementMode,
        start: Locations<4>,
        grounded: Locations<4>,
        elapsed_ms: u32,
        total_ms: u32,
    },
    Aligning {
        target_mode: MovementMode,
        entry_pose: Locations<4>,
        /// Legs still to move, front of the queue is the active one.
        queue: Vec<usize, 4>,
        phase: ArcPhase,
        phase_start: Point3D,
        phase_target: Point3D,
        elapsed_ms: u32,
        total_ms: u32,
        /// Whether the active leg's target is airborne (two-phase arc).
        ends_airborne: bool,
        /// Travel height for the translate phase, computed once per leg.
        lift_z: f32,
    },
}

/// Table playback plus the transition machine, presenting a single
/// `set_mode`/`next` surface to the robot layer.
#[derive(Debug)]
pub struct QuadWalker {
    playback: Playback<4>,
    position: Locations<4>,
    mode: MovementMode,
    gait: QuadGait,
    state: TransitionState,
}

/// Ease with zero velocity at both ends.
fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: Point3D, b: Point3D, t: f32) -> Point3D {
    a + (b - a) * t
}

/// Phase durations are speed-scaled, then rounded up to whole ticks so a
/// phase always ends exactly on a tick boundary.
fn scaled_duration(base_ms: u32, speed: f32) -> u32 {
    let scaled = (base_ms as f32 / speed) as u32;
    scaled.div_ceil(config::MOVEMENT_INTERVAL_MS) * config::MOVEMENT_INTERVAL_MS
}

impl Default for QuadWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadWalker {
    pub fn new() -> Self {
        let playback = Playback::new(&quad_tables::STANDBY);
        let position = *playback.position();
        Self {
            playback,
            position,
            mode: MovementMode::Standby,
            gait: QuadGait::Trot,
            state: TransitionState::Idle,
        }
    }

    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    pub fn gait(&self) -> QuadGait {
        self.gait
    }

    pub fn position(&self) -> &Locations<4> {
        &self.position
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.playback.set_speed(speed);
    }

    pub fn speed(&self) -> f32 {
        self.playback.speed()
    }

    /// Wall-clock duration of one full cycle of `mode` at the current speed.
    pub fn cycle_duration_ms(&self, mode: MovementMode) -> f32 {
        self.table_for(mode).cycle_duration_ms(self.playback.speed())
    }

    /// True when no transition is pending or in flight.
    pub fn is_stable(&self) -> bool {
        matches!(self.state, TransitionState::Idle)
    }

    fn table_for(&self, mode: MovementMode) -> &'static GaitTable<4> {
        quad_tables::select(self.gait, mode)
    }

    /// Switch gait family. Only legal in stable standby; anywhere else the
    /// footfall pattern is in flux and the switch is rejected.
    pub fn set_gait(&mut self, gait: QuadGait) -> Result<(), GaitSwitchRejected> {
        if self.mode != MovementMode::Standby || !self.is_stable() {
            warn!("gait switch to {gait:?} rejected: not in stable standby");
            return Err(GaitSwitchRejected);
        }
        self.gait = gait;
        info!("gait family: {gait:?}");
        Ok(())
    }

    /// Request a movement mode. Classification and any transition planning
    /// happen immediately; the actual motion unfolds over subsequent ticks.
    pub fn set_mode(&mut self, new_mode: MovementMode) {
        // Climb is not stable on four legs; degrade to standby.
        let new_mode = if new_mode == MovementMode::Climb {
            info!("climb unsupported on quadruped, degrading to standby");
            MovementMode::Standby
        } else {
            new_mode
        };

        match &self.state {
            TransitionState::Grounding { .. } | TransitionState::Aligning { .. } => {
                // Forward-only replan from wherever the legs are right now.
                if let TransitionState::Aligning { target_mode, .. } = &self.state {
                    if *target_mode == new_mode {
                        return;
                    }
                }
                info!("transition interrupted, replanning toward {new_mode:?}");
                self.start_aligning(new_mode);
                return;
            }
            TransitionState::WaitingForEntry { target, .. } if *target == new_mode => return,
            _ => {}
        }

        if new_mode == self.mode && matches!(self.state, TransitionState::Idle) {
            return;
        }

        if self.mode.is_posture() && new_mode.is_posture() {
            self.switch_posture(new_mode);
            return;
        }

        if self.mode == MovementMode::Standby {
            // Standby has no stride to finish and all feet grounded.
            self.start_aligning(new_mode);
            return;
        }

        let pair_hop = match (self.mode.pair_group(), new_mode.pair_group()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        self.state = TransitionState::WaitingForEntry {
            target: new_mode,
            align: !pair_hop,
        };
    }

    /// Posture-to-posture switches keep the feet planted; the table swap is
    /// a soft blend, no grounding or alignment needed.
    fn switch_posture(&mut self, new_mode: MovementMode) {
        let table = self.table_for(new_mode);
        let snap = table.len() != self.playback.table().len()
            || self.mode == MovementMode::Standby
            || new_mode == MovementMode::Standby;
        if snap {
            self.playback.set_table(table);
        } else {
            self.playback.switch_preserving_index(table);
        }
        self.mode = new_mode;
        self.state = TransitionState::Idle;
    }

    /// Advance one tick and return the chassis position.
    pub fn next(&mut self, elapsed_ms: i32) -> &Locations<4> {
        enum Followup {
            None,
            Ground(MovementMode),
            Align(MovementMode),
            Commit(MovementMode),
            AdvanceArc,
        }

        let mut followup = Followup::None;
        match &mut self.state {
            TransitionState::Idle => {
                self.position = *self.playback.next(elapsed_ms);
            }
            TransitionState::WaitingForEntry { target, align } => {
                let (target, align) = (*target, *align);
                self.position = *self.playback.next(elapsed_ms);
                if self.playback.at_entry() {
                    followup = if align {
                        Followup::Ground(target)
                    } else {
                        // Pair tables share this pose at their entries; the
                        // hop is physically a no-op.
                        Followup::Commit(target)
                    };
                }
            }
            TransitionState::Grounding {
                target_mode,
                start,
                grounded,
                elapsed_ms: elapsed,
                total_ms,
            } => {
                *elapsed = (*elapsed + elapsed_ms.max(0) as u32).min(*total_ms);
                let ratio = smoothstep(*elapsed as f32 / *total_ms as f32);
                for i in 0..4 {
                    self.position[i] = lerp(start[i], grounded[i], ratio);
                }

                if *elapsed >= *total_ms {
                    // Exact snap kills accumulated float drift before the
                    // per-leg arcs measure their start points.
                    self.position = *grounded;
                    followup = Followup::Align(*target_mode);
                }
            }
            TransitionState::Aligning {
                target_mode,
                phase_start,
                phase_target,
                elapsed_ms: elapsed,
                total_ms,
                queue,
                ..
            } => match queue.first() {
                None => followup = Followup::Commit(*target_mode),
                Some(&leg) => {
                    *elapsed = (*elapsed + elapsed_ms.max(0) as u32).min(*total_ms);
                    let ratio = smoothstep(*elapsed as f32 / *total_ms as f32);
                    self.position[leg] = lerp(*phase_start, *phase_target, ratio);

                    if *elapsed >= *total_ms {
                        self.position[leg] = *phase_target;
                        followup = Followup::AdvanceArc;
                    }
                }
            },
        }

        match followup {
            Followup::None => {}
            Followup::Ground(target) => self.start_grounding(target),
            Followup::Align(target) => self.start_aligning(target),
            Followup::Commit(target) => self.commit_to(target),
            Followup::AdvanceArc => self.advance_alignment(),
        }
        &self.position
    }

    fn start_grounding(&mut self, target_mode: MovementMode) {
        let start = self.position;
        let floor = start.min_z();
        let mut grounded = start;
        for i in 0..4 {
            grounded[i].z = floor;
        }
        self.state = TransitionState::Grounding {
            target_mode,
            start,
            grounded,
            elapsed_ms: 0,
            total_ms: scaled_duration(config::GROUNDING_DURATION_MS, self.playback.speed()),
        };
    }

    /// Plan the per-leg alignment toward `target_mode`'s entry frame from
    /// the current position. Ground-ending legs move first.
    fn start_aligning(&mut self, target_mode: MovementMode) {
        let entry_pose = *self.table_for(target_mode).entry_frame();
        let floor = entry_pose.min_z();

        let mut ground_enders: Vec<usize, 4> = Vec::new();
        let mut air_enders: Vec<usize, 4> = Vec::new();
        for &leg in ALIGN_LEG_ORDER.iter() {
            if self.position[leg].distance_sq(&entry_pose[leg])
                <= config::ALIGN_DISTANCE_SQ_THRESHOLD
            {
                continue;
            }
            if entry_pose[leg].z > floor + GROUND_EPSILON {
                // Infallible: both vecs hold at most 4 legs.
                let _ = air_enders.push(leg);
            } else {
                let _ = ground_enders.push(leg);
            }
        }

        let mut queue = ground_enders;
        for leg in air_enders {
            let _ = queue.push(leg);
        }

        if queue.is_empty() {
            self.commit_to(target_mode);
            return;
        }

        self.state = TransitionState::Aligning {
            target_mode,
            entry_pose,
            queue,
            phase: ArcPhase::Lift,
            phase_start: Point3D::ZERO,
            phase_target: Point3D::ZERO,
            elapsed_ms: 0,
            total_ms: 0,
            ends_airborne: false,
            lift_z: 0.0,
        };
        self.begin_leg_arc();
    }

    /// Set up the lift phase for the leg at the front of the queue. The
    /// travel height is computed here, once, from the current position;
    /// recomputing it mid-arc compounds and must not happen.
    fn begin_leg_arc(&mut self) {
        let TransitionState::Aligning {
            entry_pose,
            queue,
            phase,
            phase_start,
            phase_target,
            elapsed_ms,
            total_ms,
            ends_airborne,
            lift_z,
            ..
        } = &mut self.state
        else {
            return;
        };
        let leg = queue[0];
        let start = self.position[leg];
        let target = entry_pose[leg];
        let floor = entry_pose.min_z();

        *ends_airborne = target.z > floor + GROUND_EPSILON;
        *lift_z = if *ends_airborne {
            // Two-phase arc: lift straight to the target height, translate,
            // and stay airborne.
            target.z
        } else {
            start.z.max(target.z) + config::ALIGN_CLEARANCE_MM
        };

        *phase = ArcPhase::Lift;
        *phase_start = start;
        *phase_target = Point3D::new(start.x, start.y, *lift_z);
        *elapsed_ms = 0;
        *total_ms = scaled_duration(config::ALIGN_LIFT_DURATION_MS, self.playback.speed());
    }

    /// A phase finished: move to the leg's next phase, the next leg, or
    /// commit the whole transition.
    fn advance_alignment(&mut self) {
        enum Followup {
            None,
            NextLeg,
            Commit(MovementMode),
        }

        let speed = self.playback.speed();
        let mut followup = Followup::None;
        {
            let TransitionState::Aligning {
                target_mode,
                entry_pose,
                queue,
                phase,
                phase_start,
                phase_target,
                elapsed_ms,
                total_ms,
                ends_airborne,
                lift_z,
            } = &mut self.state
            else {
                return;
            };
            let leg = queue[0];
            let target = entry_pose[leg];

            match *phase {
                ArcPhase::Lift => {
                    *phase = ArcPhase::Translate;
                    *phase_start = *phase_target;
                    *phase_target = Point3D::new(target.x, target.y, *lift_z);
                    *elapsed_ms = 0;
                    *total_ms = scaled_duration(config::ALIGN_TRANSLATE_DURATION_MS, speed);
                }
                ArcPhase::Translate if !*ends_airborne => {
                    *phase = ArcPhase::Lower;
                    *phase_start = *phase_target;
                    *phase_target = target;
                    *elapsed_ms = 0;
                    *total_ms = scaled_duration(config::ALIGN_LOWER_DURATION_MS, speed);
                }
                ArcPhase::Translate | ArcPhase::Lower => {
                    // This leg is done.
                    self.position[leg] = target;
                    queue.remove(0);
                    followup = if queue.is_empty() {
                        Followup::Commit(*target_mode)
                    } else {
                        Followup::NextLeg
                    };
                }
            }
        }

        match followup {
            Followup::None => {}
            Followup::NextLeg => self.begin_leg_arc(),
            Followup::Commit(target) => self.commit_to(target),
        }
    }

    /// Hand control back to plain playback on the target table.
    fn commit_to(&mut self, target_mode: MovementMode) {
        self.playback.set_table(self.table_for(target_mode));
        self.position = *self.playback.position();
        self.mode = target_mode;
        self.state = TransitionState::Idle;
        info!("mode: {target_mode:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: i32 = config::MOVEMENT_INTERVAL_MS as i32;

    fn walker() -> QuadWalker {
        let mut w = QuadWalker::new();
        w.set_speed(1.0);
        w
    }

    fn run_until_stable(w: &mut QuadWalker, max_ticks: usize) -> usize {
        for i in 0..max_ticks {
            if w.is_stable() {
                return i;
            }
            w.next(TICK);
        }
        panic!("transition did not settle within {max_ticks} ticks");
    }

    /// Largest per-tick foot displacement, squared, before it counts as a
    /// teleport. Arc phases stay under 10 mm per tick at full speed.
    const MAX_STEP_SQ: f32 = 30.0 * 30.0;

    fn run_bounded(w: &mut QuadWalker, max_ticks: usize) {
        let mut prev = *w.position();
        for _ in 0..max_ticks {
            if w.is_stable() {
                return;
            }
            let pos = *w.next(TICK);
            let worst = (0..4)
                .map(|leg| prev[leg].distance_sq(&pos[leg]))
                .fold(0.0f32, f32::max);
            assert!(worst < MAX_STEP_SQ, "leg moved {worst} sq mm in one tick");
            prev = pos;
        }
        panic!("transition did not settle within {max_ticks} ticks");
    }

    #[test]
    fn starts_in_stable_standby() {
        let w = walker();
        assert_eq!(w.mode(), MovementMode::Standby);
        assert!(w.is_stable());
        assert_eq!(*w.position(), *quad_tables::STANDBY.entry_frame());
    }

    #[test]
    fn leaving_standby_aligns_without_grounding() {
        let mut w = walker();
        w.set_mode(MovementMode::Forward);
        // immediately in an alignment (standby is already flat)
        assert!(!w.is_stable());
        run_until_stable(&mut w, 200);
        assert_eq!(w.mode(), MovementMode::Forward);
        assert_eq!(*w.position(), *w.table_for(MovementMode::Forward).entry_frame());
    }

    #[test]
    fn alignment_moves_one_leg_at_a_time() {
        let mut w = walker();
        w.set_mode(MovementMode::Forward);
        let entry = *w.table_for(MovementMode::Forward).entry_frame();
        let mut max_in_transit = 0;
        for _ in 0..200 {
            if w.is_stable() {
                break;
            }
            let pos = *w.next(TICK);
            // airborne legs are fine once parked at their swing-apex
            // target; anything else off the ground is a leg in transit
            let floor = pos.min_z();
            let in_transit = (0..4)
                .filter(|&leg| {
                    pos[leg].z > floor + GROUND_EPSILON
                        && pos[leg].distance_sq(&entry[leg]) > 1e-4
                })
                .count();
            max_in_transit = max_in_transit.max(in_transit);
        }
        assert!(w.is_stable());
        assert!(max_in_transit <= 1, "{max_in_transit} legs in transit");
    }

    #[test]
    fn pair_switch_waits_for_entry_then_hops() {
        let mut w = walker();
        w.set_mode(MovementMode::Forward);
        run_until_stable(&mut w, 200);

        let pos_before = *w.position();
        w.set_mode(MovementMode::Backward);
        assert_eq!(w.mode(), MovementMode::Forward); // not committed yet
        run_until_stable(&mut w, 500);
        assert_eq!(w.mode(), MovementMode::Backward);
        // the hop happens at the shared entry pose; nothing teleports
        let fwd_entry = w.table_for(MovementMode::Forward).entry_frame();
        let bwd_entry = w.table_for(MovementMode::Backward).entry_frame();
        assert_eq!(*fwd_entry, *bwd_entry);
        let _ = pos_before;
    }

    #[test]
    fn cross_group_switch_grounds_every_leg() {
        let mut w = walker();
        w.set_mode(MovementMode::Forward);
        run_until_stable(&mut w, 200);

        w.set_mode(MovementMode::TurnLeft);
        // walk through WaitingForEntry into Grounding and sample its end
        let mut saw_flat = false;
        for _ in 0..500 {
            if w.is_stable() {
                break;
            }
            let pos = *w.next(TICK);
            if (pos.max_z() - pos.min_z()).abs() < 1e-4 {
                saw_flat = true;
            }
        }
        assert!(w.is_stable());
        assert!(saw_flat, "grounding never produced a flat stance");
        assert_eq!(w.mode(), MovementMode::TurnLeft);
    }

    #[test]
    fn interrupting_alignment_replans_forward() {
        let mut w = walker();
        w.set_mode(MovementMode::Forward);
        // let the alignment get mid-arc
        for _ in 0..5 {
            w.next(TICK);
        }
        assert!(!w.is_stable());
        w.set_mode(MovementMode::ShiftLeft);
        run_bounded(&mut w, 500);
        assert_eq!(w.mode(), MovementMode::ShiftLeft);
        assert_eq!(
            *w.position(),
            *w.table_for(MovementMode::ShiftLeft).entry_frame()
        );
    }

    #[test]
    fn interrupting_grounding_replans_without_jumps() {
        let mut w = walker();
        w.set_mode(MovementMode::Forward);
        run_until_stable(&mut w, 200);

        // cross-group request: playback runs to its entry, then grounds
        w.set_mode(MovementMode::TurnLeft);
        for _ in 0..500 {
            if matches!(w.state, TransitionState::Grounding { .. }) {
                break;
            }
            w.next(TICK);
        }
        assert!(matches!(w.state, TransitionState::Grounding { .. }));
        w.next(TICK); // partway down

        w.set_mode(MovementMode::ShiftRight);
        run_bounded(&mut w, 500);
        assert_eq!(w.mode(), MovementMode::ShiftRight);
        assert_eq!(
            *w.position(),
            *w.table_for(MovementMode::ShiftRight).entry_frame()
        );
    }

    #[test]
    fn posture_modes_switch_immediately() {
        let mut w = walker();
        w.set_mode(MovementMode::RotateX);
        assert!(w.is_stable());
        assert_eq!(w.mode(), MovementMode::RotateX);
        w.set_mode(MovementMode::Twist);
        assert!(w.is_stable());
        assert_eq!(w.mode(), MovementMode::Twist);
    }

    #[test]
    fn climb_degrades_to_standby() {
        let mut w = walker();
        w.set_mode(MovementMode::Climb);
        assert_eq!(w.mode(), MovementMode::Standby);
        assert!(w.is_stable());
    }

    #[test]
    fn gait_switch_only_in_stable_standby() {
        let mut w = walker();
        assert!(w.set_gait(QuadGait::Walk).is_ok());
        assert_eq!(w.gait(), QuadGait::Walk);

        w.set_mode(MovementMode::Forward);
        assert_eq!(w.set_gait(QuadGait::Creep), Err(GaitSwitchRejected));
        assert_eq!(w.gait(), QuadGait::Walk);

        run_until_stable(&mut w, 200);
        // moving, still not standby
        assert_eq!(w.set_gait(QuadGait::Creep), Err(GaitSwitchRejected));
    }

    #[test]
    fn cycle_duration_is_inverse_in_speed() {
        let mut w = walker();
        w.set_speed(1.0);
        let fast = w.cycle_duration_ms(MovementMode::Forward);
        w.set_speed(0.5);
        let slow = w.cycle_duration_ms(MovementMode::Forward);
        assert_eq!(slow, 2.0 * fast);
    }
}
