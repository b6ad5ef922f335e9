//! Shared motion request, written by the comms task and read by the motion
//! loop once per tick.
use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::gait::{
    BodyPose, ControlMode, GaitParameters, MovementMode, QuadGait, SpeedLevel, Velocity,
};
use crate::robot::commands::RobotCommand;

/// Everything the motion loop needs to know about what the operator wants.
/// Quadruped fields and hexapod fields live side by side; each loop reads
/// the ones that apply to its chassis.
#[derive(Debug, Clone, Copy)]
pub struct MotionRequest {
    pub mode: MovementMode,
    pub gait: QuadGait,
    pub speed: SpeedLevel,
    pub velocity: Velocity,
    pub params: GaitParameters,
    pub pose: BodyPose,
    pub control: ControlMode,
    pub walk_pitch: f32,
    pub calibration: Option<(u8, u8, i16)>,
}

impl MotionRequest {
    const fn initial() -> Self {
        Self {
            mode: MovementMode::Standby,
            gait: QuadGait::Trot,
            speed: SpeedLevel::Medium,
            velocity: Velocity {
                vx: 0.0,
                vy: 0.0,
                vyaw: 0.0,
            },
            params: GaitParameters::DEFAULT,
            pose: BodyPose {
                roll: 0.0,
                pitch: 0.0,
                yaw: 0.0,
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            control: ControlMode::Stand,
            walk_pitch: 0.0,
            calibration: None,
        }
    }
}

pub static MOTION_REQUEST: Mutex<CriticalSectionRawMutex, RefCell<MotionRequest>> =
    Mutex::new(RefCell::new(MotionRequest::initial()));

/// Copy of the current request, taken under the lock.
pub fn snapshot() -> MotionRequest {
    MOTION_REQUEST.lock(|cell| *cell.borrow())
}

/// Folds a parsed command into the shared request. Calibration is a
/// one-shot: it stays set until a motion loop consumes it.
pub fn apply(command: RobotCommand) {
    MOTION_REQUEST.lock(|cell| {
        let mut request = cell.borrow_mut();
        match command {
            RobotCommand::SetMode(mode) => request.mode = mode,
            RobotCommand::SetGait(gait) => request.gait = gait,
            RobotCommand::SetSpeedLevel(level) => request.speed = level,
            RobotCommand::SetVelocity(velocity) => request.velocity = velocity,
            RobotCommand::SetParameters(params) => request.params = params,
            RobotCommand::SetPose(pose) => request.pose = pose,
            RobotCommand::SetWalkPitch(pitch) => request.walk_pitch = pitch,
            RobotCommand::SetControlMode(control) => request.control = control,
            RobotCommand::SetCalibration { leg, joint, offset } => {
                request.calibration = Some((leg, joint, offset));
            }
        }
    });
}

/// Takes the pending calibration write, if any, clearing it.
pub fn take_calibration() -> Option<(u8, u8, i16)> {
    MOTION_REQUEST.lock(|cell| cell.borrow_mut().calibration.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_updates_the_snapshot() {
        apply(RobotCommand::SetMode(MovementMode::Forward));
        apply(RobotCommand::SetSpeedLevel(SpeedLevel::Fast));
        let request = snapshot();
        assert_eq!(request.mode, MovementMode::Forward);
        assert_eq!(request.speed, SpeedLevel::Fast);
        // restore for other tests sharing the static
        apply(RobotCommand::SetMode(MovementMode::Standby));
        apply(RobotCommand::SetSpeedLevel(SpeedLevel::Medium));
    }

    #[test]
    fn calibration_is_consumed_once() {
        apply(RobotCommand::SetCalibration {
            leg: 1,
            joint: 2,
            offset: 5,
        });
        assert_eq!(take_calibration(), Some((1, 2, 5)));
        assert_eq!(take_calibration(), None);
    }
}
