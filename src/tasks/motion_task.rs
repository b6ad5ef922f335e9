//! Fixed-rate motion loops for both chassis.
//!
//! Each loop ticks at the control interval, folds the latest shared
//! [`MotionRequest`](crate::robot::state::MotionRequest) into its robot and
//! advances it by one tick. Requests are level-triggered: the loop compares
//! against what it last applied so a held request does not replan a
//! transition every tick.
use embassy_time::{Duration, Ticker};
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::robot::config;
use crate::robot::hexapod::HexapodRobot;
use crate::robot::joint::Joint;
use crate::robot::leg::{HexLeg, QuadLeg};
use crate::robot::quad::QuadRobot;
use crate::robot::state;

/// Drives a quadruped forever at the control-loop rate.
pub async fn quad_motion_loop<PWM>(mut robot: QuadRobot<PWM>) -> !
where
    PWM: SetDutyCycle,
{
    let mut ticker = Ticker::every(Duration::from_millis(config::MOVEMENT_INTERVAL_MS as u64));
    let mut applied = state::snapshot();
    robot.set_speed_level(applied.speed);
    robot.set_mode(applied.mode);

    loop {
        ticker.next().await;
        let request = state::snapshot();

        if request.speed != applied.speed {
            robot.set_speed_level(request.speed);
        }
        if request.gait != applied.gait {
            // rejection outside stable standby is logged by the walker
            let _ = robot.set_gait(request.gait);
        }
        if request.mode != applied.mode {
            robot.set_mode(request.mode);
        }
        if let Some((leg, joint, offset)) = state::take_calibration() {
            if leg < 4 && joint < 3 {
                robot.set_calibration(
                    QuadLeg::from(leg as usize),
                    Joint::from(joint as usize),
                    offset,
                    true,
                );
            } else {
                warn!("calibration target {}:{} out of range", leg, joint);
            }
        }
        applied = request;

        robot.tick(config::MOVEMENT_INTERVAL_MS);
    }
}

/// Drives a hexapod forever at the control-loop rate.
pub async fn hexapod_motion_loop<PWM>(mut robot: HexapodRobot<PWM>) -> !
where
    PWM: SetDutyCycle,
{
    let mut ticker = Ticker::every(Duration::from_millis(config::MOVEMENT_INTERVAL_MS as u64));
    let mut applied = state::snapshot();
    robot.set_mode(applied.mode);

    loop {
        ticker.next().await;
        let request = state::snapshot();

        if request.control != applied.control {
            robot.set_control_mode(request.control);
        }
        if request.mode != applied.mode {
            robot.set_mode(request.mode);
        }
        if request.velocity != applied.velocity {
            robot.set_velocity(request.velocity);
        }
        if request.params != applied.params {
            robot.set_parameters(request.params);
        }
        if request.pose != applied.pose {
            robot.set_pose(request.pose);
        }
        if request.walk_pitch != applied.walk_pitch {
            robot.set_walk_pitch(request.walk_pitch);
        }
        if request.speed != applied.speed {
            robot.set_speed(request.speed.multiplier());
        }
        if let Some((leg, joint, offset)) = state::take_calibration() {
            if leg < 6 && joint < 3 {
                robot.set_calibration(
                    HexLeg::from(leg as usize),
                    Joint::from(joint as usize),
                    offset,
                    true,
                );
            } else {
                warn!("calibration target {}:{} out of range", leg, joint);
            }
        }
        applied = request;

        robot.tick(config::MOVEMENT_INTERVAL_MS);
    }
}
