//! Hexapod chassis assembly: six legs driven either by predefined table
//! playback (stand control) or the realtime gait generator (walk control),
//! with the body-pose transform layered on top.
use embedded_hal::pwm::SetDutyCycle;
use fugit::Hertz;
use log::info;

use crate::gait::{
    hex_tables, BodyPose, ControlMode, GaitParameters, MovementMode, Playback, PoseController,
    RealtimeGait, Velocity,
};
use crate::kinematics::Locations;
use crate::robot::config;
use crate::robot::joint::Joint;
use crate::robot::leg::{HexLeg, Leg};
use crate::robot::servo::Servo;

pub struct HexapodRobot<PWM> {
    legs: [Leg<PWM>; 6],
    control: ControlMode,
    mode: MovementMode,
    playback: Playback<6>,
    realtime: RealtimeGait,
    pose: PoseController<6>,
    /// Forward lean while walking, degrees, clamped tighter than the
    /// standing pose limit.
    walk_pitch: f32,
}

impl<PWM> HexapodRobot<PWM>
where
    PWM: SetDutyCycle,
{
    /// Builds the robot from its eighteen PWM channels, outer array in
    /// canonical leg order, inner in joint order.
    pub fn new(channels: [[PWM; 3]; 6], max_duty: u16, frequency: Hertz<u32>) -> Self {
        let mut leg_index = 0usize;
        let legs = channels.map(|pwms| {
            let leg = HexLeg::from(leg_index);
            let base = (leg_index * 3) as u8;
            leg_index += 1;

            let mut joint_index = 0usize;
            let servos = pwms.map(|pwm| {
                let servo = Servo::new(
                    pwm,
                    max_duty,
                    frequency,
                    base + joint_index as u8,
                    Joint::from(joint_index),
                );
                joint_index += 1;
                servo
            });
            Leg::new(leg.frame(), servos)
        });

        Self {
            legs,
            control: ControlMode::Stand,
            mode: MovementMode::Standby,
            playback: Playback::new(&hex_tables::STANDBY),
            realtime: RealtimeGait::new(),
            pose: PoseController::new(config::HEX_MOUNTS),
            walk_pitch: 0.0,
        }
    }

    /// One control tick. Stand control plays the predefined table and
    /// applies the operator pose; walk control synthesizes the stance from
    /// the commanded velocity and applies the walking lean.
    pub fn tick(&mut self, elapsed_ms: u32) {
        let output = match self.control {
            ControlMode::Stand => {
                let base = *self.playback.next(elapsed_ms as i32);
                self.pose.apply(&base)
            }
            ControlMode::Walk => {
                let base = *self.realtime.update(elapsed_ms);
                let lean = BodyPose {
                    pitch: self.walk_pitch,
                    ..BodyPose::default()
                };
                self.pose.apply_pose(&base, &lean)
            }
        };
        for (leg, target) in self.legs.iter_mut().zip(output.iter()) {
            leg.move_tip(*target);
        }
    }

    pub fn set_control_mode(&mut self, control: ControlMode) {
        if self.control == control {
            return;
        }
        info!("control mode {:?}", control);
        self.control = control;
        match control {
            ControlMode::Walk => self.realtime.reset(),
            ControlMode::Stand => {
                self.mode = MovementMode::Standby;
                self.playback.set_table(hex_tables::select(self.mode));
            }
        }
    }

    pub fn control_mode(&self) -> ControlMode {
        self.control
    }

    /// Selects a predefined movement. Only meaningful in stand control;
    /// modes without a hexapod table degrade to standby inside
    /// [`hex_tables::select`].
    pub fn set_mode(&mut self, mode: MovementMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.playback.set_table(hex_tables::select(mode));
    }

    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.realtime.set_velocity(velocity);
    }

    pub fn set_parameters(&mut self, params: GaitParameters) {
        self.realtime.set_parameters(params);
    }

    pub fn set_pose(&mut self, pose: BodyPose) {
        self.pose.set_pose(pose);
    }

    pub fn set_walk_pitch(&mut self, pitch: f32) {
        let clamped = pitch.clamp(-config::MAX_WALK_PITCH, config::MAX_WALK_PITCH);
        if clamped != pitch {
            info!("walk pitch {} clamped to {}", pitch, clamped);
        }
        self.walk_pitch = clamped;
    }

    pub fn walk_pitch(&self) -> f32 {
        self.walk_pitch
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.playback.set_speed(speed);
    }

    pub fn tip_positions(&self) -> Locations<6> {
        let mut tips = Locations::default();
        for (i, leg) in self.legs.iter().enumerate() {
            tips[i] = leg.tip();
        }
        tips
    }

    pub fn joint_angles(&self, leg: HexLeg) -> [f32; 3] {
        self.legs[leg as usize].joint_angles()
    }

    pub fn set_calibration(&mut self, leg: HexLeg, joint: Joint, offset: i16, update: bool) {
        let leg = &mut self.legs[leg as usize];
        leg.servo_mut(joint as usize).set_offset(offset, update);
        leg.force_reset_tip_position();
    }

    pub fn calibration(&self) -> [[i16; 3]; 6] {
        let mut offsets = [[0i16; 3]; 6];
        for (leg, row) in self.legs.iter().zip(offsets.iter_mut()) {
            for (joint, value) in row.iter_mut().enumerate() {
                *value = leg.servo(joint).offset();
            }
        }
        offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    use embedded_hal::pwm::ErrorType;
    use fugit::RateExtU32;

    #[derive(Debug, Default)]
    struct NullPwm;

    impl ErrorType for NullPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for NullPwm {
        fn max_duty_cycle(&self) -> u16 {
            4096
        }

        fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Infallible> {
            Ok(())
        }
    }

    fn robot() -> HexapodRobot<NullPwm> {
        HexapodRobot::new(
            core::array::from_fn(|_| core::array::from_fn(|_| NullPwm)),
            4096,
            50u32.Hz(),
        )
    }

    #[test]
    fn stand_control_holds_the_standby_stance() {
        let mut robot = robot();
        for _ in 0..30 {
            robot.tick(20);
        }
        assert_eq!(robot.tip_positions(), hex_tables::HEX_STANDBY_POSE);
    }

    #[test]
    fn walk_pitch_is_clamped() {
        let mut robot = robot();
        robot.set_walk_pitch(40.0);
        assert_eq!(robot.walk_pitch(), config::MAX_WALK_PITCH);
        robot.set_walk_pitch(-40.0);
        assert_eq!(robot.walk_pitch(), -config::MAX_WALK_PITCH);
    }

    #[test]
    fn walk_control_at_zero_velocity_is_standby() {
        let mut robot = robot();
        robot.set_control_mode(ControlMode::Walk);
        robot.tick(20);
        assert_eq!(robot.tip_positions(), hex_tables::HEX_STANDBY_POSE);
    }

    #[test]
    fn walking_lean_tilts_the_stance() {
        let mut robot = robot();
        robot.set_control_mode(ControlMode::Walk);
        robot.set_walk_pitch(10.0);
        robot.tick(20);
        let tips = robot.tip_positions();
        // pitching forward raises the front feet relative to the back ones
        assert!(tips[HexLeg::FrontRight].z != tips[HexLeg::BackRight].z);
    }
}
