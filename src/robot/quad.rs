//! Quadruped chassis assembly: four legs driven by the gait-transition
//! walker.
use embedded_hal::pwm::SetDutyCycle;
use fugit::Hertz;
use log::info;

use crate::gait::{GaitSwitchRejected, MovementMode, QuadGait, QuadWalker, SpeedLevel};
use crate::kinematics::Locations;
use crate::robot::joint::Joint;
use crate::robot::leg::{Leg, QuadLeg};
use crate::robot::servo::Servo;

pub struct QuadRobot<PWM> {
    legs: [Leg<PWM>; 4],
    walker: QuadWalker,
    speed_level: SpeedLevel,
}

impl<PWM> QuadRobot<PWM>
where
    PWM: SetDutyCycle,
{
    /// Builds the robot from its twelve PWM channels, outer array in
    /// canonical leg order, inner in joint order.
    pub fn new(channels: [[PWM; 3]; 4], max_duty: u16, frequency: Hertz<u32>) -> Self {
        let mut leg_index = 0usize;
        let legs = channels.map(|pwms| {
            let leg = QuadLeg::from(leg_index);
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

        let mut walker = QuadWalker::new();
        let speed_level = SpeedLevel::Medium;
        walker.set_speed(speed_level.multiplier());

        Self {
            legs,
            walker,
            speed_level,
        }
    }

    /// One control tick: advances the walker and drives every leg toward
    /// its interpolated position.
    pub fn tick(&mut self, elapsed_ms: u32) {
        let position = *self.walker.next(elapsed_ms as i32);
        for (leg, target) in self.legs.iter_mut().zip(position.iter()) {
            leg.move_tip(*target);
        }
    }

    pub fn set_mode(&mut self, mode: MovementMode) {
        self.walker.set_mode(mode);
    }

    pub fn mode(&self) -> MovementMode {
        self.walker.mode()
    }

    pub fn set_gait(&mut self, gait: QuadGait) -> Result<(), GaitSwitchRejected> {
        self.walker.set_gait(gait)
    }

    pub fn gait(&self) -> QuadGait {
        self.walker.gait()
    }

    pub fn set_speed_level(&mut self, level: SpeedLevel) {
        self.speed_level = level;
        self.walker.set_speed(level.multiplier());
        info!("speed level {:?} ({})", level, level.multiplier());
    }

    pub fn speed_level(&self) -> SpeedLevel {
        self.speed_level
    }

    pub fn position(&self) -> &Locations<4> {
        self.walker.position()
    }

    pub fn is_stable(&self) -> bool {
        self.walker.is_stable()
    }

    /// Wall-clock duration of one full cycle of `mode` at the current
    /// speed.
    pub fn cycle_duration_ms(&self, mode: MovementMode) -> f32 {
        self.walker.cycle_duration_ms(mode)
    }

    pub fn joint_angles(&self, leg: QuadLeg) -> [f32; 3] {
        self.legs[leg as usize].joint_angles()
    }

    /// Writes a per-servo calibration offset (degrees). With `update` the
    /// servo is re-driven immediately so the operator sees the change.
    pub fn set_calibration(&mut self, leg: QuadLeg, joint: Joint, offset: i16, update: bool) {
        let leg = &mut self.legs[leg as usize];
        leg.servo_mut(joint as usize).set_offset(offset, update);
        leg.force_reset_tip_position();
    }

    pub fn calibration(&self) -> [[i16; 3]; 4] {
        let mut offsets = [[0i16; 3]; 4];
        for (leg, row) in self.legs.iter().zip(offsets.iter_mut()) {
            for (joint, value) in row.iter_mut().enumerate() {
                *value = leg.servo(joint).offset();
            }
        }
        offsets
    }

    pub fn clear_calibration(&mut self) {
        for leg in self.legs.iter_mut() {
            for joint in 0..3 {
                leg.servo_mut(joint).set_offset(0, false);
            }
            leg.force_reset_tip_position();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    use embedded_hal::pwm::ErrorType;
    use fugit::RateExtU32;

    #[derive(Debug, Default)]
    struct CountingPwm {
        writes: usize,
    }

    impl ErrorType for CountingPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for CountingPwm {
        fn max_duty_cycle(&self) -> u16 {
            4096
        }

        fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Infallible> {
            self.writes += 1;
            Ok(())
        }
    }

    fn robot() -> QuadRobot<CountingPwm> {
        QuadRobot::new(
            core::array::from_fn(|_| core::array::from_fn(|_| CountingPwm::default())),
            4096,
            50u32.Hz(),
        )
    }

    #[test]
    fn first_tick_drives_the_standby_stance() {
        let mut robot = robot();
        robot.tick(20);
        for leg in QuadLeg::ALL {
            let angles = robot.joint_angles(leg);
            // standby is symmetric: every coxa centered, femur and tibia
            // bent the same way
            assert!(angles[0].abs() < 1.0, "{leg}: {angles:?}");
        }
        assert_eq!(robot.position()[0].z, robot.position()[3].z);
    }

    #[test]
    fn speed_level_scales_cycle_duration() {
        let mut robot = robot();
        robot.set_speed_level(SpeedLevel::Fast);
        let fast = robot.cycle_duration_ms(MovementMode::Forward);
        robot.set_speed_level(SpeedLevel::Slowest);
        let slow = robot.cycle_duration_ms(MovementMode::Forward);
        assert!(slow > 3.9 * fast && slow < 4.1 * fast);
    }

    #[test]
    fn calibration_roundtrip() {
        let mut robot = robot();
        robot.set_calibration(QuadLeg::BackLeft, Joint::Femur, -7, false);
        assert_eq!(robot.calibration()[2][1], -7);
        robot.clear_calibration();
        assert_eq!(robot.calibration(), [[0; 3]; 4]);
    }
}
