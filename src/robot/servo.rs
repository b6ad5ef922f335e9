//! Hobby-servo driver over a generic PWM channel.
//!
//! Angles are degrees from the joint's neutral position, clamped to the
//! joint's mechanical range. The pulse math targets the usual 50 Hz RC
//! servo timing: 1500 µs center, a 500–2500 µs span mapping ±90°.
use embedded_hal::pwm::SetDutyCycle;
use fugit::Hertz;
use log::{error, info};

use crate::robot::joint::Joint;

const PULSE_CENTER_US: i32 = 1500;
const PULSE_MIN_US: i32 = 500;
const PULSE_MAX_US: i32 = 2500;
const PULSE_RANGE_US: f32 = (PULSE_MAX_US - PULSE_CENTER_US) as f32;

#[derive(Debug)]
pub struct Servo<PWM> {
    pwm: PWM,
    joint: Joint,
    /// PWM channel, `leg * 3 + joint`. Only used for diagnostics.
    channel: u8,
    max_duty: u16,
    frequency: Hertz<u32>,
    /// Last requested angle, before offset and clamping. Kept so a
    /// calibration change can re-drive the same request.
    commanded: f32,
    /// Last driven angle, after offset and clamping.
    angle: f32,
    offset: i16,
    last_duty: Option<u16>,
}

impl<PWM> Servo<PWM>
where
    PWM: SetDutyCycle,
{
    pub fn new(pwm: PWM, max_duty: u16, frequency: Hertz<u32>, channel: u8, joint: Joint) -> Self {
        Self {
            pwm,
            joint,
            channel,
            max_duty,
            frequency,
            commanded: 0.0,
            angle: 0.0,
            offset: 0,
            last_duty: None,
        }
    }

    /// Drives the joint to `angle` degrees from neutral.
    ///
    /// The calibration offset is folded in first, then the result is
    /// clamped to the joint's mechanical travel and logged if it was out of
    /// range; the clamped value is what [`Self::angle`] reports afterwards.
    /// Writes that would not change the duty register are skipped.
    pub fn set_angle(&mut self, angle: f32) {
        let range = self.joint.range();
        let adjust = self.joint.adjust();
        self.commanded = angle;

        let mut angle = angle + self.offset as f32;
        if angle > range + adjust {
            info!("servo {}: angle {} exceeds range", self.channel, angle);
            angle = range;
        } else if angle < -range + adjust {
            info!("servo {}: angle {} exceeds range", self.channel, angle);
            angle = -range;
        }
        self.angle = angle;

        let mut drive = angle - adjust;
        if self.joint.inverted() {
            drive = -drive;
        }

        let pulse = PULSE_CENTER_US + (drive * (PULSE_RANGE_US / 90.0)) as i32;
        let pulse = pulse.clamp(PULSE_MIN_US, PULSE_MAX_US) as u32;

        // Scale the pulse width to the duty register resolution. The width
        // of the pulse drives the angle, not the frequency.
        let period_us = 1_000_000 / self.frequency.raw();
        let duty = ((pulse * self.max_duty as u32) / period_us).min(self.max_duty as u32) as u16;

        if self.last_duty == Some(duty) {
            return;
        }
        self.last_duty = Some(duty);

        if let Err(e) = self.pwm.set_duty_cycle(duty) {
            error!(
                "servo {} ({}): duty write failed: {:?}",
                self.channel, self.joint, e
            );
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn offset(&self) -> i16 {
        self.offset
    }

    /// Sets the calibration offset in degrees. With `update` the servo is
    /// re-driven at its current angle so the change takes effect
    /// immediately.
    pub fn set_offset(&mut self, offset: i16, update: bool) {
        self.offset = offset;
        if update {
            self.last_duty = None;
            self.set_angle(self.commanded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    use embedded_hal::pwm::ErrorType;
    use fugit::RateExtU32;

    /// Records every duty write so tests can check what reached the wire.
    struct RecordingPwm {
        writes: std::vec::Vec<u16>,
    }

    impl RecordingPwm {
        fn new() -> Self {
            Self { writes: std::vec::Vec::new() }
        }
    }

    impl ErrorType for &mut RecordingPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for &mut RecordingPwm {
        fn max_duty_cycle(&self) -> u16 {
            4096
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
            self.writes.push(duty);
            Ok(())
        }
    }

    fn servo(pwm: &mut RecordingPwm, joint: Joint) -> Servo<&mut RecordingPwm> {
        Servo::new(pwm, 4096, 50u32.Hz(), 0, joint)
    }

    #[test]
    fn center_angle_gives_center_pulse() {
        let mut pwm = RecordingPwm::new();
        let mut s = servo(&mut pwm, Joint::Coxa);
        s.set_angle(0.0);
        // 1500 µs of a 20000 µs period at 4096 counts = 307
        assert_eq!(pwm.writes, vec![307]);
    }

    #[test]
    fn out_of_range_clamps_to_travel() {
        let mut pwm = RecordingPwm::new();
        let mut s = servo(&mut pwm, Joint::Coxa);
        s.set_angle(90.0);
        assert_eq!(s.angle(), 45.0);
        s.set_angle(-90.0);
        assert_eq!(s.angle(), -45.0);
    }

    #[test]
    fn femur_adjust_shifts_the_clamp_window() {
        let mut pwm = RecordingPwm::new();
        let mut s = servo(&mut pwm, Joint::Femur);
        // 70 < 60 + 15, inside the shifted window
        s.set_angle(70.0);
        assert_eq!(s.angle(), 70.0);
        s.set_angle(80.0);
        assert_eq!(s.angle(), 60.0);
    }

    #[test]
    fn repeated_angle_writes_once() {
        let mut pwm = RecordingPwm::new();
        let mut s = servo(&mut pwm, Joint::Tibia);
        s.set_angle(10.0);
        s.set_angle(10.0);
        s.set_angle(10.0);
        assert_eq!(pwm.writes.len(), 1);
    }

    #[test]
    fn offset_update_redrives_at_current_angle() {
        let mut pwm = RecordingPwm::new();
        let mut s = servo(&mut pwm, Joint::Coxa);
        s.set_angle(0.0);
        s.set_offset(9, true);
        // 9° of offset is 100 µs, i.e. 1600 µs → 327 counts
        assert_eq!(pwm.writes, vec![307, 327]);
    }
}
