//! Command types for robot control and inter-task communication.
//!
//! Defines the high-level [`RobotCommand`] enum the comms task hands to the
//! motion loop, plus the line-oriented text parsing used by the remote
//! protocol. A command line is whitespace-separated tokens: a verb followed
//! by its numeric arguments.
use crate::gait::{
    BodyPose, ControlMode, GaitParameters, MovementMode, QuadGait, SpeedLevel, Velocity,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RobotCommand {
    SetMode(MovementMode),
    SetGait(QuadGait),
    SetSpeedLevel(SpeedLevel),
    SetVelocity(Velocity),
    SetParameters(GaitParameters),
    SetPose(BodyPose),
    SetWalkPitch(f32),
    SetControlMode(ControlMode),
    SetCalibration { leg: u8, joint: u8, offset: i16 },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseCommandError;

fn parse_f32<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<f32, ParseCommandError> {
    tokens
        .next()
        .and_then(|t| t.parse::<f32>().ok())
        .ok_or(ParseCommandError)
}

fn parse_mode(cmd: &str) -> Option<MovementMode> {
    Some(match cmd {
        "standby" => MovementMode::Standby,
        "forward" => MovementMode::Forward,
        "fast" => MovementMode::ForwardFast,
        "backward" => MovementMode::Backward,
        "tl" => MovementMode::TurnLeft,
        "tr" => MovementMode::TurnRight,
        "sl" => MovementMode::ShiftLeft,
        "sr" => MovementMode::ShiftRight,
        "climb" => MovementMode::Climb,
        "rx" => MovementMode::RotateX,
        "ry" => MovementMode::RotateY,
        "rz" => MovementMode::RotateZ,
        "twist" => MovementMode::Twist,
        _ => return None,
    })
}

impl TryFrom<&str> for RobotCommand {
    type Error = ParseCommandError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut tokens = value.trim().split_whitespace();
        let cmd = tokens.next().ok_or(ParseCommandError)?;

        if let Some(mode) = parse_mode(cmd) {
            return Ok(RobotCommand::SetMode(mode));
        }

        match cmd {
            "gait" => {
                let gait = match tokens.next().ok_or(ParseCommandError)? {
                    "trot" => QuadGait::Trot,
                    "walk" => QuadGait::Walk,
                    "gallop" => QuadGait::Gallop,
                    "creep" => QuadGait::Creep,
                    _ => return Err(ParseCommandError),
                };
                Ok(RobotCommand::SetGait(gait))
            }
            "speed" => {
                let level = match tokens.next().ok_or(ParseCommandError)? {
                    "0" => SpeedLevel::Slowest,
                    "1" => SpeedLevel::Slow,
                    "2" => SpeedLevel::Medium,
                    "3" => SpeedLevel::Fast,
                    _ => return Err(ParseCommandError),
                };
                Ok(RobotCommand::SetSpeedLevel(level))
            }
            "vel" => {
                let vx = parse_f32(&mut tokens)?;
                let vy = parse_f32(&mut tokens)?;
                let vyaw = parse_f32(&mut tokens)?;
                Ok(RobotCommand::SetVelocity(Velocity::new(vx, vy, vyaw)))
            }
            "pose" => {
                let roll = parse_f32(&mut tokens)?;
                let pitch = parse_f32(&mut tokens)?;
                let yaw = parse_f32(&mut tokens)?;
                let x = parse_f32(&mut tokens)?;
                let y = parse_f32(&mut tokens)?;
                let z = parse_f32(&mut tokens)?;
                Ok(RobotCommand::SetPose(BodyPose::new(roll, pitch, yaw, x, y, z)))
            }
            "params" => {
                let stride = parse_f32(&mut tokens)?;
                let lift = parse_f32(&mut tokens)?;
                let period = parse_f32(&mut tokens)?;
                let duty = parse_f32(&mut tokens)?;
                Ok(RobotCommand::SetParameters(GaitParameters::new(
                    stride, lift, period, duty,
                )))
            }
            "pitch" => Ok(RobotCommand::SetWalkPitch(parse_f32(&mut tokens)?)),
            "stand" => Ok(RobotCommand::SetControlMode(ControlMode::Stand)),
            "walkmode" => Ok(RobotCommand::SetControlMode(ControlMode::Walk)),
            "cal" => {
                let mut next_int = || {
                    tokens
                        .next()
                        .and_then(|t| t.parse::<i16>().ok())
                        .ok_or(ParseCommandError)
                };
                let leg = next_int()?;
                let joint = next_int()?;
                let offset = next_int()?;
                if !(0..6).contains(&leg) || !(0..3).contains(&joint) {
                    return Err(ParseCommandError);
                }
                Ok(RobotCommand::SetCalibration {
                    leg: leg as u8,
                    joint: joint as u8,
                    offset,
                })
            }
            _ => Err(ParseCommandError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_mode_words() {
        assert_eq!(
            RobotCommand::try_from("forward"),
            Ok(RobotCommand::SetMode(MovementMode::Forward))
        );
        assert_eq!(
            RobotCommand::try_from("  tl "),
            Ok(RobotCommand::SetMode(MovementMode::TurnLeft))
        );
    }

    #[test]
    fn parses_velocity_with_arguments() {
        assert_eq!(
            RobotCommand::try_from("vel 100 -50 10"),
            Ok(RobotCommand::SetVelocity(Velocity::new(100.0, -50.0, 10.0)))
        );
    }

    #[test]
    fn parses_gait_parameters() {
        assert_eq!(
            RobotCommand::try_from("params 60 30 1000 0.5"),
            Ok(RobotCommand::SetParameters(GaitParameters::new(
                60.0, 30.0, 1000.0, 0.5
            )))
        );
    }

    #[test]
    fn parses_calibration_and_bounds_checks_ids() {
        assert_eq!(
            RobotCommand::try_from("cal 2 1 -8"),
            Ok(RobotCommand::SetCalibration {
                leg: 2,
                joint: 1,
                offset: -8
            })
        );
        assert_eq!(RobotCommand::try_from("cal 6 0 0"), Err(ParseCommandError));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(RobotCommand::try_from(""), Err(ParseCommandError));
        assert_eq!(RobotCommand::try_from("flip"), Err(ParseCommandError));
        assert_eq!(RobotCommand::try_from("vel 1"), Err(ParseCommandError));
    }
}
