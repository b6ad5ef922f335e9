//! Full motion sessions against mock PWM hardware: a quadruped walk with
//! gait switching, and a hexapod stand/walk session. Both check that foot
//! positions never jump more than a tick's worth of travel.
use fugit::RateExtU32;
use walker_robot::gait::{
    hex_tables, quad_tables, ControlMode, MovementMode, QuadGait, Velocity,
};
use walker_robot::kinematics::Locations;
use walker_robot::robot::config;
use walker_robot::robot::{HexapodRobot, QuadRobot};

#[derive(Debug, Default)]
struct MockPwm {
    duty: u16,
}

impl embedded_hal::pwm::ErrorType for MockPwm {
    type Error = core::convert::Infallible;
}

impl embedded_hal::pwm::SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        4095
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}

const TICK_MS: u32 = config::MOVEMENT_INTERVAL_MS;
/// Largest per-tick foot displacement we accept before calling it a
/// teleport. Real tip speeds stay well under 1 m/s.
const MAX_STEP_MM: f32 = 30.0;

fn quad() -> QuadRobot<MockPwm> {
    QuadRobot::new(
        core::array::from_fn(|_| core::array::from_fn(|_| MockPwm::default())),
        4095,
        50u32.Hz(),
    )
}

fn hexapod() -> HexapodRobot<MockPwm> {
    HexapodRobot::new(
        core::array::from_fn(|_| core::array::from_fn(|_| MockPwm::default())),
        4095,
        50u32.Hz(),
    )
}

fn max_step_sq<const N: usize>(prev: &Locations<N>, now: &Locations<N>) -> f32 {
    let mut worst = 0.0f32;
    for i in 0..N {
        worst = worst.max(prev[i].distance_sq(&now[i]));
    }
    worst
}

fn tick_checked(robot: &mut QuadRobot<MockPwm>, prev: &mut Locations<4>, context: &str) {
    robot.tick(TICK_MS);
    let now = *robot.position();
    let worst = max_step_sq(prev, &now);
    assert!(
        worst < MAX_STEP_MM * MAX_STEP_MM,
        "foot jumped {:.1} mm in one tick during {}",
        worst.sqrt(),
        context
    );
    *prev = now;
}

fn run_until_stable(robot: &mut QuadRobot<MockPwm>, prev: &mut Locations<4>, context: &str) {
    for _ in 0..2000 {
        tick_checked(robot, prev, context);
        if robot.is_stable() {
            return;
        }
    }
    panic!("never stabilized during {}", context);
}

fn assert_near<const N: usize>(actual: &Locations<N>, expected: &Locations<N>, tolerance: f32) {
    for i in 0..N {
        let d = actual[i].distance_sq(&expected[i]);
        assert!(
            d < tolerance * tolerance,
            "leg {} at {:?}, expected {:?}",
            i,
            actual[i],
            expected[i]
        );
    }
}

#[test]
fn quadruped_walk_session_never_teleports() {
    let mut robot = quad();
    let mut prev = *robot.position();

    for _ in 0..10 {
        tick_checked(&mut robot, &mut prev, "standby");
    }

    robot.set_mode(MovementMode::Forward);
    run_until_stable(&mut robot, &mut prev, "standby to forward");
    assert_eq!(robot.mode(), MovementMode::Forward);
    for _ in 0..100 {
        tick_checked(&mut robot, &mut prev, "steady forward");
    }

    // Gait switching is only allowed from stable standby.
    assert!(robot.set_gait(QuadGait::Walk).is_err());
    assert_eq!(robot.gait(), QuadGait::Trot);

    robot.set_mode(MovementMode::Standby);
    run_until_stable(&mut robot, &mut prev, "forward to standby");
    assert!(robot.set_gait(QuadGait::Walk).is_ok());
    assert_eq!(robot.gait(), QuadGait::Walk);

    robot.set_mode(MovementMode::TurnLeft);
    run_until_stable(&mut robot, &mut prev, "standby to turn");
    for _ in 0..100 {
        tick_checked(&mut robot, &mut prev, "steady turn");
    }

    robot.set_mode(MovementMode::Standby);
    run_until_stable(&mut robot, &mut prev, "turn to standby");
    for _ in 0..50 {
        tick_checked(&mut robot, &mut prev, "settled standby");
    }
    assert_near(robot.position(), &quad_tables::STANDBY_POSE, 0.5);
}

#[test]
fn hexapod_stand_walk_session() {
    let mut robot = hexapod();

    for _ in 0..5 {
        robot.tick(TICK_MS);
    }
    assert_near(&robot.tip_positions(), &hex_tables::HEX_STANDBY_POSE, 0.5);

    robot.set_control_mode(ControlMode::Walk);
    robot.set_velocity(Velocity::new(80.0, 0.0, 0.0));

    let standby_z = hex_tables::HEX_STANDBY_POSE.min_z();
    let mut prev = robot.tip_positions();
    let mut highest = f32::MIN;
    // two full gait periods
    for _ in 0..80 {
        robot.tick(TICK_MS);
        let now = robot.tip_positions();
        let worst = max_step_sq(&prev, &now);
        assert!(
            worst < MAX_STEP_MM * MAX_STEP_MM,
            "foot jumped {:.1} mm in one tick while walking",
            worst.sqrt()
        );
        highest = highest.max(now.max_z());
        prev = now;
    }
    // at least one swing apex was reached
    assert!(highest > standby_z + 5.0, "no foot ever lifted: {}", highest);

    robot.set_velocity(Velocity::new(0.0, 0.0, 0.0));
    for _ in 0..40 {
        robot.tick(TICK_MS);
    }
    assert_near(&robot.tip_positions(), &hex_tables::HEX_STANDBY_POSE, 1.0);

    robot.set_control_mode(ControlMode::Stand);
    assert_eq!(robot.control_mode(), ControlMode::Stand);
    for _ in 0..40 {
        robot.tick(TICK_MS);
    }
    assert_near(&robot.tip_positions(), &hex_tables::HEX_STANDBY_POSE, 0.5);
}
