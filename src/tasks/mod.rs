//! Asynchronous motion loops.
//!
//! The crate is hardware-generic, so these are plain `async fn`s rather
//! than executor tasks: the firmware binary constructs the robot over its
//! PWM peripheral and wraps the loop for its chassis in an
//! `#[embassy_executor::task]`.
pub mod motion_task;

pub use motion_task::{hexapod_motion_loop, quad_motion_loop};
