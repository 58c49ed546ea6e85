//! Force resultants acting on plate and shell elements

mod plane_forces;
mod shell_forces;

pub use plane_forces::PlaneForceState;
pub use shell_forces::ShellForceState;
