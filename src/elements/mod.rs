//! Section geometry and material strengths

mod material;
mod section;
mod shell;

pub use material::{Concrete, Reinforcement};
pub use section::BeamSection;
pub use shell::ShellSection;
