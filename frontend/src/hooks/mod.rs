pub mod use_reduced_motion;
pub mod use_spin_session;

pub use use_reduced_motion::*;
pub use use_spin_session::*;
