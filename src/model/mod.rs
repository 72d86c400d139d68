//! Domain vocabulary shared by the pure core and the shell.

pub mod error;
pub mod key_action;
pub mod timings;

pub use error::AppError;
pub use key_action::KeyAction;
pub use timings::Timings;
