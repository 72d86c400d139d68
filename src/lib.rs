//! letterbox
//!
//! An animated envelope for the terminal: the flap opens, a letter slides
//! out and is promoted above the envelope, and the letter can be zoomed by
//! clicking it. A reset control plays the whole choreography in reverse.
//!
//! The crate follows a Pure Core / Impure Shell split: everything under
//! [`state`] and [`sched`] is pure data and transitions driven by an
//! injected clock, while [`view`] owns the terminal and the event loop.

pub mod config;
pub mod logging;
pub mod model;
pub mod sched;
pub mod state;
pub mod view;
