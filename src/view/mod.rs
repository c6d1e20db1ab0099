//! View-state controller.
//!
//! Turns the current widget selection into a projection of the record table
//! and publishes it to the display buffer the renderer draws from.

mod controller;
mod projection;

pub use controller::{DisplayBuffer, ViewController, ViewEvent};
pub use projection::{recompute, Projection, ViewState};
