//! Helpers shared by the widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser concerns (location lookup, timers, style-driven animation,
//! `Math.random`) are isolated here behind small seams so component code
//! stays declarative and the logic behind it stays testable.

pub mod animate;
pub mod location;
pub mod magnify;
pub mod replies;
