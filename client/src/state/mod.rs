//! Widget state modules.
//!
//! DESIGN
//! ======
//! Each widget owns a small plain-data model (`nav` for the dock, `chat` for
//! the popup). Components wrap them in `RwSignal`s; the models themselves
//! hold no browser handles so they test natively.

pub mod chat;
pub mod nav;
