//! Widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns its own reactive state and element references and is
//! mounted once per page by `crate::mount`.

pub mod chat_widget;
pub mod dock;
