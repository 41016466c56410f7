//! Dock hover magnification.
//!
//! Scale depends only on the index distance between the hovered item and
//! each sibling. Every enter/leave re-targets all items; nothing is
//! cancelled, the newest target wins.

#[cfg(test)]
#[path = "magnify_test.rs"]
mod magnify_test;

use std::time::Duration;

use crate::util::animate::{Animator, Easing, Property};

pub const HOVER_SCALE: f64 = 1.4;
pub const NEIGHBOR_SCALE: f64 = 1.15;
pub const OUTER_NEIGHBOR_SCALE: f64 = 1.05;
pub const REST_SCALE: f64 = 1.0;

pub const TRANSITION: Duration = Duration::from_millis(250);
pub const EASE: Easing = Easing::cubic_bezier(0.32, 0.72, 0.0, 1.0);

/// Scale for the item at `index` while the item at `hovered` is under the pointer.
pub fn magnification(hovered: usize, index: usize) -> f64 {
    match hovered.abs_diff(index) {
        0 => HOVER_SCALE,
        1 => NEIGHBOR_SCALE,
        2 => OUTER_NEIGHBOR_SCALE,
        _ => REST_SCALE,
    }
}

/// Applies magnification to a row of dock items through an [`Animator`].
pub struct Magnifier<A: Animator> {
    animator: A,
    items: Vec<A::Target>,
}

impl<A: Animator> Magnifier<A> {
    pub fn new(animator: A, items: Vec<A::Target>) -> Self {
        Self { animator, items }
    }

    /// Pointer entered the item at `hovered`.
    pub fn enter(&self, hovered: usize) {
        for (index, item) in self.items.iter().enumerate() {
            self.animator
                .animate(item, Property::Scale, magnification(hovered, index), TRANSITION, EASE);
        }
    }

    /// Pointer left an item; every item returns to rest.
    pub fn leave(&self) {
        for item in &self.items {
            self.animator
                .animate(item, Property::Scale, REST_SCALE, TRANSITION, EASE);
        }
    }
}
