//! Animation seam for the dock.
//!
//! The dock only ever asks for one thing: "move a numeric property of an
//! element to a value over a duration with an ease curve". [`Animator`] is
//! that request; the browser build answers it with CSS transitions, tests
//! answer it with a recorder.

#[cfg(test)]
#[path = "animate_test.rs"]
mod animate_test;

use std::time::Duration;

/// Animatable element property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    Scale,
}

impl Property {
    /// CSS property carrying the value.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Scale => "transform",
        }
    }

    /// CSS value for `value` of this property.
    pub fn css_value(self, value: f64) -> String {
        match self {
            Self::Scale => format!("scale({value})"),
        }
    }
}

/// Cubic-bezier timing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Easing {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Easing {
    pub const fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn to_css(self) -> String {
        format!("cubic-bezier({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// CSS `transition` shorthand for one property.
pub fn transition_css(property: Property, duration: Duration, easing: Easing) -> String {
    format!("{} {}ms {}", property.css_name(), duration.as_millis(), easing.to_css())
}

/// Something that can tween a property of a target toward a value.
///
/// A later call for the same target and property supersedes any earlier one
/// still in flight.
pub trait Animator {
    type Target;

    fn animate(&self, target: &Self::Target, property: Property, value: f64, duration: Duration, easing: Easing);
}

/// Browser animator backed by inline CSS transitions.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct CssTransitionAnimator;

#[cfg(feature = "csr")]
impl Animator for CssTransitionAnimator {
    type Target = web_sys::HtmlElement;

    fn animate(&self, target: &Self::Target, property: Property, value: f64, duration: Duration, easing: Easing) {
        let style = target.style();
        if let Err(err) = style.set_property("transition", &transition_css(property, duration, easing)) {
            log::warn!("transition not applied: {err:?}");
            return;
        }
        if let Err(err) = style.set_property(property.css_name(), &property.css_value(value)) {
            log::warn!("{} not applied: {err:?}", property.css_name());
        }
    }
}
