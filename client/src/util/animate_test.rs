use super::*;

// =============================================================
// CSS rendering
// =============================================================

#[test]
fn scale_renders_as_transform() {
    assert_eq!(Property::Scale.css_name(), "transform");
    assert_eq!(Property::Scale.css_value(1.4), "scale(1.4)");
    assert_eq!(Property::Scale.css_value(1.0), "scale(1)");
}

#[test]
fn easing_renders_cubic_bezier() {
    let ease = Easing::cubic_bezier(0.32, 0.72, 0.0, 1.0);
    assert_eq!(ease.to_css(), "cubic-bezier(0.32, 0.72, 0, 1)");
}

#[test]
fn transition_shorthand_combines_parts() {
    let css = transition_css(
        Property::Scale,
        Duration::from_millis(250),
        Easing::cubic_bezier(0.32, 0.72, 0.0, 1.0),
    );
    assert_eq!(css, "transform 250ms cubic-bezier(0.32, 0.72, 0, 1)");
}
