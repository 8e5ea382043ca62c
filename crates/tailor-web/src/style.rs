/*! Computed-style helpers. */

use tailor::Spacing;

/// Parse a computed CSS length like `12.5px`. Anything else is zero.
pub fn parse_px(value: &str) -> f64 {
  value
    .trim()
    .strip_suffix("px")
    .and_then(|number| number.trim().parse::<f64>().ok())
    .filter(|number| number.is_finite())
    .unwrap_or(0.0)
}

/// Read the four edges of a computed property group, e.g. `margin` or
/// `border-*-width`.
pub fn read_spacing(read: impl Fn(&str) -> String, prefix: &str, suffix: &str) -> Spacing {
  let edge = |side: &str| parse_px(&read(&format!("{prefix}-{side}{suffix}")));
  Spacing::new(edge("top"), edge("right"), edge("bottom"), edge("left"))
}

/// Format a length for an inline style.
pub fn px(value: f64) -> String {
  format!("{value}px")
}


#[cfg(test)]
mod proptests {
  use super::*;
  use proptest::prelude::*;

  proptest! {
    #[test]
    fn px_then_parse_is_identity(value in -1.0e6..1.0e6f64) {
      prop_assert_eq!(parse_px(&px(value)), value);
    }

    #[test]
    fn parse_never_panics(value in ".*") {
      prop_assert!(parse_px(&value).is_finite());
    }
  }
}
