/*! Geometry types in viewport coordinates. */

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Rectangle in viewport coordinates, laid out the way CSS reports it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Rect {
  pub top: f64,
  pub left: f64,
  pub width: f64,
  pub height: f64,
}

impl Rect {
  pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
    Self {
      top,
      left,
      width,
      height,
    }
  }

  /// Right edge (`left + width`).
  pub fn right(&self) -> f64 {
    self.left + self.width
  }

  /// Bottom edge (`top + height`).
  pub fn bottom(&self) -> f64 {
    self.top + self.height
  }

  /// Top-left corner.
  pub const fn origin(&self) -> Point {
    Point::new(self.left, self.top)
  }

  /// Check if a point is contained within this rectangle (edges inclusive).
  pub fn contains(&self, point: Point) -> bool {
    point.x >= self.left
      && point.x <= self.right()
      && point.y >= self.top
      && point.y <= self.bottom()
  }

  /// Grow outward by the given edge amounts.
  pub fn expand(&self, by: Spacing) -> Self {
    Self {
      top: self.top - by.top,
      left: self.left - by.left,
      width: self.width + by.left + by.right,
      height: self.height + by.top + by.bottom,
    }
  }

  /// Shrink inward by the given edge amounts.
  pub fn shrink(&self, by: Spacing) -> Self {
    Self {
      top: self.top + by.top,
      left: self.left + by.left,
      width: self.width - by.left - by.right,
      height: self.height - by.top - by.bottom,
    }
  }
}

/// Per-edge lengths, as read from computed margin/border/padding styles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spacing {
  pub top: f64,
  pub right: f64,
  pub bottom: f64,
  pub left: f64,
}

impl Spacing {
  pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
    Self {
      top,
      right,
      bottom,
      left,
    }
  }

  /// Same length on every edge.
  pub const fn uniform(length: f64) -> Self {
    Self::new(length, length, length, length)
  }
}

/// The four nested CSS boxes of an element, outermost first.
///
/// ```text
/// ------------------------------------
/// |              MARGIN              |
/// |  ------------------------------  |
/// |  |           BORDER           |  |
/// |  |  ------------------------  |  |
/// |  |  |       PADDING        |  |  |
/// |  |  |  ------------------  |  |  |
/// |  |  |  |    CONTENT     |  |  |  |
/// |  |  |  ------------------  |  |  |
/// |  |  ------------------------  |  |
/// |  ------------------------------  |
/// ------------------------------------
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxModel {
  pub margin_box: Rect,
  pub border_box: Rect,
  pub padding_box: Rect,
  pub content_box: Rect,
}

impl BoxModel {
  /// Derive all four boxes from the border box and the computed edge widths.
  ///
  /// The border box is what `getBoundingClientRect` reports; the others are
  /// grown or shrunk from it.
  pub fn from_border_box(border_box: Rect, margin: Spacing, border: Spacing, padding: Spacing) -> Self {
    let padding_box = border_box.shrink(border);
    Self {
      margin_box: border_box.expand(margin),
      border_box,
      padding_box,
      content_box: padding_box.shrink(padding),
    }
  }

  /// A box model with no margin, border or padding.
  pub const fn flat(rect: Rect) -> Self {
    Self {
      margin_box: rect,
      border_box: rect,
      padding_box: rect,
      content_box: rect,
    }
  }
}

/// A 2D point in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// Viewport dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
  pub width: f64,
  pub height: f64,
}

impl Size {
  pub const fn new(width: f64, height: f64) -> Self {
    Self { width, height }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  mod rect_edges {
    use super::*;

    #[test]
    fn right_and_bottom() {
      let rect = Rect::new(20.0, 10.0, 100.0, 50.0);
      assert_eq!(rect.right(), 110.0);
      assert_eq!(rect.bottom(), 70.0);
      assert_eq!(rect.origin(), Point::new(10.0, 20.0));
    }

    #[test]
    fn corners_are_contained() {
      let rect = Rect::new(20.0, 10.0, 100.0, 50.0);
      assert!(rect.contains(Point::new(10.0, 20.0)), "top-left corner");
      assert!(rect.contains(Point::new(110.0, 20.0)), "top-right corner");
      assert!(rect.contains(Point::new(10.0, 70.0)), "bottom-left corner");
      assert!(rect.contains(Point::new(110.0, 70.0)), "bottom-right corner");
    }

    #[test]
    fn point_outside_rect() {
      let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
      assert!(!rect.contains(Point::new(-1.0, 50.0)), "left of rect");
      assert!(!rect.contains(Point::new(101.0, 50.0)), "right of rect");
      assert!(!rect.contains(Point::new(50.0, -1.0)), "above rect");
      assert!(!rect.contains(Point::new(50.0, 101.0)), "below rect");
    }
  }

  mod box_model {
    use super::*;

    #[test]
    fn boxes_nest_from_border_box() {
      let border_box = Rect::new(100.0, 50.0, 200.0, 80.0);
      let model = BoxModel::from_border_box(
        border_box,
        Spacing::new(10.0, 20.0, 10.0, 20.0),
        Spacing::uniform(2.0),
        Spacing::new(4.0, 8.0, 4.0, 8.0),
      );

      assert_eq!(model.border_box, border_box);
      assert_eq!(model.margin_box, Rect::new(90.0, 30.0, 240.0, 100.0));
      assert_eq!(model.padding_box, Rect::new(102.0, 52.0, 196.0, 76.0));
      assert_eq!(model.content_box, Rect::new(106.0, 60.0, 180.0, 68.0));
    }

    #[test]
    fn flat_model_repeats_rect() {
      let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
      let model = BoxModel::flat(rect);
      assert_eq!(model.margin_box, rect);
      assert_eq!(model.content_box, rect);
    }
  }
}
