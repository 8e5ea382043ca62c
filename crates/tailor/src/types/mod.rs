/*! Core types for Tailor.

Regenerate TypeScript types: `cargo test -p tailor export_bindings`
*/

#![allow(missing_docs)]

mod error;
mod geometry;
mod ids;
mod location;
mod message;
mod mode;
mod tool;

pub use error::{TailorError, TailorResult};
pub use geometry::{BoxModel, Point, Rect, Size, Spacing};
pub use ids::NodeId;
pub use location::{Location, SourceAnchor};
pub use message::{ApiCallBody, ApiHeaders, EditIntent, OutboundMessage};
pub use mode::Mode;
pub use tool::Tool;
