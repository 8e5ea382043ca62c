/*!
Core inspector: owns the mode, the tracked element, the open tool panel,
and the global listener set.

# Module Structure

- `mod.rs` - Inspector struct, construction, read accessors
- `listeners.rs` - listener set per state, attach/detach diffing
- `transitions.rs` - toggle, hover, pointer-up, tool reset
- `actions.rs` - tool selection, panel submit/cancel, dispatch

# Example

```
use tailor::platform::memory::{MemoryDom, MemoryPlatform};
use tailor::{ChannelHost, InspectorBuilder, Point};

let dom = MemoryDom::new();
let p = dom.body().append_element("p");

let host = ChannelHost::new("http://localhost:4321/");
let mut inspector = InspectorBuilder::new().build(MemoryPlatform::default(), host)?;

inspector.toggle()?;
inspector.handle_hover(Some(p.clone()), Point::new(10.0, 10.0))?;
inspector.handle_pointer_up(Some(p.clone()), Some(Point::new(10.0, 10.0)))?;
assert!(inspector.mode().is_selected());
# Ok::<(), tailor::TailorError>(())
```
*/

mod actions;
mod listeners;
mod transitions;

pub use listeners::ListenerSet;

use crate::config::InspectorConfig;
use crate::dispatch::Dispatcher;
use crate::location::resolve_location;
use crate::panels::Panel;
use crate::platform::{Host, Platform};
use crate::tools::{applicable_tools, ToolDescriptor};
use crate::types::{Location, Mode, Point, TailorResult, Tool};

/// An inspector attached to one page.
///
/// Event handlers feed it pointer events; renderers read [`Inspector::frame`].
pub struct Inspector<P: Platform, H: Host> {
  platform: P,
  dispatcher: Dispatcher<H>,
  config: InspectorConfig,
  mode: Mode,
  tracked: Option<P::Node>,
  tool: Option<Tool>,
  panel: Option<Panel>,
  listeners: ListenerSet,
  pointer: Point,
}

impl<P: Platform, H: Host> std::fmt::Debug for Inspector<P, H> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Inspector")
      .field("mode", &self.mode)
      .field("tracked", &self.tracked)
      .field("tool", &self.tool)
      .field("listeners", &self.listeners)
      .finish_non_exhaustive()
  }
}

/// Builder for configuring an inspector.
///
/// # Example
///
/// ```
/// use tailor::platform::memory::MemoryPlatform;
/// use tailor::{ChannelHost, InspectorBuilder, Tool};
///
/// let inspector = InspectorBuilder::new()
///   .exclusion_class("my-overlay")
///   .path_prefix_depth(4)
///   .retarget_blocking_tools([Tool::EditText, Tool::LinkUpdate])
///   .build(MemoryPlatform::default(), ChannelHost::new("http://localhost/"))?;
/// assert_eq!(inspector.config().path_prefix_depth, 4);
/// # Ok::<(), tailor::TailorError>(())
/// ```
#[derive(Debug, Default, Clone)]
#[must_use = "Builder does nothing until .build() is called"]
pub struct InspectorBuilder {
  config: InspectorConfig,
}

impl InspectorBuilder {
  /// Start from the default config.
  pub fn new() -> Self {
    Self::default()
  }

  /// Start from an existing config (e.g. one deserialized from JSON).
  pub const fn from_config(config: InspectorConfig) -> Self {
    Self { config }
  }

  /// Class marking the overlay's own elements. Default: `exclude-tracking`.
  pub fn exclusion_class(mut self, class: impl Into<String>) -> Self {
    self.config.exclusion_class = class.into();
    self
  }

  /// Attribute names carrying the source file and `line:column`.
  pub fn source_attributes(mut self, file: impl Into<String>, loc: impl Into<String>) -> Self {
    self.config.source_file_attribute = file.into();
    self.config.source_loc_attribute = loc.into();
    self
  }

  /// Leading path segments to drop. Default: 3.
  pub const fn path_prefix_depth(mut self, depth: usize) -> Self {
    self.config.path_prefix_depth = depth;
    self
  }

  /// Toolbar box size in CSS pixels. Default: 250 x 250.
  pub const fn toolbar_size(mut self, width: f64, height: f64) -> Self {
    self.config.toolbar_width = width;
    self.config.toolbar_height = height;
    self
  }

  /// Tools whose open panel suspends click re-targeting. Default: edit text.
  pub fn retarget_blocking_tools(mut self, tools: impl IntoIterator<Item = Tool>) -> Self {
    self.config.retarget_blocking_tools = tools.into_iter().collect();
    self
  }

  /// Validate the config and create an idle inspector.
  pub fn build<P: Platform, H: Host>(self, platform: P, host: H) -> TailorResult<Inspector<P, H>> {
    Inspector::new(platform, host, self.config)
  }
}

impl<P: Platform, H: Host> Inspector<P, H> {
  /// Create an idle inspector. No listeners are attached until [`Inspector::toggle`].
  pub fn new(platform: P, host: H, config: InspectorConfig) -> TailorResult<Self> {
    config.validate()?;
    Ok(Self {
      platform,
      dispatcher: Dispatcher::new(host),
      config,
      mode: Mode::Idle,
      tracked: None,
      tool: None,
      panel: None,
      listeners: ListenerSet::EMPTY,
      pointer: Point::default(),
    })
  }

  /// Current mode.
  pub const fn mode(&self) -> Mode {
    self.mode
  }

  /// Validated config.
  pub const fn config(&self) -> &InspectorConfig {
    &self.config
  }

  /// Element under the pointer (inspecting) or the selected element.
  pub const fn tracked(&self) -> Option<&P::Node> {
    self.tracked.as_ref()
  }

  /// Tool whose panel is open.
  pub const fn active_tool(&self) -> Option<Tool> {
    self.tool
  }

  /// Listeners the inspector currently has installed.
  pub const fn listeners(&self) -> ListenerSet {
    self.listeners
  }

  /// Last pointer position seen while inspecting.
  pub const fn pointer(&self) -> Point {
    self.pointer
  }

  /// The page the inspector runs on.
  pub const fn platform(&self) -> &P {
    &self.platform
  }

  /// Mutable access to the page.
  pub fn platform_mut(&mut self) -> &mut P {
    &mut self.platform
  }

  /// Where edits are posted.
  pub const fn host(&self) -> &H {
    self.dispatcher.host()
  }

  /// Source location of the tracked element, reread from the page.
  pub fn location(&self) -> Option<Location> {
    resolve_location(self.tracked.as_ref(), &self.config)
  }

  /// Tools applicable to the tracked element, in display order.
  pub fn available_tools(&self) -> Vec<&'static ToolDescriptor> {
    match &self.tracked {
      Some(element) => applicable_tools(element, self.location().as_ref()),
      None => Vec::new(),
    }
  }

  /// The open tool panel.
  pub const fn panel(&self) -> Option<&Panel> {
    self.panel.as_ref()
  }

  /// The open tool panel, for editing its inputs.
  pub fn panel_mut(&mut self) -> Option<&mut Panel> {
    self.panel.as_mut()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dispatch::ChannelHost;
  use crate::platform::memory::MemoryPlatform;
  use crate::types::TailorError;

  type TestInspector = Inspector<MemoryPlatform, ChannelHost>;

  fn host() -> ChannelHost {
    ChannelHost::new("http://localhost:4321/")
  }

  mod builder {
    use super::*;

    #[test]
    fn defaults_build_an_idle_inspector() {
      let inspector: TestInspector = InspectorBuilder::new()
        .build(MemoryPlatform::default(), host())
        .unwrap();
      assert_eq!(inspector.mode(), Mode::Idle);
      assert_eq!(inspector.config().exclusion_class, "exclude-tracking");
      assert!(inspector.listeners().is_empty(), "nothing attached before toggle");
    }

    #[test]
    fn setters_reach_the_config() {
      let inspector = InspectorBuilder::new()
        .exclusion_class("my-overlay")
        .source_attributes("data-file", "data-loc")
        .path_prefix_depth(1)
        .toolbar_size(300.0, 200.0)
        .retarget_blocking_tools([Tool::LinkUpdate])
        .build(MemoryPlatform::default(), host())
        .unwrap();

      let config = inspector.config();
      assert_eq!(config.exclusion_class, "my-overlay");
      assert_eq!(config.source_file_attribute, "data-file");
      assert_eq!(config.source_loc_attribute, "data-loc");
      assert_eq!(config.path_prefix_depth, 1);
      assert_eq!(config.toolbar_width, 300.0);
      assert_eq!(config.toolbar_height, 200.0);
      assert_eq!(config.retarget_blocking_tools, vec![Tool::LinkUpdate]);
    }

    #[test]
    fn invalid_config_is_rejected() {
      let result = InspectorBuilder::new()
        .toolbar_size(0.0, 250.0)
        .build(MemoryPlatform::default(), host());
      assert!(matches!(result, Err(TailorError::InvalidConfig(_))));
    }
  }
}
