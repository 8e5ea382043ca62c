/*!
Listener bookkeeping.

The set of global listeners is a pure function of (mode, active tool,
config). Transitions compute the target set and diff it against what is
attached, detaching before attaching so the two click listeners never
overlap.
*/

use super::Inspector;
use crate::config::InspectorConfig;
use crate::platform::{Host, Listener, Platform};
use crate::types::{Mode, TailorResult, Tool};

/// Which global listeners are installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerSet {
  hover: bool,
  select_click: bool,
  retarget_click: bool,
  suppress_clicks: bool,
  reflow: bool,
}

impl ListenerSet {
  /// Nothing attached.
  pub const EMPTY: Self = Self {
    hover: false,
    select_click: false,
    retarget_click: false,
    suppress_clicks: false,
    reflow: false,
  };

  /// Listeners required in `mode` with `tool` open.
  ///
  /// Reflow stays attached in every active mode so the overlay follows
  /// scrolling and layout changes, including while a text edit reflows.
  pub fn for_state(mode: Mode, tool: Option<Tool>, config: &InspectorConfig) -> Self {
    match mode {
      Mode::Idle => Self::EMPTY,
      Mode::Inspecting => Self::EMPTY
        .with(Listener::Hover, true)
        .with(Listener::SelectClick, true)
        .with(Listener::SuppressClicks, true)
        .with(Listener::Reflow, true),
      Mode::Selected { .. } => {
        let blocked = tool.is_some_and(|tool| config.blocks_retarget(tool));
        Self::EMPTY
          .with(Listener::RetargetClick, !blocked)
          .with(Listener::SuppressClicks, !blocked)
          .with(Listener::Reflow, true)
      }
    }
  }

  /// True if `listener` is in the set.
  pub const fn contains(&self, listener: Listener) -> bool {
    match listener {
      Listener::Hover => self.hover,
      Listener::SelectClick => self.select_click,
      Listener::RetargetClick => self.retarget_click,
      Listener::SuppressClicks => self.suppress_clicks,
      Listener::Reflow => self.reflow,
    }
  }

  /// Copy with `listener` switched on or off.
  #[must_use]
  pub const fn with(mut self, listener: Listener, on: bool) -> Self {
    match listener {
      Listener::Hover => self.hover = on,
      Listener::SelectClick => self.select_click = on,
      Listener::RetargetClick => self.retarget_click = on,
      Listener::SuppressClicks => self.suppress_clicks = on,
      Listener::Reflow => self.reflow = on,
    }
    self
  }

  /// True if nothing is attached.
  pub fn is_empty(&self) -> bool {
    *self == Self::EMPTY
  }

  /// Installed listeners, in [`Listener::ALL`] order.
  pub fn iter(&self) -> impl Iterator<Item = Listener> + '_ {
    Listener::ALL.into_iter().filter(|l| self.contains(*l))
  }
}

impl<P: Platform, H: Host> Inspector<P, H> {
  /// Bring the attached listeners in line with the current state.
  pub(super) fn sync_listeners(&mut self) -> TailorResult<()> {
    let target = ListenerSet::for_state(self.mode, self.tool, &self.config);
    self.detach_stale(target);
    self.attach_missing(target)
  }

  /// Detach everything not in `target`. Infallible.
  pub(super) fn detach_stale(&mut self, target: ListenerSet) {
    for listener in Listener::ALL {
      if self.listeners.contains(listener) && !target.contains(listener) {
        self.platform.detach(listener);
        self.listeners = self.listeners.with(listener, false);
        log::trace!("detached {listener:?}");
      }
    }
  }

  fn attach_missing(&mut self, target: ListenerSet) -> TailorResult<()> {
    for listener in Listener::ALL {
      if target.contains(listener) && !self.listeners.contains(listener) {
        self.platform.attach(listener)?;
        self.listeners = self.listeners.with(listener, true);
        log::trace!("attached {listener:?}");
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Point;

  fn selected() -> Mode {
    Mode::Selected {
      anchor: Point::new(0.0, 0.0),
    }
  }

  #[test]
  fn idle_has_nothing() {
    let config = InspectorConfig::default();
    assert!(ListenerSet::for_state(Mode::Idle, None, &config).is_empty());
    assert!(ListenerSet::for_state(Mode::Idle, Some(Tool::Magic), &config).is_empty());
  }

  #[test]
  fn inspecting_tracks_hover_and_select() {
    let set = ListenerSet::for_state(Mode::Inspecting, None, &InspectorConfig::default());
    assert_eq!(
      set.iter().collect::<Vec<_>>(),
      vec![
        Listener::Hover,
        Listener::SelectClick,
        Listener::SuppressClicks,
        Listener::Reflow
      ]
    );
  }

  #[test]
  fn selected_retargets_unless_blocked() {
    let config = InspectorConfig::default();
    let set = ListenerSet::for_state(selected(), Some(Tool::ClassEdit), &config);
    assert_eq!(
      set.iter().collect::<Vec<_>>(),
      vec![Listener::RetargetClick, Listener::SuppressClicks, Listener::Reflow]
    );

    let blocked = ListenerSet::for_state(selected(), Some(Tool::EditText), &config);
    assert_eq!(
      blocked.iter().collect::<Vec<_>>(),
      vec![Listener::Reflow],
      "text editing needs real clicks but still follows layout"
    );
  }

  #[test]
  fn reflow_follows_every_active_mode() {
    let config = InspectorConfig::default();
    assert!(!ListenerSet::for_state(Mode::Idle, None, &config).contains(Listener::Reflow));
    for mode in [Mode::Inspecting, selected()] {
      for tool in [None, Some(Tool::Magic), Some(Tool::EditText), Some(Tool::LinkUpdate)] {
        assert!(
          ListenerSet::for_state(mode, tool, &config).contains(Listener::Reflow),
          "{mode:?} {tool:?}"
        );
      }
    }
  }

  #[test]
  fn click_listeners_are_exclusive() {
    let config = InspectorConfig::default();
    for mode in [Mode::Idle, Mode::Inspecting, selected()] {
      for tool in [None, Some(Tool::Magic), Some(Tool::EditText)] {
        let set = ListenerSet::for_state(mode, tool, &config);
        assert!(
          !(set.contains(Listener::SelectClick) && set.contains(Listener::RetargetClick)),
          "{mode:?} {tool:?}"
        );
      }
    }
  }
}
