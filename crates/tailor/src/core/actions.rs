/*!
Tool selection and panel completion.

Tools are only chosen while `Selected`. Choosing one mounts its panel;
submitting or cancelling unmounts it and clears the active tool.
*/

use super::Inspector;
use crate::panels::Panel;
use crate::platform::{DomNode, Host, Platform};
use crate::tools::descriptor;
use crate::types::{Mode, TailorError, TailorResult, Tool};

impl<P: Platform, H: Host> Inspector<P, H> {
  /// Open `tool`'s panel for the selected element.
  ///
  /// Locate dispatches immediately. Choosing the already active tool is a no-op.
  pub fn select_tool(&mut self, tool: Tool) -> TailorResult<()> {
    let Mode::Selected { .. } = self.mode else {
      return Err(TailorError::NothingSelected);
    };
    let element = self.tracked.clone().ok_or(TailorError::NothingSelected)?;
    let location = self.location();

    if !descriptor(tool).should_show(&element, location.as_ref()) {
      return Err(TailorError::ToolUnavailable { tool });
    }
    if self.tool == Some(tool) {
      return Ok(());
    }

    self.close_panel();
    log::debug!("Opening {tool} on <{}>", element.tag_name());
    self.panel = Some(Panel::mount(tool, &element, location.as_ref()));
    self.tool = Some(tool);
    self.sync_listeners()?;

    if tool == Tool::Locate {
      if let Some(location) = location {
        self.dispatcher.locate(location);
      }
    }
    Ok(())
  }

  /// Whether the open panel's submit control is enabled.
  pub fn can_submit(&self) -> bool {
    self
      .panel
      .as_ref()
      .is_some_and(|panel| panel.can_submit(self.location().as_ref()))
  }

  /// Confirm the open panel and dispatch its edit.
  ///
  /// On error the panel stays open with its input intact.
  pub fn submit_panel(&mut self) -> TailorResult<()> {
    let element = self.tracked.clone().ok_or(TailorError::NothingSelected)?;
    let location = self.location();
    let panel = self.panel.as_mut().ok_or(TailorError::NoActivePanel)?;

    let intent = panel.submit(&element, location.as_ref())?;
    if let Some(intent) = intent {
      self.dispatcher.edit(intent);
    }
    self.reset_tool()
  }

  /// Abandon the open panel. Never dispatches.
  pub fn cancel_panel(&mut self) -> TailorResult<()> {
    let panel = self.panel.as_mut().ok_or(TailorError::NoActivePanel)?;
    if let Some(element) = &self.tracked {
      panel.cancel(element);
    }
    self.reset_tool()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dispatch::ChannelHost;
  use crate::InspectorBuilder;
  use crate::platform::memory::{MemoryDom, MemoryNode, MemoryPlatform};
  use crate::platform::Listener;
  use crate::types::{EditIntent, Location, OutboundMessage, SourceAnchor};
  use async_broadcast::Receiver;

  const PAGE: &str = "http://localhost:4321/";

  fn selected_on(node: &MemoryNode) -> (Inspector<MemoryPlatform, ChannelHost>, Receiver<OutboundMessage>) {
    let host = ChannelHost::new(PAGE);
    let rx = host.subscribe();
    let mut inspector = InspectorBuilder::new().build(MemoryPlatform::default(), host).unwrap();
    inspector.toggle().unwrap();
    inspector.handle_pointer_up(Some(node.clone()), None).unwrap();
    (inspector, rx)
  }

  fn annotate(node: &MemoryNode, loc: &str) {
    node.set_attribute("data-astro-source-file", "/home/me/site/src/pages/index.astro");
    node.set_attribute("data-astro-source-loc", loc);
  }

  mod selection {
    use super::*;

    #[test]
    fn requires_selection() {
      let host = ChannelHost::new(PAGE);
      let mut inspector = InspectorBuilder::new().build(MemoryPlatform::default(), host).unwrap();
      assert!(matches!(inspector.select_tool(Tool::Magic), Err(TailorError::NothingSelected)));

      inspector.toggle().unwrap();
      assert!(matches!(inspector.select_tool(Tool::Magic), Err(TailorError::NothingSelected)));
    }

    #[test]
    fn rejects_inapplicable_tool() {
      let dom = MemoryDom::new();
      let img = dom.body().append_element("img");
      let (mut inspector, _rx) = selected_on(&img);

      assert!(matches!(
        inspector.select_tool(Tool::ClassEdit),
        Err(TailorError::ToolUnavailable { tool: Tool::ClassEdit })
      ));
      assert_eq!(inspector.active_tool(), None);
    }

    #[test]
    fn switching_tools_remounts() {
      let dom = MemoryDom::new();
      let p = dom.body().append_element("p");
      p.append_text("Hello");
      annotate(&p, "4:1");
      let (mut inspector, _rx) = selected_on(&p);

      inspector.select_tool(Tool::EditText).unwrap();
      assert!(p.is_editable());
      assert!(!inspector.platform().is_attached(Listener::RetargetClick), "text edit suspends re-targeting");
      assert!(!inspector.platform().is_attached(Listener::SuppressClicks));
      assert!(inspector.platform().is_attached(Listener::Reflow), "overlay still follows the edit");

      inspector.select_tool(Tool::ClassEdit).unwrap();
      assert!(!p.is_editable(), "text edit unmounted");
      assert_eq!(inspector.panel().map(Panel::tool), Some(Tool::ClassEdit));
      assert!(inspector.platform().is_attached(Listener::RetargetClick));
    }

    #[test]
    fn locate_dispatches_on_mount() {
      let dom = MemoryDom::new();
      let div = dom.body().append_element("div");
      annotate(&div, "9:2");
      let (mut inspector, mut rx) = selected_on(&div);

      inspector.select_tool(Tool::Locate).unwrap();
      assert_eq!(
        rx.try_recv().unwrap(),
        OutboundMessage::Locate {
          location: Location::Exact(SourceAnchor::new("site/src/pages/index.astro", 9))
        }
      );
      assert!(rx.try_recv().is_err());

      inspector.select_tool(Tool::Locate).unwrap();
      assert!(rx.try_recv().is_err(), "re-selecting does not dispatch again");
    }
  }

  mod completion {
    use super::*;

    #[test]
    fn class_edit_submit_dispatches_and_resets() {
      let dom = MemoryDom::new();
      let div = dom.body().append_element("div");
      annotate(&div, "7:1");
      let (mut inspector, mut rx) = selected_on(&div);

      inspector.select_tool(Tool::ClassEdit).unwrap();
      assert!(!inspector.can_submit());
      inspector
        .panel_mut()
        .and_then(Panel::as_class_edit_mut)
        .unwrap()
        .set_new_class("shadow");
      assert!(inspector.can_submit());
      inspector.submit_panel().unwrap();

      assert_eq!(
        rx.try_recv().unwrap(),
        OutboundMessage::api_call(
          PAGE,
          EditIntent::precise("Add class shadow", SourceAnchor::new("site/src/pages/index.astro", 7))
        )
      );
      assert_eq!(inspector.active_tool(), None);
      assert!(inspector.panel().is_none());
      assert!(inspector.mode().is_selected(), "stays selected after submit");
    }

    #[test]
    fn incomplete_submit_keeps_panel_open() {
      let dom = MemoryDom::new();
      let div = dom.body().append_element("div");
      let (mut inspector, mut rx) = selected_on(&div);

      inspector.select_tool(Tool::Magic).unwrap();
      assert!(matches!(inspector.submit_panel(), Err(TailorError::IncompleteInput(_))));
      assert_eq!(inspector.active_tool(), Some(Tool::Magic));

      inspector.panel_mut().and_then(Panel::as_magic_mut).unwrap().set_instruction("center it");
      assert!(matches!(inspector.submit_panel(), Err(TailorError::Unanchored)));
      assert!(rx.try_recv().is_err(), "nothing dispatched");
    }

    #[test]
    fn cancel_text_edit_restores() {
      let dom = MemoryDom::new();
      let p = dom.body().append_element("p");
      p.append_text("Hello");
      let (mut inspector, mut rx) = selected_on(&p);

      inspector.select_tool(Tool::EditText).unwrap();
      p.set_text_content("typo");
      inspector.cancel_panel().unwrap();

      assert_eq!(p.text_content().as_deref(), Some("Hello"));
      assert!(!p.is_editable());
      assert_eq!(inspector.active_tool(), None);
      assert!(inspector.platform().is_attached(Listener::RetargetClick), "re-targeting resumes");
      assert!(rx.try_recv().is_err());
    }

    #[test]
    fn without_panel() {
      let dom = MemoryDom::new();
      let p = dom.body().append_element("p");
      let (mut inspector, _rx) = selected_on(&p);
      assert!(matches!(inspector.submit_panel(), Err(TailorError::NoActivePanel)));
      assert!(matches!(inspector.cancel_panel(), Err(TailorError::NoActivePanel)));
    }
  }
}
