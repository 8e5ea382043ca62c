/*!
Tailor - in-page source inspector

Hover over a page to find the element you mean, click to select it, then pick
a tool. Each tool turns a small form into an edit intent that names the
source file and line the element came from; the intent is posted to the
parent frame, which applies it.

```
use tailor::platform::memory::{MemoryDom, MemoryPlatform};
use tailor::platform::DomNode;
use tailor::{ChannelHost, EditIntent, Inspector, OutboundMessage, SourceAnchor, Tool};

let dom = MemoryDom::new();
let p = dom.body().append_element("p");
p.append_text("Hello");
p.set_attribute("data-astro-source-file", "/home/me/site/src/pages/index.astro");
p.set_attribute("data-astro-source-loc", "12:5");

let host = ChannelHost::new("http://localhost:4321/");
let mut messages = host.subscribe();
let mut inspector = Inspector::new(MemoryPlatform::default(), host, Default::default())?;

inspector.toggle()?;
inspector.handle_pointer_up(Some(p.clone()), None)?;
inspector.select_tool(Tool::EditText)?;
p.set_text_content("Hello world");
inspector.submit_panel()?;

let OutboundMessage::ApiCall { body, .. } = messages.try_recv().unwrap() else {
  unreachable!()
};
assert_eq!(
  body.edit,
  EditIntent::precise(
    "Edit text from Hello to Hello world",
    SourceAnchor::new("site/src/pages/index.astro", 12),
  )
);
# Ok::<(), tailor::TailorError>(())
```

Page access goes through the [`platform`] traits. The browser binding lives
in the `tailor-web` crate; [`platform::memory`] is an in-memory document for
tests and headless use.
*/

mod config;
mod core;
mod dispatch;
mod location;

pub mod overlay;
pub mod panels;
pub mod platform;
pub mod tools;

mod types;
pub use types::*;

pub use crate::config::InspectorConfig;
pub use crate::core::{Inspector, InspectorBuilder, ListenerSet};
pub use crate::dispatch::{ChannelHost, Dispatcher};
pub use crate::location::{resolve_location, trim_path_prefix};
