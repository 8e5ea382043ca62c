/*!
Browser binding for [`tailor`].

Implements the core's `Platform` and `DomNode` over `web_sys`, draws the
overlay chrome, and posts edit intents to `window.parent`. The JS surface is
the [`Tailor`] class; everything else compiles natively so the pure pieces
(config, style parsing, control attributes) can be tested without a browser.

## Module Structure

- `config` - constructor options (`WebConfig`)
- `logger` - `log` backend writing to the console
- `style` - computed-style parsing
- `ui` - `data-tailor-*` control attributes
- `app` - the `#[wasm_bindgen]` entry point (wasm only)
- `dom` - `DomNode` for live elements (wasm only)
- `platform` - document listeners and viewport (wasm only)
- `host` - parent-frame messaging (wasm only)
- `view` - overlay DOM (wasm only)
*/

mod config;
mod logger;
pub mod style;
pub mod ui;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod platform;
#[cfg(target_arch = "wasm32")]
mod view;

pub use config::WebConfig;
pub use logger::init as init_logger;

#[cfg(target_arch = "wasm32")]
pub use app::Tailor;
#[cfg(target_arch = "wasm32")]
pub use dom::WebNode;
#[cfg(target_arch = "wasm32")]
pub use host::ParentFrameHost;
#[cfg(target_arch = "wasm32")]
pub use platform::{Handlers, WebPlatform};
