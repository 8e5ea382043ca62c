/*!
Platform layer.

`traits` is the contract; `memory` is a complete in-process document used
for tests and headless embedding. The browser implementation lives in the
`tailor-web` crate.
*/

pub mod memory;
mod traits;

pub use traits::{DomNode, Host, Listener, NodeKind, Platform};
