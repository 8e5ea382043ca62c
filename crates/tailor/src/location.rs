/*!
Location resolution: maps an element back to the source line it came from.

A build step annotates elements with a file-path attribute and a
`line:column` attribute. An element without its own annotation inherits the
nearest annotated ancestor's, reported as [`Location::Parent`].
*/

use crate::config::InspectorConfig;
use crate::platform::DomNode;
use crate::types::{Location, SourceAnchor};

/// Resolve the source location of `element`, walking up the ancestor chain.
///
/// Terminates at the document root; the chain is finite.
pub fn resolve_location<N: DomNode>(element: Option<&N>, config: &InspectorConfig) -> Option<Location> {
  let element = element?;

  if let Some(anchor) = own_anchor(element, config) {
    return Some(Location::Exact(anchor));
  }

  let mut current = element.parent();
  while let Some(node) = current {
    if let Some(anchor) = own_anchor(&node, config) {
      return Some(Location::Parent(anchor));
    }
    current = node.parent();
  }

  None
}

/// The element's own annotation, if both attributes are present and valid.
pub fn own_anchor<N: DomNode>(element: &N, config: &InspectorConfig) -> Option<SourceAnchor> {
  let file_path = element
    .attribute(&config.source_file_attribute)
    .and_then(|raw| trim_path_prefix(&raw, config.path_prefix_depth))?;
  let line_number = element
    .attribute(&config.source_loc_attribute)
    .and_then(|raw| parse_line(&raw))?;

  Some(SourceAnchor {
    file_path,
    line_number,
  })
}

/// Drop the first `depth` `/`-separated segments. Empty results are absent.
///
/// An absolute path counts its leading empty segment, so depth 3 turns
/// `/home/me/site/src/pages/index.astro` into `site/src/pages/index.astro`.
pub fn trim_path_prefix(raw: &str, depth: usize) -> Option<String> {
  let trimmed = raw.split('/').skip(depth).collect::<Vec<_>>().join("/");
  (!trimmed.is_empty()).then_some(trimmed)
}

/// Parse the line component of `line:column`.
///
/// Reads the leading digits the way JavaScript's `parseInt` does, so
/// `12abc:1` is line 12. No leading digits, zero and negative lines are absent.
pub fn parse_line(raw: &str) -> Option<u32> {
  let rest = raw.trim_start();
  let rest = rest.strip_prefix('+').unwrap_or(rest);
  let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
  rest.get(..end)?.parse::<u32>().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::platform::memory::{MemoryDom, MemoryNode};

  const FILE: &str = "data-astro-source-file";
  const LOC: &str = "data-astro-source-loc";

  fn annotate(node: &MemoryNode, path: &str, loc: &str) {
    node.set_attribute(FILE, path);
    node.set_attribute(LOC, loc);
  }

  fn resolve(node: &MemoryNode) -> Option<Location> {
    resolve_location(Some(node), &InspectorConfig::default())
  }

  mod parsing {
    use super::*;

    #[test]
    fn trims_fixed_prefix() {
      assert_eq!(
        trim_path_prefix("/home/me/site/src/pages/index.astro", 3).as_deref(),
        Some("site/src/pages/index.astro")
      );
      assert_eq!(trim_path_prefix("a/b/c/pages/index.astro", 3).as_deref(), Some("pages/index.astro"));
      assert_eq!(trim_path_prefix("a/b", 0).as_deref(), Some("a/b"));
    }

    #[test]
    fn too_short_path_is_absent() {
      assert_eq!(trim_path_prefix("/a/b", 3), None);
      assert_eq!(trim_path_prefix("", 0), None);
    }

    #[test]
    fn parses_line_component() {
      assert_eq!(parse_line("12:5"), Some(12));
      assert_eq!(parse_line("7"), Some(7));
    }

    #[test]
    fn reads_leading_digits_like_parse_int() {
      assert_eq!(parse_line("12abc:1"), Some(12));
      assert_eq!(parse_line(" 8:2"), Some(8));
      assert_eq!(parse_line("+3:1"), Some(3));
      assert_eq!(parse_line("4.5:1"), Some(4));
    }

    #[test]
    fn rejects_bad_lines() {
      assert_eq!(parse_line("0:1"), None, "zero is not a line");
      assert_eq!(parse_line("abc:1"), None);
      assert_eq!(parse_line(":4"), None);
      assert_eq!(parse_line("-3:1"), None);
      assert_eq!(parse_line(""), None);
    }
  }

  mod resolution {
    use super::*;

    #[test]
    fn null_element_is_absent() {
      assert_eq!(resolve_location::<MemoryNode>(None, &InspectorConfig::default()), None);
    }

    #[test]
    fn own_annotation_is_exact() {
      let dom = MemoryDom::new();
      let p = dom.body().append_element("p");
      annotate(&p, "/x/y/pages/index.astro", "12:3");

      assert_eq!(
        resolve(&p),
        Some(Location::Exact(SourceAnchor::new("pages/index.astro", 12)))
      );
    }

    #[test]
    fn inherits_nearest_ancestor() {
      let dom = MemoryDom::new();
      let outer = dom.body().append_element("main");
      annotate(&outer, "/x/y/layout.astro", "1:1");
      let section = outer.append_element("section");
      annotate(&section, "/x/y/layout.astro", "4:2");
      let a = section.append_element("div").append_element("a");

      assert_eq!(
        resolve(&a),
        Some(Location::Parent(SourceAnchor::new("layout.astro", 4)))
      );
    }

    #[test]
    fn exact_wins_over_ancestor() {
      let dom = MemoryDom::new();
      let div = dom.body().append_element("div");
      annotate(&div, "/x/y/a.astro", "2:1");
      let span = div.append_element("span");
      annotate(&span, "/x/y/b.astro", "9:1");

      assert_eq!(resolve(&span), Some(Location::Exact(SourceAnchor::new("b.astro", 9))));
    }

    #[test]
    fn half_annotation_falls_through_to_parent() {
      let dom = MemoryDom::new();
      let div = dom.body().append_element("div");
      annotate(&div, "/x/y/a.astro", "2:1");
      let span = div.append_element("span");
      span.set_attribute(FILE, "/x/y/b.astro");
      span.set_attribute(LOC, "oops");

      assert_eq!(resolve(&span), Some(Location::Parent(SourceAnchor::new("a.astro", 2))));
    }

    #[test]
    fn unannotated_chain_is_absent() {
      let dom = MemoryDom::new();
      let deep = dom
        .body()
        .append_element("div")
        .append_element("div")
        .append_element("p");

      assert_eq!(resolve(&deep), None);
    }

    #[test]
    fn custom_attributes_and_depth() {
      let config = InspectorConfig {
        source_file_attribute: "data-file".to_string(),
        source_loc_attribute: "data-loc".to_string(),
        path_prefix_depth: 0,
        ..InspectorConfig::default()
      };
      let dom = MemoryDom::new();
      let p = dom.body().append_element("p");
      p.set_attribute("data-file", "src/p.astro");
      p.set_attribute("data-loc", "5:0");

      assert_eq!(
        resolve_location(Some(&p), &config),
        Some(Location::Exact(SourceAnchor::new("src/p.astro", 5)))
      );
    }
  }
}
