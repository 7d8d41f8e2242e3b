//! Docusaurus MDX tabs.
//!
//! ```text
//! <Tabs>
//!   <TabItem value="yaml" label="yaml" default>
//!     <CodeBlock title="dot.yaml" language="yaml">{`name: demo`}</CodeBlock>
//!   </TabItem>
//!   ...
//! </Tabs>
//! ```

use std::fmt::Write;

use crate::snippet::RenderedBlock;

pub(super) fn emit(blocks: &[RenderedBlock]) -> String {
    let mut out = String::with_capacity(256);

    out.push_str("<Tabs>\n");
    for (i, block) in blocks.iter().enumerate() {
        let label = block.label();
        let default = if i == 0 { " default" } else { "" };

        writeln!(out, "  <TabItem value=\"{label}\" label=\"{label}\"{default}>").ok();
        writeln!(
            out,
            "    <CodeBlock title=\"{}\" language=\"{label}\">{{`{}`}}</CodeBlock>",
            escape_attr(&block.title),
            escape_template_literal(&block.body),
        )
        .ok();
        out.push_str("  </TabItem>\n");
    }
    out.push_str("</Tabs>\n");

    out
}

/// Escape text for a double-quoted JSX attribute.
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a JS template literal.
fn escape_template_literal(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippet::SnippetInput;
    use serde_json::json;

    #[test]
    fn test_emit_tabs_in_order() {
        let blocks = SnippetInput::new("dot.{{ format }}")
            .with_value(json!({ "name": "demo" }))
            .render()
            .unwrap();
        let out = emit(&blocks);

        assert!(out.starts_with("<Tabs>\n"));
        assert!(out.ends_with("</Tabs>\n"));
        let yaml = out.find("value=\"yaml\"").unwrap();
        let toml = out.find("value=\"toml\"").unwrap();
        let json = out.find("value=\"json\"").unwrap();
        assert!(yaml < toml && toml < json);
        assert!(out.contains(
            "<CodeBlock title=\"dot.toml\" language=\"toml\">{`name = \"demo\"`}</CodeBlock>"
        ));
    }

    #[test]
    fn test_only_first_tab_is_default() {
        let blocks = SnippetInput::new("t")
            .with_value(json!({ "a": 1 }))
            .render()
            .unwrap();
        let out = emit(&blocks);
        assert_eq!(out.matches(" default>").count(), 1);
        assert!(out.contains("label=\"yaml\" default>"));
    }

    #[test]
    fn test_escape_template_literal() {
        assert_eq!(escape_template_literal("a`b"), "a\\`b");
        assert_eq!(escape_template_literal("${HOME}"), "\\${HOME}");
        assert_eq!(escape_template_literal("c:\\x"), "c:\\\\x");
        assert_eq!(escape_template_literal("$HOME"), "$HOME");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("a \"b\" {c}"), "a &quot;b&quot; &#123;c&#125;");
    }
}
