//! Fenced Markdown code blocks.

use std::fmt::Write;

use crate::snippet::RenderedBlock;

pub(super) fn emit(blocks: &[RenderedBlock]) -> String {
    let mut out = String::with_capacity(256);

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let fence = fence_for(&block.body);
        writeln!(
            out,
            "{fence}{} title=\"{}\"\n{}\n{fence}",
            block.label(),
            block.title.replace('"', "\\\""),
            block.body,
        )
        .ok();
    }

    out
}

/// A backtick fence longer than any backtick run in the body.
fn fence_for(body: &str) -> String {
    let longest = body
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}
