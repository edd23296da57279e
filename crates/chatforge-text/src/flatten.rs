//! Flattening a tree into a sequence of styled runs.
//!
//! Rendering targets without a tree model (legacy strings, plain text) see
//! a component as text runs, each with one resolved style. The traversal is
//! depth-first and left-to-right, and each node's style is resolved exactly
//! once, so flattening is linear in the size of the tree.

use crate::{Component, ResolvedStyle};

/// A piece of text with a single effective style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyledRun {
    pub text: String,
    pub style: ResolvedStyle,
}

/// Flattens `component` into styled runs.
///
/// Each node contributes its [fallback text](crate::Content::fallback_text)
/// followed by its children. Empty runs are skipped and adjacent runs with
/// equal styles are merged.
pub fn flatten(component: &Component) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    flatten_into(component, &ResolvedStyle::default(), &mut runs);
    runs
}

fn flatten_into(component: &Component, parent: &ResolvedStyle, runs: &mut Vec<StyledRun>) {
    let style = component.resolve(parent);

    let text = component.content().fallback_text();
    if !text.is_empty() {
        match runs.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => runs.push(StyledRun {
                text: text.to_string(),
                style: style.clone(),
            }),
        }
    }

    for child in component.children() {
        flatten_into(child, &style, runs);
    }
}

impl Component {
    /// The text of this tree with all styling dropped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        push_plain(self, &mut out);
        out
    }
}

fn push_plain(component: &Component, out: &mut String) {
    out.push_str(component.content().fallback_text());
    for child in component.children() {
        push_plain(child, out);
    }
}
