//! Fitting components to what a target can render.
//!
//! Pruning removes the attributes a target has no use for and reduces
//! colors to the target's palette. The input is never modified; subtrees
//! that need no change are shared with the result.

use chatforge_text::{Component, TextColor, nearest_palette_color};

use crate::Capabilities;

/// Returns `component` with everything `capabilities` rules out removed:
///
/// - click events, hover events, and fonts the target can't show,
/// - colors outside the target palette, replaced by the nearest entry.
///
/// Insertions are kept since they never affect how text looks.
///
/// ```rust
/// use chatforge::{Capabilities, prune};
/// use chatforge_text::{ClickEvent, Component, NamedColor, Rgb};
///
/// let c = Component::text("vote")
///     .color(Rgb::from_u32(0xFE0000))
///     .click_event(ClickEvent::OpenUrl("https://example.com/vote".into()));
///
/// let fitted = prune(&c, &Capabilities::plain_chat());
/// assert_eq!(fitted, Component::text("vote").color(NamedColor::DarkRed));
/// ```
pub fn prune(component: &Component, capabilities: &Capabilities) -> Component {
    if capabilities.renders_everything() {
        return component.clone();
    }

    let palette = capabilities.downsample_palette();
    let mut stripped = 0usize;
    let mut downsampled = 0usize;

    let pruned = component.map_styles(&mut |style| {
        let mut style = style.clone();
        if !capabilities.click_events && style.click_event.take().is_some() {
            stripped += 1;
        }
        if !capabilities.hover_events && style.hover_event.take().is_some() {
            stripped += 1;
        }
        if !capabilities.fonts && style.font.take().is_some() {
            stripped += 1;
        }
        if let (Some(palette), Some(color)) = (palette, style.color) {
            let fitted = TextColor::from(nearest_palette_color(color.rgb(), palette.entries()).rgb);
            if fitted != color {
                tracing::trace!(from = %color, to = %fitted, ?palette, "downsampled color");
                style.color = Some(fitted);
                downsampled += 1;
            }
        }
        style
    });

    if stripped > 0 || downsampled > 0 {
        tracing::debug!(
            stripped,
            downsampled,
            nodes = component.node_count(),
            "pruned component for target"
        );
    }
    pruned
}
