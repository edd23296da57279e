//! Native adapters: the seam between the core and a host's own text type.
//!
//! A host implements [`NativeAdapter`] once per target type it talks to.
//! The adapter only converts; all flattening and downsampling is done by
//! the legacy and structured serializers, driven by the adapter's
//! [`Capabilities`].
//!
//! Two adapters cover targets with no text object of their own:
//!
//! - [`LegacyTextAdapter`]: targets that take formatting-code strings.
//! - [`StructuredTextAdapter`]: targets that take the JSON tree form.

use chatforge_legacy::{LegacyMode, LegacySerializer, SECTION_CHAR};
use chatforge_structured::{StructuredOptions, StructuredSerializer, from_structured};
use chatforge_text::Component;
use serde_json::Value;

use crate::{Capabilities, ChatforgeError, LegacyTextCache, prune};

/// Converts components to and from one target's native text type.
///
/// ## Trait bounds
///
/// `Send + Sync` lets one adapter be shared by every thread that sends
/// text to its target; adapters hold configuration, not per-call state.
pub trait NativeAdapter: Send + Sync {
    /// The target's own text value.
    type Native;

    /// What the target can render. Fixed for the adapter's lifetime.
    fn capabilities(&self) -> &Capabilities;

    /// Renders `component` for the target. Never fails: anything the
    /// target can't show is dropped or approximated.
    fn to_native(&self, component: &Component) -> Self::Native;

    /// Reads a native value back into a component.
    ///
    /// # Errors
    ///
    /// Returns an error if the native value does not describe a component.
    fn from_native(&self, native: &Self::Native) -> Result<Component, ChatforgeError>;
}

// ---------------------------------------------------------------------------
// LegacyTextAdapter
// ---------------------------------------------------------------------------

/// An adapter for targets that take legacy formatting-code strings.
///
/// Hex sequences are written only when the capabilities allow RGB. With a
/// cache attached, each component instance is rendered once.
///
/// ```rust
/// use chatforge::{Capabilities, LegacyTextAdapter, NativeAdapter};
/// use chatforge_text::{Component, Rgb};
///
/// let adapter = LegacyTextAdapter::new(Capabilities::legacy());
/// let c = Component::text("!").color(Rgb::from_u32(0xFFAA10));
/// assert_eq!(adapter.to_native(&c), "§6!");
/// ```
#[derive(Debug)]
pub struct LegacyTextAdapter {
    capabilities: Capabilities,
    serializer: LegacySerializer,
    cache: Option<LegacyTextCache>,
}

impl LegacyTextAdapter {
    /// An adapter writing section-sign codes.
    pub fn new(capabilities: Capabilities) -> Self {
        Self::with_marker(capabilities, SECTION_CHAR)
    }

    pub fn with_marker(capabilities: Capabilities, marker: char) -> Self {
        Self {
            capabilities,
            serializer: LegacySerializer {
                marker,
                mode: capabilities.legacy_mode(),
            },
            cache: None,
        }
    }

    /// Remembers up to `capacity` rendered strings.
    pub fn with_cache(mut self, capacity: usize) -> Self {
        self.cache = Some(LegacyTextCache::new(capacity));
        self
    }

    pub fn mode(&self) -> LegacyMode {
        self.serializer.mode
    }

    pub fn cache(&self) -> Option<&LegacyTextCache> {
        self.cache.as_ref()
    }
}

impl NativeAdapter for LegacyTextAdapter {
    type Native = String;

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn to_native(&self, component: &Component) -> String {
        match &self.cache {
            Some(cache) => cache
                .get_or_render(component, || self.serializer.serialize(component))
                .to_string(),
            None => self.serializer.serialize(component),
        }
    }

    fn from_native(&self, native: &String) -> Result<Component, ChatforgeError> {
        Ok(self.serializer.deserialize(native))
    }
}

// ---------------------------------------------------------------------------
// StructuredTextAdapter
// ---------------------------------------------------------------------------

/// An adapter for targets that take the structured form.
///
/// Components are pruned to the capabilities first. Targets without RGB
/// also get the old `value` form for hover text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredTextAdapter {
    capabilities: Capabilities,
    serializer: StructuredSerializer,
}

impl StructuredTextAdapter {
    pub fn new(capabilities: Capabilities) -> Self {
        // Colors are already fitted by `prune`.
        let options = StructuredOptions {
            downsample: None,
            legacy_hover_value: !capabilities.hex_colors,
        };
        Self {
            capabilities,
            serializer: StructuredSerializer::new(options),
        }
    }
}

impl NativeAdapter for StructuredTextAdapter {
    type Native = Value;

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn to_native(&self, component: &Component) -> Value {
        self.serializer.serialize(&prune(component, &self.capabilities))
    }

    fn from_native(&self, native: &Value) -> Result<Component, ChatforgeError> {
        from_structured(native).map_err(|err| {
            tracing::debug!(%err, "rejected structured text");
            ChatforgeError::from(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatforge_text::{ClickEvent, HoverEvent, NamedColor, Rgb};
    use serde_json::json;

    #[test]
    fn test_legacy_adapter_mode_follows_capabilities() {
        assert_eq!(
            LegacyTextAdapter::new(Capabilities::modern()).mode(),
            LegacyMode::HexCapable
        );
        assert_eq!(
            LegacyTextAdapter::new(Capabilities::plain_chat()).mode(),
            LegacyMode::Strict
        );
    }

    #[test]
    fn test_legacy_adapter_hex_output() {
        let adapter = LegacyTextAdapter::with_marker(Capabilities::modern(), '&');
        let c = Component::text("x").color(Rgb::from_u32(0x0A0B0C));
        assert_eq!(adapter.to_native(&c), "&x&0&a&0&b&0&cx");
    }

    #[test]
    fn test_legacy_adapter_round_trip() {
        let adapter = LegacyTextAdapter::new(Capabilities::legacy());
        let parsed = adapter.from_native(&"§cHi".to_string()).unwrap();
        assert_eq!(parsed, Component::text("Hi").color(NamedColor::Red));
        assert_eq!(adapter.to_native(&parsed), "§cHi");
    }

    #[test]
    fn test_legacy_adapter_uses_cache() {
        let adapter = LegacyTextAdapter::new(Capabilities::legacy()).with_cache(8);
        let c = Component::text("x").bold(true);
        assert_eq!(adapter.to_native(&c), "§lx");
        assert_eq!(adapter.to_native(&c), "§lx");
        assert_eq!(adapter.cache().map(LegacyTextCache::len), Some(1));
    }

    #[test]
    fn test_structured_adapter_modern_is_lossless() {
        let adapter = StructuredTextAdapter::new(Capabilities::modern());
        let c = Component::text("x")
            .color(Rgb::from_u32(0x0A0B0C))
            .font("minecraft:alt")
            .hover_event(HoverEvent::ShowText(Component::text("tip")));
        let native = adapter.to_native(&c);
        assert_eq!(native["hoverEvent"]["contents"], json!({ "text": "tip" }));
        assert_eq!(adapter.from_native(&native), Ok(c));
    }

    #[test]
    fn test_structured_adapter_legacy_target() {
        let adapter = StructuredTextAdapter::new(Capabilities::legacy());
        let c = Component::text("x")
            .color(Rgb::from_u32(0xFE0000))
            .font("minecraft:alt")
            .click_event(ClickEvent::ChangePage("2".into()))
            .hover_event(HoverEvent::ShowText(Component::text("tip")));
        assert_eq!(
            adapter.to_native(&c),
            json!({
                "text": "x",
                "color": "dark_red",
                "clickEvent": { "action": "change_page", "value": "2" },
                "hoverEvent": { "action": "show_text", "value": { "text": "tip" } }
            })
        );
    }

    #[test]
    fn test_structured_adapter_rejects_bad_input() {
        let adapter = StructuredTextAdapter::new(Capabilities::modern());
        let err = adapter.from_native(&json!({ "bold": true })).unwrap_err();
        assert!(matches!(err, ChatforgeError::Format(_)));
    }
}
