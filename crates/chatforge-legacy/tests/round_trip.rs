//! Integration tests for legacy serialization: round trips over random
//! text-only trees and the documented lossy behavior.

use chatforge_legacy::{LegacyMode, LegacySerializer, from_legacy_string, to_legacy_string};
use chatforge_text::{
    ClickEvent, Component, Decoration, HoverEvent, NamedColor, Rgb, StyledRun, flatten,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =========================================================================
// Helpers
// =========================================================================

const WORDS: [&str; 6] = ["alpha", "beta ", "gamma", " ", "delta", "42"];

/// A random tree using only text, named colors, and decorations.
fn random_text_tree(rng: &mut StdRng, depth: u32, rgb: bool) -> Component {
    let mut node = Component::text(WORDS[rng.random_range(0..WORDS.len())]);
    if rng.random_bool(0.4) {
        node = if rgb {
            node.color(Rgb::new(rng.random(), rng.random(), rng.random()))
        } else {
            node.color(NamedColor::ALL[rng.random_range(0..16)])
        };
    }
    for decoration in Decoration::ALL {
        if rng.random_bool(0.25) {
            node = node.decoration(decoration, rng.random());
        }
    }
    if depth > 0 {
        for _ in 0..rng.random_range(0..4) {
            node = node.append(random_text_tree(rng, depth - 1, rgb));
        }
    }
    node
}

fn runs(component: &Component) -> Vec<StyledRun> {
    flatten(component)
}

// =========================================================================
// Round trips
// =========================================================================

#[test]
fn test_strict_round_trip_preserves_runs() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..500 {
        let tree = random_text_tree(&mut rng, 3, false);
        let legacy = to_legacy_string(&tree, LegacyMode::Strict);
        let parsed = from_legacy_string(&legacy);
        assert_eq!(runs(&parsed), runs(&tree), "legacy: {legacy:?}");
    }
}

#[test]
fn test_hex_round_trip_preserves_rgb_runs() {
    let serializer = LegacySerializer::section().with_mode(LegacyMode::HexCapable);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let tree = random_text_tree(&mut rng, 3, true);
        let legacy = serializer.serialize(&tree);
        let parsed = serializer.deserialize(&legacy);
        assert_eq!(runs(&parsed), runs(&tree), "legacy: {legacy:?}");
    }
}

#[test]
fn test_reserializing_parsed_output_is_stable() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let tree = random_text_tree(&mut rng, 2, false);
        let once = to_legacy_string(&tree, LegacyMode::Strict);
        let twice = to_legacy_string(&from_legacy_string(&once), LegacyMode::Strict);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_strict_mode_output_has_no_hex_sequences() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let tree = random_text_tree(&mut rng, 2, true);
        let legacy = to_legacy_string(&tree, LegacyMode::Strict);
        assert!(!legacy.contains("§x"), "{legacy:?}");
    }
}

// =========================================================================
// Lossy conversion
// =========================================================================

#[test]
fn test_click_action_does_not_survive() {
    let tree = Component::text("Click here")
        .color(NamedColor::Aqua)
        .click_event(ClickEvent::OpenUrl("https://example.com".into()))
        .hover_event(HoverEvent::ShowText(Component::text("opens a link")));

    let parsed = from_legacy_string(&to_legacy_string(&tree, LegacyMode::Strict));

    assert_eq!(parsed.style().click_event, None);
    assert_eq!(parsed.style().hover_event, None);
    assert_eq!(parsed, Component::text("Click here").color(NamedColor::Aqua));
}

#[test]
fn test_strict_round_trip_of_rgb_lands_on_nearest_named_color() {
    let tree = Component::text("x").color(Rgb::from_u32(0xFFAA10));
    let parsed = from_legacy_string(&to_legacy_string(&tree, LegacyMode::Strict));
    assert_eq!(parsed.style().color, Some(NamedColor::Gold.into()));
}

#[test]
fn test_ampersand_example() {
    let parsed = LegacySerializer::ampersand().deserialize("&c&lBold Red&rNormal");
    let runs = runs(&parsed);

    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].text, "Bold Red");
    assert_eq!(runs[0].style.color, Some(NamedColor::Red.into()));
    assert!(runs[0].style.bold);
    assert_eq!(runs[1].text, "Normal");
    assert_eq!(runs[1].style, Default::default());
}
