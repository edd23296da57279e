//! Integration tests for the adapter layer: the same components sent to
//! targets with different capabilities, and the cache under concurrency.

use std::sync::Arc;

use chatforge::prelude::*;
use chatforge_text::flatten;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

// =========================================================================
// Helpers
// =========================================================================

fn random_tree(rng: &mut StdRng, depth: u32) -> Component {
    let mut node = Component::text(format!("t{}", rng.random_range(0..100)));
    if rng.random_bool(0.5) {
        node = node.color(Rgb::new(rng.random(), rng.random(), rng.random()));
    }
    if rng.random_bool(0.3) {
        node = node.bold(rng.random());
    }
    if rng.random_bool(0.2) {
        node = node.click_event(ClickEvent::RunCommand("/x".into()));
    }
    if rng.random_bool(0.3) {
        node = node.hover_event(random_hover(rng));
    }
    if rng.random_bool(0.1) {
        node = node.font("minecraft:alt");
    }
    if depth > 0 {
        for _ in 0..rng.random_range(0..3) {
            node = node.append(random_tree(rng, depth - 1));
        }
    }
    node
}

fn random_hover(rng: &mut StdRng) -> HoverEvent {
    let label = Component::text("h").color(Rgb::new(rng.random(), rng.random(), rng.random()));
    match rng.random_range(0..3) {
        0 => HoverEvent::ShowText(label.click_event(ClickEvent::SuggestCommand("/h".into()))),
        1 => HoverEvent::ShowItem(ShowItem {
            id: "minecraft:stone".into(),
            count: rng.random_range(1..65),
            tag: None,
        }),
        _ => HoverEvent::ShowEntity(ShowEntity {
            kind: "minecraft:pig".into(),
            id: "0-0-0-0-1".into(),
            name: rng.random_bool(0.8).then(|| label.font("minecraft:alt")),
        }),
    }
}

/// Runs keyed only by what legacy text can show, merged where they agree.
fn visible_runs(component: &Component) -> Vec<(String, Option<TextColor>, bool)> {
    let mut runs: Vec<(String, Option<TextColor>, bool)> = Vec::new();
    for run in flatten(component) {
        match runs.last_mut() {
            Some(last) if last.1 == run.style.color && last.2 == run.style.bold => {
                last.0.push_str(&run.text);
            }
            _ => runs.push((run.text, run.style.color, run.style.bold)),
        }
    }
    runs
}

fn walk(component: &Component, visit: &mut impl FnMut(&Component)) {
    visit(component);
    match &component.style().hover_event {
        Some(HoverEvent::ShowText(text)) => walk(text, visit),
        Some(HoverEvent::ShowEntity(ShowEntity { name: Some(name), .. })) => walk(name, visit),
        _ => {}
    }
    for child in component.children() {
        walk(child, visit);
    }
}

fn collect_colors(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(object) => {
            for (key, inner) in object {
                match (key.as_str(), inner) {
                    ("color", Value::String(color)) => out.push(color.clone()),
                    _ => collect_colors(inner, out),
                }
            }
        }
        Value::Array(items) => items.iter().for_each(|item| collect_colors(item, out)),
        _ => {}
    }
}

// =========================================================================
// Capability profiles
// =========================================================================

#[test]
fn test_plain_chat_never_receives_interactivity() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let pruned = prune(&random_tree(&mut rng, 3), &Capabilities::plain_chat());
        walk(&pruned, &mut |node| {
            let style = node.style();
            assert!(style.click_event.is_none());
            assert!(style.hover_event.is_none());
            assert!(style.font.is_none());
            if let Some(color) = style.color {
                assert!(color.named().is_some());
            }
        });
    }
}

#[test]
fn test_legacy_target_walks_every_nested_component() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..200 {
        let pruned = prune(&random_tree(&mut rng, 3), &Capabilities::legacy());
        walk(&pruned, &mut |node| {
            assert!(node.style().font.is_none());
            if let Some(color) = node.style().color {
                assert!(color.named().is_some(), "{color}");
            }
        });
    }
}

#[test]
fn test_legacy_structured_entity_name_is_downsampled() {
    let c = Component::text("x").hover_event(HoverEvent::ShowEntity(ShowEntity {
        kind: "minecraft:pig".into(),
        id: "0-0-0-0-1".into(),
        name: Some(Component::text("Babe").color(Rgb::from_u32(0x123456))),
    }));
    let native = StructuredTextAdapter::new(Capabilities::legacy()).to_native(&c);
    assert_eq!(native["hoverEvent"]["contents"]["name"]["color"], "dark_gray");
}

#[test]
fn test_legacy_structured_target_only_sees_named_colors() {
    let adapter = StructuredTextAdapter::new(Capabilities::legacy());
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let native = adapter.to_native(&random_tree(&mut rng, 3));
        let mut colors = Vec::new();
        collect_colors(&native, &mut colors);
        for color in colors {
            assert!(NamedColor::from_name(&color).is_some(), "{color}");
        }
    }
}

#[test]
fn test_modern_structured_target_round_trips() {
    let adapter = StructuredTextAdapter::new(Capabilities::modern());
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let tree = random_tree(&mut rng, 3);
        let native = adapter.to_native(&tree);
        assert_eq!(adapter.from_native(&native), Ok(tree));
    }
}

#[test]
fn test_hex_legacy_target_keeps_exact_colors() {
    let adapter = LegacyTextAdapter::new(Capabilities::modern());
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..200 {
        let tree = random_tree(&mut rng, 3);
        let native = adapter.to_native(&tree);
        let parsed = adapter.from_native(&native).unwrap();
        assert_eq!(visible_runs(&parsed), visible_runs(&tree), "native: {native:?}");
    }
}

#[test]
fn test_ampersand_adapter_parses_config_text() {
    let adapter = LegacyTextAdapter::with_marker(Capabilities::legacy(), '&');
    let motd = adapter.from_native(&"&6&lServer &r&7- &aonline".to_string()).unwrap();
    assert_eq!(motd.plain_text(), "Server - online");
    assert_eq!(adapter.to_native(&motd), "&6&lServer &7- &aonline");
}

#[test]
fn test_structured_errors_surface_as_chatforge_errors() {
    let adapter = StructuredTextAdapter::new(Capabilities::modern());
    let err = adapter
        .from_native(&serde_json::json!({ "text": "x", "color": "no-such-color" }))
        .unwrap_err();
    assert_eq!(
        err,
        ChatforgeError::Format(FormatError::InvalidColor(
            chatforge_text::ColorError::Unknown("no-such-color".into())
        ))
    );
}

// =========================================================================
// Cache
// =========================================================================

#[test]
fn test_cache_is_shared_across_threads() {
    let adapter = Arc::new(LegacyTextAdapter::new(Capabilities::legacy()).with_cache(16));
    let message = Component::text("broadcast").color(NamedColor::Aqua);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let adapter = Arc::clone(&adapter);
            let message = message.clone();
            scope.spawn(move || {
                for _ in 0..50 {
                    assert_eq!(adapter.to_native(&message), "§bbroadcast");
                }
            });
        }
    });

    assert_eq!(adapter.cache().map(LegacyTextCache::len), Some(1));
}

#[test]
fn test_cache_stays_bounded() {
    let adapter = LegacyTextAdapter::new(Capabilities::legacy()).with_cache(8);
    let mut rng = StdRng::seed_from_u64(5);
    let trees: Vec<Component> = (0..50).map(|_| random_tree(&mut rng, 2)).collect();
    for tree in &trees {
        adapter.to_native(tree);
    }
    assert_eq!(adapter.cache().map(LegacyTextCache::len), Some(8));
}
