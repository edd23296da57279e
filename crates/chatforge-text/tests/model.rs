//! Integration tests for the text model: inheritance, flattening, and
//! downsampling over randomized inputs.

use chatforge_text::{
    Component, Decoration, LEGACY_PALETTE, NamedColor, PaletteEntry, ResolvedStyle, Rgb, Style,
    flatten, nearest_index, nearest_palette_color,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =========================================================================
// Helpers
// =========================================================================

fn random_rgb(rng: &mut StdRng) -> Rgb {
    Rgb::new(rng.random(), rng.random(), rng.random())
}

fn random_tree(rng: &mut StdRng, depth: u32) -> Component {
    let mut node = Component::text(format!("t{}", rng.random_range(0..100)));
    if rng.random_bool(0.5) {
        node = node.color(NamedColor::ALL[rng.random_range(0..16)]);
    }
    for decoration in Decoration::ALL {
        if rng.random_bool(0.3) {
            node = node.decoration(decoration, rng.random());
        }
    }
    if depth > 0 {
        for _ in 0..rng.random_range(0..3) {
            node = node.append(random_tree(rng, depth - 1));
        }
    }
    node
}

/// Reference resolution: walk from the root, passing resolved styles down,
/// and record the style of every node with text.
fn reference_runs(
    node: &Component,
    parent: &ResolvedStyle,
    out: &mut Vec<(String, ResolvedStyle)>,
) {
    let style = node.resolve(parent);
    out.push((node.content().fallback_text().to_string(), style.clone()));
    for child in node.children() {
        reference_runs(child, &style, out);
    }
}

// =========================================================================
// Style inheritance
// =========================================================================

#[test]
fn test_parent_bold_red_child_italic() {
    let tree = Component::text("parent ")
        .bold(true)
        .color(NamedColor::Red)
        .append(Component::text("child").italic(true));

    let runs = flatten(&tree);
    let child = &runs[1].style;
    assert!(child.bold);
    assert!(child.italic);
    assert_eq!(child.color, Some(NamedColor::Red.into()));
}

#[test]
fn test_flatten_matches_reference_resolution() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let tree = random_tree(&mut rng, 3);

        let mut reference = Vec::new();
        reference_runs(&tree, &ResolvedStyle::default(), &mut reference);

        // Merge the reference the same way flatten does.
        let mut expected: Vec<(String, ResolvedStyle)> = Vec::new();
        for (text, style) in reference.into_iter().filter(|(t, _)| !t.is_empty()) {
            match expected.last_mut() {
                Some((last_text, last_style)) if *last_style == style => last_text.push_str(&text),
                _ => expected.push((text, style)),
            }
        }

        let actual: Vec<(String, ResolvedStyle)> =
            flatten(&tree).into_iter().map(|r| (r.text, r.style)).collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_resolving_never_mutates_input() {
    let mut rng = StdRng::seed_from_u64(11);
    let tree = random_tree(&mut rng, 4);
    let snapshot = tree.clone();
    let _ = flatten(&tree);
    let _ = tree.plain_text();
    assert_eq!(tree, snapshot);
    assert!(tree.ptr_eq(&snapshot));
}

#[test]
fn test_style_merge_agrees_with_nested_resolution() {
    let outer = Style::default().with_color(NamedColor::Aqua);
    let inner = Style::default().with_decoration(Decoration::Strikethrough, true);

    let nested = Component::empty()
        .with_style(outer.clone())
        .append(Component::text("x").with_style(inner.clone()));
    let single = Component::text("x").with_style(outer.merge(&inner));

    assert_eq!(flatten(&nested), flatten(&single));
}

// =========================================================================
// Downsampling
// =========================================================================

#[test]
fn test_nearest_is_deterministic_and_minimal() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let rgb = random_rgb(&mut rng);
        let first = nearest_index(rgb, &LEGACY_PALETTE);
        let second = nearest_index(rgb, &LEGACY_PALETTE);
        assert_eq!(first, second);

        let best = rgb.distance_squared(LEGACY_PALETTE[first].rgb);
        for (i, entry) in LEGACY_PALETTE.iter().enumerate() {
            let d = rgb.distance_squared(entry.rgb);
            assert!(d >= best);
            if d == best {
                assert!(i >= first, "tie must resolve to the lowest index");
            }
        }
    }
}

#[test]
fn test_black_white_midpoint_prefers_black() {
    let palette = [
        PaletteEntry::new("BLACK", Rgb::new(0, 0, 0)),
        PaletteEntry::new("WHITE", Rgb::new(255, 255, 255)),
    ];
    let entry = nearest_palette_color(Rgb::new(127, 127, 127), &palette);
    assert_eq!(entry.name, "BLACK");
}
