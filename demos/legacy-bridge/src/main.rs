//! Reads `&`-coded lines from stdin and prints what a target with the chosen
//! capability profile receives, in both legacy and structured form.
//!
//! ```text
//! echo '&6&lHello &r&7world' | RUST_LOG=debug legacy-bridge plain
//! ```

use std::io::{self, BufRead, Write};

use chatforge::prelude::*;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

fn profile(name: &str) -> Option<Capabilities> {
    match name {
        "modern" => Some(Capabilities::modern()),
        "legacy" => Some(Capabilities::legacy()),
        "extended" => Some(Capabilities::legacy().with_palette(PaletteKind::Extended)),
        "plain" => Some(Capabilities::plain_chat()),
        _ => None,
    }
}

/// One target: the same capabilities seen through both adapters.
struct Bridge {
    reader: LegacyTextAdapter,
    legacy: LegacyTextAdapter,
    structured: StructuredTextAdapter,
}

impl Bridge {
    fn new(capabilities: Capabilities) -> Self {
        Self {
            // Input lines may carry hex sequences, so parse with everything on.
            reader: LegacyTextAdapter::with_marker(Capabilities::modern(), AMPERSAND_CHAR),
            legacy: LegacyTextAdapter::new(capabilities).with_cache(64),
            structured: StructuredTextAdapter::new(capabilities),
        }
    }

    fn convert(&self, line: &str) -> Result<(String, serde_json::Value), ChatforgeError> {
        let component = self.reader.from_native(&line.to_string())?;
        tracing::debug!(nodes = component.node_count(), "parsed input line");
        Ok((
            self.legacy.to_native(&component),
            self.structured.to_native(&component),
        ))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "modern".to_string());
    let capabilities = profile(&name).ok_or_else(|| {
        format!("unknown profile {name:?} (expected modern, legacy, extended, or plain)")
    })?;
    tracing::info!(profile = %name, ?capabilities, "bridging stdin");

    let bridge = Bridge::new(capabilities);
    let mut out = io::stdout().lock();
    for line in io::stdin().lock().lines() {
        let (legacy, structured) = bridge.convert(&line?)?;
        writeln!(out, "legacy:     {legacy}")?;
        writeln!(out, "structured: {structured}")?;
    }
    Ok(())
}
