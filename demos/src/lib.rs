// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Zoompack demos.

use tracing_subscriber::EnvFilter;
use zoompack_layout::HierarchyNode;

/// Bundled sample hierarchy, in the `{ name, value?, children? }` JSON shape.
pub const SAMPLE_JSON: &str = include_str!("../data/software.json");

/// Parses a hierarchy from JSON.
pub fn parse_hierarchy(json: &str) -> Result<HierarchyNode, serde_json::Error> {
    serde_json::from_str(json)
}

/// Installs a formatting subscriber filtered by `RUST_LOG`, defaulting to
/// `info` plus `debug` for the Zoompack crates.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,zoompack_layout=debug,zoompack_nav=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_parses() {
        let data = parse_hierarchy(SAMPLE_JSON).unwrap();
        assert_eq!(data.name, "software");
        assert_eq!(data.children.len(), 3);
        assert!(data.node_count() > 40);
    }
}
