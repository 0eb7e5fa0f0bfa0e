//! Ship report rendering.

use crate::ship::Ship;

/// Placeholder rendered for a slot that received no matching part.
const EMPTY_SLOT: &str = "<empty>";

/// Render a ship as a human-readable multi-line report.
///
/// The output is deterministic for a given ship: one line per fixed slot,
/// two wing lines, and a bracketed weapon list. Unset slots render the
/// placeholder instead of faulting, and the weapon list only contains
/// mounted weapons (no blank entries between commas).
pub fn render_report(ship: &Ship) -> String {
    let slot = |part: Option<&str>| part.unwrap_or(EMPTY_SLOT).to_string();

    let lines = [
        "This ship is loaded with:".to_string(),
        format!("  Engine: {}", slot(ship.engine())),
        format!("  Fuselage: {}", slot(ship.fuselage())),
        format!("  Cabin: {}", slot(ship.cabin())),
        format!("  Armor: {}", slot(ship.armor())),
        "  Wings:".to_string(),
        format!("    (small): {}", slot(ship.small_wing())),
        format!("    (large): {}", slot(ship.large_wing())),
        format!("  Weapons: [{}]", ship.weapons().join(", ")),
    ];

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
