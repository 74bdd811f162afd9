use std::fmt::Write as _;

use crate::catalog::{Locale, ui_text};
use crate::media::Track;

use super::DisplayNode;

const HEAVY_RULE: usize = 60;
const LIGHT_RULE: usize = 40;

/// Render one track's tree as plain text, depth first.
///
/// Leaves are written as `"  <label>: <value>"` with the label padded to
/// `label_width` characters.
pub fn render_report(
    track: &Track,
    tree: &[DisplayNode],
    locale: Locale,
    label_width: usize,
) -> String {
    let mut out = String::new();
    let rule = "=".repeat(HEAVY_RULE);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{} {}",
        track.track_type.as_str().to_uppercase(),
        ui_text("track_information", locale)
    );
    let _ = writeln!(out, "{rule}");
    out.push('\n');

    for category in tree {
        let _ = writeln!(out, "📋 {}", category.label);
        let _ = writeln!(out, "{}", "-".repeat(LIGHT_RULE));
        for leaf in &category.children {
            let value = leaf.value.as_deref().unwrap_or_default();
            let _ = writeln!(out, "  {:<label_width$}: {}", leaf.label, value);
        }
        out.push('\n');
    }

    out
}
