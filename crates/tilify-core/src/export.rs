use serde::Serialize;

use crate::model::Region;

/// A fill resolved to absolute canvas coordinates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AbsolutePlacement<K = String> {
    pub key: K,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Flattens the region tree into absolute-coordinate placements, in the
/// same depth-first order the compositor paints them.
pub fn flatten_placements<K: Clone>(root: &Region<K>) -> Vec<AbsolutePlacement<K>> {
    fn walk<K: Clone>(region: &Region<K>, ox: u32, oy: u32, out: &mut Vec<AbsolutePlacement<K>>) {
        for fill in &region.fills {
            out.push(AbsolutePlacement {
                key: fill.key.clone(),
                x: ox + region.x + fill.x,
                y: oy + region.y + fill.y,
                w: fill.w,
                h: fill.h,
            });
        }
        for split in &region.splits {
            walk(split, ox + region.x, oy + region.y, out);
        }
    }
    let mut out = Vec::new();
    walk(root, 0, 0, &mut out);
    out
}

/// JSON layout document: canvas size plus the flattened placements.
pub fn to_json_layout(root: &Region<String>) -> serde_json::Value {
    serde_json::json!({
        "canvas": { "w": root.w, "h": root.h },
        "placements": flatten_placements(root),
    })
}
