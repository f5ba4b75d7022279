use std::collections::HashMap;
use std::hash::Hash;

use image::RgbaImage;

use crate::model::Region;

/// Paint every fill reachable from `region` onto `canvas`, depth first.
///
/// `(ox, oy)` is the absolute origin of `region`'s parent; fills land at
/// `(ox + region.x + fill.x, oy + region.y + fill.y)`. Splits are visited
/// in the order they were produced, so repeated traversals of the same tree
/// paint identical output. Fills whose key has no entry in `sources` are
/// skipped.
pub fn composite<K>(
    region: &Region<K>,
    canvas: &mut RgbaImage,
    sources: &HashMap<K, RgbaImage>,
    ox: u32,
    oy: u32,
) where
    K: Eq + Hash,
{
    for fill in &region.fills {
        if let Some(src) = sources.get(&fill.key) {
            blit_rgba(src, canvas, ox + region.x + fill.x, oy + region.y + fill.y);
        }
    }
    for split in &region.splits {
        composite(split, canvas, sources, ox + region.x, oy + region.y);
    }
}

/// Copy `src` into `canvas` with its top-left at `(dx, dy)`. Pixels falling
/// outside the canvas are dropped.
pub fn blit_rgba(src: &RgbaImage, canvas: &mut RgbaImage, dx: u32, dy: u32) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();
    for yy in 0..sh {
        for xx in 0..sw {
            if dx + xx < cw && dy + yy < ch {
                canvas.put_pixel(dx + xx, dy + yy, *src.get_pixel(xx, yy));
            }
        }
    }
}
