use tracing::trace;

use crate::error::Result;
use crate::model::{Axis, Placement, Region, Tile};

/// Guillotine packing: best-area-fit tile choice, longer-axis split.
///
/// Picks the largest-area pool tile that fits `region` (first occurrence
/// wins ties), places it at the region's origin, splits the leftover free
/// area along the tile's longer axis (squares split vertically), then
/// recurses into the larger-area child first against the same shrinking
/// pool. Greedy, single pass, no backtracking: once a tile lands in a
/// subtree it is never reconsidered.
///
/// Returns without mutating `region` when nothing in the pool fits; that
/// branch of the tree stays empty. Every top-level call must receive a pool
/// constructed for that run — placed tiles are removed from it.
pub fn pack<K>(region: &mut Region<K>, pool: &mut Vec<Tile<K>>) -> Result<()> {
    let mut best: Option<usize> = None;
    for (i, tile) in pool.iter().enumerate() {
        if tile.w > region.w || tile.h > region.h {
            continue;
        }
        match best {
            Some(b) if pool[b].area() >= tile.area() => {}
            _ => best = Some(i),
        }
    }
    let Some(idx) = best else {
        return Ok(());
    };

    let tile = pool.remove(idx);
    let axis = if tile.w > tile.h {
        Axis::Horizontal
    } else {
        Axis::Vertical
    };
    trace!(w = tile.w, h = tile.h, ?axis, "place tile");

    let item = Placement::new(tile.key, 0, 0, tile.w, tile.h);
    // A bounds failure here means the fit filter above is wrong; it aborts
    // the whole pack rather than skipping the tile.
    let (first, second) = region.split_on_axis(item, axis)?;

    if first.area() > second.area() {
        pack(first, pool)?;
        pack(second, pool)?;
    } else {
        pack(second, pool)?;
        pack(first, pool)?;
    }
    Ok(())
}
