use std::collections::HashMap;

use image::{DynamicImage, Rgba, RgbaImage};
use tracing::{debug, instrument, warn};

use crate::compositing::composite;
use crate::config::TilifyConfig;
use crate::error::Result;
use crate::model::{LayoutStats, Region, Tile};
use crate::packer::pack;

/// In-memory image to place (key + decoded image).
pub struct InputImage {
    pub key: String,
    pub image: DynamicImage,
}

/// Output of a packing run: the populated region tree and the composited
/// canvas.
pub struct PackOutput {
    pub layout: Region<String>,
    pub rgba: RgbaImage,
    /// Keys of tiles no free region could hold, in pool order.
    pub unplaced: Vec<String>,
}

impl PackOutput {
    /// Computes placement statistics for this output.
    pub fn stats(&self) -> LayoutStats {
        self.layout.stats()
    }
}

/// Layout-only output: the populated region tree, no pixel data.
pub struct LayoutOutput {
    pub layout: Region<String>,
    pub unplaced: Vec<String>,
}

#[instrument(skip_all)]
/// Packs `inputs` onto a canvas sized by `cfg` and composites the result.
///
/// An empty input set is not an error: it yields a blank, background-filled
/// canvas and an empty layout. Inputs that fit nowhere are returned in
/// `unplaced` rather than failing the run.
pub fn pack_images(inputs: Vec<InputImage>, cfg: TilifyConfig) -> Result<PackOutput> {
    cfg.validate()?;

    let mut sources: HashMap<String, RgbaImage> = HashMap::with_capacity(inputs.len());
    // Each run gets its own pool; `pack` drains it as tiles are placed.
    let mut pool: Vec<Tile<String>> = Vec::with_capacity(inputs.len());
    for inp in inputs {
        let rgba = inp.image.to_rgba8();
        let (w, h) = rgba.dimensions();
        pool.push(Tile::new(inp.key.clone(), w, h));
        sources.insert(inp.key, rgba);
    }

    let mut root = Region::new(0, 0, cfg.width, cfg.height);
    pack(&mut root, &mut pool)?;
    let unplaced: Vec<String> = pool.into_iter().map(|t| t.key).collect();
    if !unplaced.is_empty() {
        warn!(count = unplaced.len(), "tiles left unplaced");
    }

    let mut canvas = RgbaImage::from_pixel(cfg.width, cfg.height, Rgba(cfg.background_color));
    composite(&root, &mut canvas, &sources, 0, 0);

    let stats = root.stats();
    debug!(
        placed = stats.num_tiles,
        occupancy = stats.occupancy,
        "packed and composited"
    );
    Ok(PackOutput {
        layout: root,
        rgba: canvas,
        unplaced,
    })
}

#[instrument(skip_all)]
/// Packs sizes onto a canvas without compositing pixel data.
///
/// Inputs are (key, width, height).
pub fn pack_layout<K: Into<String>>(
    inputs: Vec<(K, u32, u32)>,
    cfg: TilifyConfig,
) -> Result<LayoutOutput> {
    cfg.validate()?;

    let mut pool: Vec<Tile<String>> = inputs
        .into_iter()
        .map(|(k, w, h)| Tile::new(k.into(), w, h))
        .collect();
    let mut root = Region::new(0, 0, cfg.width, cfg.height);
    pack(&mut root, &mut pool)?;
    let unplaced: Vec<String> = pool.into_iter().map(|t| t.key).collect();
    if !unplaced.is_empty() {
        warn!(count = unplaced.len(), "tiles left unplaced");
    }
    Ok(LayoutOutput {
        layout: root,
        unplaced,
    })
}
