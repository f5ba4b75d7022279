//! Core library for packing images onto a single canvas.
//!
//! - Packing: guillotine subdivision with best-area-fit tile choice and
//!   longer-axis splits; the layout is a recursive tree of [`model::Region`]s.
//! - Compositing: one depth-first pass over the tree paints the canvas.
//! - Pipeline: `pack_images` takes decoded images and returns the layout
//!   plus the finished RGBA canvas; `pack_layout` computes placements only.
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use tilify_core::{InputImage, TilifyConfig, pack_images};
//! # fn main() -> anyhow::Result<()> {
//! let img1 = ImageReader::open("a.png")?.decode()?;
//! let img2 = ImageReader::open("b.png")?.decode()?;
//! let inputs = vec![
//!   InputImage { key: "a".into(), image: img1 },
//!   InputImage { key: "b".into(), image: img2 },
//! ];
//! let cfg = TilifyConfig { width: 800, height: 600, ..Default::default() };
//! let out = pack_images(inputs, cfg)?;
//! out.rgba.save("result.png")?;
//! # Ok(()) }
//! ```

pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `tilify_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::compositing::{blit_rgba, composite};
    pub use crate::config::{TilifyConfig, TilifyConfigBuilder};
    pub use crate::error::{Result, TilifyError};
    pub use crate::export::{AbsolutePlacement, flatten_placements, to_json_layout};
    pub use crate::model::{Axis, LayoutStats, Placement, Region, Tile};
    pub use crate::packer::pack;
    pub use crate::pipeline::{InputImage, LayoutOutput, PackOutput, pack_images, pack_layout};
}
