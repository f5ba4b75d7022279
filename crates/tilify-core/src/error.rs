use thiserror::Error;

#[derive(Debug, Error)]
pub enum TilifyError {
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("tile {w}x{h} at ({x}, {y}) is out of bounds of its {region_w}x{region_h} region")]
    Bounds {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        region_w: u32,
        region_h: u32,
    },
}

pub type Result<T> = std::result::Result<T, TilifyError>;
