use serde::{Deserialize, Serialize};

use crate::error::{Result, TilifyError};

/// Canvas configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TilifyConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Canvas background color (RGBA).
    #[serde(default = "default_background")]
    pub background_color: [u8; 4],
}

impl Default for TilifyConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 100,
            background_color: default_background(),
        }
    }
}

fn default_background() -> [u8; 4] {
    [255, 255, 255, 255]
}

impl TilifyConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TilifyError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Create a fluent builder for `TilifyConfig`.
    pub fn builder() -> TilifyConfigBuilder {
        TilifyConfigBuilder::new()
    }
}

/// Builder for `TilifyConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct TilifyConfigBuilder {
    cfg: TilifyConfig,
}

impl TilifyConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: TilifyConfig::default(),
        }
    }
    pub fn with_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.width = w;
        self.cfg.height = h;
        self
    }
    pub fn background_color(mut self, rgba: [u8; 4]) -> Self {
        self.cfg.background_color = rgba;
        self
    }
    pub fn build(self) -> TilifyConfig {
        self.cfg
    }
}
