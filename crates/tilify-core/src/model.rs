use serde::{Deserialize, Serialize};

use crate::error::{Result, TilifyError};

/// Axis of a guillotine cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Cut along the x direction first: the leftover opposite band is a
    /// full-height column.
    Vertical,
    /// Cut along the y direction first: the leftover opposite band is a
    /// full-width row.
    Horizontal,
}

/// A tile awaiting placement: an opaque key plus its pixel extent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tile<K = String> {
    pub key: K,
    pub w: u32,
    pub h: u32,
}

impl<K> Tile<K> {
    pub fn new(key: K, w: u32, h: u32) -> Self {
        Self { key, w, h }
    }
    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }
}

/// A tile placed within a region. `x,y` are local to the owning region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement<K = String> {
    pub key: K,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl<K> Placement<K> {
    pub fn new(key: K, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { key, x, y, w, h }
    }
    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }
}

/// A rectangular area of the canvas. `x,y` are relative to the parent
/// region's origin; the root region is canvas-sized at (0, 0).
///
/// A region is mutated at most once: it either stays permanently empty, or
/// one [`split_on_axis`](Region::split_on_axis) call gives it exactly one
/// fill and exactly two child splits. `fills` and `splits` never overlap,
/// and the splits partition exactly the free area left after subtracting
/// the fills. Zero-extent regions are legal; nothing ever fits in them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region<K = String> {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub fills: Vec<Placement<K>>,
    pub splits: Vec<Region<K>>,
}

impl<K> Region<K> {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            fills: Vec::new(),
            splits: Vec::new(),
        }
    }

    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }

    /// Places `item` within this region and cuts the leftover free area in
    /// two along `axis`.
    ///
    /// The `opposite` child is the full band (column for `Vertical`, row for
    /// `Horizontal`) on the side of the region not containing `item`; the
    /// other child is the remaining strip inside `item`'s own band. The two
    /// children are appended to `splits` ordered by coordinate (left-to-right
    /// by x for `Vertical`, top-to-bottom by y for `Horizontal`) and returned
    /// in that order.
    ///
    /// Fails with [`TilifyError::Bounds`] when `item` exceeds this region's
    /// extent, in which case nothing is mutated.
    pub fn split_on_axis(
        &mut self,
        item: Placement<K>,
        axis: Axis,
    ) -> Result<(&mut Region<K>, &mut Region<K>)> {
        if item.x + item.w > self.w || item.y + item.h > self.h {
            return Err(TilifyError::Bounds {
                x: item.x,
                y: item.y,
                w: item.w,
                h: item.h,
                region_w: self.w,
                region_h: self.h,
            });
        }

        let (opposite, band) = match axis {
            Axis::Vertical => (
                Region::new(
                    if item.x == 0 { item.w } else { 0 },
                    0,
                    self.w - item.w,
                    self.h,
                ),
                Region::new(
                    item.x,
                    if item.y == 0 { item.h } else { 0 },
                    item.w,
                    self.h - item.h,
                ),
            ),
            Axis::Horizontal => (
                Region::new(
                    0,
                    if item.y == 0 { item.h } else { 0 },
                    self.w,
                    self.h - item.h,
                ),
                Region::new(
                    if item.x == 0 { item.w } else { 0 },
                    item.y,
                    self.w - item.w,
                    item.h,
                ),
            ),
        };

        let band_first = match axis {
            Axis::Vertical => band.x <= opposite.x,
            Axis::Horizontal => band.y <= opposite.y,
        };
        let (first, second) = if band_first {
            (band, opposite)
        } else {
            (opposite, band)
        };

        self.fills.push(item);
        self.splits.push(first);
        self.splits.push(second);
        let n = self.splits.len();
        let (head, tail) = self.splits.split_at_mut(n - 1);
        Ok((&mut head[n - 2], &mut tail[0]))
    }

    /// Computes placement statistics for this (sub)tree, with this region's
    /// own extent as the canvas area.
    pub fn stats(&self) -> LayoutStats {
        fn walk<K>(region: &Region<K>, tiles: &mut usize, used: &mut u64) {
            for fill in &region.fills {
                *tiles += 1;
                *used += fill.area();
            }
            for split in &region.splits {
                walk(split, tiles, used);
            }
        }
        let mut num_tiles = 0;
        let mut used_area = 0u64;
        walk(self, &mut num_tiles, &mut used_area);
        let canvas_area = self.area();
        let occupancy = if canvas_area > 0 {
            used_area as f64 / canvas_area as f64
        } else {
            0.0
        };
        LayoutStats {
            num_tiles,
            canvas_area,
            used_area,
            occupancy,
        }
    }
}

/// Statistics about a packed layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Number of tiles placed in the tree.
    pub num_tiles: usize,
    /// Canvas area in pixels.
    pub canvas_area: u64,
    /// Total area covered by placed tiles.
    pub used_area: u64,
    /// used_area / canvas_area (0.0 to 1.0).
    pub occupancy: f64,
}

impl LayoutStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Tiles: {}, Occupancy: {:.2}%, Canvas: {} px², Used: {} px²",
            self.num_tiles,
            self.occupancy * 100.0,
            self.canvas_area,
            self.used_area,
        )
    }

    /// Returns uncovered canvas space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.canvas_area.saturating_sub(self.used_area)
    }
}
