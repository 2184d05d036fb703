//! Bounded-grid helpers: torus wrap and clear-outside, for HROT counting
//! passes that must treat a finite rectangle as either toroidal or
//! hard-edged.

use crate::config::BoundedGridConfig;
use crate::error::GridError;
use crate::grid::ColourGrid;

fn validate(cfg: &BoundedGridConfig) -> Result<(), GridError> {
    if cfg.max_x < cfg.min_x || cfg.max_y < cfg.min_y {
        return Err(GridError::InvalidBoundedRect {
            min_x: cfg.min_x,
            min_y: cfg.min_y,
            max_x: cfg.max_x,
            max_y: cfg.max_y,
        });
    }
    Ok(())
}

/// Copy the `yrange` bottom rows of the bounded rectangle to the `yrange`
/// rows beyond the top, and symmetrically for top/bottom, left/right and
/// the four corners, so a shape's counting pass can read wrapped
/// neighbours as if they were the live ones.
pub fn torus_wrap(colour: &mut ColourGrid, cfg: &BoundedGridConfig, xrange: i32, yrange: i32) -> Result<(), GridError> {
    validate(cfg)?;
    let (min_x, min_y, max_x, max_y) = (cfg.min_x, cfg.min_y, cfg.max_x, cfg.max_y);

    for dy in 1..=yrange {
        for x in (min_x - xrange - 1)..=(max_x + xrange + 1) {
            let bottom_src = colour.get(x, min_y + yrange - dy);
            colour.set(x, max_y + dy, bottom_src);
            let top_src = colour.get(x, max_y - yrange + dy);
            colour.set(x, min_y - dy, top_src);
        }
    }

    for dx in 1..=(xrange + 1) {
        for y in (min_y - yrange)..=(max_y + yrange) {
            let left_src = colour.get(min_x + xrange + 1 - dx, y);
            colour.set(max_x + dx, y, left_src);
            let right_src = colour.get(max_x - xrange - 1 + dx, y);
            colour.set(min_x - dx, y, right_src);
        }
    }

    // Corners: wrap the already-wrapped edge bands into the four corner
    // rectangles so a diagonal neighbour read also lands on live data.
    for dy in 1..=yrange {
        for dx in 1..=(xrange + 1) {
            let bl = colour.get(min_x + xrange + 1 - dx, min_y + yrange - dy);
            colour.set(max_x + dx, max_y + dy, bl);
            let br = colour.get(max_x - xrange - 1 + dx, min_y + yrange - dy);
            colour.set(min_x - dx, max_y + dy, br);
            let tl = colour.get(min_x + xrange + 1 - dx, max_y - yrange + dy);
            colour.set(max_x + dx, min_y - dy, tl);
            let tr = colour.get(max_x - xrange - 1 + dx, max_y - yrange + dy);
            colour.set(min_x - dx, min_y - dy, tr);
        }
    }

    Ok(())
}

/// Zero the bands and corners outside the bounded rectangle, for
/// non-toroidal bounded grids.
pub fn clear_outside(colour: &mut ColourGrid, cfg: &BoundedGridConfig, xrange: i32, yrange: i32) -> Result<(), GridError> {
    validate(cfg)?;
    let (min_x, min_y, max_x, max_y) = (cfg.min_x, cfg.min_y, cfg.max_x, cfg.max_y);
    let (width, height) = colour.dimensions();

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if x < min_x - xrange - 1 || x > max_x + xrange + 1 || y < min_y - yrange - 1 || y > max_y + yrange + 1 {
                colour.set(x, y, 0);
            }
        }
    }

    Ok(())
}
