//! Seed fill operations
//!
//! Flood fill from a seed point over gray masks.

use crate::{RegionError, RegionResult};
use silhouette_core::{BACKGROUND, Channels, FOREGROUND, Image, ImageMut};
use std::collections::VecDeque;

/// Pixel connectivity used when growing a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

const FOUR_WAY: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const EIGHT_WAY: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

impl ConnectivityType {
    fn neighbors(self) -> &'static [(i32, i32)] {
        match self {
            ConnectivityType::FourWay => &FOUR_WAY,
            ConnectivityType::EightWay => &EIGHT_WAY,
        }
    }
}

fn check_gray(channels: Channels) -> RegionResult<()> {
    if channels != Channels::Gray {
        return Err(RegionError::UnsupportedChannels {
            expected: "1 (gray)",
            actual: channels.count(),
        });
    }
    Ok(())
}

/// Breadth-first walk over the pixels connected to the seed whose value in
/// `data` equals the seed's. `visit` is called once per pixel index.
fn walk_region(
    data: &[u8],
    width: u32,
    height: u32,
    seed: (u32, u32),
    connectivity: ConnectivityType,
    mut visit: impl FnMut(usize),
) -> u32 {
    let w = width as i32;
    let h = height as i32;
    let target = data[(seed.1 * width + seed.0) as usize];

    let mut seen = vec![false; data.len()];
    let mut queue = VecDeque::new();
    let start = (seed.1 * width + seed.0) as usize;
    seen[start] = true;
    queue.push_back((seed.0 as i32, seed.1 as i32));

    let mut count = 0u32;
    while let Some((x, y)) = queue.pop_front() {
        visit((y * w + x) as usize);
        count += 1;

        for &(dx, dy) in connectivity.neighbors() {
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || ny < 0 || nx >= w || ny >= h {
                continue;
            }
            let idx = (ny * w + nx) as usize;
            if !seen[idx] && data[idx] == target {
                seen[idx] = true;
                queue.push_back((nx, ny));
            }
        }
    }
    count
}

/// Flood fill starting from a seed point.
///
/// Repaints every pixel connected to the seed that has the seed's value
/// with `new_value`.
///
/// # Arguments
///
/// * `image` - Gray image to fill (modified in place)
/// * `seed_x`, `seed_y` - Starting point
/// * `new_value` - Fill value
/// * `connectivity` - 4-way or 8-way connectivity
///
/// # Returns
///
/// The number of pixels filled. Zero if the seed already has `new_value`.
pub fn floodfill(
    image: &mut ImageMut,
    seed_x: u32,
    seed_y: u32,
    new_value: u8,
    connectivity: ConnectivityType,
) -> RegionResult<u32> {
    check_gray(image.channels())?;

    let width = image.width();
    let height = image.height();
    if seed_x >= width || seed_y >= height {
        return Err(RegionError::InvalidSeed {
            x: seed_x,
            y: seed_y,
        });
    }

    let old_value = image.get_pixel_unchecked(seed_x, seed_y);
    if old_value == new_value {
        return Ok(0);
    }

    let mut filled = Vec::new();
    let count = walk_region(
        image.data(),
        width,
        height,
        (seed_x, seed_y),
        connectivity,
        |idx| filled.push(idx),
    );

    let data = image.data_mut();
    for idx in filled {
        data[idx] = new_value;
    }
    Ok(count)
}

/// Mark the background reachable from a seed.
///
/// Returns a mask that is 255 on every background (0) pixel of `mask`
/// connected to the seed, and 0 everywhere else. Background enclosed by
/// foreground is not reachable, so inverting the result yields the
/// foreground with its holes filled.
///
/// # Errors
///
/// * [`RegionError::InvalidSeed`] if the seed is outside the image
/// * [`RegionError::SeedNotBackground`] if the seed pixel is nonzero
pub fn background_reachable(
    mask: &Image,
    seed_x: u32,
    seed_y: u32,
    connectivity: ConnectivityType,
) -> RegionResult<Image> {
    check_gray(mask.channels())?;

    let Some(seed_val) = mask.get_pixel(seed_x, seed_y) else {
        return Err(RegionError::InvalidSeed {
            x: seed_x,
            y: seed_y,
        });
    };
    if seed_val != BACKGROUND {
        return Err(RegionError::SeedNotBackground {
            x: seed_x,
            y: seed_y,
        });
    }

    let mut out_mut = mask.create_template().to_mut_unique();
    let out = out_mut.data_mut();
    walk_region(
        mask.data(),
        mask.width(),
        mask.height(),
        (seed_x, seed_y),
        connectivity,
        |idx| out[idx] = FOREGROUND,
    );
    Ok(out_mut.into())
}
