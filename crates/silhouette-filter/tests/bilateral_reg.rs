//! Bilateral filter and equalization regression test
//!
//! Checks the behavior the extraction pipeline relies on: smoothing a
//! binary mask keeps it almost binary, and equalization stretches a
//! narrow intensity range over the full range.
//!
//! Run with:
//! ```
//! cargo test -p silhouette-filter --test bilateral_reg
//! ```

use silhouette_core::{Channels, Image};
use silhouette_filter::{BilateralParams, bilateral_filter, equalize_hist};
use silhouette_test::RegParams;

/// 24x24 mask with a filled 12x12 square at (6, 6)
fn square_mask() -> Image {
    let mut data = vec![0u8; 24 * 24];
    for y in 6..18 {
        for x in 6..18 {
            data[y * 24 + x] = 255;
        }
    }
    Image::from_vec(24, 24, Channels::Gray, data).unwrap()
}

#[test]
fn bilateral_reg() {
    let mut rp = RegParams::new("bilateral");

    let mask = square_mask();
    let smoothed = bilateral_filter(&mask, &BilateralParams::default()).unwrap();

    // far from the square nothing changes
    rp.compare_values(0.0, smoothed.get_pixel(0, 0).unwrap() as f64, 0.0);
    rp.compare_values(255.0, smoothed.get_pixel(11, 11).unwrap() as f64, 0.0);

    // across the edge the values stay within a couple of levels
    let mut near_binary = true;
    for &v in smoothed.data() {
        near_binary &= v <= 2 || v >= 253;
    }
    rp.compare_values(1.0, if near_binary { 1.0 } else { 0.0 }, 0.0);

    // the filter is deterministic
    let again = bilateral_filter(&mask, &BilateralParams::default()).unwrap();
    rp.compare_pix(&smoothed, &again);

    assert!(rp.cleanup(), "bilateral regression test failed");
}

#[test]
fn equalize_reg() {
    let mut rp = RegParams::new("equalize");

    // values 100..=131, two pixels each
    let data: Vec<u8> = (0..64).map(|i| 100 + (i / 2) as u8).collect();
    let image = Image::from_vec(8, 8, Channels::Gray, data).unwrap();
    let eq = equalize_hist(&image).unwrap();

    let min = *eq.data().iter().min().unwrap();
    let max = *eq.data().iter().max().unwrap();
    rp.compare_values(0.0, min as f64, 0.0);
    rp.compare_values(255.0, max as f64, 0.0);

    // order of intensities is preserved
    let mut monotonic = true;
    for i in 1..64 {
        monotonic &= eq.data()[i] >= eq.data()[i - 1];
    }
    rp.compare_values(1.0, if monotonic { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "equalize regression test failed");
}
