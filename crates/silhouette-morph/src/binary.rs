//! Morphological operations on masks
//!
//! Implements erosion, dilation, opening, and closing for gray images.
//! Dilation takes the maximum and erosion the minimum over the SEL's hit
//! positions, so {0, 255} masks stay binary. Positions outside the image
//! are ignored: the border neither grows a dilation nor eats into an
//! erosion.

use crate::{MorphError, MorphResult, Sel};
use silhouette_core::Image;

fn check_gray(image: &Image) -> MorphResult<()> {
    if !image.is_gray() {
        return Err(MorphError::UnsupportedChannels {
            expected: "1 (gray)",
            actual: image.channels().count(),
        });
    }
    Ok(())
}

/// Shared rank pass: for each pixel, fold `pick` over the samples at
/// `(x + sign * dx, y + sign * dy)` for every hit `(dx, dy)` in the SEL.
fn rank_pass(
    image: &Image,
    sel: &Sel,
    sign: i32,
    init: u8,
    pick: fn(u8, u8) -> u8,
) -> MorphResult<Image> {
    check_gray(image)?;
    if sel.hit_count() == 0 {
        return Err(MorphError::InvalidSel("SEL has no hits".to_string()));
    }

    let w = image.width() as i32;
    let h = image.height() as i32;
    let offsets: Vec<(i32, i32)> = sel
        .hit_offsets()
        .map(|(dx, dy)| (sign * dx, sign * dy))
        .collect();
    let src = image.data();

    let mut out_mut = image.create_template().to_mut_unique();
    let dst = out_mut.data_mut();

    for y in 0..h {
        for x in 0..w {
            let mut acc = init;
            let mut seen = false;
            for &(dx, dy) in &offsets {
                let sx = x + dx;
                let sy = y + dy;
                if sx < 0 || sy < 0 || sx >= w || sy >= h {
                    continue;
                }
                acc = pick(acc, src[(sy * w + sx) as usize]);
                seen = true;
            }
            // no hit landed inside the image: keep the source sample
            dst[(y * w + x) as usize] = if seen { acc } else { src[(y * w + x) as usize] };
        }
    }

    Ok(out_mut.into())
}

/// Dilate a mask
///
/// Dilation expands foreground regions: each output sample is the
/// maximum of the source samples at `(x - dx, y - dy)` over the SEL hits.
pub fn dilate(image: &Image, sel: &Sel) -> MorphResult<Image> {
    rank_pass(image, sel, -1, u8::MIN, u8::max)
}

/// Erode a mask
///
/// Erosion shrinks foreground regions: each output sample is the
/// minimum of the source samples at `(x + dx, y + dy)` over the SEL hits.
pub fn erode(image: &Image, sel: &Sel) -> MorphResult<Image> {
    rank_pass(image, sel, 1, u8::MAX, u8::min)
}

/// Dilate `n` times. `n = 0` returns the input unchanged.
pub fn dilate_n(image: &Image, sel: &Sel, n: u32) -> MorphResult<Image> {
    check_gray(image)?;
    let mut result = image.clone();
    for _ in 0..n {
        result = dilate(&result, sel)?;
    }
    Ok(result)
}

/// Erode `n` times. `n = 0` returns the input unchanged.
pub fn erode_n(image: &Image, sel: &Sel, n: u32) -> MorphResult<Image> {
    check_gray(image)?;
    let mut result = image.clone();
    for _ in 0..n {
        result = erode(&result, sel)?;
    }
    Ok(result)
}

/// Open a mask
///
/// Opening = Erosion followed by Dilation.
/// Removes small foreground objects and smooths contours.
pub fn open(image: &Image, sel: &Sel) -> MorphResult<Image> {
    let eroded = erode(image, sel)?;
    dilate(&eroded, sel)
}

/// Close a mask
///
/// Closing = Dilation followed by Erosion.
/// Fills small holes and connects nearby objects.
pub fn close(image: &Image, sel: &Sel) -> MorphResult<Image> {
    let dilated = dilate(image, sel)?;
    erode(&dilated, sel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use silhouette_core::Channels;

    fn point_mask(w: u32, h: u32, x: u32, y: u32) -> Image {
        let image = Image::new(w, h, Channels::Gray).unwrap();
        let mut m = image.try_into_mut().unwrap();
        m.set_pixel(x, y, 255).unwrap();
        m.into()
    }

    #[test]
    fn test_dilate_point() {
        let sel = Sel::create_square(3).unwrap();
        let out = dilate(&point_mask(7, 7, 3, 3), &sel).unwrap();
        assert_eq!(out.count_foreground(), 9);
        assert_eq!(out.get_pixel(2, 2), Some(255));
        assert_eq!(out.get_pixel(1, 1), Some(0));
    }

    #[test]
    fn test_dilate_at_border() {
        let sel = Sel::create_square(5).unwrap();
        let out = dilate(&point_mask(6, 6, 0, 0), &sel).unwrap();
        assert_eq!(out.count_foreground(), 9);
    }

    #[test]
    fn test_erode_ignores_border() {
        let sel = Sel::create_square(3).unwrap();
        let full = Image::new_filled(5, 4, Channels::Gray, 255).unwrap();
        let out = erode(&full, &sel).unwrap();
        assert_eq!(out.count_foreground(), 20);
    }

    #[test]
    fn test_erode_removes_point() {
        let sel = Sel::create_square(3).unwrap();
        let out = erode(&point_mask(5, 5, 2, 2), &sel).unwrap();
        assert_eq!(out.count_foreground(), 0);
    }

    #[test]
    fn test_asymmetric_sel_direction() {
        // hits at origin and one to the right
        let sel = Sel::from_string("xx", 0, 0).unwrap();
        let dilated = dilate(&point_mask(5, 1, 2, 0), &sel).unwrap();
        assert_eq!(dilated.data(), &[0, 0, 255, 255, 0]);
        let eroded = erode(&dilated, &sel).unwrap();
        assert_eq!(eroded.data(), &[0, 0, 255, 0, 0]);
    }

    #[test]
    fn test_iterated_zero_is_identity() {
        let sel = Sel::create_square(5).unwrap();
        let mask = point_mask(9, 9, 4, 4);
        assert_eq!(dilate_n(&mask, &sel, 0).unwrap().data(), mask.data());
        assert_eq!(erode_n(&mask, &sel, 0).unwrap().data(), mask.data());
    }

    #[test]
    fn test_iterated_dilation_grows() {
        let sel = Sel::create_square(5).unwrap();
        let out = dilate_n(&point_mask(21, 21, 10, 10), &sel, 2).unwrap();
        // 1 + 2 * 4 = 9 on each side
        assert_eq!(out.count_foreground(), 81);
    }

    #[test]
    fn test_open_close() {
        let sel = Sel::create_square(3).unwrap();
        let speck = point_mask(9, 9, 4, 4);
        assert_eq!(open(&speck, &sel).unwrap().count_foreground(), 0);
        let closed = close(&speck, &sel).unwrap();
        assert_eq!(closed.get_pixel(4, 4), Some(255));
    }

    #[test]
    fn test_rgb_rejected() {
        let sel = Sel::create_square(3).unwrap();
        let rgb = Image::new(3, 3, Channels::Rgb).unwrap();
        assert!(dilate(&rgb, &sel).is_err());
        assert!(erode_n(&rgb, &sel, 0).is_err());
    }
}
