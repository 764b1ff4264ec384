//! Mask morphology regression test
//!
//! Tests dilation, erosion, opening, and closing on synthetic masks.
//!
//! Run with:
//! ```
//! cargo test -p silhouette-morph --test binmorph_reg
//! ```

use silhouette_core::{Channels, Image};
use silhouette_morph::{Sel, close, dilate, dilate_n, erode, erode_n, open};
use silhouette_test::RegParams;

/// 40x30 mask with two squares and a one-pixel hole in the larger one
fn test_mask() -> Image {
    let (w, h) = (40usize, 30usize);
    let mut data = vec![0u8; w * h];
    for y in 5..20 {
        for x in 4..19 {
            data[y * w + x] = 255;
        }
    }
    data[12 * w + 11] = 0;
    for y in 10..15 {
        for x in 28..33 {
            data[y * w + x] = 255;
        }
    }
    Image::from_vec(w as u32, h as u32, Channels::Gray, data).unwrap()
}

fn flag(ok: bool) -> f64 {
    if ok { 1.0 } else { 0.0 }
}

#[test]
fn binmorph_reg() {
    let mut rp = RegParams::new("binmorph");

    let pixs = test_mask();
    let sel = Sel::create_square(5).unwrap();
    let orig_count = pixs.count_foreground();

    eprintln!("  Testing dilation and erosion");
    let dilated = dilate(&pixs, &sel).unwrap();
    let eroded = erode(&pixs, &sel).unwrap();
    rp.compare_values(1.0, flag(dilated.count_foreground() >= orig_count), 0.0);
    rp.compare_values(1.0, flag(eroded.count_foreground() <= orig_count), 0.0);

    // 15x15 minus the hole grows to 19x19, 5x5 grows to 9x9
    rp.compare_values((19 * 19 + 9 * 9) as f64, dilated.count_foreground() as f64, 0.0);
    // the hole bites a 5x5 block out of the eroded 11x11 core
    rp.compare_values((11 * 11 - 25 + 1) as f64, eroded.count_foreground() as f64, 0.0);

    eprintln!("  Testing opening and closing");
    let opened = open(&pixs, &sel).unwrap();
    let closed = close(&pixs, &sel).unwrap();
    rp.compare_values(1.0, flag(opened.count_foreground() <= orig_count), 0.0);
    rp.compare_values(1.0, flag(closed.count_foreground() >= orig_count), 0.0);
    // closing fills the hole
    rp.compare_values(255.0, closed.get_pixel(11, 12).unwrap() as f64, 0.0);

    // idempotence
    let opened2 = open(&opened, &sel).unwrap();
    let closed2 = close(&closed, &sel).unwrap();
    rp.compare_pix(&opened, &opened2);
    rp.compare_pix(&closed, &closed2);

    eprintln!("  Testing iterated erosion");
    // one 5x5 erosion leaves the center of the small square, two remove it
    let once = erode_n(&pixs, &sel, 1).unwrap();
    rp.compare_values(255.0, once.get_pixel(30, 12).unwrap() as f64, 0.0);
    let twice_eroded = erode_n(&pixs, &sel, 2).unwrap();
    rp.compare_values(0.0, twice_eroded.get_pixel(30, 12).unwrap() as f64, 0.0);
    let six = erode_n(&pixs, &sel, 6).unwrap();
    rp.compare_values(0.0, six.count_foreground() as f64, 0.0);

    let grown = dilate_n(&pixs, &sel, 2).unwrap();
    let twice = dilate(&dilated, &sel).unwrap();
    rp.compare_pix(&grown, &twice);

    assert!(rp.cleanup(), "binmorph regression test failed");
}

#[test]
fn binmorph_sel_reg() {
    let mut rp = RegParams::new("binmorph_sel");

    let pixs = test_mask();
    let sel = Sel::from_string(
        "
        .x.
        xxx
        .x.
        ",
        1,
        1,
    )
    .unwrap();

    // a symmetric SEL gives the same result as its reflection
    let reflected = sel.reflect();
    rp.compare_pix(
        &dilate(&pixs, &sel).unwrap(),
        &dilate(&pixs, &reflected).unwrap(),
    );

    // a one-sided SEL shifts the mask
    let shift_left = Sel::from_string("x.", 1, 0).unwrap();
    let shifted = dilate(&pixs, &shift_left).unwrap();
    rp.compare_values(255.0, shifted.get_pixel(3, 10).unwrap() as f64, 0.0);
    rp.compare_values(0.0, shifted.get_pixel(18, 10).unwrap() as f64, 0.0);
    rp.compare_values(
        pixs.count_foreground() as f64,
        shifted.count_foreground() as f64,
        0.0,
    );

    assert!(rp.cleanup(), "binmorph_sel regression test failed");
}
