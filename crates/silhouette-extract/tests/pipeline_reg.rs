//! Segmentation pipeline regression test
//!
//! Runs the full extraction on synthetic images:
//! - a gray square on black, with bands and cleanup sized for it
//! - uniform images, which have nothing to extract
//! - repeated runs, which must not influence each other
//!
//! Run with:
//! ```
//! cargo test -p silhouette-extract --test pipeline_reg
//! ```

use silhouette_color::ThresholdBand;
use silhouette_core::{BoundingBox, Channels, Image};
use silhouette_extract::{ExtractError, SegmentationConfig, SegmentationPipeline};
use silhouette_io::ImageFormat;
use silhouette_test::RegParams;

fn flag(ok: bool) -> f64 {
    if ok { 1.0 } else { 0.0 }
}

/// 20x20 black image with a 5x5 square of gray 210 at (7, 7)
fn square_image() -> Image {
    let mut m = Image::new(20, 20, Channels::Rgb).unwrap().to_mut_unique();
    for y in 7..12 {
        for x in 7..12 {
            m.set_rgb(x, y, 210, 210, 210).unwrap();
        }
    }
    m.into()
}

/// Bands that keep the bright half of each feature, and a cleanup that
/// a 5x5 object survives
fn square_config() -> SegmentationConfig {
    SegmentationConfig::default()
        .with_band_a(ThresholdBand { min: 128, max: 255 })
        .with_band_b(ThresholdBand { min: 128, max: 255 })
        .with_fill_cleanup(2, 2)
}

#[test]
fn pipeline_square_reg() {
    let mut rp = RegParams::new("pipeline_square");

    let pipeline = SegmentationPipeline::new(square_config()).unwrap();
    let image = square_image();

    eprintln!("  Testing mask phase");
    let stages = pipeline.build_mask(&image).unwrap();
    // the 5x5 square dilated twice by a 5x5 SEL
    rp.compare_values(169.0, stages.edge_a.count_foreground() as f64, 0.0);
    rp.compare_values(25.0, stages.edge_b.count_foreground() as f64, 0.0);
    // nothing is enclosed, so filling adds nothing
    rp.compare_pix(&stages.edges, &stages.filled);
    let binary = stages.mask.data().iter().all(|&v| v == 0 || v == 255);
    rp.compare_values(1.0, flag(binary), 0.0);
    rp.compare_values(255.0, stages.mask.get_pixel(9, 9).unwrap() as f64, 0.0);

    eprintln!("  Testing extraction");
    let extraction = pipeline.run(&image).unwrap();
    let bbox = extraction.bounding_box;
    rp.compare_values(1.0, flag(bbox.contains(7, 7) && bbox.contains(11, 11)), 0.0);
    rp.compare_values(1.0, flag(bbox == BoundingBox::new(2, 2, 16, 16)), 0.0);

    let color = &extraction.color;
    rp.compare_values(14.0, color.width() as f64, 0.0);
    rp.compare_values(14.0, color.height() as f64, 0.0);
    rp.compare_values(14.0, extraction.gray.width() as f64, 0.0);

    // background inside the crop is white
    let corner = color.get_rgb(0, 0).unwrap();
    rp.compare_values(1.0, flag(corner == (255, 255, 255)), 0.0);

    // the square keeps its red channel; green and blue carry the
    // equalized lightness
    let center = color.get_rgb(9 - bbox.x_min, 9 - bbox.y_min).unwrap();
    rp.compare_values(210.0, center.0 as f64, 0.0);
    rp.compare_values(255.0, center.1 as f64, 0.0);
    let gray_center = extraction.gray.get_rgb(9 - bbox.x_min, 9 - bbox.y_min).unwrap();
    rp.compare_values(1.0, flag(gray_center == (255, 255, 255)), 0.0);

    rp.compare_values(1.0, flag(extraction.degeneracy.is_none()), 0.0);

    rp.write_pix(&extraction.color, ImageFormat::Png).unwrap();
    rp.write_pix(&stages.mask, ImageFormat::Png).unwrap();

    assert!(rp.cleanup(), "pipeline_square regression test failed");
}

#[test]
fn pipeline_uniform_reg() {
    let mut rp = RegParams::new("pipeline_uniform");

    let pipeline = SegmentationPipeline::new(SegmentationConfig::default()).unwrap();
    for value in [0u8, 60, 255] {
        let image = Image::new_filled(20, 20, Channels::Rgb, value).unwrap();
        let empty = matches!(pipeline.run(&image), Err(ExtractError::EmptyMask));
        rp.compare_values(1.0, flag(empty), 0.0);
    }

    // with permissive bands all of a white image is edge, seed included
    let permissive = SegmentationPipeline::new(square_config()).unwrap();
    let white = Image::new_filled(20, 20, Channels::Rgb, 255).unwrap();
    let rejected = matches!(
        permissive.run(&white),
        Err(ExtractError::SeedNotBackground { x: 0, y: 0 })
    );
    rp.compare_values(1.0, flag(rejected), 0.0);

    assert!(rp.cleanup(), "pipeline_uniform regression test failed");
}

#[test]
fn pipeline_repeat_reg() {
    let mut rp = RegParams::new("pipeline_repeat");

    let pipeline = SegmentationPipeline::new(square_config()).unwrap();
    let image = square_image();

    let first = pipeline.run(&image).unwrap();
    let blank = Image::new(20, 20, Channels::Rgb).unwrap();
    let _ = pipeline.run(&blank);
    let second = pipeline.run(&image).unwrap();
    let fresh = SegmentationPipeline::new(square_config())
        .unwrap()
        .run(&image)
        .unwrap();

    for other in [&second, &fresh] {
        rp.compare_pix(&first.color, &other.color);
        rp.compare_pix(&first.gray, &other.gray);
        rp.compare_values(1.0, flag(first.bounding_box == other.bounding_box), 0.0);
    }

    // the input is left untouched
    rp.compare_pix(&square_image(), &image);

    assert!(rp.cleanup(), "pipeline_repeat regression test failed");
}

#[test]
fn pipeline_seed_reg() {
    let mut rp = RegParams::new("pipeline_seed");
    let image = square_image();

    // inside the edge outline
    let pipeline = SegmentationPipeline::new(square_config().with_flood_seed(9, 9)).unwrap();
    let on_edge = matches!(
        pipeline.run(&image),
        Err(ExtractError::SeedNotBackground { x: 9, y: 9 })
    );
    rp.compare_values(1.0, flag(on_edge), 0.0);

    // outside the image
    let pipeline = SegmentationPipeline::new(square_config().with_flood_seed(25, 3)).unwrap();
    let outside = matches!(
        pipeline.run(&image),
        Err(ExtractError::SeedNotBackground { x: 25, y: 3 })
    );
    rp.compare_values(1.0, flag(outside), 0.0);

    // any background seed gives the same result
    let corner = SegmentationPipeline::new(square_config()).unwrap();
    let other = SegmentationPipeline::new(square_config().with_flood_seed(19, 0)).unwrap();
    rp.compare_pix(
        &corner.run(&image).unwrap().color,
        &other.run(&image).unwrap().color,
    );

    assert!(rp.cleanup(), "pipeline_seed regression test failed");
}
