//! silhouette-test - Regression test framework
//!
//! Regression tests record each check in a [`RegParams`] and report all
//! failures together at the end. Images written with
//! [`RegParams::write_pix`] land in `tests/regout` for inspection.
//!
//! # Usage
//!
//! ```ignore
//! use silhouette_test::RegParams;
//!
//! let mut rp = RegParams::new("pipeline");
//! rp.compare_values(14.0, crop.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print the path of every written image

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use silhouette_core::Image;

/// Load an image from a path relative to the workspace root
pub fn load_image(relative: &str) -> TestResult<Image> {
    let path = format!("{}/{}", workspace_root(), relative);
    silhouette_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // silhouette-test is at crates/silhouette-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
