//! silhouette-io - Image file I/O
//!
//! Reads and writes the images consumed and produced by the extraction
//! pipeline. The pipeline itself never touches the file system; callers
//! decode with [`read_image`] and encode with [`write_image`].
//!
//! # Supported formats
//!
//! | Format | Feature      | Read | Write |
//! |--------|--------------|------|-------|
//! | PNG    | `png-format` | yes  | yes   |
//! | PNM    | `pnm`        | yes  | yes   |

mod error;
mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use silhouette_core::Image;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// Read an image from a file path.
///
/// The format is detected from the file's magic number.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support is not enabled",
            other
        ))),
    }
}

/// Read an image from an in-memory encoded buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    let format = detect_format_from_bytes(data)?;
    let reader = Cursor::new(data);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support is not enabled",
            other
        ))),
    }
}

/// Write an image to a file path in the given format.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P, format: ImageFormat) -> IoResult<()> {
    let writer = BufWriter::new(File::create(path)?);
    write_image_to(image, writer, format)
}

/// Encode an image into a byte buffer.
pub fn write_image_mem(image: &Image, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(image, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_to<W: std::io::Write>(image: &Image, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(image, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(image, writer),
        #[allow(unreachable_patterns)]
        other => {
            let _ = (image, writer);
            Err(IoError::UnsupportedFormat(format!(
                "{:?} support is not enabled",
                other
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silhouette_core::Channels;

    #[test]
    fn test_mem_roundtrip_all_formats() {
        let data: Vec<u8> = (0..6 * 4).map(|i| (i * 11) as u8).collect();
        let image = Image::from_vec(6, 4, Channels::Gray, data).unwrap();
        for format in [ImageFormat::Png, ImageFormat::Pnm] {
            let bytes = write_image_mem(&image, format).unwrap();
            assert_eq!(detect_format_from_bytes(&bytes).unwrap(), format);
            let back = read_image_mem(&bytes).unwrap();
            assert_eq!(back.data(), image.data());
        }
    }
}
