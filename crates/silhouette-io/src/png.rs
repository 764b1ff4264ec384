//! PNG image format support

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use silhouette_core::{Channels, Image};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Gray PNGs load as [`Channels::Gray`]; every other color type loads as
/// [`Channels::Rgb`]. Palettes are expanded, 16-bit samples are reduced
/// to 8 bits and alpha is dropped.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let width = reader.info().width;
    let height = reader.info().height;
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    // (samples per input pixel, output layout)
    let (samples, channels) = match color_type {
        ColorType::Grayscale => (1, Channels::Gray),
        ColorType::GrayscaleAlpha => (2, Channels::Gray),
        ColorType::Rgb => (3, Channels::Rgb),
        ColorType::Rgba => (4, Channels::Rgb),
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };
    let keep = channels.count() as usize;

    let mut out = Vec::with_capacity(width as usize * height as usize * keep);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..y * bytes_per_row + width as usize * samples];
        for px in row.chunks_exact(samples) {
            out.extend_from_slice(&px[..keep]);
        }
    }

    Ok(Image::from_vec(width, height, channels, out)?)
}

/// Write a PNG image
///
/// Gray images are written as 8-bit grayscale, RGB images as 8-bit RGB.
pub fn write_png<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let color_type = match image.channels() {
        Channels::Gray => ColorType::Grayscale,
        Channels::Rgb => ColorType::Rgb,
    };

    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    // rows carry no padding, so the buffer is already in PNG scanline order
    writer
        .write_image_data(image.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_grayscale() {
        let image = Image::new(10, 10, Channels::Gray).unwrap();
        let mut image_mut = image.try_into_mut().unwrap();

        for y in 0..10 {
            for x in 0..10 {
                image_mut.set_pixel(x, y, ((x + y) * 10) as u8).unwrap();
            }
        }

        let image: Image = image_mut.into();

        let mut buffer = Vec::new();
        write_png(&image, &mut buffer).unwrap();

        let image2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(image2.width(), 10);
        assert_eq!(image2.height(), 10);
        assert!(image2.is_gray());
        assert_eq!(image2.data(), image.data());
    }

    #[test]
    fn test_png_roundtrip_rgb() {
        let image = Image::new(5, 5, Channels::Rgb).unwrap();
        let mut image_mut = image.try_into_mut().unwrap();

        image_mut.set_rgb(0, 0, 255, 0, 0).unwrap();
        image_mut.set_rgb(1, 1, 0, 255, 0).unwrap();
        image_mut.set_rgb(2, 2, 0, 0, 255).unwrap();

        let image: Image = image_mut.into();

        let mut buffer = Vec::new();
        write_png(&image, &mut buffer).unwrap();

        let image2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(image2.get_rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(image2.get_rgb(1, 1), Some((0, 255, 0)));
        assert_eq!(image2.get_rgb(2, 2), Some((0, 0, 255)));
    }

    #[test]
    fn test_png_rgba_drops_alpha() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Rgba);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer
                .write_image_data(&[10, 20, 30, 0, 40, 50, 60, 255])
                .unwrap();
        }

        let image = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(image.channels(), Channels::Rgb);
        assert_eq!(image.get_rgb(0, 0), Some((10, 20, 30)));
        assert_eq!(image.get_rgb(1, 0), Some((40, 50, 60)));
    }
}
