//! PNM (Portable Any Map) format support
//!
//! Reads and writes binary PGM (P5) and PPM (P6) with 8-bit samples.
//! ASCII variants (P1/P2/P3), bitmaps (P4) and 16-bit samples are not
//! supported.

use crate::{IoError, IoResult};
use silhouette_core::{Channels, Image};
use std::io::{BufRead, Read, Write};

/// Read one whitespace-delimited header token, skipping `#` comments.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            break;
        }
        let c = byte[0];
        if c == b'#' && token.is_empty() {
            let mut comment = Vec::new();
            reader.read_until(b'\n', &mut comment)?;
            continue;
        }
        if c.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            // the single whitespace after the token has been consumed
            break;
        }
        token.push(c as char);
    }
    if token.is_empty() {
        return Err(IoError::InvalidData("truncated PNM header".to_string()));
    }
    Ok(token)
}

fn read_number<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("invalid PNM {}: {:?}", what, token)))
}

/// Read a binary PNM image (P5/P6) from a reader.
///
/// P5 loads as [`Channels::Gray`], P6 as [`Channels::Rgb`]. Samples with
/// a maxval below 255 are rescaled to the full 8-bit range.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Image> {
    let magic = read_token(&mut reader)?;
    let channels = match magic.as_str() {
        "P5" => Channels::Gray,
        "P6" => Channels::Rgb,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM type: {}",
                other
            )));
        }
    };

    let width = read_number(&mut reader, "width")?;
    let height = read_number(&mut reader, "height")?;
    let maxval = read_number(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM maxval: {}",
            maxval
        )));
    }

    let len = width as usize * height as usize * channels.count() as usize;
    let mut data = vec![0u8; len];
    reader.read_exact(&mut data)?;

    if maxval != 255 {
        for v in &mut data {
            let scaled = (*v as u32).min(maxval) * 255 + maxval / 2;
            *v = (scaled / maxval) as u8;
        }
    }

    Ok(Image::from_vec(width, height, channels, data)?)
}

/// Write an image as binary PNM to a writer.
///
/// Chooses P5 for gray images and P6 for RGB images.
pub fn write_pnm<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    let magic = match image.channels() {
        Channels::Gray => "P5",
        Channels::Rgb => "P6",
    };
    write!(writer, "{}\n{} {}\n255\n", magic, image.width(), image.height())?;
    writer.write_all(image.data())?;
    writer.flush()?;
    Ok(())
}
