//! Color space conversion
//!
//! Provides conversion from 8-bit RGB to:
//! - Grayscale (ITU-R BT.601)
//! - CIE XYZ (linear in the 8-bit values, D65 primaries)
//! - CIE L\*a\*b\* and CIE L\*u\*v\* (sRGB gamma expanded, D65 white)
//!
//! The `encode_*` functions pack a converted color back into 8-bit
//! samples so that each component can be handled as a gray image:
//!
//! | Component | 8-bit encoding         |
//! |-----------|------------------------|
//! | L         | `L * 255 / 100`        |
//! | a, b      | `a + 128`, `b + 128`   |
//! | u         | `255 * (u + 134) / 354`|
//! | v         | `255 * (v + 140) / 262`|
//! | X, Y, Z   | `X * 255`              |
//!
//! Every encoding rounds to nearest and saturates to 0..=255.

use crate::{ColorError, ColorResult};
use silhouette_core::{Channels, Image};

/// D65 reference white, X component
const WHITE_X: f32 = 0.950456;
/// D65 reference white, Z component
const WHITE_Z: f32 = 1.088754;
/// u' chromaticity of the reference white
const WHITE_U: f32 = 0.197_939_43;
/// v' chromaticity of the reference white
const WHITE_V: f32 = 0.468_310_96;

/// CIE (1931) 2-degree linear RGB -> XYZ matrix, rows X, Y, Z.
const RGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
];

/// CIE XYZ color representation (D65 illuminant)
///
/// Components are relative to a unit white (Y = 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Xyz {
    /// Create a new XYZ color
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// CIE L\*a\*b\* color representation
///
/// - `l`: Lightness in range [0.0, 100.0]
/// - `a`: Green-Red component, typically [-128, 127]
/// - `b`: Blue-Yellow component, typically [-128, 127]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    /// Create a new LAB color
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

/// CIE L\*u\*v\* color representation
///
/// - `l`: Lightness in range [0.0, 100.0]
/// - `u`: roughly [-134, 220]
/// - `v`: roughly [-140, 122]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luv {
    pub l: f32,
    pub u: f32,
    pub v: f32,
}

impl Luv {
    /// Create a new LUV color
    pub fn new(l: f32, u: f32, v: f32) -> Self {
        Self { l, u, v }
    }
}

#[inline]
fn saturate(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Expand an 8-bit sRGB sample to linear light in [0, 1].
#[inline]
fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn mul_rgb_to_xyz(r: f32, g: f32, b: f32) -> Xyz {
    let m = &RGB_TO_XYZ;
    Xyz::new(
        m[0][0] * r + m[0][1] * g + m[0][2] * b,
        m[1][0] * r + m[1][1] * g + m[1][2] * b,
        m[2][0] * r + m[2][1] * g + m[2][2] * b,
    )
}

/// Lightness from relative luminance.
#[inline]
fn lightness(y: f32) -> f32 {
    if y > 0.008856 {
        116.0 * y.cbrt() - 16.0
    } else {
        903.3 * y
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Convert RGB to grayscale using ITU-R BT.601 coefficients
///
/// Formula: gray = 0.299*R + 0.587*G + 0.114*B, rounded
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    saturate(0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32)
}

/// Convert RGB to XYZ without gamma expansion
///
/// The 8-bit samples are scaled to [0, 1] and multiplied by the
/// RGB -> XYZ matrix directly.
pub fn rgb_to_xyz(r: u8, g: u8, b: u8) -> Xyz {
    mul_rgb_to_xyz(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

/// Convert sRGB to CIE L\*a\*b\*
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    let xyz = mul_rgb_to_xyz(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let fx = lab_f(xyz.x / WHITE_X);
    let fy = lab_f(xyz.y);
    let fz = lab_f(xyz.z / WHITE_Z);
    Lab::new(lightness(xyz.y), 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Convert sRGB to CIE L\*u\*v\*
pub fn rgb_to_luv(r: u8, g: u8, b: u8) -> Luv {
    let xyz = mul_rgb_to_xyz(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let l = lightness(xyz.y);
    let d = (xyz.x + 15.0 * xyz.y + 3.0 * xyz.z).max(f32::EPSILON);
    let u = 13.0 * l * (4.0 * xyz.x / d - WHITE_U);
    let v = 13.0 * l * (9.0 * xyz.y / d - WHITE_V);
    Luv::new(l, u, v)
}

/// Pack an XYZ color into 8-bit samples
pub fn encode_xyz(xyz: Xyz) -> (u8, u8, u8) {
    (
        saturate(xyz.x * 255.0),
        saturate(xyz.y * 255.0),
        saturate(xyz.z * 255.0),
    )
}

/// Pack a L\*a\*b\* color into 8-bit samples
pub fn encode_lab(lab: Lab) -> (u8, u8, u8) {
    (
        saturate(lab.l * 255.0 / 100.0),
        saturate(lab.a + 128.0),
        saturate(lab.b + 128.0),
    )
}

/// Pack a L\*u\*v\* color into 8-bit samples
pub fn encode_luv(luv: Luv) -> (u8, u8, u8) {
    (
        saturate(luv.l * 255.0 / 100.0),
        saturate(255.0 * (luv.u + 134.0) / 354.0),
        saturate(255.0 * (luv.v + 140.0) / 262.0),
    )
}

fn require_rgb(image: &Image) -> ColorResult<()> {
    if image.channels() != Channels::Rgb {
        return Err(ColorError::UnsupportedChannels {
            expected: "3 (RGB)",
            actual: image.channels().count(),
        });
    }
    Ok(())
}

/// Convert an RGB image to grayscale
///
/// Gray input is returned as a shared clone.
pub fn convert_to_gray(image: &Image) -> ColorResult<Image> {
    if image.is_gray() {
        return Ok(image.clone());
    }
    let data = image
        .data()
        .chunks_exact(3)
        .map(|px| rgb_to_gray(px[0], px[1], px[2]))
        .collect();
    Ok(Image::from_vec(
        image.width(),
        image.height(),
        Channels::Gray,
        data,
    )?)
}

/// Single-channel projections of an RGB image
///
/// Every plane is a gray image of the source dimensions holding the
/// 8-bit encoding of one color component.
#[derive(Debug, Clone)]
pub struct ChannelProjections {
    /// L\* of L\*u\*v\*
    pub luv_l: Image,
    /// u\* of L\*u\*v\*
    pub luv_u: Image,
    /// v\* of L\*u\*v\*
    pub luv_v: Image,
    /// L\* of L\*a\*b\*
    pub lab_l: Image,
    /// a\* of L\*a\*b\*
    pub lab_a: Image,
    /// b\* of L\*a\*b\*
    pub lab_b: Image,
    /// X of XYZ
    pub xyz_x: Image,
    /// Y of XYZ
    pub xyz_y: Image,
    /// Z of XYZ
    pub xyz_z: Image,
    /// Raw red channel
    pub red: Image,
}

/// Project an RGB image into the Luv, Lab and XYZ component planes.
///
/// # Errors
///
/// Returns [`ColorError::UnsupportedChannels`] if the image is not RGB.
pub fn project_channels(image: &Image) -> ColorResult<ChannelProjections> {
    require_rgb(image)?;

    let n = image.width() as usize * image.height() as usize;
    let mut planes: [Vec<u8>; 10] = std::array::from_fn(|_| Vec::with_capacity(n));

    for px in image.data().chunks_exact(3) {
        let (r, g, b) = (px[0], px[1], px[2]);
        let (luv_l, luv_u, luv_v) = encode_luv(rgb_to_luv(r, g, b));
        let (lab_l, lab_a, lab_b) = encode_lab(rgb_to_lab(r, g, b));
        let (xyz_x, xyz_y, xyz_z) = encode_xyz(rgb_to_xyz(r, g, b));
        let samples = [
            luv_l, luv_u, luv_v, lab_l, lab_a, lab_b, xyz_x, xyz_y, xyz_z, r,
        ];
        for (plane, v) in planes.iter_mut().zip(samples) {
            plane.push(v);
        }
    }

    let (w, h) = (image.width(), image.height());
    let [luv_l, luv_u, luv_v, lab_l, lab_a, lab_b, xyz_x, xyz_y, xyz_z, red] =
        planes.map(|data| Image::from_vec(w, h, Channels::Gray, data));

    Ok(ChannelProjections {
        luv_l: luv_l?,
        luv_u: luv_u?,
        luv_v: luv_v?,
        lab_l: lab_l?,
        lab_a: lab_a?,
        lab_b: lab_b?,
        xyz_x: xyz_x?,
        xyz_y: xyz_y?,
        xyz_z: xyz_z?,
        red: red?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: u8, b: u8, tol: u8) -> bool {
        a.abs_diff(b) <= tol
    }

    #[test]
    fn test_rgb_to_gray() {
        assert_eq!(rgb_to_gray(0, 0, 0), 0);
        assert_eq!(rgb_to_gray(255, 255, 255), 255);
        assert_eq!(rgb_to_gray(255, 0, 0), 76);
        assert_eq!(rgb_to_gray(0, 255, 0), 150);
        assert_eq!(rgb_to_gray(0, 0, 255), 29);
    }

    #[test]
    fn test_xyz_white_saturates_z() {
        let (x, y, z) = encode_xyz(rgb_to_xyz(255, 255, 255));
        assert_eq!(x, 242);
        assert_eq!(y, 255);
        assert_eq!(z, 255);
        assert_eq!(encode_xyz(rgb_to_xyz(0, 0, 0)), (0, 0, 0));
    }

    #[test]
    fn test_xyz_is_linear() {
        // no gamma: half intensity gives half the value
        let full = rgb_to_xyz(0, 0, 200);
        let half = rgb_to_xyz(0, 0, 100);
        assert!((full.z - 2.0 * half.z).abs() < 1e-5);
    }

    #[test]
    fn test_lab_extremes() {
        let (l, a, b) = encode_lab(rgb_to_lab(255, 255, 255));
        assert_eq!(l, 255);
        assert!(near(a, 128, 1) && near(b, 128, 1));
        assert_eq!(encode_lab(rgb_to_lab(0, 0, 0)), (0, 128, 128));

        // saturated blue has strongly negative b*
        let blue = rgb_to_lab(0, 0, 255);
        assert!(blue.b < -100.0);
        assert!((blue.l - 32.3).abs() < 0.5);
    }

    #[test]
    fn test_luv_extremes() {
        assert_eq!(encode_luv(rgb_to_luv(0, 0, 0)), (0, 97, 136));
        let (l, u, v) = encode_luv(rgb_to_luv(255, 255, 255));
        assert_eq!(l, 255);
        assert!(near(u, 96, 1));
        assert!(near(v, 136, 1));

        let red = rgb_to_luv(255, 0, 0);
        assert!(red.u > 150.0);
    }

    #[test]
    fn test_convert_to_gray() {
        let image = Image::from_vec(2, 1, Channels::Rgb, vec![255, 0, 0, 0, 0, 255]).unwrap();
        let gray = convert_to_gray(&image).unwrap();
        assert!(gray.is_gray());
        assert_eq!(gray.data(), &[76, 29]);
    }

    #[test]
    fn test_project_channels() {
        let image = Image::from_vec(2, 1, Channels::Rgb, vec![0, 0, 0, 210, 40, 7]).unwrap();
        let p = project_channels(&image).unwrap();
        assert_eq!(p.red.data(), &[0, 210]);
        assert_eq!(p.lab_b.get_pixel(0, 0), Some(128));
        assert_eq!(p.luv_v.get_pixel(0, 0), Some(136));
        assert_eq!(p.xyz_z.get_pixel(0, 0), Some(0));
        let (_, _, z) = encode_xyz(rgb_to_xyz(210, 40, 7));
        assert_eq!(p.xyz_z.get_pixel(1, 0), Some(z));
        assert_eq!(p.luv_l.width(), 2);
    }

    #[test]
    fn test_project_channels_rejects_gray() {
        let gray = Image::new(3, 3, Channels::Gray).unwrap();
        assert!(matches!(
            project_channels(&gray),
            Err(ColorError::UnsupportedChannels { .. })
        ));
    }
}
