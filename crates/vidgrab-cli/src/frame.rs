//! Placeholder video frame rendering.
//!
//! A "video" download is a single PNG frame: a solid color whose hue depends
//! on the frame index, with a white caption band across the middle.

/// Frames in the placeholder clip; the last one is the one kept.
pub const CLIP_FRAMES: u32 = 30;

/// Hue advance per frame, in degrees.
const HUE_STEP_DEGREES: u32 = 12;

const SATURATION: f64 = 0.7;
const LIGHTNESS: f64 = 0.5;

/// Converts HSL (hue in degrees, saturation and lightness in [0, 1]) to RGB.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [u8; 3] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_byte(r), to_byte(g), to_byte(b)]
}

/// Background color of frame `index`.
pub fn frame_color(index: u32) -> [u8; 3] {
    hsl_to_rgb((index * HUE_STEP_DEGREES) as f64, SATURATION, LIGHTNESS)
}

/// Rows covered by the caption band.
fn caption_rows(height: u32) -> std::ops::Range<u32> {
    let half_band = (height / 15).max(1);
    let center = height / 2;
    center.saturating_sub(half_band)..(center + half_band).min(height)
}

/// Renders frame `index` as tightly packed RGB8 pixels.
pub fn render_frame(width: u32, height: u32, index: u32) -> Vec<u8> {
    let background = frame_color(index);
    let band = caption_rows(height);
    let margin = width / 8;

    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            let in_caption = band.contains(&y) && x >= margin && x < width - margin;
            let color = if in_caption {
                [255, 255, 255]
            } else {
                background
            };
            pixels.extend_from_slice(&color);
        }
    }
    pixels
}

/// Encodes RGB8 pixels as a PNG.
pub fn encode_png(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>, png::EncodingError> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(pixels)?;
        writer.finish()?;
    }
    Ok(png_data)
}

/// Renders and encodes the last frame of the placeholder clip.
pub fn render_clip_poster(width: u32, height: u32) -> Result<Vec<u8>, png::EncodingError> {
    let pixels = render_frame(width, height, CLIP_FRAMES - 1);
    encode_png(width, height, &pixels)
}
