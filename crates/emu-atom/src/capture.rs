//! Headless capture: PNG screenshots.

use std::error::Error;
use std::fs;
use std::path::Path;

use motorola_6847::Frame;

/// Save a rendered frame as a PNG file.
pub fn save_screenshot(frame: &Frame, path: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::create(path)?;
    let w = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, frame.width as u32, frame.height as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&frame.pixels)?;
    Ok(())
}
