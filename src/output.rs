//! Image output.
//!
//! Encodes the post-processed 8-bit pixel buffer as a PNG file. Gamma
//! correction and quantization already happened upstream; this module only
//! wraps the buffer and writes it. I/O failures are logged, not propagated.

use image::{ImageBuffer, Rgb};
use log::{info, warn};

/// Save an 8-bit RGB pixel buffer as a PNG file.
///
/// `pixels` must be a row-major (height, width, 3) buffer as produced by the
/// post-processing step.
pub fn save_image_as_png(pixels: &[u8], width: u32, height: u32, output_path: &str) {
    let image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        match ImageBuffer::from_raw(width, height, pixels.to_vec()) {
            Some(image) => image,
            None => {
                warn!(
                    "Pixel buffer of {} bytes does not match {}x{} image",
                    pixels.len(),
                    width,
                    height
                );
                return;
            }
        };

    match image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}
