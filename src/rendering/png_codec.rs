//! PNG decoding to and encoding from [`ArgbImage`].
//!
//! Every PNG color type and bit depth is expanded and stripped to 8 bits
//! per sample on the way in, then widened to ARGB. Output is always 8-bit
//! RGBA.

use crate::error::CodecError;
use crate::models::Compression;
use dye_engine::ArgbImage;
use std::borrow::Cow;
use std::io::{Cursor, Read};
use std::path::Path;

impl From<Compression> for png::Compression {
    fn from(c: Compression) -> Self {
        match c {
            Compression::Fast => png::Compression::Fast,
            Compression::Default => png::Compression::Default,
            Compression::Best => png::Compression::Best,
        }
    }
}

/// Decode PNG data into an ARGB image.
pub fn decode_png<R: Read>(reader: R) -> Result<ArgbImage, CodecError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| CodecError::PngDecode(e.to_string()))?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| CodecError::PngDecode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let width = info.width as usize;
    let height = info.height as usize;
    let rgba = samples_to_rgba(info.color_type, width, info.line_size, data)?;

    tracing::debug!(width, height, color_type = ?info.color_type, "Decoded PNG");
    Ok(ArgbImage::from_rgba_bytes(width, height, &rgba)?)
}

/// Widen one frame of 8-bit samples to `[R, G, B, A]` quadruples.
fn samples_to_rgba(
    color_type: png::ColorType,
    width: usize,
    line_size: usize,
    data: &[u8],
) -> Result<Cow<'_, [u8]>, CodecError> {
    let channels = match color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        // EXPAND turns indexed data into RGB(A)
        png::ColorType::Indexed => {
            return Err(CodecError::UnsupportedColorType(format!("{color_type:?}")))
        }
    };
    if channels == 4 && line_size == width * 4 {
        return Ok(Cow::Borrowed(data));
    }

    let mut rgba = Vec::with_capacity(data.len() / channels * 4);
    for row in data.chunks(line_size) {
        for px in row[..width * channels].chunks_exact(channels) {
            let quad = match channels {
                1 => [px[0], px[0], px[0], 255],
                2 => [px[0], px[0], px[0], px[1]],
                3 => [px[0], px[1], px[2], 255],
                _ => [px[0], px[1], px[2], px[3]],
            };
            rgba.extend_from_slice(&quad);
        }
    }
    Ok(Cow::Owned(rgba))
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<ArgbImage, CodecError> {
    let file = std::fs::File::open(path)?;
    decode_png(std::io::BufReader::new(file))
}

/// Encode an ARGB image as an 8-bit RGBA PNG.
pub fn encode_png(image: &ArgbImage, compression: Compression) -> Result<Vec<u8>, CodecError> {
    let width = u32::try_from(image.width())
        .map_err(|_| CodecError::PngEncode(format!("width {} too large", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| CodecError::PngEncode(format!("height {} too large", image.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(compression.into());
        let mut writer = encoder
            .write_header()
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&image.to_rgba_bytes())
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode an ARGB image and write it to `path`.
pub fn write_png(path: &Path, image: &ArgbImage, compression: Compression) -> Result<(), CodecError> {
    let bytes = encode_png(image, compression)?;
    std::fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
    Ok(())
}
