//! PNG container encoding.
//!
//! Produces the minimal truecolour-with-alpha subset: signature, one `IHDR`,
//! one `IDAT` holding the zlib stream of unfiltered rows, and `IEND`.

use std::io::Write;

use crc32fast::Hasher;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::canvas::Canvas;
use crate::error::{Result, SpriteError};

/// The fixed 8-byte PNG signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOUR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;

/// An encoded PNG file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPng {
    bytes: Vec<u8>,
}

impl EncodedPng {
    /// Wrap bytes read back from storage.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Parse the chunk framing back out, checking the signature, lengths and
    /// every CRC.
    pub fn chunks(&self) -> Result<Vec<Chunk<'_>>> {
        let bytes = self.bytes.as_slice();
        if bytes.len() < SIGNATURE.len() || bytes[..SIGNATURE.len()] != SIGNATURE {
            return Err(corrupt("missing PNG signature"));
        }

        let mut chunks = Vec::new();
        let mut pos = SIGNATURE.len();

        while pos < bytes.len() {
            if bytes.len() - pos < 12 {
                return Err(corrupt(format!("truncated chunk header at byte {}", pos)));
            }
            let len = read_u32(&bytes[pos..]) as usize;
            let tag_start = pos + 4;
            let data_start = tag_start + 4;
            let data_end = data_start
                .checked_add(len)
                .filter(|end| end + 4 <= bytes.len())
                .ok_or_else(|| corrupt(format!("chunk at byte {} overruns the file", pos)))?;

            let mut tag = [0u8; 4];
            tag.copy_from_slice(&bytes[tag_start..data_start]);
            let stored_crc = read_u32(&bytes[data_end..]);
            let actual_crc = chunk_crc(&tag, &bytes[data_start..data_end]);
            if stored_crc != actual_crc {
                return Err(corrupt(format!(
                    "{} CRC mismatch: stored {:08x}, computed {:08x}",
                    String::from_utf8_lossy(&tag),
                    stored_crc,
                    actual_crc
                )));
            }

            chunks.push(Chunk {
                tag,
                data: &bytes[data_start..data_end],
                crc: stored_crc,
            });
            pos = data_end + 4;
        }

        Ok(chunks)
    }
}

impl AsRef<[u8]> for EncodedPng {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// One framed record of a PNG file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub tag: [u8; 4],
    pub data: &'a [u8],
    pub crc: u32,
}

impl Chunk<'_> {
    /// The tag as text, e.g. `"IHDR"`.
    pub fn tag_str(&self) -> &str {
        std::str::from_utf8(&self.tag).unwrap_or("????")
    }
}

/// Encode a canvas as a PNG file.
pub fn encode(canvas: &Canvas) -> Result<EncodedPng> {
    let (width, height) = canvas.size();

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.push(BIT_DEPTH);
    ihdr.push(COLOUR_TYPE_RGBA);
    ihdr.push(0); // compression: deflate
    ihdr.push(0); // filter method
    ihdr.push(0); // interlace: none

    let idat = compress(&raw_scanlines(canvas))?;

    let mut out = Vec::with_capacity(SIGNATURE.len() + 3 * 12 + ihdr.len() + idat.len());
    out.extend_from_slice(&SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr);
    write_chunk(&mut out, b"IDAT", &idat);
    write_chunk(&mut out, b"IEND", &[]);

    Ok(EncodedPng { bytes: out })
}

/// Rows prefixed with the "no filter" byte, pixels as R, G, B, A.
fn raw_scanlines(canvas: &Canvas) -> Vec<u8> {
    let (width, height) = canvas.size();
    let mut raw = Vec::with_capacity((width as usize * 4 + 1) * height as usize);
    for y in 0..height {
        raw.push(FILTER_NONE);
        for colour in canvas.row(y) {
            raw.extend_from_slice(&colour.to_rgba());
        }
    }
    raw
}

fn compress(raw: &[u8]) -> Result<Vec<u8>> {
    let encode_err = |e: std::io::Error| SpriteError::Encode {
        message: format!("zlib compression failed: {}", e),
    };

    let mut encoder = ZlibEncoder::new(Vec::with_capacity(raw.len() / 2), Compression::default());
    encoder.write_all(raw).map_err(encode_err)?;
    encoder.finish().map_err(encode_err)
}

fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&chunk_crc(tag, data).to_be_bytes());
}

/// CRC-32 over tag followed by payload.
fn chunk_crc(tag: &[u8; 4], data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(tag);
    hasher.update(data);
    hasher.finalize()
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn corrupt(message: impl Into<String>) -> SpriteError {
    SpriteError::Corrupt {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::ZlibDecoder;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::rng::NoiseRng;
    use crate::types::{Colour, Region};

    fn two_by_two() -> Canvas {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.set(0, 0, Colour::new(255, 0, 0, 255));
        canvas.set(1, 0, Colour::new(0, 255, 0, 255));
        canvas.set(0, 1, Colour::new(0, 0, 255, 255));
        canvas.set(1, 1, Colour::new(255, 255, 255, 128));
        canvas
    }

    #[test]
    fn test_two_by_two_layout() {
        let png = encode(&two_by_two()).unwrap();
        assert_eq!(&png.as_bytes()[..8], &SIGNATURE);

        let chunks = png.chunks().unwrap();
        let tags: Vec<&str> = chunks.iter().map(|c| c.tag_str()).collect();
        assert_eq!(tags, vec!["IHDR", "IDAT", "IEND"]);

        assert_eq!(chunks[0].data, &[0, 0, 0, 2, 0, 0, 0, 2, 8, 6, 0, 0, 0]);
        assert!(chunks[2].data.is_empty());
        // Well-known CRC of an empty IEND chunk.
        assert_eq!(chunks[2].crc, 0xAE42_6082);
        assert_eq!(&png.as_bytes()[png.len() - 12..], &[0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);
    }

    #[test]
    fn test_two_by_two_idat_stream() {
        let png = encode(&two_by_two()).unwrap();
        let chunks = png.chunks().unwrap();

        let mut raw = Vec::new();
        ZlibDecoder::new(chunks[1].data).read_to_end(&mut raw).unwrap();
        assert_eq!(
            raw,
            vec![
                0, 255, 0, 0, 255, 0, 255, 0, 255, //
                0, 0, 0, 255, 255, 255, 255, 255, 128,
            ]
        );
    }

    #[test]
    fn test_two_by_two_decodes() {
        let png = encode(&two_by_two()).unwrap();
        let img = image::load_from_memory_with_format(png.as_bytes(), image::ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [255, 255, 255, 128]);
    }

    #[test]
    fn test_round_trip_drawn_canvas() {
        let mut canvas = Canvas::new(37, 23).unwrap();
        let mut rng = NoiseRng::new(11);
        canvas.noise_fill(Region::diamond(18, 11, 18, 11), Colour::new(55, 80, 40, 210), 8, &mut rng);
        canvas.outline_diamond(18, 11, 17, 10, Colour::new(40, 55, 30, 140));
        canvas.fill_circle(5, 5, 4, Colour::new(255, 200, 50, 40));
        canvas.set_blend(5, 5, Colour::new(255, 255, 255, 100));
        canvas.draw_line(0, 22, 36, 0, Colour::BLACK);

        let png = encode(&canvas).unwrap();
        let img = image::load_from_memory(png.as_bytes()).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), canvas.size());
        assert_eq!(img.into_raw(), canvas.to_rgba_bytes());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let draw = || {
            let mut canvas = Canvas::new(16, 16).unwrap();
            canvas.noise_fill(Region::rect(0, 0, 15, 15), Colour::rgb(100, 110, 130), 5, &mut NoiseRng::new(42));
            encode(&canvas).unwrap()
        };
        assert_eq!(draw(), draw());
    }

    #[test]
    fn test_chunks_detects_bad_crc() {
        let mut bytes = encode(&two_by_two()).unwrap().into_bytes();
        // Flip a bit inside the IHDR payload.
        bytes[8 + 8] ^= 0x01;
        let err = EncodedPng::from_bytes(bytes).chunks().unwrap_err();
        assert!(matches!(err, SpriteError::Corrupt { .. }));
    }

    #[test]
    fn test_chunks_detects_truncation() {
        let mut bytes = encode(&two_by_two()).unwrap().into_bytes();
        bytes.truncate(bytes.len() - 3);
        assert!(EncodedPng::from_bytes(bytes).chunks().is_err());
    }

    #[test]
    fn test_chunks_requires_signature() {
        assert!(EncodedPng::from_bytes(b"GIF89a..".to_vec()).chunks().is_err());
    }

    #[test]
    fn test_large_canvas_single_idat() {
        let canvas = Canvas::filled(300, 200, Colour::rgb(12, 34, 56)).unwrap();
        let png = encode(&canvas).unwrap();
        let chunks = png.chunks().unwrap();
        assert_eq!(chunks.len(), 3);
        assert!(chunks[1].data.len() < 300 * 200 * 4);
    }
}
