use std::convert::TryInto;

use custom_error::custom_error;
use byteorder::{ByteOrder, LittleEndian};

use tracer_core::models::{image::Image, io::{ImageIOError, ImageReader}, pixel::Pixel};

use crate::common::*;

custom_error! {pub BMPReaderError
    InvalidHeader {description: String} = "Invalid header: {description}",
    InvalidDIBHeader {description: String} = "Invalid DIB header: {description}",
    NotImplemented {description: String} = "Not implemented: {description}",
    UnexpectedEnd {description: String} = "Unexpected end of data: {description}"
}

/// Reads the 24-bit uncompressed bitmaps produced by [`crate::writer::BMPWriter`].
pub struct BMPReader {
}

struct Header {
    offset: usize,
}

struct DIBHeader {
    width: usize,
    height: usize,
    top_down: bool,
}

impl BMPReader {

    pub fn new() -> Self {
        BMPReader {}
    }
}

impl ImageReader for BMPReader {

    fn read(&self, data: &[u8]) -> Result<Image, ImageIOError> {
        read_image(data).map_err(|err| ImageIOError::FailedToRead {
            description: format!("failed to read as bmp: {}", err),
        })
    }
}

fn read_image(data: &[u8]) -> Result<Image, BMPReaderError> {
    if data.len() < PIXEL_ARRAY_OFFSET {
        return Err(BMPReaderError::UnexpectedEnd {
            description: format!("expected at least {} bytes of headers, got {}", PIXEL_ARRAY_OFFSET, data.len()),
        });
    }

    let header = read_header(&data[0..FILE_HEADER_SIZE])?;
    let dib_header = read_dib_header(&data[FILE_HEADER_SIZE..])?;

    if header.offset > data.len() {
        return Err(BMPReaderError::InvalidHeader {
            description: format!("pixel array offset {} is past the end of data", header.offset),
        });
    }

    read_pixel_array(&data[header.offset..], &dib_header)
}

fn read_header(header: &[u8]) -> Result<Header, BMPReaderError> {
    // 0 - 2 bytes - header - "BM"
    if &header[0..2] != MAGIC {
        return Err(BMPReaderError::InvalidHeader {
            description: "file does not start with 0x42 0x4D".to_string()
        });
    }

    // 2 - 4 bytes - size of BMP file in bytes
    // 6 - 2 bytes - reserved
    // 8 - 2 bytes - reserved
    // 10 - 4 bytes - offset of the byte where the pixel array can be found.
    let offset = LittleEndian::read_u32(&header[10..14]) as usize;

    Ok(Header {
        offset
    })
}

fn read_dib_header(header: &[u8]) -> Result<DIBHeader, BMPReaderError> {
    let size_of_header = LittleEndian::read_u32(&header[0..4]) as usize;
    if size_of_header != INFO_HEADER_SIZE {
        return Err(BMPReaderError::NotImplemented {
            description: format!("only BITMAPINFOHEADER is supported, got header of size {}", size_of_header),
        });
    }

    let width = LittleEndian::read_i32(&header[4..8]);
    let height = LittleEndian::read_i32(&header[8..12]);
    let bits_per_pixel = LittleEndian::read_u16(&header[14..16]);
    let compression = LittleEndian::read_u32(&header[16..20]);

    if width <= 0 || height == 0 {
        return Err(BMPReaderError::InvalidDIBHeader {
            description: format!("invalid image size: {}x{}", width, height),
        });
    }

    if bits_per_pixel != BITS_PER_PIXEL {
        return Err(BMPReaderError::NotImplemented {
            description: format!("only 24 bits per pixel are supported, got {}", bits_per_pixel),
        });
    }

    if compression != 0 {
        return Err(BMPReaderError::NotImplemented {
            description: format!("compression method {} is not supported", compression),
        });
    }

    Ok(DIBHeader {
        width: width as usize,
        height: height.unsigned_abs() as usize,
        // negative height means the first stored row is the top one
        top_down: height < 0,
    })
}

fn read_pixel_array(data: &[u8], dib_header: &DIBHeader) -> Result<Image, BMPReaderError> {
    let width = dib_header.width;
    let height = dib_header.height;
    let row_size = row_size(width);

    if data.len() < row_size * height {
        return Err(BMPReaderError::UnexpectedEnd {
            description: format!("expected {} bytes of pixel data, got {}", row_size * height, data.len()),
        });
    }

    let mut image = Image::new(width, height);

    for (y, row) in data.chunks(row_size).take(height).enumerate() {
        for x in 0..width {
            let offset = x * BYTES_PER_PIXEL;
            let bgr: [u8; 3] = row[offset..offset + BYTES_PER_PIXEL].try_into()
                .map_err(|_| BMPReaderError::UnexpectedEnd {
                    description: format!("row {} is too short", y),
                })?;
            let pixel = Pixel::from_rgb(bgr[2], bgr[1], bgr[0]);

            if dib_header.top_down {
                image.set_pixel(x, y, pixel);
            } else {
                image.set_pixel_bottom_left_origin(x, y, pixel);
            }
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rejects_bad_magic() {
        let mut data = vec![0u8; 64];
        data[0] = b'P';
        data[1] = b'6';

        assert!(BMPReader::new().read(&data).is_err());
    }

    #[test]
    fn test_read_rejects_truncated_data() {
        assert!(BMPReader::new().read(b"BM").is_err());
    }

    #[test]
    fn test_read_top_down() {
        let mut data = vec![0u8; PIXEL_ARRAY_OFFSET + 4 * 2];
        data[0..2].copy_from_slice(MAGIC);
        LittleEndian::write_u32(&mut data[10..14], PIXEL_ARRAY_OFFSET as u32);
        LittleEndian::write_u32(&mut data[14..18], INFO_HEADER_SIZE as u32);
        LittleEndian::write_i32(&mut data[18..22], 1);
        LittleEndian::write_i32(&mut data[22..26], -2);
        LittleEndian::write_u16(&mut data[28..30], BITS_PER_PIXEL);
        // first stored row is the top one
        data[PIXEL_ARRAY_OFFSET..PIXEL_ARRAY_OFFSET + 3].copy_from_slice(&[1, 2, 3]);

        let image = BMPReader::new().read(&data).expect("failed to read top-down bmp");

        assert_eq!(image.get_pixel(0, 0), Pixel::from_rgb(3, 2, 1));
        assert_eq!(image.get_pixel(0, 1), Pixel::black());
    }
}
