use std::convert::TryFrom;

use byteorder::{ByteOrder, LittleEndian};
use log::debug;

use tracer_core::models::{image::Image, io::{ImageIOError, ImageWriter, ImageWriterOptions}};

use crate::common::*;

pub const OPTION_PIXELS_PER_METER: &str = "pixels_per_meter";

/// Writes 24-bit uncompressed bitmaps with a BITMAPINFOHEADER.
pub struct BMPWriter {
}

impl BMPWriter {

    pub fn new() -> Self {
        BMPWriter {}
    }
}

impl ImageWriter for BMPWriter {

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError> {
        let pixels_per_meter = options.get_u32(OPTION_PIXELS_PER_METER, DEFAULT_PIXELS_PER_METER)?;

        let row_size = row_size(image.width);
        let pixel_array_size = row_size * image.height;
        let file_size = PIXEL_ARRAY_OFFSET + pixel_array_size;

        let width = to_i32(image.width, "width")?;
        let height = to_i32(image.height, "height")?;
        let file_size_u32 = u32::try_from(file_size).map_err(|_| ImageIOError::FailedToWrite {
            description: format!("image is too large for bmp: {} bytes", file_size),
        })?;

        debug!("writing {}x{} bmp image, {} bytes", image.width, image.height, file_size);

        let mut data = vec![0u8; file_size];

        // file header
        data[0..2].copy_from_slice(MAGIC);
        LittleEndian::write_u32(&mut data[2..6], file_size_u32);
        // 6..10 - two reserved u16 fields, left as zero
        LittleEndian::write_u32(&mut data[10..14], PIXEL_ARRAY_OFFSET as u32);

        // BITMAPINFOHEADER
        let info = &mut data[FILE_HEADER_SIZE..PIXEL_ARRAY_OFFSET];
        LittleEndian::write_u32(&mut info[0..4], INFO_HEADER_SIZE as u32);
        LittleEndian::write_i32(&mut info[4..8], width);
        LittleEndian::write_i32(&mut info[8..12], height);
        LittleEndian::write_u16(&mut info[12..14], 1);
        LittleEndian::write_u16(&mut info[14..16], BITS_PER_PIXEL);
        // 16..20 - compression, 0 is BI_RGB
        LittleEndian::write_u32(&mut info[20..24], pixel_array_size as u32);
        LittleEndian::write_u32(&mut info[24..28], pixels_per_meter);
        LittleEndian::write_u32(&mut info[28..32], pixels_per_meter);
        // 32..40 - colors used and important colors, both 0

        // pixel array, bottom row first, BGR
        let pixel_array = &mut data[PIXEL_ARRAY_OFFSET..];
        for y in 0..image.height {
            let row = &mut pixel_array[y * row_size..(y + 1) * row_size];

            for x in 0..image.width {
                let pixel = image.get_pixel_bottom_left_origin(x, y);
                let offset = x * BYTES_PER_PIXEL;

                row[offset] = pixel.blue;
                row[offset + 1] = pixel.green;
                row[offset + 2] = pixel.red;
            }
        }

        Ok(data)
    }
}

fn to_i32(value: usize, name: &str) -> Result<i32, ImageIOError> {
    i32::try_from(value).map_err(|_| ImageIOError::FailedToWrite {
        description: format!("image {} does not fit into bmp header: {}", name, value),
    })
}
