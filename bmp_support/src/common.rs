pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_SIZE: usize = 40;
pub const PIXEL_ARRAY_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

pub const MAGIC: &[u8; 2] = b"BM";
pub const BITS_PER_PIXEL: u16 = 24;
pub const BYTES_PER_PIXEL: usize = 3;

pub const DEFAULT_PIXELS_PER_METER: u32 = 2952;

/// Each row of the pixel array is padded to a multiple of four bytes.
pub fn row_size(width: usize) -> usize {
    let unpadded = width * BYTES_PER_PIXEL;
    unpadded + (4 - unpadded % 4) % 4
}
