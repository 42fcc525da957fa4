//! Sector alignment and calculation utilities

use gpt_disk_types::{BlockSize, Lba};

/// Number of sectors needed for `byte_count` bytes (rounded up)
pub fn sectors_for_bytes(byte_count: u64, block_size: BlockSize) -> u64 {
    byte_count.div_ceil(block_size.to_u64())
}

/// Round `byte_count` up to the next sector boundary
pub fn align_to_sector(byte_count: u64, block_size: BlockSize) -> u64 {
    sectors_for_bytes(byte_count, block_size) * block_size.to_u64()
}

/// Convert sector number to byte offset
pub fn sector_to_byte(lba: Lba, block_size: BlockSize) -> u64 {
    lba.0 * block_size.to_u64()
}

/// Check if value is sector-aligned
pub fn is_sector_aligned(byte_count: u64, block_size: BlockSize) -> bool {
    byte_count % block_size.to_u64() == 0
}

/// Sector size as a buffer length
pub fn block_len(block_size: BlockSize) -> usize {
    block_size.to_u32() as usize
}
