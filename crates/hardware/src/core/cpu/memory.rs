//! Data Memory.
//!
//! This module provides the byte-addressable data memory of the machine. It performs:
//! 1. **Storage:** A fixed-size, zero-initialized byte array.
//! 2. **Access:** Byte and little-endian 32-bit word loads and stores.
//! 3. **Bounds Checking:** Every byte of an access must lie inside the memory,
//!    otherwise [`Trap::MemoryOutOfBounds`] is raised and nothing is written.

use crate::common::constants::{BYTE_WIDTH, WORD_WIDTH};
use crate::common::error::Trap;

/// Byte-addressable data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    bytes: Vec<u8>,
}

impl DataMemory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the memory size in bytes.
    pub const fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the whole memory contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Resolves `addr..addr + width` to a slice range, checking bounds.
    fn range(&self, addr: u32, width: usize) -> Result<std::ops::Range<usize>, Trap> {
        let start = addr as usize;
        start
            .checked_add(width)
            .filter(|&end| end <= self.bytes.len())
            .map(|end| start..end)
            .ok_or(Trap::MemoryOutOfBounds {
                addr,
                width,
                size: self.bytes.len(),
            })
    }

    /// Loads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::MemoryOutOfBounds`] if `addr` is outside the memory.
    pub fn load_byte(&self, addr: u32) -> Result<u8, Trap> {
        let range = self.range(addr, BYTE_WIDTH)?;
        Ok(self.bytes[range.start])
    }

    /// Loads the little-endian word at `addr..addr + 4`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::MemoryOutOfBounds`] if any of the four bytes is outside the memory.
    pub fn load_word(&self, addr: u32) -> Result<u32, Trap> {
        let range = self.range(addr, WORD_WIDTH)?;
        let mut word = [0u8; WORD_WIDTH];
        word.copy_from_slice(&self.bytes[range]);
        Ok(u32::from_le_bytes(word))
    }

    /// Stores `val` at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::MemoryOutOfBounds`] if `addr` is outside the memory.
    pub fn store_byte(&mut self, addr: u32, val: u8) -> Result<(), Trap> {
        let range = self.range(addr, BYTE_WIDTH)?;
        self.bytes[range.start] = val;
        Ok(())
    }

    /// Stores `val` little-endian at `addr..addr + 4`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::MemoryOutOfBounds`] if any of the four bytes is outside
    /// the memory; in that case no byte is modified.
    pub fn store_word(&mut self, addr: u32, val: u32) -> Result<(), Trap> {
        let range = self.range(addr, WORD_WIDTH)?;
        self.bytes[range].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }
}
