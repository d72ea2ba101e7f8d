use crate::Error;

/// Number of addressable byte cells
pub const MEMORY_SIZE: usize = 256;

/// Number of general purpose registers (R0..R7)
pub const REGISTER_COUNT: usize = 8;

/// The machine's ram: a fixed run of byte cells, addressed 0..=255.
///
/// Pure storage; every access is bounds checked, and a violation surfaces as
/// [`Error::OutOfBoundsAddress`] rather than wrapping or clamping.
#[derive(Debug)]
pub struct Memory {
  cells: [u8; MEMORY_SIZE],
}

impl Memory {
  /// Create a zeroed memory
  pub fn new() -> Self {
    Self {
      cells: [0; MEMORY_SIZE],
    }
  }

  pub fn read(&self, address: usize) -> Result<u8, Error> {
    self
      .cells
      .get(address)
      .copied()
      .ok_or(Error::OutOfBoundsAddress { address })
  }

  pub fn write(&mut self, address: usize, value: u8) -> Result<(), Error> {
    let cell = self
      .cells
      .get_mut(address)
      .ok_or(Error::OutOfBoundsAddress { address })?;
    *cell = value;
    Ok(())
  }
}

impl Default for Memory {
  fn default() -> Self {
    Self::new()
  }
}

/// The eight general purpose registers.
///
/// Register values are byte-wide, matching the memory cells; indices come
/// straight from operand bytes, so they are checked the same way addresses
/// are.
#[derive(Debug)]
pub struct RegisterFile {
  slots: [u8; REGISTER_COUNT],
}

impl RegisterFile {
  /// Create a register file with every register zeroed
  pub fn new() -> Self {
    Self {
      slots: [0; REGISTER_COUNT],
    }
  }

  pub fn get(&self, index: u8) -> Result<u8, Error> {
    self
      .slots
      .get(index as usize)
      .copied()
      .ok_or(Error::OutOfBoundsRegister { index })
  }

  pub fn set(&mut self, index: u8, value: u8) -> Result<(), Error> {
    let slot = self
      .slots
      .get_mut(index as usize)
      .ok_or(Error::OutOfBoundsRegister { index })?;
    *slot = value;
    Ok(())
  }
}

impl Default for RegisterFile {
  fn default() -> Self {
    Self::new()
  }
}
