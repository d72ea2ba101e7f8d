//! Bare-bones emulator for the LS-8 microcomputer
//!
//! An 8-bit machine with 256 bytes of ram, eight general purpose registers,
//! and a four-instruction encoding (load immediate, print register, multiply,
//! halt). Programs are flat byte images; the `loader` module turns the usual
//! binary-literal text format into one.

use std::io;

use crate::opcode::Opcode;

pub mod alu;
pub mod loader;
pub mod memory;
pub mod opcode;
pub mod vm;

/// A fatal machine fault; execution never continues past one of these
#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("memory address {address} is out of bounds")]
  OutOfBoundsAddress { address: usize },

  #[error("register index {index} is out of bounds")]
  OutOfBoundsRegister { index: u8 },

  #[error("unknown opcode {opcode:#010b} at address {address}")]
  UnknownOpcode { opcode: u8, address: usize },

  #[error("opcode {0:?} has no arithmetic operation")]
  UnsupportedOperation(Opcode),

  #[error("program image of {len} bytes exceeds memory capacity")]
  ProgramTooLarge { len: usize },

  #[error("failed to write to the output channel")]
  Output(#[from] io::Error),
}
