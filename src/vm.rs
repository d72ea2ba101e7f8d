use std::io::Write;

use crate::alu::{self, AluOp};
use crate::memory::{Memory, RegisterFile, MEMORY_SIZE};
use crate::opcode::Opcode;
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
  Running,
  Halted,
}

/// A virtual machine for the LS-8 architecture.
///
/// Owns its memory, registers, and program counter for its whole lifetime;
/// programs are copied into memory with [`Vm::load_image`] and interpreted in
/// place by [`Vm::run`]. The only output channel is the PRN instruction,
/// which writes one decimal line to the writer handed to `run`.
#[derive(Debug)]
pub struct Vm {
  pc: usize,
  memory: Memory,
  registers: RegisterFile,
  state: State,
}

impl Vm {
  /// Create a new, empty virtual machine
  pub fn new() -> Self {
    Self {
      pc: 0,
      memory: Memory::new(),
      registers: RegisterFile::new(),
      state: State::Running,
    }
  }

  /// Copy a program image into memory starting at address 0.
  ///
  /// An image that does not fit is rejected before a single byte lands, so
  /// the machine never runs a partially loaded program.
  pub fn load_image(&mut self, image: &[u8]) -> Result<(), Error> {
    if image.len() > MEMORY_SIZE {
      return Err(Error::ProgramTooLarge { len: image.len() });
    }
    for (address, &byte) in image.iter().enumerate() {
      self.memory.write(address, byte)?;
    }
    Ok(())
  }

  /// Execute instructions until the machine halts or faults.
  ///
  /// A fault leaves the machine halted and propagates with enough context
  /// (opcode byte, address, or register index) to diagnose it.
  pub fn run(&mut self, out: &mut impl Write) -> Result<(), Error> {
    while self.state == State::Running {
      self.step(out)?;
    }
    Ok(())
  }

  /// Execute a single instruction; a no-op once the machine is halted
  pub fn step(&mut self, out: &mut impl Write) -> Result<(), Error> {
    if self.state == State::Halted {
      return Ok(());
    }
    let result = self.execute_one(out);
    if result.is_err() {
      // faults are unrecoverable, the machine never resumes
      self.state = State::Halted;
    }
    result
  }

  fn execute_one(&mut self, out: &mut impl Write) -> Result<(), Error> {
    let byte = self.memory.read(self.pc)?;
    let opcode = Opcode::try_from(byte).map_err(|opcode| Error::UnknownOpcode {
      opcode,
      address: self.pc,
    })?;
    match opcode {
      Opcode::LoadImmediate => {
        let index = self.memory.read(self.pc + 1)?;
        let value = self.memory.read(self.pc + 2)?;
        self.registers.set(index, value)?;
      }
      Opcode::PrintRegister => {
        let index = self.memory.read(self.pc + 1)?;
        let value = self.registers.get(index)?;
        writeln!(out, "{value}")?;
      }
      Opcode::Multiply => {
        let reg_a = self.memory.read(self.pc + 1)?;
        let reg_b = self.memory.read(self.pc + 2)?;
        alu::apply(&mut self.registers, AluOp::try_from(opcode)?, reg_a, reg_b)?;
      }
      Opcode::Halt => {
        self.state = State::Halted;
        return Ok(());
      }
    }
    self.pc += opcode.width();
    Ok(())
  }

  /// Whether the machine has reached its terminal state
  pub fn is_halted(&self) -> bool {
    self.state == State::Halted
  }

  pub fn memory(&self) -> &Memory {
    &self.memory
  }

  pub fn registers(&self) -> &RegisterFile {
    &self.registers
  }
}

impl Default for Vm {
  fn default() -> Self {
    Self::new()
  }
}
