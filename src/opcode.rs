/// The LS-8 instruction set.
///
/// Every instruction is a fixed-format run of cells: one opcode byte followed
/// by the operand bytes its width calls for. Width is a pure function of the
/// opcode, so decode never needs to look ahead or backtrack.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
  /// Stops execution.
  ///
  /// | Operation | Semantics/RTL      | Assembly |
  /// |-----------|--------------------|----------|
  /// | Halt      | `(stop execution)` | `HLT`    |
  ///
  /// The operand cell is ignored and the program counter does not advance;
  /// the machine is halted before it would be consumed.
  Halt = 0b0000_0001,

  /// Prints the decimal value of a register on its own line.
  ///
  /// | Operation      | Semantics/RTL     | Assembly |
  /// |----------------|-------------------|----------|
  /// | Print Register | `print r[a]`      | `PRN Ra` |
  PrintRegister = 0b0100_0111,

  /// Loads an immediate value into a register.
  ///
  /// | Operation      | Semantics/RTL | Assembly     |
  /// |----------------|---------------|--------------|
  /// | Load Immediate | `r[a] ← vv`   | `LDI Ra, vv` |
  LoadImmediate = 0b1000_0010,

  /// Multiplies two registers into the first.
  ///
  /// | Operation | Semantics/RTL        | Assembly     |
  /// |-----------|----------------------|--------------|
  /// | Multiply  | `r[a] ← r[a] × r[b]` | `MUL Ra, Rb` |
  Multiply = 0b1010_0010,
}

impl Opcode {
  /// Number of memory cells this instruction occupies, opcode included
  pub fn width(self) -> usize {
    match self {
      Self::LoadImmediate | Self::Multiply => 3,
      Self::PrintRegister | Self::Halt => 2,
    }
  }
}

impl TryFrom<u8> for Opcode {
  type Error = u8;

  /// Decode an opcode byte, handing back the raw byte if it is not in the
  /// table
  fn try_from(byte: u8) -> Result<Self, u8> {
    match byte {
      0b0000_0001 => Ok(Self::Halt),
      0b0100_0111 => Ok(Self::PrintRegister),
      0b1000_0010 => Ok(Self::LoadImmediate),
      0b1010_0010 => Ok(Self::Multiply),
      unknown => Err(unknown),
    }
  }
}
