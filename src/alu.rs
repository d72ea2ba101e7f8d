use crate::memory::RegisterFile;
use crate::opcode::Opcode;
use crate::Error;

/// An operation the arithmetic unit knows how to perform.
///
/// `Add` has no opcode routed to it yet; it is reachable only by calling
/// [`apply`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
  Add,
  Mul,
}

impl TryFrom<Opcode> for AluOp {
  type Error = Error;

  /// Map an arithmetic opcode to its operation, rejecting opcodes that have
  /// no business in the arithmetic unit
  fn try_from(opcode: Opcode) -> Result<Self, Error> {
    match opcode {
      Opcode::Multiply => Ok(Self::Mul),
      other => Err(Error::UnsupportedOperation(other)),
    }
  }
}

/// Compute `op` over two registers, writing the result back into the first.
///
/// The second register is only read. Results wrap at 8 bits, same as every
/// other value in the machine.
pub fn apply(registers: &mut RegisterFile, op: AluOp, reg_a: u8, reg_b: u8) -> Result<(), Error> {
  let lhs = registers.get(reg_a)?;
  let rhs = registers.get(reg_b)?;
  let result = match op {
    AluOp::Add => lhs.wrapping_add(rhs),
    AluOp::Mul => lhs.wrapping_mul(rhs),
  };
  registers.set(reg_a, result)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mul_writes_into_first_register() {
    let mut registers = RegisterFile::new();
    registers.set(0, 5).unwrap();
    registers.set(1, 6).unwrap();
    apply(&mut registers, AluOp::Mul, 0, 1).unwrap();
    assert_eq!(registers.get(0).unwrap(), 30);
    assert_eq!(registers.get(1).unwrap(), 6);
  }

  #[test]
  fn add_is_available_directly() {
    let mut registers = RegisterFile::new();
    registers.set(2, 200).unwrap();
    registers.set(3, 100).unwrap();
    apply(&mut registers, AluOp::Add, 2, 3).unwrap();
    // 300 wraps to 44 in a byte register
    assert_eq!(registers.get(2).unwrap(), 44);
  }

  #[test]
  fn only_multiply_routes_from_the_opcode_table() {
    assert_eq!(AluOp::try_from(Opcode::Multiply).unwrap(), AluOp::Mul);
    let err = AluOp::try_from(Opcode::Halt).unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperation(Opcode::Halt)));
  }

  #[test]
  fn out_of_bounds_register_is_fatal() {
    let mut registers = RegisterFile::new();
    let err = apply(&mut registers, AluOp::Mul, 8, 0).unwrap_err();
    assert!(matches!(err, Error::OutOfBoundsRegister { index: 8 }));
  }
}
