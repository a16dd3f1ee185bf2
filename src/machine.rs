//! Executes generated programs
//!
//! A register-and-stack model of exactly the x86-64 subset the code
//! generator emits. Lines are read top to bottom until `ret`, which yields
//! `%rax`. Faults the hardware would raise come back as errors.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// `idiv` by zero
    DivideError,
    /// `idiv` quotient does not fit in 64 bits
    DivideOverflow,
    /// `pop` with nothing pushed
    StackUnderflow,
    /// Values still pushed when `ret` is reached
    StackNotEmpty(usize),
    /// Register other than `%rax`, `%rdi`, `%rdx`
    UnknownRegister(String),
    /// Line outside the supported subset
    UnsupportedInstruction(String),
    /// Text ran out before `ret`
    MissingRet,
}

impl std::fmt::Display for MachineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineError::DivideError => write!(f, "divide error"),
            MachineError::DivideOverflow => write!(f, "divide overflow"),
            MachineError::StackUnderflow => write!(f, "pop from empty stack"),
            MachineError::StackNotEmpty(n) => write!(f, "{} values left on stack at ret", n),
            MachineError::UnknownRegister(r) => write!(f, "unknown register {}", r),
            MachineError::UnsupportedInstruction(line) => {
                write!(f, "unsupported instruction {:?}", line)
            }
            MachineError::MissingRet => write!(f, "program ended without ret"),
        }
    }
}

impl std::error::Error for MachineError {}

#[derive(Debug, Default)]
struct Machine {
    rax: i64,
    rdi: i64,
    rdx: i64,
    stack: Vec<i64>,
}

impl Machine {
    fn reg(&mut self, name: &str) -> Result<&mut i64, MachineError> {
        match name {
            "%rax" => Ok(&mut self.rax),
            "%rdi" => Ok(&mut self.rdi),
            "%rdx" => Ok(&mut self.rdx),
            other => Err(MachineError::UnknownRegister(other.to_string())),
        }
    }
}

/// Execute the program and return `%rax` at `ret`
pub fn run(asm: &str) -> Result<i64, MachineError> {
    let mut m = Machine::default();

    for line in asm.lines().map(str::trim) {
        // labels, directives and comments
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') || line.ends_with(':') {
            continue;
        }

        let (mnemonic, rest) = line.split_once(' ').unwrap_or((line, ""));
        let operands: Vec<&str> = rest
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let unsupported = || MachineError::UnsupportedInstruction(line.to_string());

        match (mnemonic, operands.as_slice()) {
            ("mov", [imm, dst]) => {
                let value = imm
                    .strip_prefix('$')
                    .and_then(|n| n.parse::<i64>().ok())
                    .ok_or_else(unsupported)?;
                *m.reg(dst)? = value;
            }
            ("push", [src]) => {
                let value = *m.reg(src)?;
                m.stack.push(value);
            }
            ("pop", [dst]) => {
                let value = m.stack.pop().ok_or(MachineError::StackUnderflow)?;
                *m.reg(dst)? = value;
            }
            ("neg", [dst]) => {
                let r = m.reg(dst)?;
                *r = r.wrapping_neg();
            }
            ("add", [src, dst]) => {
                let s = *m.reg(src)?;
                let d = m.reg(dst)?;
                *d = d.wrapping_add(s);
            }
            ("sub", [src, dst]) => {
                let s = *m.reg(src)?;
                let d = m.reg(dst)?;
                *d = d.wrapping_sub(s);
            }
            ("imul", [src, dst]) => {
                let s = *m.reg(src)?;
                let d = m.reg(dst)?;
                *d = d.wrapping_mul(s);
            }
            ("cqo", []) => {
                m.rdx = if m.rax < 0 { -1 } else { 0 };
            }
            ("idiv", [src]) => {
                // %rdx:%rax / src
                let divisor = *m.reg(src)? as i128;
                if divisor == 0 {
                    return Err(MachineError::DivideError);
                }
                let dividend = ((m.rdx as i128) << 64) | (m.rax as u64 as i128);
                let quotient =
                    i64::try_from(dividend / divisor).map_err(|_| MachineError::DivideOverflow)?;
                m.rdx = (dividend % divisor) as i64;
                m.rax = quotient;
            }
            ("ret", []) => {
                if !m.stack.is_empty() {
                    return Err(MachineError::StackNotEmpty(m.stack.len()));
                }
                return Ok(m.rax);
            }
            _ => return Err(unsupported()),
        }
    }

    Err(MachineError::MissingRet)
}
