use std::fmt;
use std::str::FromStr;

use crate::cpu::{RegisterFile, RegisterName};
use crate::error::{Error, Result};

/// A register write written as `NAME=VALUE`, e.g. `hl=0xabcd` or `sp=-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub name: RegisterName,
    pub value: i128,
}

impl Assignment {
    pub fn new(name: RegisterName, value: i128) -> Self {
        Self { name, value }
    }

    /// Writes the value through the named register, truncated to its width.
    pub fn apply(&self, registers: &mut RegisterFile) {
        match self.name {
            RegisterName::Byte(reg) => registers.set(reg, self.value),
            RegisterName::Word(word_reg) => registers.set_word(word_reg, self.value),
        }
    }
}

impl FromStr for Assignment {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let (name, value) = text
            .split_once('=')
            .ok_or_else(|| Error::InvalidAssignment(text.to_string()))?;
        let name: RegisterName = name.trim().parse()?;
        let value = parse_value(value.trim())?;
        Ok(Self { name, value })
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Parses a decimal, `0x` hex or `0b` binary integer with an optional leading `-`.
/// Underscores may separate digits. Any magnitude up to 128 bits is accepted and
/// kept as its low 128 bits in two's-complement.
pub fn parse_value(text: &str) -> Result<i128> {
    let invalid = || Error::InvalidValue(text.to_string());

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let digits = unsigned.replace('_', "");
    let (radix, digits) = if let Some(hex) = strip_radix_prefix(&digits, 'x') {
        (16, hex)
    } else if let Some(bin) = strip_radix_prefix(&digits, 'b') {
        (2, bin)
    } else {
        (10, digits.as_str())
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }
    let magnitude = u128::from_str_radix(digits, radix).map_err(|_| invalid())? as i128;
    Ok(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

fn strip_radix_prefix(digits: &str, marker: char) -> Option<&str> {
    let rest = digits.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::{Reg, WReg};

    #[test]
    fn test_parse_value() {
        assert_eq!(Ok(16), parse_value("16"));
        assert_eq!(Ok(0xABCD), parse_value("0xabcd"));
        assert_eq!(Ok(0xABCD), parse_value("0XAB_CD"));
        assert_eq!(Ok(0b1010), parse_value("0b1010"));
        assert_eq!(Ok(-1), parse_value("-1"));
        assert_eq!(Ok(-0x10), parse_value("-0x10"));
        assert_eq!(Ok(0), parse_value("0"));
    }

    #[test]
    fn test_parse_value_accepts_wide_integers() {
        assert_eq!(
            Ok(i128::from(u64::MAX)),
            parse_value("0xFFFF_FFFF_FFFF_FFFF")
        );
        assert_eq!(
            Ok(i128::from(i64::MIN)),
            parse_value("-9223372036854775808")
        );
        assert_eq!(Ok(i128::MIN), parse_value(&format!("-{}", 1u128 << 127)));
        assert_eq!(Ok(-1), parse_value(&format!("0x{:x}", u128::MAX)));

        let mut registers = RegisterFile::new();
        let assignment: Assignment = "sp=0xFFFFFFFFFFFFFFFF".parse().unwrap();
        assignment.apply(&mut registers);
        assert_eq!(0xFFFF, registers.sp());

        let assignment: Assignment = "a=-9223372036854775808".parse().unwrap();
        assignment.apply(&mut registers);
        assert_eq!(0x00, registers.a());
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        for text in ["", "-", "0x", "abc", "0b102", "+5", "--1", "1.5"] {
            assert_eq!(
                Err(Error::InvalidValue(text.to_string())),
                parse_value(text),
                "{}",
                text
            );
        }

        let too_wide = format!("0x1{:032x}", 0u8);
        assert_eq!(Err(Error::InvalidValue(too_wide.clone())), parse_value(&too_wide));
    }

    #[test]
    fn test_parse_assignment() {
        let assignment: Assignment = "hl = 0xABCD".parse().unwrap();
        assert_eq!(
            Assignment::new(RegisterName::Word(WReg::HL), 0xABCD),
            assignment
        );
        assert_eq!("HL=43981", assignment.to_string());

        assert_eq!(
            Err(Error::InvalidAssignment("a".to_string())),
            "a".parse::<Assignment>()
        );
        assert_eq!(
            Err(Error::UnknownRegister("q".to_string())),
            "q=1".parse::<Assignment>()
        );
    }

    #[test]
    fn test_apply_truncates() {
        let mut registers = RegisterFile::new();
        Assignment::new(RegisterName::Byte(Reg::A), 256).apply(&mut registers);
        assert_eq!(0, registers.a());

        Assignment::new(RegisterName::Word(WReg::SP), -1).apply(&mut registers);
        assert_eq!(0xFFFF, registers.sp());

        Assignment::new(RegisterName::Word(WReg::BC), 0x1234).apply(&mut registers);
        assert_eq!(0x12, registers.b());
        assert_eq!(0x34, registers.c());
    }
}
