use std::fmt;
use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use crate::error::Error;

/// The eight 8-bit registers, addressed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Reg {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    F,
}

/// The 16-bit registers: the four compound pairs plus SP and PC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum WReg {
    AF,
    BC,
    DE,
    HL,
    SP,
    PC,
}

/// A pair of 8-bit registers that can be addressed as one 16-bit register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Pair {
    AF,
    BC,
    DE,
    HL,
}

impl Pair {
    /// Returns `(high, low)`.
    pub fn halves(self) -> (Reg, Reg) {
        match self {
            Self::AF => (Reg::A, Reg::F),
            Self::BC => (Reg::B, Reg::C),
            Self::DE => (Reg::D, Reg::E),
            Self::HL => (Reg::H, Reg::L),
        }
    }
}

impl WReg {
    pub fn pair(self) -> Option<Pair> {
        match self {
            Self::AF => Some(Pair::AF),
            Self::BC => Some(Pair::BC),
            Self::DE => Some(Pair::DE),
            Self::HL => Some(Pair::HL),
            Self::SP | Self::PC => None,
        }
    }
}

impl From<Pair> for WReg {
    fn from(pair: Pair) -> Self {
        match pair {
            Pair::AF => Self::AF,
            Pair::BC => Self::BC,
            Pair::DE => Self::DE,
            Pair::HL => Self::HL,
        }
    }
}

/// Any of the fourteen register names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterName {
    Byte(Reg),
    Word(WReg),
}

impl RegisterName {
    pub fn width(self) -> u32 {
        match self {
            Self::Byte(_) => 8,
            Self::Word(_) => 16,
        }
    }
}

impl FromStr for RegisterName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if let Ok(reg) = Reg::from_str(name) {
            return Ok(Self::Byte(reg));
        }
        WReg::from_str(name)
            .map(Self::Word)
            .map_err(|_| Error::UnknownRegister(name.to_string()))
    }
}

impl fmt::Display for RegisterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(reg) => write!(f, "{}", reg),
            Self::Word(reg) => write!(f, "{}", reg),
        }
    }
}
