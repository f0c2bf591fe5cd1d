use std::fmt;

use log::trace;
use strum_macros::{Display, EnumIter};

use crate::cpu::compound::{CompoundRegister, CompoundRegisterMut};
use crate::cpu::name::{Pair, Reg, RegisterName, WReg};
use crate::register::{Register16, Register8, Truncate};

/// The CPU's programmer-visible registers: eight 8-bit registers, SP and PC.
/// AF, BC, DE and HL are not stored, they are views over their halves.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    a: Register8,
    f: Register8,
    b: Register8,
    c: Register8,
    d: Register8,
    e: Register8,
    h: Register8,
    l: Register8,
    sp: Register16,
    pc: Register16,
}

/// Macro to generate the getter and setter of a plain register.
macro_rules! plain_register {
    ($get:ident, $set:ident, $field:ident, $ty:ty) => {
        #[doc = concat!("Gets register ", stringify!($field), ".")]
        pub fn $get(&self) -> $ty {
            self.$field.get()
        }

        #[doc = concat!("Sets register ", stringify!($field), ", keeping the low bits of `value`.")]
        pub fn $set<V: Truncate<$ty>>(&mut self, value: V) {
            self.$field.set(value)
        }
    };
}

/// Macro to generate the getter and setter of a joint register.
macro_rules! joint_register {
    ($get:ident, $set:ident, $pair:ident) => {
        #[doc = concat!("Gets the joint register ", stringify!($pair), ".")]
        pub fn $get(&self) -> u16 {
            self.compound(Pair::$pair).get()
        }

        #[doc = concat!("Sets the joint register ", stringify!($pair), ".")]
        pub fn $set<V: Truncate<u16>>(&mut self, value: V) {
            self.compound_mut(Pair::$pair).set(value)
        }
    };
}

impl RegisterFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: RegisterSnapshot) -> Self {
        Self {
            a: snapshot.a.into(),
            f: snapshot.f.into(),
            b: snapshot.b.into(),
            c: snapshot.c.into(),
            d: snapshot.d.into(),
            e: snapshot.e.into(),
            h: snapshot.h.into(),
            l: snapshot.l.into(),
            sp: snapshot.sp.into(),
            pc: snapshot.pc.into(),
        }
    }

    pub fn snapshot(&self) -> RegisterSnapshot {
        RegisterSnapshot {
            a: self.a(),
            f: self.f(),
            b: self.b(),
            c: self.c(),
            d: self.d(),
            e: self.e(),
            h: self.h(),
            l: self.l(),
            sp: self.sp(),
            pc: self.pc(),
        }
    }

    plain_register!(a, set_a, a, u8);
    plain_register!(b, set_b, b, u8);
    plain_register!(c, set_c, c, u8);
    plain_register!(d, set_d, d, u8);
    plain_register!(e, set_e, e, u8);
    plain_register!(h, set_h, h, u8);
    plain_register!(l, set_l, l, u8);
    plain_register!(f, set_f, f, u8);

    plain_register!(sp, set_sp, sp, u16);
    plain_register!(pc, set_pc, pc, u16);

    joint_register!(af, set_af, AF);
    joint_register!(bc, set_bc, BC);
    joint_register!(de, set_de, DE);
    joint_register!(hl, set_hl, HL);

    pub fn compound(&self, pair: Pair) -> CompoundRegister<'_> {
        match pair {
            Pair::AF => CompoundRegister::new(&self.a, &self.f),
            Pair::BC => CompoundRegister::new(&self.b, &self.c),
            Pair::DE => CompoundRegister::new(&self.d, &self.e),
            Pair::HL => CompoundRegister::new(&self.h, &self.l),
        }
    }

    pub fn compound_mut(&mut self, pair: Pair) -> CompoundRegisterMut<'_> {
        match pair {
            Pair::AF => CompoundRegisterMut::new(&mut self.a, &mut self.f),
            Pair::BC => CompoundRegisterMut::new(&mut self.b, &mut self.c),
            Pair::DE => CompoundRegisterMut::new(&mut self.d, &mut self.e),
            Pair::HL => CompoundRegisterMut::new(&mut self.h, &mut self.l),
        }
    }

    fn byte_register(&self, reg: Reg) -> &Register8 {
        match reg {
            Reg::A => &self.a,
            Reg::B => &self.b,
            Reg::C => &self.c,
            Reg::D => &self.d,
            Reg::E => &self.e,
            Reg::H => &self.h,
            Reg::L => &self.l,
            Reg::F => &self.f,
        }
    }

    fn byte_register_mut(&mut self, reg: Reg) -> &mut Register8 {
        match reg {
            Reg::A => &mut self.a,
            Reg::B => &mut self.b,
            Reg::C => &mut self.c,
            Reg::D => &mut self.d,
            Reg::E => &mut self.e,
            Reg::H => &mut self.h,
            Reg::L => &mut self.l,
            Reg::F => &mut self.f,
        }
    }

    pub fn get(&self, reg: Reg) -> u8 {
        self.byte_register(reg).get()
    }

    pub fn set<V: Truncate<u8>>(&mut self, reg: Reg, value: V) {
        let register = self.byte_register_mut(reg);
        register.set(value);
        trace!("{} <- {:#04x}", reg, register.get());
    }

    pub fn get_word(&self, word_reg: WReg) -> u16 {
        match word_reg {
            WReg::AF => self.af(),
            WReg::BC => self.bc(),
            WReg::DE => self.de(),
            WReg::HL => self.hl(),
            WReg::SP => self.sp(),
            WReg::PC => self.pc(),
        }
    }

    pub fn set_word<V: Truncate<u16>>(&mut self, word_reg: WReg, value: V) {
        match word_reg {
            WReg::AF => self.set_af(value),
            WReg::BC => self.set_bc(value),
            WReg::DE => self.set_de(value),
            WReg::HL => self.set_hl(value),
            WReg::SP => self.set_sp(value),
            WReg::PC => self.set_pc(value),
        }
        trace!("{} <- {:#06x}", word_reg, self.get_word(word_reg));
    }

    /// Reads any named register, widened to 16 bits.
    pub fn get_named(&self, name: RegisterName) -> u16 {
        match name {
            RegisterName::Byte(reg) => u16::from(self.get(reg)),
            RegisterName::Word(word_reg) => self.get_word(word_reg),
        }
    }

    /// Formats a named register as `NAME: 0x..`, padded to the register's width.
    pub fn describe(&self, name: RegisterName) -> String {
        let digits = (name.width() / 4) as usize;
        format!(
            "{:>2}: {:#0width$x}",
            name.to_string(),
            self.get_named(name),
            width = digits + 2
        )
    }

    /// Reads one flag bit of F. The other bits of F are left alone.
    pub fn flag(&self, flag: Flag) -> bool {
        self.f.bit(flag.position())
    }

    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.f.set_bit(flag.position(), value);
    }
}

impl From<RegisterSnapshot> for RegisterFile {
    fn from(snapshot: RegisterSnapshot) -> Self {
        Self::from_snapshot(snapshot)
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AF: {:#06x} BC: {:#06x} DE: {:#06x} HL: {:#06x} SP: {:#06x} PC: {:#06x}",
            self.af(),
            self.bc(),
            self.de(),
            self.hl(),
            self.sp(),
            self.pc()
        )
    }
}

const ZERO_FLAG_BYTE_POSITION: u32 = 7;
const SUBTRACT_FLAG_BYTE_POSITION: u32 = 6;
const HALF_CARRY_FLAG_BYTE_POSITION: u32 = 5;
const CARRY_FLAG_BYTE_POSITION: u32 = 4;

/// The flag bits of F. Bits 3-0 are unused and not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Flag {
    /// Set when the result of a math op is zero or two values match when using the CP
    /// instruction.
    Zero,

    /// Set if a subtraction was performed in the last math operation.
    Subtract,

    /// Set if a carry occurred from the lower nibble in the last math operation.
    HalfCarry,

    /// Set if a carry occurred from the last math operation or if register A is the
    /// smaller value when executing the CP instruction.
    Carry,
}

impl Flag {
    pub fn position(self) -> u32 {
        match self {
            Self::Zero => ZERO_FLAG_BYTE_POSITION,
            Self::Subtract => SUBTRACT_FLAG_BYTE_POSITION,
            Self::HalfCarry => HALF_CARRY_FLAG_BYTE_POSITION,
            Self::Carry => CARRY_FLAG_BYTE_POSITION,
        }
    }

    pub fn mask(self) -> u8 {
        1 << self.position()
    }
}

/// A copy of the ten stored registers, used to start a register file from an
/// explicit state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterSnapshot {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl RegisterSnapshot {
    /// Register values a DMG hands to the cartridge after the bootrom has run.
    pub const DMG_POST_BOOT: Self = Self {
        a: 0x01,
        f: 0xB0,
        b: 0x00,
        c: 0x13,
        d: 0x00,
        e: 0xD8,
        h: 0x01,
        l: 0x4D,
        sp: 0xFFFE,
        pc: 0x0100,
    };
}
