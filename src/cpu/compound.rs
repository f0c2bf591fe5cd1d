use num::traits::AsPrimitive;

use crate::register::{Register8, Truncate};

fn join(high: &Register8, low: &Register8) -> u16 {
    (u16::from(high.get()) << 8) | u16::from(low.get())
}

/// A 16-bit view over two 8-bit registers. Holds no value of its own, every
/// read goes to the two halves.
#[derive(Debug, Clone, Copy)]
pub struct CompoundRegister<'a> {
    high: &'a Register8,
    low: &'a Register8,
}

impl<'a> CompoundRegister<'a> {
    pub fn new(high: &'a Register8, low: &'a Register8) -> Self {
        Self { high, low }
    }

    pub fn get(&self) -> u16 {
        join(self.high, self.low)
    }

    pub fn high(&self) -> u8 {
        self.high.get()
    }

    pub fn low(&self) -> u8 {
        self.low.get()
    }
}

/// Writable counterpart of [`CompoundRegister`]. It borrows both halves
/// exclusively, so nothing can read them between the two half writes of `set`.
#[derive(Debug)]
pub struct CompoundRegisterMut<'a> {
    high: &'a mut Register8,
    low: &'a mut Register8,
}

impl<'a> CompoundRegisterMut<'a> {
    pub fn new(high: &'a mut Register8, low: &'a mut Register8) -> Self {
        Self { high, low }
    }

    pub fn get(&self) -> u16 {
        join(&*self.high, &*self.low)
    }

    /// Stores the low 16 bits of `value`: bits 15-8 go to the high half and
    /// bits 7-0 to the low half.
    pub fn set<V: Truncate<u16>>(&mut self, value: V) {
        let value: u16 = value.as_();
        self.high.set(value >> 8);
        self.low.set(value);
    }
}
