use std::mem::size_of;

use num::traits::AsPrimitive;
use num::{PrimInt, Unsigned};

/// Any primitive integer that can be written into a register backed by `T`.
/// Writing keeps the low bits of the value's two's-complement representation.
pub trait Truncate<T: 'static + Copy>: PrimInt + AsPrimitive<T> {}

impl<V, T> Truncate<T> for V
where
    V: PrimInt + AsPrimitive<T>,
    T: 'static + Copy,
{
}

/// A fixed-width CPU register.
///
/// The generic parameter is the unsigned storage type and fixes the width:
/// `Register<u8>` holds 8 bits, `Register<u16>` holds 16. Writes never fail,
/// out-of-range values wrap the way the hardware register does.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Register<T> {
    value: T,
}

pub type Register8 = Register<u8>;
pub type Register16 = Register<u16>;

/// Treats least significant bit as index 0
impl<T> Register<T>
where
    T: PrimInt + Unsigned + 'static,
{
    pub fn new() -> Self {
        Self { value: T::zero() }
    }

    pub fn with_value<V: Truncate<T>>(value: V) -> Self {
        Self { value: value.as_() }
    }

    pub fn width(&self) -> u32 {
        (size_of::<T>() * 8) as u32
    }

    pub fn mask(&self) -> T {
        T::max_value()
    }

    pub fn get(&self) -> T {
        self.value
    }

    pub fn set<V: Truncate<T>>(&mut self, value: V) {
        self.value = value.as_();
    }

    pub fn bit(&self, index: u32) -> bool {
        self.check_bit_index(index);
        (self.value >> index as usize) & T::one() == T::one()
    }

    pub fn set_bit(&mut self, index: u32, value: bool) {
        self.check_bit_index(index);
        let bit = T::one() << index as usize;
        self.value = if value {
            self.value | bit
        } else {
            self.value & !bit
        };
    }

    fn check_bit_index(&self, index: u32) {
        assert!(
            index < self.width(),
            "bit {} out of range for a {}-bit register",
            index,
            self.width()
        );
    }
}

impl<T> From<T> for Register<T> {
    fn from(value: T) -> Self {
        Self { value }
    }
}
