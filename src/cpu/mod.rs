mod compound;
mod name;
mod register;

pub use compound::{CompoundRegister, CompoundRegisterMut};
pub use name::{Pair, Reg, RegisterName, WReg};
pub use register::{Flag, RegisterFile, RegisterSnapshot};
