mod error;

pub mod assignment;
pub mod cpu;
pub mod register;

pub use cpu::RegisterFile;
pub use error::{Error, Result};
pub use register::{Register, Register16, Register8};
