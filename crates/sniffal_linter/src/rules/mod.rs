//! Rule implementations.

pub mod naming;

pub use naming::ValidVariableName;
