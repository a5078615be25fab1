pub mod mink;

pub use mink::*;

pub type Idx = usize;
