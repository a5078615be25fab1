mod problem;

pub use crate::problem::*;
