mod classifier;
mod collections;
mod dataset;
mod distance;
mod error;
mod neighbor;
mod vote;

pub use crate::classifier::*;
pub use crate::collections::*;
pub use crate::dataset::*;
pub use crate::distance::*;
pub use crate::error::*;
pub use crate::neighbor::*;
pub use crate::vote::*;
