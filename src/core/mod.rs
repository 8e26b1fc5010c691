pub mod engine;
pub mod pipeline;
pub mod unifier;

pub use crate::domain::model::{Table, UnifiedTable};
pub use crate::domain::ports::{Pipeline, Storage};
pub use crate::utils::error::Result;
