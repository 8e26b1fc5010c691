pub mod adapters;
pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::app::{session::Session, terminal::TerminalShell};
pub use crate::core::{engine::EtlEngine, pipeline::UnificationPipeline, unifier::unify};
pub use crate::domain::model::{Cell, RunOutcome, Table};
pub use crate::domain::rules::{FieldRule, DELIVERY_ADDRESS_RULES};
pub use crate::utils::error::{Result, UnifierError};
