//! Subcommand implementations

pub mod banks;
pub mod campaign;
pub mod campaigns;
pub mod categories;
pub mod donate;
pub mod donation;
