//! CLI infrastructure for the gridlab trainer
//!
//! Headless training runs, progress reporting, and stat export. Everything
//! here is an external collaborator of the core: it only reads snapshots and
//! issues commands.

pub mod commands;
pub mod observers;
pub mod output;
