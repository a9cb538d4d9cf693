// src/core/mod.rs
//! Core services shared by the command line and the generation pipeline

pub mod config_manager;
pub mod fs_ops;

pub use config_manager::ConfigManager;
pub use fs_ops::FsOps;
