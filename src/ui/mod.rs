// src/ui/mod.rs
pub mod format;
pub mod results;
pub mod sidebar;
pub mod upload;
