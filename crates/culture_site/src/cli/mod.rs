//! CLI module for the culture site
//!
//! Every command works offline against the local content document.

pub mod config;
pub mod error;
pub mod icons;
pub mod render;
pub mod submit;
pub mod validate;
