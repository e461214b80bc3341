//! Utility modules for lexsieve.

pub mod text;
