//! Row models and DTOs.

pub mod song;
