//! Configuration sources other than the interactive prompts

pub mod preset;

pub use preset::{Preset, PresetError};
