mod error;
mod loader;

pub use error::LoadError;
pub use loader::{load_boot_rom, load_rom, validate_extension};
