use log::debug;
use std::fs;
use std::path::Path;

use super::error::LoadError;
use crate::constants::GAME_BOY_FILE_EXTS;

/// Accepts any of [`GAME_BOY_FILE_EXTS`], ignoring case.
pub fn validate_extension(path: &Path) -> Result<(), LoadError> {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return Err(LoadError::MissingExtension);
    };

    match GAME_BOY_FILE_EXTS
        .iter()
        .find(|known| ext.eq_ignore_ascii_case(known))
    {
        Some(_) => Ok(()),
        None => Err(LoadError::InvalidExtension {
            expected: ".gb or .gbc",
            found: ext.to_owned(),
        }),
    }
}

/// Reads a program image from disk.
pub fn load_rom(path: &Path) -> Result<Vec<u8>, LoadError> {
    validate_extension(path)?;
    let buffer = fs::read(path)?;
    debug!("Read {} bytes from {}", buffer.len(), path.display());
    Ok(buffer)
}

/// Reads a boot overlay image. Its size is checked when it is mapped.
pub fn load_boot_rom(path: &Path) -> Result<Vec<u8>, LoadError> {
    let buffer = fs::read(path)?;
    debug!("Read {} byte boot image from {}", buffer.len(), path.display());
    Ok(buffer)
}
