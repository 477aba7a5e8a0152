use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootRomError {
    /// The image does not fit the overlay.
    TooLarge { size: usize, max: usize },
}

impl fmt::Display for BootRomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootRomError::TooLarge { size, max } => write!(
                f,
                "Boot ROM is {} bytes, the overlay holds at most {}",
                size, max
            ),
        }
    }
}

impl std::error::Error for BootRomError {}
