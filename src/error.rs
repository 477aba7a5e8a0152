use std::fmt;
use std::io;

use crate::cartridge::LoadError;
use crate::cpu::StepError;
use crate::mmu::BootRomError;
use crate::opcodes::TableError;

/// Everything that can stop a run.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Load(LoadError),
    BootRom(BootRomError),
    Table(TableError),
    Step(StepError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Load(err) => write!(f, "Failed to load ROM: {}", err),
            Error::BootRom(err) => write!(f, "Failed to map boot ROM: {}", err),
            Error::Table(err) => write!(f, "Failed to build opcode table: {}", err),
            Error::Step(err) => write!(f, "CPU stopped: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Load(err) => Some(err),
            Error::BootRom(err) => Some(err),
            Error::Table(err) => Some(err),
            Error::Step(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Load(err)
    }
}

impl From<BootRomError> for Error {
    fn from(err: BootRomError) -> Self {
        Error::BootRom(err)
    }
}

impl From<TableError> for Error {
    fn from(err: TableError) -> Self {
        Error::Table(err)
    }
}

impl From<StepError> for Error {
    fn from(err: StepError) -> Self {
        Error::Step(err)
    }
}
