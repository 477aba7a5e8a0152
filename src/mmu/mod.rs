pub mod bus;
pub mod error;
pub mod memory_trait;

pub use bus::Bus;
pub use error::BootRomError;
pub use memory_trait::Memory;
