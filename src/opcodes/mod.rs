mod binding;
mod condition;
mod error;
mod family;
mod flag_action;
mod flagspec;
mod loader;
mod opcode_info;
mod operand;
mod reg16;
mod reg8;
mod table;
mod target;

pub use binding::{Binding, bind};
pub use condition::Condition;
pub use error::TableError;
pub use family::{AluOp, BitOp, Category, Family, ShiftOp};
pub use flag_action::FlagAction;
pub use flagspec::FlagSpec;
pub use opcode_info::{Cycles, OpcodeInfo};
pub use operand::Operand;
pub use reg8::Reg8;
pub use reg16::Reg16;
pub use table::OpcodeTable;
pub use target::{Source, Target};
