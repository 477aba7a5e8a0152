mod alu_output;

pub use alu_output::{AluOutput, WideOutput};
