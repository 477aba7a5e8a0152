//! Raw serde view of the opcode dataset. Nothing here is validated; see
//! [`super::OpcodeTable`] for the checked conversion.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Deserialize)]
pub(crate) struct RawTables {
    /// Entries are kept as raw values so a malformed one can be reported
    /// by key instead of failing the whole document.
    pub unprefixed: BTreeMap<String, Value>,
    #[serde(alias = "extended-prefixed")]
    pub cbprefixed: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
pub(crate) struct RawOpcode {
    pub mnemonic: String,
    pub bytes: u8,
    pub cycles: Vec<u8>,
    #[serde(default)]
    pub operands: Vec<RawOperand>,
    #[serde(default)]
    pub flags: BTreeMap<String, String>,
}

#[derive(Deserialize)]
pub(crate) struct RawOperand {
    pub name: String,
    pub bytes: Option<u8>,
    pub immediate: bool,
    #[serde(default)]
    pub increment: bool,
    #[serde(default)]
    pub decrement: bool,
}

impl From<RawOperand> for super::Operand {
    fn from(raw: RawOperand) -> Self {
        Self {
            name: raw.name,
            bytes: raw.bytes,
            immediate: raw.immediate,
            increment: raw.increment,
            decrement: raw.decrement,
        }
    }
}
