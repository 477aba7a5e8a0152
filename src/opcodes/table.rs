use log::debug;
use serde_json::Value;
use std::fs;
use std::ops::Index;
use std::path::Path;

use super::loader::{RawOpcode, RawTables};
use super::*;
use crate::constants::TABLE_SIZE;

const UNPREFIXED: &str = "unprefixed";
const CB_PREFIXED: &str = "cbprefixed";

/// The dataset shipped with the crate.
const BUILTIN_OPCODES: &str = include_str!("../../data/opcodes.json");

/// All 512 instruction slots: unprefixed opcodes first, then the
/// CB-prefixed ones at `256 + opcode`. Immutable once built.
#[derive(Debug, Clone)]
pub struct OpcodeTable {
    entries: Box<[OpcodeInfo; TABLE_SIZE]>,
}

impl OpcodeTable {
    pub fn builtin() -> Result<Self, TableError> {
        Self::from_json(BUILTIN_OPCODES)
    }

    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        debug!("Loading opcode table from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let raw: RawTables = serde_json::from_str(json)?;

        let mut slots: Vec<Option<OpcodeInfo>> = vec![None; TABLE_SIZE];
        for (table, prefixed, entries) in [
            (UNPREFIXED, false, raw.unprefixed),
            (CB_PREFIXED, true, raw.cbprefixed),
        ] {
            for (key, value) in entries {
                let info = parse_entry(table, prefixed, &key, value)?;
                let slot = &mut slots[info.index()];
                if slot.is_some() {
                    return Err(TableError::DuplicateOpcode { table, key });
                }
                *slot = Some(info);
            }
        }

        let entries = Box::new(std::array::from_fn(|index| {
            slots[index]
                .take()
                .unwrap_or_else(|| OpcodeInfo::undefined(index))
        }));
        let table = Self { entries };

        debug!(
            "Opcode table ready: {} of {} slots bound",
            table.implemented_count(),
            TABLE_SIZE
        );
        Ok(table)
    }

    pub fn get(&self, index: usize) -> Option<&OpcodeInfo> {
        self.entries.get(index)
    }

    pub fn unprefixed(&self, opcode: u8) -> &OpcodeInfo {
        &self.entries[opcode as usize]
    }

    pub fn prefixed(&self, opcode: u8) -> &OpcodeInfo {
        &self.entries[256 + opcode as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &OpcodeInfo> {
        self.entries.iter()
    }

    pub fn implemented_count(&self) -> usize {
        self.iter().filter(|info| info.is_implemented()).count()
    }
}

impl Index<usize> for OpcodeTable {
    type Output = OpcodeInfo;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

/// Strict `0xNN` form: lowercase prefix followed by exactly two hex digits.
fn parse_key(table: &'static str, key: &str) -> Result<u8, TableError> {
    key.strip_prefix("0x")
        .filter(|hex| hex.len() == 2 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
        .and_then(|hex| u8::from_str_radix(hex, 16).ok())
        .ok_or_else(|| TableError::InvalidKey {
            table,
            key: key.to_string(),
        })
}

fn parse_flags(
    table: &'static str,
    key: &str,
    raw: &RawOpcode,
) -> Result<FlagSpec, TableError> {
    let mut spec = FlagSpec::default();
    for (flag, hint) in &raw.flags {
        let invalid = || TableError::InvalidFlag {
            table,
            key: key.to_string(),
            flag: flag.clone(),
            value: hint.clone(),
        };
        let action = FlagAction::from_hint(hint, &raw.mnemonic).ok_or_else(invalid)?;
        match flag.as_str() {
            "Z" => spec.z = action,
            "N" => spec.n = action,
            "H" => spec.h = action,
            "C" => spec.c = action,
            _ => return Err(invalid()),
        }
    }
    Ok(spec)
}

fn parse_entry(
    table: &'static str,
    prefixed: bool,
    key: &str,
    value: Value,
) -> Result<OpcodeInfo, TableError> {
    let opcode = parse_key(table, key)?;
    let raw: RawOpcode =
        serde_json::from_value(value).map_err(|source| TableError::InvalidEntry {
            table,
            key: key.to_string(),
            source,
        })?;

    let cycles = Cycles::from_list(&raw.cycles).ok_or_else(|| TableError::InvalidCycles {
        table,
        key: key.to_string(),
        cycles: raw.cycles.clone(),
    })?;
    if raw.bytes == 0 {
        return Err(TableError::InvalidLength {
            table,
            key: key.to_string(),
            bytes: raw.bytes,
        });
    }
    let flags = parse_flags(table, key, &raw)?;

    let operands: Vec<Operand> = raw.operands.into_iter().map(Operand::from).collect();
    let binding = bind(&raw.mnemonic, &operands);

    if let Some(family) = binding.family() {
        let expected = 1 + prefixed as u8 + family.operand_bytes();
        if raw.bytes != expected {
            return Err(TableError::LengthMismatch {
                table,
                key: key.to_string(),
                declared: raw.bytes,
                expected,
            });
        }
        if family.condition().is_some() && cycles.not_taken.is_none() {
            return Err(TableError::MissingBranchCycles {
                table,
                key: key.to_string(),
            });
        }
    }

    Ok(OpcodeInfo {
        mnemonic: raw.mnemonic,
        opcode,
        prefixed,
        bytes: raw.bytes,
        cycles,
        operands,
        flags,
        binding,
    })
}
