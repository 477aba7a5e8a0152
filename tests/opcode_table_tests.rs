mod common;

use std::env;
use std::fs;

use common::TABLE;
use gbcore::opcodes::{
    Category, Condition, Cycles, Family, OpcodeTable, Reg8, Source, TableError, Target,
};

#[test]
fn conditional_branches_carry_two_costs() {
    for (opcode, taken, not_taken) in [
        (0x20, 12, 8),  // JR NZ
        (0xC0, 20, 8),  // RET NZ
        (0xC2, 16, 12), // JP NZ
        (0xC4, 24, 12), // CALL NZ
    ] {
        let info = TABLE.unprefixed(opcode);
        assert_eq!(
            info.cycles,
            Cycles {
                taken,
                not_taken: Some(not_taken)
            },
            "{}",
            info
        );
        assert_eq!(info.family().and_then(|f| f.condition()), Some(Condition::NotZero));
    }
}

#[test]
fn entries_are_bound_by_shape() {
    let ld = TABLE.unprefixed(0x7E);
    assert_eq!(ld.mnemonic, "LD");
    assert_eq!(
        ld.family(),
        Some(Family::Load8 {
            dst: Target::Register8(Reg8::A),
            src: Source::Target(Target::AddrRegister16(gbcore::opcodes::Reg16::HL)),
        })
    );
    assert_eq!(ld.family().map(|f| f.category()), Some(Category::DataMove));

    assert_eq!(TABLE.unprefixed(0xE9).family(), Some(Family::JumpHl));
    assert_eq!(TABLE.unprefixed(0xFF).family(), Some(Family::Rst(0x38)));
    assert!(TABLE.unprefixed(0xCB).family().is_none());
}

#[test]
fn display_lists_operands_and_flags() {
    assert_eq!(
        TABLE.unprefixed(0x22).to_string(),
        "LD    (HL+), A        [----]"
    );
    assert_eq!(
        TABLE.prefixed(0x7C).to_string(),
        "BIT   7, H            [Z01-]"
    );
}

#[test]
fn loads_dataset_from_disk() {
    let path = env::temp_dir().join(format!("gbcore-opcodes-{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{"unprefixed": {"0x00": {"mnemonic": "NOP", "bytes": 1, "cycles": [4], "operands": []}},
            "cbprefixed": {}}"#,
    )
    .unwrap();
    let table = OpcodeTable::from_path(&path);
    fs::remove_file(&path).unwrap();

    let table = table.unwrap();
    assert_eq!(table.implemented_count(), 1);
}

#[test]
fn missing_dataset_is_an_io_error() {
    let err = OpcodeTable::from_path(std::path::Path::new("no/such/opcodes.json")).unwrap_err();
    assert!(matches!(err, TableError::Io(_)));
}

#[test]
fn errors_name_the_offending_entry() {
    let err = OpcodeTable::from_json(
        r#"{"unprefixed": {}, "cbprefixed": {"0xZZ": {"mnemonic": "NOP", "bytes": 1, "cycles": [4]}}}"#,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "cbprefixed[0xZZ]: key is not a '0x' prefixed two digit hex opcode"
    );

    let err = OpcodeTable::from_json(
        r#"{"unprefixed": {"0x00": {"mnemonic": "NOP", "bytes": 1, "cycles": [4], "flags": {"Q": "-"}}}, "cbprefixed": {}}"#,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "unprefixed[0x00]: invalid flag hint Q='-'");

    let err = OpcodeTable::from_json(
        r#"{"unprefixed": {"0x00": {"mnemonic": "NOP", "bytes": 0, "cycles": [4]}}, "cbprefixed": {}}"#,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "unprefixed[0x00]: invalid byte length 0");
}

#[test]
fn unknown_shapes_stay_unimplemented() {
    let table = OpcodeTable::from_json(
        r#"{"unprefixed": {"0x00": {"mnemonic": "FROB", "bytes": 1, "cycles": [4]}}, "cbprefixed": {}}"#,
    )
    .unwrap();
    let info = table.unprefixed(0x00);
    assert_eq!(info.mnemonic, "FROB");
    assert!(!info.is_implemented());
}
