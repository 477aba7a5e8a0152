mod common;

use std::sync::Arc;

use common::{TABLE, captured_lines, dump_log, init_logger};
use gbcore::cpu::CpuSnapshot;
use gbcore::cpu::snapshot::StateMismatch;
use gbcore::main_loop;
use gbcore::session::Session;

#[test]
fn trace_emits_doctor_lines_per_instruction() {
    // Both tests share one logger; only the first install succeeds.
    let _ = init_logger();

    let mut program = vec![0u8; 0x0200];
    // XOR A ; HALT
    program[0x0100..0x0102].copy_from_slice(&[0xAF, 0x76]);
    let mut session = Session::without_boot_rom(Arc::clone(&TABLE), &program);
    main_loop(&mut session, None, false).unwrap();

    let lines = captured_lines();
    let expected = [
        "A:01 F:B0 B:00 C:13 D:00 E:D8 H:01 L:4D SP:FFFE PC:0100 PCMEM:AF,76,00,00",
        "A:00 F:80 B:00 C:13 D:00 E:D8 H:01 L:4D SP:FFFE PC:0101 PCMEM:76,00,00,00",
    ];
    for line in expected {
        if !lines.iter().any(|l| l == line) {
            dump_log();
            panic!("missing trace line {}", line);
        }
    }
    assert!(lines.iter().any(|l| l.starts_with("0x0100. XOR")));
}

#[test]
fn trace_lines_read_back_as_snapshots() {
    // Both tests share one logger; only the first install succeeds.
    let _ = init_logger();

    let mut program = vec![0u8; 0x0200];
    // LD B, 0x42 ; HALT
    program[0x0100..0x0103].copy_from_slice(&[0x06, 0x42, 0x76]);
    let mut session = Session::without_boot_rom(Arc::clone(&TABLE), &program);
    main_loop(&mut session, None, false).unwrap();

    let lines = captured_lines();
    let Some(line) = lines.iter().find(|l| l.contains("PC:0102 PCMEM:76,")) else {
        dump_log();
        panic!("no trace line before HALT");
    };
    let traced = CpuSnapshot::from_string(line).unwrap();
    let start = CpuSnapshot::from_string(
        "A:01 F:B0 B:00 C:13 D:00 E:D8 H:01 L:4D SP:FFFE PC:0100 PCMEM:06,42,76,00",
    )
    .unwrap();

    assert_eq!(traced.to_string(), *line);
    assert_eq!(
        start.compare(&traced),
        vec![
            StateMismatch {
                field: "B",
                expected: 0x00,
                actual: 0x42
            },
            StateMismatch {
                field: "PC",
                expected: 0x0100,
                actual: 0x0102
            },
        ]
    );
}
