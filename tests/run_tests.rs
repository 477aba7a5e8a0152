mod common;

use std::sync::Arc;

use common::TABLE;
use gbcore::cpu::StepError;
use gbcore::session::Session;
use gbcore::{Error, RunStats, main_loop};

/// LD A, 3 ; loop: DEC A ; JR NZ, loop ; HALT
fn countdown() -> Vec<u8> {
    let mut program = vec![0u8; 0x0200];
    program[0x0100..0x0106].copy_from_slice(&[0x3E, 0x03, 0x3D, 0x20, 0xFD, 0x76]);
    program
}

#[test]
fn runs_until_halted() {
    let mut session = Session::without_boot_rom(Arc::clone(&TABLE), &countdown());
    let stats = main_loop(&mut session, None, false).unwrap();

    assert_eq!(
        stats,
        RunStats {
            steps: 8,
            cycles: 8 + 3 * 4 + 2 * 12 + 8 + 4
        }
    );
    assert!(session.cpu.halted);
    assert_eq!(session.cpu.regs.a, 0);
    assert_eq!(session.cpu.regs.pc, 0x0106);
}

#[test]
fn stops_at_step_limit() {
    let mut session = Session::without_boot_rom(Arc::clone(&TABLE), &countdown());
    let stats = main_loop(&mut session, Some(3), false).unwrap();

    assert_eq!(
        stats,
        RunStats {
            steps: 3,
            cycles: 8 + 4 + 12
        }
    );
    assert!(!session.cpu.halted);
}

#[test]
fn unimplemented_opcode_ends_the_run() {
    let mut program = vec![0u8; 0x0200];
    program[0x0101] = 0xDD;
    let mut session = Session::without_boot_rom(Arc::clone(&TABLE), &program);

    let err = main_loop(&mut session, None, false).unwrap_err();
    assert!(matches!(
        err,
        Error::Step(StepError::Unimplemented {
            opcode: 0xDD,
            pc: 0x0101,
            ..
        })
    ));
    assert_eq!(session.cpu.regs.pc, 0x0101);
}
