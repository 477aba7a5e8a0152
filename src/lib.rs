pub mod args;
pub mod cartridge;
pub mod constants;
pub mod cpu;
pub mod error;
pub mod mmu;
pub mod opcodes;
pub mod session;

use log::{debug, error, info, trace};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use constants::T_CYCLE;
use opcodes::OpcodeTable;
use session::Session;

pub use error::Error;

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    // Bare records, so trace lines can be diffed against Gameboy Doctor logs.
    builder.format(|buf, record| writeln!(buf, "{}", record.args()));

    // If a path is provided, redirect output to the file
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Totals for a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub steps: u64,
    pub cycles: u64,
}

/// Loads the inputs named by `args` and runs them until the CPU halts, the
/// step limit is reached or an instruction fails.
pub fn rom_exec(args: args::Args) -> Result<RunStats, Error> {
    setup_logging(&args.log_path)?;

    let table = match &args.opcodes {
        Some(path) => OpcodeTable::from_path(path)?,
        None => OpcodeTable::builtin()?,
    };
    let table = Arc::new(table);

    let program = match &args.load_rom {
        Some(path) => cartridge::load_rom(path)?,
        None => Vec::new(),
    };

    let mut session = match &args.boot_rom {
        Some(path) => {
            let boot_rom = cartridge::load_boot_rom(path)?;
            Session::with_boot_rom(table, &boot_rom, &program)?
        }
        None => Session::without_boot_rom(table, &program),
    };

    info!("Starting emulation at {:#06X}", session.cpu.regs.pc);
    let stats = main_loop(&mut session, args.max_steps, args.realtime).inspect_err(|e| {
        error!("{}", e);
        error!("{}", session.cpu);
    })?;
    info!(
        "Stopped after {} instructions, {} cycles",
        stats.steps, stats.cycles
    );
    Ok(stats)
}

/// Steps the session until it halts or `max_steps` instructions have run.
pub fn main_loop(
    session: &mut Session,
    max_steps: Option<u64>,
    realtime: bool,
) -> Result<RunStats, Error> {
    let mut stats = RunStats::default();

    while max_steps.is_none_or(|max| stats.steps < max) {
        trace!("{}", session.snapshot());
        trace!(
            "{:#06X}. {}",
            session.cpu.regs.pc,
            session.current_instruction()
        );

        let cycles = session.step()?;
        stats.steps += 1;
        stats.cycles += cycles as u64;

        if realtime {
            std::thread::sleep(T_CYCLE * cycles as u32);
        }

        // Nothing can wake a halted CPU.
        if session.cpu.halted {
            debug!("CPU halted at {:#06X}", session.cpu.regs.pc);
            break;
        }
    }

    Ok(stats)
}
