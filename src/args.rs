use std::path::PathBuf;

use clap::Parser;

/// Runs a Game Boy program on the LR35902 instruction core.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Program image (.gb or .gbc) copied into memory from 0x0000.
    #[arg(long)]
    pub load_rom: Option<PathBuf>,

    /// Boot image mapped over 0x0000-0x00FF until it unmaps itself.
    /// Without one, execution starts at 0x0100 with post-boot registers.
    #[arg(long)]
    pub boot_rom: Option<PathBuf>,

    /// Opcode dataset to use instead of the built-in one.
    #[arg(long)]
    pub opcodes: Option<PathBuf>,

    // Optional log path, if none given, logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,

    /// Stop after this many instructions.
    #[arg(long)]
    pub max_steps: Option<u64>,

    /// Sleep between instructions to match hardware speed.
    #[arg(long)]
    pub realtime: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "gbcore",
            "--load-rom",
            "game.gb",
            "--boot-rom",
            "dmg_boot.bin",
            "--max-steps",
            "100",
            "--realtime",
        ])
        .unwrap();
        assert_eq!(args.load_rom, Some(PathBuf::from("game.gb")));
        assert_eq!(args.boot_rom, Some(PathBuf::from("dmg_boot.bin")));
        assert_eq!(args.max_steps, Some(100));
        assert!(args.realtime);
        assert!(args.opcodes.is_none());
    }

    #[test]
    fn everything_is_optional() {
        let args = Args::try_parse_from(["gbcore"]).unwrap();
        assert!(args.load_rom.is_none());
        assert!(!args.realtime);
    }
}
