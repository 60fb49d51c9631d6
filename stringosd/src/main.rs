//! # StringOS Host Daemon
//!
//! Main entry point for the StringOS host runtime.

use pattern_engine::Algorithm;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;
use stringosd::{ConfigOverrides, HostMode, HostRuntime, HostRuntimeConfig, StopReason};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Parsed command line
#[derive(Debug, Default)]
struct CliArgs {
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("stringosd");

    let cli = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(program);
        process::exit(1);
    });

    let config = load_config(cli).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let quiet = config.quiet;

    let mut runtime = HostRuntime::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to create runtime: {}", e);
        process::exit(1);
    });

    match runtime.run() {
        Ok(reason) => {
            if quiet {
                print!("{}", runtime.screen().render());
            }
            if reason == StopReason::Shutdown {
                eprintln!("StringOS powered off after {} keys", runtime.step_count());
            }
        }
        Err(e) => {
            eprintln!("Runtime error: {}", e);
            process::exit(1);
        }
    }
}

fn load_config(cli: CliArgs) -> Result<HostRuntimeConfig, String> {
    let base = match &cli.config_path {
        Some(path) => HostRuntimeConfig::from_file(path).map_err(|e| e.to_string())?,
        None => HostRuntimeConfig::default(),
    };
    Ok(cli.overrides.apply(base))
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--mode" | "-m" => {
                let value = next_value(args, &mut i, "--mode")?;
                cli.overrides.mode = Some(match value {
                    "sim" => HostMode::Sim,
                    "stdin" => HostMode::Stdin,
                    other => return Err(format!("Invalid mode: {}", other)),
                });
            }
            "--script" | "-s" => {
                let script_path = next_value(args, &mut i, "--script")?;
                let script_text = fs::read_to_string(script_path)
                    .map_err(|e| format!("Failed to read script file: {}", e))?;
                cli.overrides.script = Some(script_text);
            }
            "--config" | "-c" => {
                let path = next_value(args, &mut i, "--config")?;
                cli.config_path = Some(PathBuf::from(path));
            }
            "--boot-byte" => {
                let value = next_value(args, &mut i, "--boot-byte")?;
                cli.overrides.boot_byte = Some(parse_byte(value)?);
            }
            "--algorithm" | "-a" => {
                let value = next_value(args, &mut i, "--algorithm")?;
                let algorithm: Algorithm = value.parse().map_err(|e| format!("{}", e))?;
                cli.overrides.algorithm = Some(algorithm);
            }
            "--max-steps" => {
                let value = next_value(args, &mut i, "--max-steps")?;
                cli.overrides.max_steps = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid max-steps value: {}", value))?,
                );
            }
            "--quiet" | "-q" => {
                cli.overrides.quiet = true;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(cli)
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", flag))
}

fn parse_byte(value: &str) -> Result<u8, String> {
    let parsed = match value.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|_| format!("Invalid boot byte: {}", value))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -m, --mode <MODE>        Host mode: sim (default) or stdin");
    eprintln!("  -s, --script <FILE>      Input script file (for sim mode)");
    eprintln!("  -c, --config <FILE>      JSON configuration file");
    eprintln!("  --boot-byte <N>          Boot configuration byte (1 = naive search)");
    eprintln!("  -a, --algorithm <NAME>   naive or bad-character (overrides --boot-byte)");
    eprintln!("  --max-steps <N>          Maximum keys to process (0 = unlimited)");
    eprintln!("  -q, --quiet              Print only the final screen");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --mode sim --script scripts/demo.keys", program);
    eprintln!("  {} --mode stdin --algorithm naive", program);
    eprintln!();
    eprintln!("Set RUST_LOG=debug for diagnostics on stderr.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("stringosd")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_flags() {
        let cli = parse_args(&args(&[
            "--mode",
            "stdin",
            "--boot-byte",
            "0x01",
            "--max-steps",
            "50",
            "-q",
        ]))
        .unwrap();
        assert_eq!(cli.overrides.mode, Some(HostMode::Stdin));
        assert_eq!(cli.overrides.boot_byte, Some(1));
        assert_eq!(cli.overrides.max_steps, Some(50));
        assert!(cli.overrides.quiet);
        assert!(cli.config_path.is_none());
    }

    #[test]
    fn test_parse_algorithm() {
        let cli = parse_args(&args(&["--algorithm", "bad-character"])).unwrap();
        assert_eq!(cli.overrides.algorithm, Some(Algorithm::BadCharacter));
        assert!(parse_args(&args(&["--algorithm", "kmp"])).is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--mode"])).is_err());
        assert!(parse_args(&args(&["--mode", "hal"])).is_err());
        assert!(parse_args(&args(&["--boot-byte", "256"])).is_err());
        assert!(parse_args(&args(&["--max-steps", "many"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_algorithm_flag_wins_over_boot_byte() {
        let cli = parse_args(&args(&["--algorithm", "bad-character", "--boot-byte", "1"])).unwrap();
        let config = load_config(cli).unwrap();
        assert_eq!(config.effective_algorithm(), Algorithm::BadCharacter);
    }
}
