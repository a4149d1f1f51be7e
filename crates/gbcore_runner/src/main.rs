use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use gbcore_runner::{IllegalOpcodePolicy, RunConfig, StopReason};

const USAGE: &str = "Usage: gbcore_runner <image> [--load ADDR] [--entry ADDR] [--steps N] \
                     [--skip-illegal] [--no-boot] [--trace]";

fn parse_addr(value: Option<String>, flag: &str) -> Result<u16> {
    let value = value.with_context(|| format!("{flag} expects an address"))?;
    let digits = value.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(digits, 16).with_context(|| format!("invalid {flag} address '{value}'"))
}

fn parse_args() -> Result<(PathBuf, RunConfig)> {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next().map(PathBuf::from) else {
        bail!("{USAGE}");
    };

    let mut config = RunConfig::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--load" => config.load_address = parse_addr(args.next(), "--load")?,
            "--entry" => config.entry = Some(parse_addr(args.next(), "--entry")?),
            "--steps" => {
                let value = args.next().context("--steps expects a number")?;
                config.step_limit = value
                    .parse()
                    .with_context(|| format!("invalid step count '{value}'"))?;
            }
            "--skip-illegal" => config.illegal_policy = IllegalOpcodePolicy::Skip,
            "--no-boot" => config.boot_state = false,
            "--trace" => config.trace = true,
            other => bail!("unknown argument '{other}'\n{USAGE}"),
        }
    }
    Ok((path, config))
}

fn main() -> Result<()> {
    env_logger::init();

    let (path, config) = parse_args()?;
    let image = std::fs::read(&path)
        .with_context(|| format!("failed to read image '{}'", path.display()))?;

    let report = gbcore_runner::run(config, &image)?;

    if !report.serial.is_empty() {
        println!("{}", report.serial_text());
    }
    let regs = report.registers;
    println!(
        "{:?} after {} steps ({} cycles, {} illegal skipped)",
        report.stop, report.steps, report.cycles, report.illegal_skipped
    );
    println!(
        "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X}",
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl(),
        regs.sp,
        regs.pc
    );

    if report.stop == StopReason::StepLimit {
        std::process::exit(1);
    }
    Ok(())
}
