use gbcore::CpuError;
use gbcore_runner::{run, IllegalOpcodePolicy, RunConfig, Runner, StopReason};

/// Send `byte` over the serial port: LD A,d8; LDH (SB),A; LD A,0x81; LDH (SC),A.
fn serial_out(byte: u8) -> [u8; 8] {
    [0x3E, byte, 0xE0, 0x01, 0x3E, 0x81, 0xE0, 0x02]
}

#[test]
fn serial_output_is_captured_until_self_loop() {
    let mut image = Vec::new();
    image.extend_from_slice(&serial_out(b'o'));
    image.extend_from_slice(&serial_out(b'k'));
    image.extend_from_slice(&[0x18, 0xFE]);

    let report = run(RunConfig::default(), &image).unwrap();
    assert_eq!(report.serial, b"ok");
    assert_eq!(report.serial_text(), "ok");
    assert_eq!(report.stop, StopReason::SelfLoop { address: 0x0110 });
    // Eight LD A,d8 / LDH pairs plus the final JR.
    assert_eq!(report.steps, 9);
    assert_eq!(report.cycles, 4 * (8 + 12) + 12);
}

#[test]
fn illegal_opcode_fails_by_default() {
    let err = run(RunConfig::default(), &[0x00, 0xDD]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<CpuError>(),
        Some(&CpuError::IllegalOpcode {
            opcode: 0xDD,
            address: 0x0101
        })
    );
}

#[test]
fn illegal_opcode_can_be_skipped() {
    let config = RunConfig::builder()
        .illegal_policy(IllegalOpcodePolicy::Skip)
        .build();
    let report = run(config, &[0xDD, 0x3C, 0x18, 0xFE]).unwrap();

    assert_eq!(report.illegal_skipped, 1);
    assert_eq!(report.registers.a, 0x02);
    assert_eq!(report.stop, StopReason::SelfLoop { address: 0x0102 });
}

#[test]
fn step_limit_bounds_the_run() {
    let config = RunConfig::builder().step_limit(100).build();
    let report = run(config, &[0x00; 4]).unwrap();

    assert_eq!(report.stop, StopReason::StepLimit);
    assert_eq!(report.steps, 100);
    assert_eq!(report.cycles, 400);
}

#[test]
fn interrupt_handler_runs_and_returns() {
    // Enable and request TIMER, EI, then spin.
    let main = [
        0x3E, 0x04, 0xE0, 0xFF, // IE = TIMER
        0x3E, 0x04, 0xE0, 0x0F, // IF = TIMER
        0xFB, 0x00, // EI; NOP
        0x18, 0xFE, // JR $
    ];
    let mut image = vec![0u8; 0x0200];
    image[0x0050..0x0058].copy_from_slice(&serial_out(b'T'));
    image[0x0058] = 0xD9; // RETI
    image[0x0100..0x0100 + main.len()].copy_from_slice(&main);

    let config = RunConfig::builder()
        .load_address(0x0000)
        .entry(0x0100)
        .build();
    let report = run(config, &image).unwrap();

    assert_eq!(report.serial, b"T");
    assert_eq!(report.stop, StopReason::SelfLoop { address: 0x010A });
    assert_eq!(report.registers.sp, 0xFFFE);
}

#[test]
fn halt_without_enabled_interrupts_ends_the_run() {
    let report = run(RunConfig::default(), &[0x76]).unwrap();
    assert_eq!(report.stop, StopReason::HaltedForever);
    assert_eq!(report.registers.pc, 0x0101);
}

#[test]
fn stop_ends_the_run() {
    let report = run(RunConfig::default(), &[0x10, 0x00]).unwrap();
    assert_eq!(report.stop, StopReason::Stopped);
}

#[test]
fn cold_start_zeroes_registers() {
    let config = RunConfig::builder().boot_state(false).build();
    let runner = Runner::new(config, &[0x18, 0xFE]).unwrap();
    let regs = runner.cpu().regs;
    assert_eq!(regs.af(), 0);
    assert_eq!(regs.sp, 0);
    assert_eq!(regs.pc, 0x0100);
}

#[test]
fn oversized_image_is_rejected() {
    let config = RunConfig::builder().load_address(0xFF00).build();
    assert!(Runner::new(config, &[0u8; 0x200]).is_err());
}
