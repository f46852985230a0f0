use std::hint::black_box;

use super::Counter;
use crate::config::{Cpu, Proc};
use crate::error::Error;
use crate::event::Hardware;

fn current_proc(kind: Hardware) -> Counter {
    Counter::new((Proc::CURRENT, Cpu::ALL), kind)
}

// Counter access is commonly denied (perf_event_paranoid, containers,
// missing PMU). Tests that need a live counter skip when the environment
// refuses one.
fn try_start(counter: &mut Counter) -> bool {
    match counter.start(None) {
        Ok(()) => true,
        Err(Error::Unavailable(_)) => false,
        Err(e) => panic!("unexpected start error: {}", e),
    }
}

fn busy_work() -> usize {
    fn fib(n: usize) -> usize {
        match n {
            0 => 0,
            1 => 1,
            n => fib(n - 1) + fib(n - 2),
        }
    }
    black_box(fib(black_box(20)))
}

#[test]
fn test_read_before_start() {
    let mut counter = current_proc(Hardware::Instr);
    assert!(matches!(counter.read(), Err(Error::NotStarted)));
}

#[test]
fn test_ops_before_start() {
    let mut counter = current_proc(Hardware::Instr);
    assert!(matches!(counter.enable(), Err(Error::NotStarted)));
    assert!(matches!(counter.disable(), Err(Error::NotStarted)));
    assert!(matches!(counter.reset(), Err(Error::NotStarted)));
}

#[test]
fn test_close_is_idempotent() {
    let mut counter = current_proc(Hardware::Instr);
    counter.close();
    counter.close();
    assert!(!counter.is_started());

    if try_start(&mut counter) {
        assert!(counter.is_started());
        counter.close();
        counter.close();
        assert!(!counter.is_started());
        assert!(matches!(counter.read(), Err(Error::NotStarted)));
    }
}

#[test]
fn test_out_of_range_kind_keeps_stored() {
    let mut counter = current_proc(Hardware::CpuCycle);

    // 255 is not a kernel hardware event identifier, so `from_raw` yields
    // `None` and the stored kind must survive, started or not.
    let _ = counter.start(Hardware::from_raw(255));
    assert_eq!(counter.kind(), Hardware::CpuCycle);

    let _ = counter.start(Hardware::from_raw(-1));
    assert_eq!(counter.kind(), Hardware::CpuCycle);
}

#[test]
fn test_start_overrides_kind() {
    let mut counter = current_proc(Hardware::CpuCycle);
    let _ = counter.start(Hardware::Instr);
    assert_eq!(counter.kind(), Hardware::Instr);
}

#[test]
fn test_failed_start_leaves_handle_unopened() {
    // PID i32::MAX cannot exist (beyond pid_max), so the open fails no
    // matter how permissive the environment is.
    let mut counter = Counter::new((Proc(i32::MAX as u32), Cpu::ALL), Hardware::Instr);
    assert!(matches!(counter.start(None), Err(Error::Unavailable(_))));
    assert!(!counter.is_started());
    assert!(matches!(counter.read(), Err(Error::NotStarted)));
}

#[test]
fn test_all_kinds_read_non_negative() {
    for raw in 0..=9 {
        let kind = Hardware::from_raw(raw).unwrap();
        let mut counter = current_proc(kind);
        if !try_start(&mut counter) {
            continue;
        }
        let value = counter.read().unwrap();
        assert!(value >= 0, "{:?} read {}", kind, value);
    }
}

#[test]
fn test_counts_instructions_and_freezes() {
    let mut counter = current_proc(Hardware::Instr);
    if !try_start(&mut counter) {
        return;
    }

    busy_work();

    let first = counter.read().unwrap();
    assert!(first > 0, "expected instructions retired, got {}", first);

    // Read freezes the counter: more work must not change the value.
    busy_work();
    let second = counter.read().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_enable_resumes_frozen_counter() {
    let mut counter = current_proc(Hardware::Instr);
    if !try_start(&mut counter) {
        return;
    }

    busy_work();
    let frozen = counter.read().unwrap();

    counter.enable().unwrap();
    busy_work();
    let resumed = counter.read().unwrap();
    assert!(resumed > frozen, "{} should exceed {}", resumed, frozen);
}

#[test]
fn test_restart_begins_fresh_count() {
    let mut counter = current_proc(Hardware::Instr);
    if !try_start(&mut counter) {
        return;
    }

    busy_work();
    busy_work();
    let long_run = counter.read().unwrap();

    counter.start(None).unwrap();
    let fresh = counter.read().unwrap();
    assert!(fresh < long_run, "{} should restart below {}", fresh, long_run);
}

#[test]
fn test_handles_are_independent() {
    let mut first = current_proc(Hardware::Instr);
    let mut second = current_proc(Hardware::Instr);
    if !try_start(&mut first) || !try_start(&mut second) {
        return;
    }

    busy_work();

    // Freezing the first handle must not stop the second.
    let first_value = first.read().unwrap();
    busy_work();
    let second_value = second.read().unwrap();

    assert!(first_value > 0);
    assert!(second_value > first_value);
}

#[cfg(target_os = "linux")]
#[test]
fn test_restart_does_not_leak_fds() {
    fn open_fds() -> usize {
        std::fs::read_dir("/proc/self/fd").unwrap().count()
    }

    let mut counter = current_proc(Hardware::Instr);
    if !try_start(&mut counter) {
        return;
    }

    let before = open_fds();
    for _ in 0..16 {
        counter.start(None).unwrap();
    }
    assert_eq!(open_fds(), before);
}
