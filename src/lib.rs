//! Safe handle for one Linux hardware performance counter.
//!
//! The kernel does all the heavy lifting (PMU arbitration, counter
//! multiplexing); this crate only opens a counter fd via the
//! `perf_event_open` system call, arms it, and reads back one 64-bit value.
//! Counters measure user-space activity only: kernel-mode and
//! hypervisor-mode samples are excluded at open time.
//!
//! ## Example
//!
//! Count how many instructions the (inefficient) fibonacci calculation
//! retires on the current process.
//!
//! ```rust
//! use perf_counter::config::{Cpu, Proc};
//! use perf_counter::count::Counter;
//! use perf_counter::event::Hardware;
//!
//! // Retired instructions on the current process, any CPU.
//! let mut counter = Counter::new((Proc::CURRENT, Cpu::ALL), Hardware::Instr);
//!
//! if counter.start(None).is_ok() {
//!     fn fib(n: usize) -> usize {
//!         match n {
//!             0 => 0,
//!             1 => 1,
//!             n => fib(n - 1) + fib(n - 2),
//!         }
//!     }
//!     std::hint::black_box(fib(30));
//!
//!     // Freezes the counter and returns the accumulated count.
//!     let instrs = counter.read().unwrap();
//!     println!("{} instructions retired", instrs);
//! }
//! ```
//!
//! The counter fd is released when the handle goes out of scope, however
//! that happens; [`Counter::close`] releases it earlier.
//!
//! [`Counter::close`]: count::Counter::close

pub mod config;
pub mod count;
pub mod error;
pub mod event;
mod ffi;
