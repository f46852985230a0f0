//! Hand-written bindings for the slice of the perf ABI this crate touches.
//!
//! Layout follows `include/uapi/linux/perf_event.h`. Only the leading fields
//! of `perf_event_attr` are ever set; the trailing ones exist so `size`
//! reports a value the kernel accepts.

#![allow(dead_code)]

pub const PERF_TYPE_HARDWARE: u32 = 0;

// Hardware event identifiers (enum perf_hw_id).
pub const PERF_COUNT_HW_CPU_CYCLES: u64 = 0;
pub const PERF_COUNT_HW_INSTRUCTIONS: u64 = 1;
pub const PERF_COUNT_HW_CACHE_REFERENCES: u64 = 2;
pub const PERF_COUNT_HW_CACHE_MISSES: u64 = 3;
pub const PERF_COUNT_HW_BRANCH_INSTRUCTIONS: u64 = 4;
pub const PERF_COUNT_HW_BRANCH_MISSES: u64 = 5;
pub const PERF_COUNT_HW_BUS_CYCLES: u64 = 6;
pub const PERF_COUNT_HW_STALLED_CYCLES_FRONTEND: u64 = 7;
pub const PERF_COUNT_HW_STALLED_CYCLES_BACKEND: u64 = 8;
pub const PERF_COUNT_HW_REF_CPU_CYCLES: u64 = 9;

// attr flag bits. The kernel declares these as a bitfield; on every
// supported little-endian target bit N is (1 << N).
pub const PERF_ATTR_FLAG_DISABLED: u64 = 1 << 0;
pub const PERF_ATTR_FLAG_EXCLUDE_KERNEL: u64 = 1 << 5;
pub const PERF_ATTR_FLAG_EXCLUDE_HV: u64 = 1 << 6;

pub const PERF_FLAG_FD_CLOEXEC: u64 = 1 << 3;

// PERF_EVENT_IOC_* are _IO('$', n): direction=IOC_NONE, type='$'=0x24,
// nr=n, size=0, which encodes to 0x2400 | n on x86_64 and aarch64.
pub const PERF_IOC_OP_ENABLE: u64 = 0x2400;
pub const PERF_IOC_OP_DISABLE: u64 = 0x2401;
pub const PERF_IOC_OP_RESET: u64 = 0x2403;

/// `struct perf_event_attr`, sized as of `PERF_ATTR_SIZE_VER7` (Linux 5.16).
///
/// The kernel accepts any size it knows as long as every field beyond what
/// the caller understands is zero, which `Default` guarantees here.
#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct perf_event_attr {
    pub type_: u32,
    pub size: u32,
    pub config: u64,
    pub sample_period_or_freq: u64,
    pub sample_type: u64,
    pub read_format: u64,
    pub flags: u64,
    pub wakeup_events_or_watermark: u32,
    pub bp_type: u32,
    pub bp_addr_or_config1: u64,
    pub bp_len_or_config2: u64,
    pub branch_sample_type: u64,
    pub sample_regs_user: u64,
    pub sample_stack_user: u32,
    pub clockid: i32,
    pub sample_regs_intr: u64,
    pub aux_watermark: u32,
    pub sample_max_stack: u16,
    pub __reserved_2: u16,
    pub aux_sample_size: u32,
    pub __reserved_3: u32,
    pub sig_data: u64,
}
