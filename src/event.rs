use crate::ffi::bindings as b;

/// Hardware event kind, one per kernel `PERF_COUNT_HW_*` identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hardware {
    CpuCycle,
    Instr,
    CacheAccess,
    CacheMiss,
    BranchInstr,
    BranchMiss,
    BusCycle,
    FrontendStalledCycle,
    BackendStalledCycle,
    RefCpuCycle,
}

impl Hardware {
    /// Converts a raw kernel event identifier to an event kind.
    ///
    /// Accepts exactly the identifiers the kernel enumerates (0 through 9);
    /// anything else yields `None`. Whether the PMU actually implements an
    /// accepted kind is for the kernel to decide at open time.
    pub fn from_raw(raw: i64) -> Option<Self> {
        let kind = match raw as u64 {
            b::PERF_COUNT_HW_CPU_CYCLES => Hardware::CpuCycle,
            b::PERF_COUNT_HW_INSTRUCTIONS => Hardware::Instr,
            b::PERF_COUNT_HW_CACHE_REFERENCES => Hardware::CacheAccess,
            b::PERF_COUNT_HW_CACHE_MISSES => Hardware::CacheMiss,
            b::PERF_COUNT_HW_BRANCH_INSTRUCTIONS => Hardware::BranchInstr,
            b::PERF_COUNT_HW_BRANCH_MISSES => Hardware::BranchMiss,
            b::PERF_COUNT_HW_BUS_CYCLES => Hardware::BusCycle,
            b::PERF_COUNT_HW_STALLED_CYCLES_FRONTEND => Hardware::FrontendStalledCycle,
            b::PERF_COUNT_HW_STALLED_CYCLES_BACKEND => Hardware::BackendStalledCycle,
            b::PERF_COUNT_HW_REF_CPU_CYCLES => Hardware::RefCpuCycle,
            _ => return None,
        };
        Some(kind)
    }

    /// The kernel event identifier for this kind.
    pub fn raw(self) -> u64 {
        match self {
            Hardware::CpuCycle => b::PERF_COUNT_HW_CPU_CYCLES,
            Hardware::Instr => b::PERF_COUNT_HW_INSTRUCTIONS,
            Hardware::CacheAccess => b::PERF_COUNT_HW_CACHE_REFERENCES,
            Hardware::CacheMiss => b::PERF_COUNT_HW_CACHE_MISSES,
            Hardware::BranchInstr => b::PERF_COUNT_HW_BRANCH_INSTRUCTIONS,
            Hardware::BranchMiss => b::PERF_COUNT_HW_BRANCH_MISSES,
            Hardware::BusCycle => b::PERF_COUNT_HW_BUS_CYCLES,
            Hardware::FrontendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_FRONTEND,
            Hardware::BackendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_BACKEND,
            Hardware::RefCpuCycle => b::PERF_COUNT_HW_REF_CPU_CYCLES,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Hardware;

    #[test]
    fn from_raw_covers_known_kinds() {
        for raw in 0..=9 {
            let kind = Hardware::from_raw(raw).unwrap();
            assert_eq!(kind.raw(), raw as u64);
        }
    }

    #[test]
    fn from_raw_rejects_out_of_range() {
        assert_eq!(Hardware::from_raw(-1), None);
        assert_eq!(Hardware::from_raw(10), None);
        assert_eq!(Hardware::from_raw(255), None);
        assert_eq!(Hardware::from_raw(i64::MIN), None);
    }
}
