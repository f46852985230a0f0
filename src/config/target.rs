/// Measure on every CPU, or every process, depending on position.
#[derive(Clone, Copy, Debug)]
pub struct All;

/// A single CPU, by index.
#[derive(Clone, Copy, Debug)]
pub struct Cpu(pub u32);

impl Cpu {
    pub const ALL: All = All;
}

/// A process, by PID.
#[derive(Clone, Copy, Debug)]
pub struct Proc(pub u32);

impl Proc {
    /// The calling process (kernel convention: pid 0).
    pub const CURRENT: Proc = Proc(0);
}

/// Resolved measurement scope as the kernel takes it: a `(pid, cpu)` pair
/// where `-1` means "all". The pair is passed through to `perf_event_open`
/// uninterpreted.
#[derive(Clone, Copy, Debug)]
pub struct Target {
    pub(crate) pid: i32,
    pub(crate) cpu: i32,
}

macro_rules! into_target {
    ($ty: ty, $destruct: tt, $pid: expr, $cpu: expr) => {
        impl From<$ty> for Target {
            fn from($destruct: $ty) -> Self {
                Target {
                    pid: $pid as _,
                    cpu: $cpu as _,
                }
            }
        }
    };
}

into_target!((Proc, Cpu), (Proc(pid), Cpu(cpu)), pid, cpu);
into_target!((Cpu, Proc), (Cpu(cpu), Proc(pid)), pid, cpu);

into_target!((Proc, All), (Proc(pid), _), pid, -1);
into_target!((All, Proc), (_, Proc(pid)), pid, -1);

into_target!((Cpu, All), (Cpu(cpu), _), -1, cpu);
into_target!((All, Cpu), (_, Cpu(cpu)), -1, cpu);

// `(All, All)` is not a valid scope: the kernel rejects pid == -1 with
// cpu == -1, so no conversion is offered for it.
