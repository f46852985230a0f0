use crate::event::Hardware;
use crate::ffi::{bindings as b, Attr};

/// Builds the open-time attribute for one hardware counter.
///
/// The counter starts disabled and counts user-space activity only
/// (kernel-mode and hypervisor-mode samples excluded), so nothing
/// accumulates before the caller enables it.
pub(crate) fn from(kind: Hardware) -> Attr {
    let mut attr = Attr {
        size: size_of::<Attr>() as _,
        ..Default::default()
    };

    attr.type_ = b::PERF_TYPE_HARDWARE;
    attr.config = kind.raw();
    attr.flags = b::PERF_ATTR_FLAG_DISABLED
        | b::PERF_ATTR_FLAG_EXCLUDE_KERNEL
        | b::PERF_ATTR_FLAG_EXCLUDE_HV;

    attr
}
