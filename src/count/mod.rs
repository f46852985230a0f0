use std::fs::File;
use std::os::fd::AsRawFd;

use log::{debug, trace};

use crate::config::{attr, Target};
use crate::error::{Error, Result, READ_FAILED};
use crate::event::Hardware;
use crate::ffi::{bindings as b, syscall};

#[cfg(test)]
mod test;

/// A handle owning one kernel hardware performance counter.
///
/// Construction is pure; the kernel resource is acquired by [`start`] and
/// released by [`close`] or on drop, whichever comes first and on every exit
/// path. The handle has no internal locking: all state-changing operations
/// take `&mut self`, so sharing one handle across threads requires external
/// synchronization. Independent handles are fully independent.
///
/// [`start`]: Counter::start
/// [`close`]: Counter::close
#[derive(Debug)]
pub struct Counter {
    target: Target,
    kind: Hardware,
    perf: Option<File>,
}

impl Counter {
    /// Creates an unopened counter scoped to `target`, counting `kind`.
    ///
    /// No kernel interaction happens here and no failure is possible;
    /// [`start`] performs the privileged work.
    ///
    /// [`start`]: Counter::start
    pub fn new(target: impl Into<Target>, kind: Hardware) -> Self {
        Self {
            target: target.into(),
            kind,
            perf: None,
        }
    }

    /// Opens, zeroes and enables the counter.
    ///
    /// `Some(kind)` switches the counted event before opening; `None` keeps
    /// the stored one. Callers holding a raw kernel identifier go through
    /// [`Hardware::from_raw`], so an out-of-range identifier degrades to
    /// `None` and the stored kind is used.
    ///
    /// If the handle was already started, the previous counter is closed
    /// before the new one is opened; re-arming never accumulates on top of
    /// the old value and never leaks the old descriptor.
    ///
    /// No counting happens before this returns: the counter opens disabled,
    /// is reset, then enabled. If any of the three steps fails the handle is
    /// left unopened and [`Error::Unavailable`] carries the OS cause.
    pub fn start(&mut self, kind: impl Into<Option<Hardware>>) -> Result<()> {
        if let Some(kind) = kind.into() {
            self.kind = kind;
        }

        // Close-before-reopen, so a re-start cannot leak the old fd.
        self.perf = None;

        let attr = attr::from(self.kind);
        let perf = syscall!(
            perf_event_open,
            &attr,
            self.target.pid,
            self.target.cpu,
            -1,
            b::PERF_FLAG_FD_CLOEXEC,
        )
        .map_err(Error::Unavailable)?;

        syscall!(ioctl, &perf, b::PERF_IOC_OP_RESET).map_err(Error::Unavailable)?;
        syscall!(ioctl, &perf, b::PERF_IOC_OP_ENABLE).map_err(Error::Unavailable)?;

        trace!(
            "armed counter fd {} ({:?}, pid {}, cpu {})",
            perf.as_raw_fd(),
            self.kind,
            self.target.pid,
            self.target.cpu,
        );
        self.perf = Some(perf);

        Ok(())
    }

    /// Freezes the counter and returns the accumulated event count.
    ///
    /// The counter is left disabled: a second `read` without an intervening
    /// [`start`] or [`enable`] returns the same frozen value. Resume with
    /// [`enable`] to keep accumulating, or [`start`] to begin a fresh count.
    ///
    /// Fails with [`Error::NotStarted`] when no counter is open. If the open
    /// counter cannot deliver a value, [`READ_FAILED`] is returned instead of
    /// an error and the OS cause is logged.
    ///
    /// [`start`]: Counter::start
    /// [`enable`]: Counter::enable
    pub fn read(&mut self) -> Result<i64> {
        let perf = self.perf.as_ref().ok_or(Error::NotStarted)?;

        if let Err(e) = syscall!(ioctl, perf, b::PERF_IOC_OP_DISABLE) {
            debug!("counter freeze failed: {}", e);
            return Ok(READ_FAILED);
        }

        let mut buf = [0u8; 8];
        match syscall!(read, perf, &mut buf) {
            Ok(bytes) if bytes == buf.len() => Ok(i64::from_ne_bytes(buf)),
            Ok(bytes) => {
                debug!("short counter read: {} of {} bytes", bytes, buf.len());
                Ok(READ_FAILED)
            }
            Err(e) => {
                debug!("counter read failed: {}", e);
                Ok(READ_FAILED)
            }
        }
    }

    /// Resumes accumulation on a frozen counter without re-opening it.
    pub fn enable(&mut self) -> Result<()> {
        let perf = self.perf.as_ref().ok_or(Error::NotStarted)?;
        syscall!(ioctl, perf, b::PERF_IOC_OP_ENABLE).map_err(Error::Unavailable)?;
        Ok(())
    }

    /// Stops accumulation without reading the value.
    pub fn disable(&mut self) -> Result<()> {
        let perf = self.perf.as_ref().ok_or(Error::NotStarted)?;
        syscall!(ioctl, perf, b::PERF_IOC_OP_DISABLE).map_err(Error::Unavailable)?;
        Ok(())
    }

    /// Zeroes the accumulated count.
    pub fn reset(&mut self) -> Result<()> {
        let perf = self.perf.as_ref().ok_or(Error::NotStarted)?;
        syscall!(ioctl, perf, b::PERF_IOC_OP_RESET).map_err(Error::Unavailable)?;
        Ok(())
    }

    /// Releases the kernel resource, if one is held.
    ///
    /// Idempotent: closing an unopened or already-closed handle is a no-op
    /// and issues no kernel call. Dropping the handle has the same effect.
    pub fn close(&mut self) {
        if let Some(perf) = self.perf.take() {
            trace!("closing counter fd {}", perf.as_raw_fd());
        }
    }

    /// The PID this counter is scoped to (0 = calling process).
    pub fn pid(&self) -> i32 {
        self.target.pid
    }

    /// The CPU this counter is scoped to (-1 = all CPUs).
    pub fn cpu(&self) -> i32 {
        self.target.cpu
    }

    /// The event kind counted by the next (or current) armed counter.
    pub fn kind(&self) -> Hardware {
        self.kind
    }

    /// Whether a counter is currently open.
    pub fn is_started(&self) -> bool {
        self.perf.is_some()
    }
}
