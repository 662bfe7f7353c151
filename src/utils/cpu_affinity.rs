//! Thread pinning for stable measurements.
//!
//! On Linux the current thread is pinned with `sched_setaffinity` and the
//! previous mask is restored afterwards. Other platforms get a guard that
//! reports "not pinned" and does nothing.

#[cfg(target_os = "linux")]
mod platform {
    pub type Saved = libc::cpu_set_t;

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu has no preconditions.
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn online_cpus() -> usize {
        // SAFETY: sysconf has no preconditions.
        let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        usize::try_from(n).unwrap_or(0)
    }

    /// Pin to `core`, returning the mask that was active before.
    pub fn pin(core: usize) -> Option<Saved> {
        // SAFETY: the masks are plain-old-data owned by this frame and sized
        // with size_of::<cpu_set_t>().
        unsafe {
            let mut saved: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut saved) != 0 {
                return None;
            }

            let mut target: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut target);
            libc::CPU_SET(core, &mut target);
            if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &target) != 0 {
                return None;
            }
            Some(saved)
        }
    }

    pub fn restore(mask: &Saved) -> bool {
        // SAFETY: `mask` was filled by sched_getaffinity in `pin`.
        unsafe { libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), mask) == 0 }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type Saved = ();

    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn online_cpus() -> usize {
        0
    }
    pub fn pin(_core: usize) -> Option<Saved> {
        None
    }
    pub fn restore(_mask: &Saved) -> bool {
        true
    }
}

/// Number of online CPUs, 0 if unknown.
pub fn online_cpus() -> usize {
    platform::online_cpus()
}

/// RAII guard: pins the thread on creation, restores the old mask on drop.
///
/// ```ignore
/// {
///     let _pin = PinGuard::current(); // thread pinned
///     // ... timed work ...
/// } // previous affinity restored here
/// ```
pub struct PinGuard {
    core: Option<usize>,
    saved: Option<platform::Saved>,
}

impl PinGuard {
    /// Pin to the core the thread is running on, falling back to core 0.
    pub fn current() -> Self {
        let wanted = platform::current_cpu().unwrap_or(0);
        Self::on_core(wanted)
    }

    pub fn on_core(core: usize) -> Self {
        let saved = platform::pin(core);
        Self {
            core: saved.as_ref().map(|_| core),
            saved,
        }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.core
    }

    pub fn is_pinned(&self) -> bool {
        self.core.is_some()
    }
}

impl Drop for PinGuard {
    fn drop(&mut self) {
        if let Some(mask) = self.saved.take() {
            platform::restore(&mask);
        }
    }
}
