/// Two-phase release guard
///
/// Cleanup runs exactly once per guard: either through the explicit
/// `release()` call or, if the caller skipped it, through the Drop fallback.
/// The guard owns the "already released" flag; resources only supply the
/// extension point and cannot bypass or re-enter the once-only discipline.
use log::{debug, warn};

/// Extension point for releasable resources.
///
/// `on_release` is invoked exactly once per guard. `explicit` is true when
/// reached via [`ReleaseGuard::release`], false when reached from the Drop
/// fallback. Implementors tear down whatever they hold; the guard decides
/// whether the call happens at all.
pub trait Releasable {
    fn on_release(&mut self, explicit: bool);
}

/// Scoped-acquisition wrapper with an idempotent explicit release and a
/// guaranteed Drop fallback invoking the same internal path.
///
/// `release()` checks-and-sets the released flag before doing any real
/// work, so calling it repeatedly is a no-op after the first call, and a
/// later drop will not re-run cleanup.
pub struct ReleaseGuard<T: Releasable> {
    inner: T,
    released: bool,
}

impl<T: Releasable> ReleaseGuard<T> {
    /// Acquire the resource under guard
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            released: false,
        }
    }

    /// Release the resource. Idempotent: subsequent calls are no-ops.
    pub fn release(&mut self) {
        self.do_release(true);
    }

    /// Whether release has already run (explicitly or via drop)
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Access the wrapped resource
    pub fn get(&self) -> &T {
        &self.inner
    }

    /// Mutable access to the wrapped resource
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Single release path shared by release() and Drop.
    /// The flag is set before on_release runs, so a re-entrant or repeated
    /// call can never reach the extension point twice.
    fn do_release(&mut self, explicit: bool) {
        if self.released {
            debug!("Release already performed, skipping");
            return;
        }
        self.released = true;
        self.inner.on_release(explicit);
    }
}

impl<T: Releasable> Drop for ReleaseGuard<T> {
    fn drop(&mut self) {
        self.do_release(false);
    }
}

/// Demo resource holding nothing real.
///
/// Exists to exercise the two-phase pattern: the release body only logs
/// which path fired. A real resource would close handles or remove
/// artifacts here.
#[derive(Debug, Default)]
pub struct InertResource;

impl Releasable for InertResource {
    fn on_release(&mut self, explicit: bool) {
        if explicit {
            debug!("Inert resource released explicitly");
        } else {
            warn!("Inert resource released by drop fallback; caller skipped release()");
        }
    }
}
