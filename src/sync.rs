//! Lock used to serialize actions on a table.
//!
//! With `std` this is [`std::sync::Mutex`] with poisoning ignored, since the
//! guarded value is only ever swapped whole. Without `std` it is a spin lock.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;

pub struct Mutex<T>(Inner<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    #[cfg(feature = "std")]
    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> spin::MutexGuard<'_, T> {
        self.0.lock()
    }

    /// Computes a replacement from the current value under the lock, stores
    /// it, and returns the side result.
    pub fn transition<R>(&self, f: impl FnOnce(&T) -> (T, R)) -> R {
        let mut guard = self.lock();
        let (next, out) = f(&*guard);
        *guard = next;
        out
    }
}
