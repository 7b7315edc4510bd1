/// Owned platform resource that can be released exactly once.
///
/// Releasing drops the inner value; later calls are no-ops, so teardown can
/// run from both an explicit shutdown and `Drop`.
#[derive(Debug)]
pub struct PlatformHandle<T> {
    inner: Option<T>,
}

impl<T> PlatformHandle<T> {
    pub fn new(value: T) -> Self {
        Self { inner: Some(value) }
    }

    pub fn get(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    pub fn is_live(&self) -> bool {
        self.inner.is_some()
    }

    /// Drops the resource. Returns `true` only on the call that released it.
    pub fn release(&mut self) -> bool {
        self.inner.take().is_some()
    }
}
