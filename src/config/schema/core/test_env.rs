use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Serialize every test that touches `STRAINER_*` variables. A test that
/// panicked while holding the lock does not block the rest.
pub(super) fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One environment variable pinned for the life of the guard, then put back.
pub(super) struct ScopedVar {
    name: &'static str,
    saved: Option<String>,
}

impl ScopedVar {
    pub(super) fn set(name: &'static str, value: &str) -> Self {
        let saved = std::env::var(name).ok();
        // SAFETY: callers hold `env_lock()`, so no other test reads or writes
        // the environment concurrently.
        unsafe { std::env::set_var(name, value) };
        Self { name, saved }
    }

    pub(super) fn cleared(name: &'static str) -> Self {
        let saved = std::env::var(name).ok();
        // SAFETY: as in `set`.
        unsafe { std::env::remove_var(name) };
        Self { name, saved }
    }
}

impl Drop for ScopedVar {
    fn drop(&mut self) {
        // SAFETY: guards drop before the `env_lock()` guard taken earlier in
        // the same test.
        match self.saved.take() {
            Some(value) => unsafe { std::env::set_var(self.name, value) },
            None => unsafe { std::env::remove_var(self.name) },
        }
    }
}

#[test]
fn scoped_var_puts_previous_value_back() {
    let _lock = env_lock();
    let _outer = ScopedVar::set("STRAINER_TEST_SCOPED", "outer");
    {
        let _inner = ScopedVar::set("STRAINER_TEST_SCOPED", "inner");
        assert_eq!(std::env::var("STRAINER_TEST_SCOPED").as_deref(), Ok("inner"));
    }
    assert_eq!(std::env::var("STRAINER_TEST_SCOPED").as_deref(), Ok("outer"));
    {
        let _gone = ScopedVar::cleared("STRAINER_TEST_SCOPED");
        assert!(std::env::var("STRAINER_TEST_SCOPED").is_err());
    }
    assert_eq!(std::env::var("STRAINER_TEST_SCOPED").as_deref(), Ok("outer"));
}
