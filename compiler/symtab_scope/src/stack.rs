//! Stack safety for recursive scope-tree walks.
//!
//! Scope trees built from generated or deeply nested source can be far
//! deeper than the default thread stack allows for recursive rendering.
//! Native targets grow the stack on demand with `stacker`; WASM manages its
//! own stack.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    let _ = (RED_ZONE, STACK_PER_RECURSION);
    f()
}
