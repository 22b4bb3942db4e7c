//! Stack growth for nested literals.
//!
//! A literal like `[[[[...]]]]` nests as deep as the user types it. Both the
//! literal parser and the deep size walker recurse once per nesting level, so
//! each recursive step runs inside [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate grows the stack on demand. On WASM
//! the closure is called directly.

/// Grow when less than this much stack remains (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn parse_expr(&mut self) -> Result<Value, LiteralError> {
///     ensure_sufficient_stack(|| self.parse_expr_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
