//! Byte sizes of values under the Rust memory model.
//!
//! Every value occupies one inline slot of [`SLOT_SIZE`] bytes. Heap-backed
//! values additionally own one `Arc` allocation: the reference counters, the
//! `String`/`Vec` header and the buffer capacity behind it.

use std::mem::size_of;

use memlab_stack::ensure_sufficient_stack;
use memlab_value::Value;
use rustc_hash::FxHashSet;

/// Inline size of any value.
pub const SLOT_SIZE: usize = size_of::<Value>();

/// Strong and weak counters at the head of every `Arc` allocation.
pub const ARC_HEADER: usize = 2 * size_of::<usize>();

/// Bytes of the allocation `value` owns directly; zero for scalars.
fn own_size(value: &Value) -> usize {
    match value {
        Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) => 0,
        Value::Str(text) => ARC_HEADER + size_of::<String>() + text.capacity(),
        Value::List(items) | Value::Tuple(items) | Value::Set(items) => {
            ARC_HEADER + size_of::<Vec<Value>>() + items.capacity() * SLOT_SIZE
        }
        Value::Map(entries) => {
            ARC_HEADER
                + size_of::<Vec<(Value, Value)>>()
                + entries.capacity() * size_of::<(Value, Value)>()
        }
    }
}

/// Allocation identity of a heap-backed value.
fn allocation(value: &Value) -> Option<usize> {
    match value {
        Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) => None,
        Value::Str(text) => Some(text.addr()),
        Value::List(items) | Value::Tuple(items) | Value::Set(items) => Some(items.addr()),
        Value::Map(entries) => Some(entries.addr()),
    }
}

/// Inline slot plus the value's own allocation, ignoring what it references.
pub fn shallow_size(value: &Value) -> usize {
    SLOT_SIZE + own_size(value)
}

/// Inline slot plus every reachable allocation, each counted once.
pub fn deep_size(value: &Value) -> usize {
    DeepSizer::new().measure(value)
}

/// Deep size walker that remembers the allocations it has counted.
///
/// Reusing one sizer across several values counts allocations they share
/// only once, so later measurements can come out smaller than
/// [`deep_size`] would report for the same value.
#[derive(Debug, Default)]
pub struct DeepSizer {
    seen: FxHashSet<usize>,
}

impl DeepSizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot of `value` plus every allocation not yet counted by this sizer.
    pub fn measure(&mut self, value: &Value) -> usize {
        SLOT_SIZE + self.reach(value)
    }

    fn reach(&mut self, value: &Value) -> usize {
        ensure_sufficient_stack(|| self.reach_inner(value))
    }

    fn reach_inner(&mut self, value: &Value) -> usize {
        let Some(addr) = allocation(value) else {
            return 0;
        };
        if !self.seen.insert(addr) {
            return 0;
        }

        // Child slots are already part of the owning buffer.
        let children: usize = match value {
            Value::List(items) | Value::Tuple(items) | Value::Set(items) => {
                items.iter().map(|item| self.reach(item)).sum()
            }
            Value::Map(entries) => entries
                .iter()
                .map(|(key, val)| self.reach(key) + self.reach(val))
                .sum(),
            _ => 0,
        };
        own_size(value) + children
    }
}
