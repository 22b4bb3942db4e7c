//! Memory measurement for memlab.
//!
//! Given one probe value, build the seven derived forms and measure each one
//! twice:
//!
//! - **shallow**: the inline [`Value`](memlab_value::Value) slot plus the allocation the form owns
//!   directly (string buffer, element array, entry array).
//! - **deep**: the inline slot plus every allocation reachable from the form,
//!   each counted once by address.
//!
//! ```text
//! value ──► forms::build(shape) ──► shallow_size / deep_size ──► Row
//!                    │
//!                    └── NotApplicable ────────────────────────► Row
//! ```
//!
//! Measurement never fails: a form that cannot be built is reported as a
//! not-applicable row.

mod forms;
mod report;
mod size;

pub use forms::{build_form, integer_cast, NotApplicable, Shape, MAP_VALUE_KEY};
pub use report::{
    fixed_sizes, inspect, inspect_with, truncate_display, FixedSizes, Outcome, Report, Row,
};
pub use size::{deep_size, shallow_size, DeepSizer, ARC_HEADER, SLOT_SIZE};
