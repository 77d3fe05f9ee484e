//! Step-generation engine for sortproof.
//!
//! Instead of just sorting, each engine records the intermediate states of
//! a classical sort as a numbered list of frames, in the way a textbook
//! derivation walks through each step. Frames that would look identical to
//! the one before are collapsed.
//!
//! # Components
//!
//! | Module | Role |
//! |--------|------|
//! | [`comparable_key`] / [`precedes`] | Token text to ordering key; order-aware comparison |
//! | [`StepDescriptor`] | One frame: tokens, marker, exchanged pair, iteration label |
//! | [`StepRecorder`] | Append-only frame list with consecutive de-duplication |
//! | [`run_algorithm`] | Dispatch to the insertion, selection or bubble engine |
//!
//! # Example
//!
//! ```
//! use sortproof_engine::run_algorithm;
//! use sortproof_types::{Algorithm, Order, TokenList};
//!
//! let values = TokenList::try_from(&["C", "A", "B"][..])?;
//! let trace = run_algorithm(values, Order::Ascending, Algorithm::Bubble);
//!
//! for (n, step) in trace.steps().iter().enumerate() {
//!     println!("Step {}: {}", n + 1, step);
//! }
//! assert_eq!(trace.lines()[2], "A B (C) -> Iteration 1");
//! # Ok::<(), sortproof_types::EmptyTokenList>(())
//! ```

mod engine;
mod key;
mod recorder;
mod sequence;
mod step;
mod working;

pub use engine::run_algorithm;
pub use key::{comparable_key, precedes, Key};
pub use recorder::StepRecorder;
pub use sequence::{RunStats, StepSequence};
pub use step::{CellRole, Exchange, Marker, StepDescriptor};
pub use working::WorkingArray;
