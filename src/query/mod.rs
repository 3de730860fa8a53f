//! The aggregation query engine.
//!
//! [`resolve`] turns a completed [`SelectionState`](crate::selection::SelectionState)
//! into a [`QueryPlan`] describing exactly which dataset paths and conversion
//! rules apply; [`aggregate`] walks the plan's cross-product against an
//! injected dataset and produces the energy and CO2 totals.

mod aggregator;
mod resolver;

pub use aggregator::{aggregate, QueryResult};
pub use resolver::{resolve, FuelStep, QueryPlan};
