//! The query boundary: the trigger bracket and error recovery.
//!
//! User interactions and the aggregation query are dispatched sequentially;
//! the only concurrency discipline required is that at most one aggregation
//! is in flight at a time, enforced by disabling the trigger control (not a
//! queue, not a generation counter). The trigger is re-enabled when the
//! query finishes on *every* path, success or failure, so an error can
//! never leave the control dead.
//!
//! Every [`CalcError`] is recovered here and surfaced as a user-visible
//! message; none of them may propagate as a silently wrong total.

use crate::conversion::ConversionTable;
use crate::dataset::DatasetRead;
use crate::errors::CalcError;
use crate::query::{self, QueryResult};
use crate::selection::SelectionState;
use log::warn;
use serde::Serialize;

/// Side effect on the trigger control, for the display surface to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TriggerIntent {
    Disable,
    Enable,
}

/// How one trigger press ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QueryOutcome {
    Completed(QueryResult),
    /// The query was recovered at the boundary; `message` is what the user
    /// sees in place of a total.
    Failed { message: String },
    /// A query was already in flight; nothing was started.
    Busy,
}

/// Guard over the trigger control.
///
/// Hosts that fetch the dataset asynchronously call [`begin`](Self::begin)
/// before starting the fetch and [`finish`](Self::finish) when it settles;
/// [`run_query`] brackets a synchronous query with both. An asynchronous
/// host should pair `begin` with its own timeout: a fetch that never
/// settles would otherwise leave the trigger disabled for good.
#[derive(Debug, Default)]
pub struct QueryTrigger {
    in_flight: bool,
}

impl QueryTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Mark a query as started. Returns the Disable intent, or `None` if a
    /// query is already in flight and nothing may start.
    pub fn begin(&mut self) -> Option<TriggerIntent> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(TriggerIntent::Disable)
    }

    /// Mark the in-flight query as settled. Must be called on success and
    /// on every error path.
    pub fn finish(&mut self) -> TriggerIntent {
        self.in_flight = false;
        TriggerIntent::Enable
    }
}

/// Resolve and aggregate the current selection, bracketed by the trigger
/// guard. The returned intents are applied to the trigger control in order;
/// the outcome carries either the totals or the recovered error message.
pub fn run_query(
    trigger: &mut QueryTrigger,
    state: &SelectionState,
    dataset: &impl DatasetRead,
    conversions: &ConversionTable,
) -> (Vec<TriggerIntent>, QueryOutcome) {
    let Some(disable) = trigger.begin() else {
        return (vec![], QueryOutcome::Busy);
    };

    let result = query::resolve(state)
        .and_then(|plan| query::aggregate(&plan, dataset, conversions));
    let outcome = match result {
        Ok(result) => QueryOutcome::Completed(result),
        Err(err) => {
            warn!("query recovered at trigger boundary: {err}");
            QueryOutcome::Failed {
                message: user_message(&err),
            }
        }
    };

    (vec![disable, trigger.finish()], outcome)
}

fn user_message(err: &CalcError) -> String {
    match err {
        CalcError::IncompleteSelection { .. } => {
            format!("Cannot compute a total yet: {err}.")
        }
        CalcError::DatasetKeyMissing { .. } | CalcError::ConversionMissing { .. } => {
            format!("The underlying data is missing an entry: {err}.")
        }
        CalcError::StaleCatalogReference { .. } => {
            format!("A selection is out of date: {err}. Re-select and try again.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuildingClass;
    use crate::cascade::CascadeController;
    use serde_json::json;

    fn conversions() -> ConversionTable {
        ConversionTable::from_json_str(
            r#"{
                "electricity (grid)": {
                    "site to source conversion": {"2030": 3.0},
                    "CO2 intensity": {"2030": 0.5}
                },
                "natural gas": {
                    "site to source conversion": {"2030": 1.0},
                    "CO2 intensity": {"2030": 0.05}
                },
                "other": {
                    "site to source conversion": {"2030": 1.0},
                    "CO2 intensity": {"2030": 0.07}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn incomplete_selection_is_recovered_and_re_enables_the_trigger() {
        let mut trigger = QueryTrigger::new();
        let state = SelectionState::new();
        let dataset = json!({});

        let (intents, outcome) = run_query(&mut trigger, &state, &dataset, &conversions());
        assert_eq!(intents, vec![TriggerIntent::Disable, TriggerIntent::Enable]);
        assert!(matches!(outcome, QueryOutcome::Failed { .. }));
        assert!(!trigger.is_in_flight());
    }

    #[test]
    fn missing_dataset_entry_is_a_message_not_a_total() {
        let mut controller = CascadeController::new();
        controller.select_building_class(BuildingClass::Residential);
        controller
            .select_climate_zones(vec!["AIA_CZ1".to_string()])
            .unwrap();
        controller
            .select_building_types(vec!["single family home".to_string()])
            .unwrap();
        controller.select_end_use("refrigeration").unwrap();

        let mut trigger = QueryTrigger::new();
        let (_, outcome) = run_query(
            &mut trigger,
            controller.state(),
            &json!({}),
            &conversions(),
        );
        match outcome {
            QueryOutcome::Failed { message } => {
                assert!(message.contains("missing an entry"));
                assert!(message.contains("[AIA_CZ1]"));
            }
            outcome => panic!("expected a failure message, got {outcome:?}"),
        }
    }

    #[test]
    fn a_second_press_while_in_flight_is_busy() {
        let mut trigger = QueryTrigger::new();
        assert_eq!(trigger.begin(), Some(TriggerIntent::Disable));

        let state = SelectionState::new();
        let (intents, outcome) = run_query(&mut trigger, &state, &json!({}), &conversions());
        assert!(intents.is_empty());
        assert_eq!(outcome, QueryOutcome::Busy);

        // The original press eventually settles and re-arms the trigger.
        assert_eq!(trigger.finish(), TriggerIntent::Enable);
        assert!(!trigger.is_in_flight());
    }

    #[test]
    fn successful_query_completes_with_totals() {
        let mut controller = CascadeController::new();
        controller.select_building_class(BuildingClass::Residential);
        controller
            .select_climate_zones(vec!["AIA_CZ1".to_string()])
            .unwrap();
        controller
            .select_building_types(vec!["single family home".to_string()])
            .unwrap();
        controller.select_end_use("ceiling fan").unwrap();

        let dataset = json!({
            "AIA_CZ1": {"single family home": {"electricity (grid)": {
                "ceiling fan": {"energy": {"2030": 40.0}}
            }}}
        });

        let mut trigger = QueryTrigger::new();
        let (intents, outcome) = run_query(
            &mut trigger,
            controller.state(),
            &dataset,
            &conversions(),
        );
        assert_eq!(intents, vec![TriggerIntent::Disable, TriggerIntent::Enable]);
        match outcome {
            QueryOutcome::Completed(result) => {
                assert_eq!(result.total_energy, 120.0);
            }
            outcome => panic!("expected totals, got {outcome:?}"),
        }
    }
}
