use thiserror::Error;

/// Error type for invalid operations.
///
/// Every variant is recoverable at the query boundary, where it is turned
/// into a user-visible message rather than a silently wrong total.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("selection is incomplete: no {missing} selected")]
    IncompleteSelection { missing: &'static str },
    #[error("no dataset entry at {path}")]
    DatasetKeyMissing { path: String },
    #[error("'{value}' is not a legal {field} for the current selection")]
    StaleCatalogReference { field: &'static str, value: String },
    #[error("no {series} factor for {fuel} in {year}")]
    ConversionMissing {
        fuel: String,
        series: &'static str,
        year: u16,
    },
}

/// Convenience type for `Result<T, CalcError>`.
pub type CalcResult<T> = Result<T, CalcError>;
