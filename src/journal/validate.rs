use thiserror::Error;

use crate::models::{EntryType, JournalEntry};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,
    #[error("trading pair is required")]
    MissingPair,
    #[error("{0} is required for technical entries")]
    MissingField(&'static str),
    #[error("{0} must be positive")]
    NonPositive(&'static str),
}

/// Check an entry against the journal's form rules before it is persisted.
///
/// Simple entries only need a title. Technical entries also need a pair and
/// positive trade fields; exit price and result stay optional so open trades
/// can be logged before they resolve.
pub fn validate_entry(entry: &JournalEntry) -> Result<(), ValidationError> {
    if entry.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }

    if entry.entry_type == EntryType::Simple {
        return Ok(());
    }

    match &entry.pair {
        Some(pair) if !pair.trim().is_empty() => {}
        _ => return Err(ValidationError::MissingPair),
    }

    require_positive("entry_price", entry.entry_price)?;
    require_positive("stop_loss", entry.stop_loss)?;
    require_positive("take_profit", entry.take_profit)?;
    require_positive("lot_size", entry.lot_size)?;

    if let Some(exit) = entry.exit_price {
        if exit <= 0.0 {
            return Err(ValidationError::NonPositive("exit_price"));
        }
    }

    Ok(())
}

fn require_positive(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        None => Err(ValidationError::MissingField(field)),
        Some(v) if v > 0.0 => Ok(()),
        Some(_) => Err(ValidationError::NonPositive(field)),
    }
}
