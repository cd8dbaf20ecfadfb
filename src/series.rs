//! Number series resolution for new documents
//!
//! A document type maps to a configuration key in the global defaults store;
//! the user-configured series under that key wins over the series prefix
//! declared on the schema itself. Types without a configuration key do not
//! use numbered identifiers at all.

use std::collections::HashMap;

use super::document::DocKind;

/// The defaults-store key holding the configured series for a type, if the
/// type uses numbered identifiers.
pub fn number_series_key(kind: DocKind) -> Option<&'static str> {
    match kind {
        DocKind::SalesInvoice => Some("salesInvoiceNumberSeries"),
        DocKind::PurchaseInvoice => Some("purchaseInvoiceNumberSeries"),
        DocKind::Payment => Some("paymentNumberSeries"),
        DocKind::JournalEntry => Some("journalEntryNumberSeries"),
        DocKind::StockMovement => Some("stockMovementNumberSeries"),
        DocKind::Item | DocKind::Party => None,
    }
}

/// Global per-type defaults, as configured by the user.
#[derive(Debug, Clone, Default)]
pub struct Defaults {
    entries: HashMap<String, String>,
}

impl Defaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, series: impl Into<String>) {
        self.entries.insert(key.into(), series.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

/// Resolves the series a new document of `kind` should draw its name from.
/// `None` means the type does not use numbered identifiers.
pub fn resolve_series(kind: DocKind, defaults: &Defaults) -> Option<String> {
    let key = number_series_key(kind)?;

    if let Some(configured) = defaults.get(key) {
        return Some(configured.to_string());
    }

    kind.default_series().map(str::to_string)
}
