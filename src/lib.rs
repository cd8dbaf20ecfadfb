//! Transaction state and financial resolution engine
//!
//! The UI-independent core of a small accounting app: classifies documents
//! into a displayable status, builds the contextual actions of a submitted
//! document (pay, transfer stock, view ledger postings), resolves number
//! series for new documents, and resolves currency exchange rates against a
//! durable local cache with a remote fallback.

pub mod actions;
pub mod document;
pub mod error;
pub mod money;
pub mod rates;
pub mod series;
pub mod status;

pub use actions::{
    Action, ActionKind, ActionOutcome, DocStore, LedgerReport, Localize, Navigator, NoTranslate,
    Route, invoice_actions, ledger_link_action, make_payment_action, make_stock_transfer_action,
};
pub use document::{DocKind, Document, SubmitState};
pub use money::Money;
pub use rates::{
    ExchangeRateResolver, HttpRateSource, MemoryRateCache, RateCache, RateOrigin, RateSource,
    Resolution, SledRateCache,
};
pub use series::{Defaults, resolve_series};
pub use status::{DocStatus, classify};
