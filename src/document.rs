//! Document snapshot read by the resolution layer
//!
//! The persistence layer owns documents; this crate only reads them. The
//! snapshot keeps the submit lifecycle as a closed enum so that a cancelled
//! document is by construction one that was submitted first — the
//! inconsistent "cancelled but never submitted" shape cannot be built.

use uuid7::{Uuid, uuid7};

use super::money::Money;

/// Closed set of document types known to this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
    SalesInvoice,
    PurchaseInvoice,
    Payment,
    JournalEntry,
    StockMovement,
    Item,
    Party,
}

impl DocKind {
    /// Whether this type has a submit/cancel lifecycle beyond plain save.
    pub fn is_submittable(&self) -> bool {
        !matches!(self, DocKind::Item | DocKind::Party)
    }

    /// Invoice-like types carry an outstanding amount and get the
    /// Paid/Unpaid statuses instead of plain Submitted.
    pub fn is_invoice(&self) -> bool {
        matches!(self, DocKind::SalesInvoice | DocKind::PurchaseInvoice)
    }

    /// Intrinsic number-series prefix declared on the schema. Overridden by
    /// a configured default, see [`crate::series::resolve_series`].
    pub fn default_series(&self) -> Option<&'static str> {
        match self {
            DocKind::SalesInvoice => Some("SINV-"),
            DocKind::PurchaseInvoice => Some("PINV-"),
            DocKind::Payment => Some("PAY-"),
            DocKind::JournalEntry => Some("JV-"),
            DocKind::StockMovement => Some("SMOV-"),
            DocKind::Item | DocKind::Party => None,
        }
    }

    /// The schema name as the persistence layer and reports know it.
    pub fn schema_name(&self) -> &'static str {
        match self {
            DocKind::SalesInvoice => "SalesInvoice",
            DocKind::PurchaseInvoice => "PurchaseInvoice",
            DocKind::Payment => "Payment",
            DocKind::JournalEntry => "JournalEntry",
            DocKind::StockMovement => "StockMovement",
            DocKind::Item => "Item",
            DocKind::Party => "Party",
        }
    }
}

/// Submit lifecycle. `Cancelled` implies a prior submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    NotSubmitted,
    Submitted,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    kind: DocKind,
    /// Series-assigned identifier, absent until first persistence.
    name: Option<String>,
    /// In-memory identity for drafts that have no name yet.
    draft_id: Uuid,
    not_inserted: bool,
    dirty: bool,
    submit_state: SubmitState,
    outstanding_amount: Option<Money>,
    stock_not_transferred: bool,
}

impl Document {
    /// A fresh draft: not yet persisted, nothing submitted.
    pub fn draft(kind: DocKind) -> Self {
        Self {
            kind,
            name: None,
            draft_id: uuid7(),
            not_inserted: true,
            dirty: false,
            submit_state: SubmitState::NotSubmitted,
            outstanding_amount: None,
            stock_not_transferred: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Marks the snapshot as persisted under its current name.
    pub fn persisted(mut self) -> Self {
        self.not_inserted = false;
        self.dirty = false;
        self
    }

    pub fn with_dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }

    pub fn with_submit_state(mut self, state: SubmitState) -> Self {
        self.submit_state = state;
        self
    }

    pub fn with_outstanding(mut self, amount: Money) -> Self {
        self.outstanding_amount = Some(amount);
        self
    }

    pub fn with_stock_not_transferred(mut self, pending: bool) -> Self {
        self.stock_not_transferred = pending;
        self
    }

    pub fn kind(&self) -> DocKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn draft_id(&self) -> Uuid {
        self.draft_id
    }

    pub fn not_inserted(&self) -> bool {
        self.not_inserted
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.submit_state, SubmitState::Submitted)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.submit_state, SubmitState::Cancelled)
    }

    pub fn outstanding_amount(&self) -> Option<Money> {
        self.outstanding_amount
    }

    pub fn stock_not_transferred(&self) -> bool {
        self.stock_not_transferred
    }

    // Mutators used by the document store when an action drives the
    // sync-then-submit sequence.

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn mark_synced(&mut self) {
        self.not_inserted = false;
        self.dirty = false;
    }

    pub fn mark_submitted(&mut self) {
        self.submit_state = SubmitState::Submitted;
    }

    pub fn mark_cancelled(&mut self) {
        // only a submitted document can be cancelled
        if self.is_submitted() {
            self.submit_state = SubmitState::Cancelled;
        }
    }
}
