//! Contextual actions for submitted documents
//!
//! Actions bundle a label, a visibility predicate over document state, and an
//! invocation. Invoking a hidden action is a no-op, never an error; this
//! layer sits directly under list-view rendering and must not crash on stale
//! document state. Collaborators (persistence, navigation, localization) are
//! injected as traits and implemented elsewhere.

use super::document::Document;

/// Localization seam. The key doubles as the English label.
pub trait Localize {
    fn t(&self, key: &str) -> String;
}

/// Identity localization for tests and unlocalized sessions.
pub struct NoTranslate;

impl Localize for NoTranslate {
    fn t(&self, key: &str) -> String {
        key.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerReport {
    GeneralLedger,
    StockLedger,
}

impl LedgerReport {
    pub fn report_name(&self) -> &'static str {
        match self {
            LedgerReport::GeneralLedger => "GeneralLedger",
            LedgerReport::StockLedger => "StockLedger",
        }
    }
}

/// Navigation request to a ledger report filtered down to one document's
/// postings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub report: LedgerReport,
    pub reference_type: String,
    pub reference_name: String,
}

pub trait Navigator {
    fn push(&mut self, route: Route);
}

/// Document persistence collaborator. Deriving a sub-document returns `None`
/// when nothing is derivable, which is a valid terminal state.
pub trait DocStore {
    fn derive_payment(&self, invoice: &Document) -> Option<Document>;
    fn derive_stock_transfer(&self, invoice: &Document) -> Option<Document>;
    fn sync(&mut self, doc: &mut Document) -> anyhow::Result<()>;
    fn submit(&mut self, doc: &mut Document) -> anyhow::Result<()>;
}

/// Fields of a derived payment that are computed, not chosen, and so are
/// hidden from the editor.
pub const PAYMENT_HIDDEN_FIELDS: &[&str] = &["party", "paymentType", "for"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    MakePayment,
    MakeStockTransfer,
    LedgerLink(LedgerReport),
}

/// What an invocation did, reported back to the calling surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Hidden action, or nothing derivable. Not an error.
    Nothing,
    Navigated(Route),
    OpenedEditor {
        doc: Document,
        hidden_fields: Vec<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    label: String,
    kind: ActionKind,
}

impl Action {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn is_visible(&self, doc: &Document) -> bool {
        match self.kind {
            ActionKind::MakePayment => {
                doc.is_submitted()
                    && doc.outstanding_amount().is_some_and(|amt| !amt.is_zero())
            }
            ActionKind::MakeStockTransfer => doc.is_submitted() && doc.stock_not_transferred(),
            ActionKind::LedgerLink(_) => doc.is_submitted(),
        }
    }

    /// Runs the action against `doc`. Inert when the visibility predicate
    /// does not hold. Never mutates `doc` itself; the payment flow mutates
    /// only the derived payment, through the store.
    pub fn invoke(
        &self,
        doc: &Document,
        store: &mut dyn DocStore,
        nav: &mut dyn Navigator,
    ) -> anyhow::Result<ActionOutcome> {
        if !self.is_visible(doc) {
            return Ok(ActionOutcome::Nothing);
        }

        match self.kind {
            ActionKind::MakePayment => {
                let Some(mut payment) = store.derive_payment(doc) else {
                    return Ok(ActionOutcome::Nothing);
                };

                // The payment must be durably saved before submission so it
                // is never submitted without an identity. Sync strictly
                // precedes submit, once each.
                store.sync(&mut payment)?;
                store.submit(&mut payment)?;

                Ok(ActionOutcome::OpenedEditor {
                    doc: payment,
                    hidden_fields: PAYMENT_HIDDEN_FIELDS.to_vec(),
                })
            }
            ActionKind::MakeStockTransfer => {
                let Some(transfer) = store.derive_stock_transfer(doc) else {
                    // no transferable stock is a valid terminal state
                    return Ok(ActionOutcome::Nothing);
                };

                Ok(ActionOutcome::OpenedEditor {
                    doc: transfer,
                    hidden_fields: Vec::new(),
                })
            }
            ActionKind::LedgerLink(report) => {
                let route = Route {
                    report,
                    reference_type: doc.kind().schema_name().to_string(),
                    reference_name: doc.name().unwrap_or_default().to_string(),
                };
                nav.push(route.clone());
                Ok(ActionOutcome::Navigated(route))
            }
        }
    }
}

pub fn make_payment_action(loc: &dyn Localize) -> Action {
    Action {
        label: loc.t("Make Payment"),
        kind: ActionKind::MakePayment,
    }
}

pub fn make_stock_transfer_action(loc: &dyn Localize) -> Action {
    Action {
        label: loc.t("Make Stock Transfer"),
        kind: ActionKind::MakeStockTransfer,
    }
}

pub fn ledger_link_action(loc: &dyn Localize, is_stock: bool) -> Action {
    let (label, report) = if is_stock {
        ("Stock Entries", LedgerReport::StockLedger)
    } else {
        ("Ledger Entries", LedgerReport::GeneralLedger)
    };

    Action {
        label: loc.t(label),
        kind: ActionKind::LedgerLink(report),
    }
}

/// The contextual actions of an invoice, in display order.
pub fn invoice_actions(loc: &dyn Localize) -> Vec<Action> {
    vec![
        make_payment_action(loc),
        make_stock_transfer_action(loc),
        ledger_link_action(loc, false),
    ]
}
