//! Status classification for transactional documents
//!
//! Status is never stored. Every call recomputes it from the persistence and
//! submission flags, so the displayed state cannot drift from the stored
//! flags. The rules are ordered by business priority: unsaved edits always
//! win over whatever the persisted flags say.

use super::document::{Document, SubmitState};

/// Displayable document status. One of these holds for any document at any
/// observation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocStatus {
    /// Safe default for an absent document (unrendered rows).
    Empty,
    Draft,
    NotSaved,
    Saved,
    Submitted,
    Cancelled,
    Unpaid,
    Paid,
}

impl DocStatus {
    pub const ALL: [DocStatus; 8] = [
        DocStatus::Empty,
        DocStatus::Draft,
        DocStatus::NotSaved,
        DocStatus::Saved,
        DocStatus::Submitted,
        DocStatus::Cancelled,
        DocStatus::Unpaid,
        DocStatus::Paid,
    ];

    /// Badge color for this status. Kept total over the enum in lock-step
    /// with [`DocStatus::label`].
    pub fn color(&self) -> &'static str {
        match self {
            DocStatus::Empty => "gray",
            DocStatus::Draft => "gray",
            DocStatus::NotSaved => "gray",
            DocStatus::Saved => "gray",
            DocStatus::Submitted => "green",
            DocStatus::Cancelled => "red",
            DocStatus::Unpaid => "orange",
            DocStatus::Paid => "green",
        }
    }

    /// Display label key. Callers render it through their localization
    /// function; the key doubles as the English label.
    pub fn label(&self) -> &'static str {
        match self {
            DocStatus::Empty => "",
            DocStatus::Draft => "Draft",
            DocStatus::NotSaved => "Not Saved",
            DocStatus::Saved => "Saved",
            DocStatus::Submitted => "Submitted",
            DocStatus::Cancelled => "Cancelled",
            DocStatus::Unpaid => "Unpaid",
            DocStatus::Paid => "Paid",
        }
    }
}

/// Derives the displayable status of a document. Pure; first matching rule
/// wins.
pub fn classify(doc: Option<&Document>) -> DocStatus {
    let Some(doc) = doc else {
        return DocStatus::Empty;
    };

    if doc.not_inserted() {
        return DocStatus::Draft;
    }

    if doc.dirty() {
        return DocStatus::NotSaved;
    }

    if !doc.kind().is_submittable() {
        return DocStatus::Saved;
    }

    classify_submittable(doc)
}

fn classify_submittable(doc: &Document) -> DocStatus {
    if doc.kind().is_invoice() {
        return classify_invoice(doc);
    }

    match doc.submit_state() {
        SubmitState::Submitted => DocStatus::Submitted,
        SubmitState::Cancelled => DocStatus::Cancelled,
        SubmitState::NotSubmitted => DocStatus::Saved,
    }
}

fn classify_invoice(doc: &Document) -> DocStatus {
    let outstanding = doc.outstanding_amount().unwrap_or_default();

    match doc.submit_state() {
        SubmitState::Submitted if outstanding.is_zero() => DocStatus::Paid,
        SubmitState::Submitted if outstanding.is_positive() => DocStatus::Unpaid,
        SubmitState::Cancelled => DocStatus::Cancelled,
        _ => DocStatus::Saved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocKind;
    use crate::money::Money;

    #[test]
    fn absent_document_is_empty() {
        assert_eq!(classify(None), DocStatus::Empty);
    }

    #[test]
    fn unpersisted_document_is_draft() {
        let doc = Document::draft(DocKind::SalesInvoice);
        assert_eq!(classify(Some(&doc)), DocStatus::Draft);
    }

    #[test]
    fn dirty_overrides_submitted() {
        let doc = Document::draft(DocKind::SalesInvoice)
            .with_name("SINV-1001")
            .persisted()
            .with_submit_state(SubmitState::Submitted)
            .with_outstanding(Money::zero())
            .with_dirty(true);
        assert_eq!(classify(Some(&doc)), DocStatus::NotSaved);
    }

    #[test]
    fn non_submittable_is_saved() {
        let doc = Document::draft(DocKind::Item).with_name("Pen").persisted();
        assert_eq!(classify(Some(&doc)), DocStatus::Saved);
    }

    #[test]
    fn settled_invoice_is_paid() {
        let doc = Document::draft(DocKind::PurchaseInvoice)
            .with_name("PINV-1001")
            .persisted()
            .with_submit_state(SubmitState::Submitted)
            .with_outstanding(Money::zero());
        assert_eq!(classify(Some(&doc)), DocStatus::Paid);
    }

    #[test]
    fn outstanding_invoice_is_unpaid() {
        let doc = Document::draft(DocKind::SalesInvoice)
            .with_name("SINV-1002")
            .persisted()
            .with_submit_state(SubmitState::Submitted)
            .with_outstanding("450.00".parse().unwrap());
        assert_eq!(classify(Some(&doc)), DocStatus::Unpaid);
    }

    #[test]
    fn cancelled_invoice_is_cancelled_regardless_of_outstanding() {
        let doc = Document::draft(DocKind::SalesInvoice)
            .with_name("SINV-1003")
            .persisted()
            .with_submit_state(SubmitState::Cancelled)
            .with_outstanding("450.00".parse().unwrap());
        assert_eq!(classify(Some(&doc)), DocStatus::Cancelled);
    }

    #[test]
    fn submitted_journal_entry_is_submitted() {
        let doc = Document::draft(DocKind::JournalEntry)
            .with_name("JV-1001")
            .persisted()
            .with_submit_state(SubmitState::Submitted);
        assert_eq!(classify(Some(&doc)), DocStatus::Submitted);
    }

    #[test]
    fn color_and_label_cover_every_status() {
        // the two tables must stay in lock-step with the enum
        for status in DocStatus::ALL {
            assert!(!status.color().is_empty());
            if status != DocStatus::Empty {
                assert!(!status.label().is_empty());
            }
        }
        assert_eq!(DocStatus::Paid.color(), "green");
        assert_eq!(DocStatus::Unpaid.color(), "orange");
        assert_eq!(DocStatus::Cancelled.color(), "red");
    }
}
