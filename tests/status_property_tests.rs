//! Property-based tests for the status classifier
//!
//! The classifier's rules are universally quantified ("for all documents
//! with notInserted, status is Draft"), which makes them a natural fit for
//! proptest: generate documents across the whole flag space and check the
//! laws hold everywhere, not just on hand-picked cases.

use proptest::prelude::*;
use rust_decimal::Decimal;

use books_core::document::{DocKind, Document, SubmitState};
use books_core::money::Money;
use books_core::status::{DocStatus, classify};

// STRATEGIES

fn kind_strategy() -> impl Strategy<Value = DocKind> {
    prop_oneof![
        Just(DocKind::SalesInvoice),
        Just(DocKind::PurchaseInvoice),
        Just(DocKind::Payment),
        Just(DocKind::JournalEntry),
        Just(DocKind::StockMovement),
        Just(DocKind::Item),
        Just(DocKind::Party),
    ]
}

fn submit_state_strategy() -> impl Strategy<Value = SubmitState> {
    prop_oneof![
        Just(SubmitState::NotSubmitted),
        Just(SubmitState::Submitted),
        Just(SubmitState::Cancelled),
    ]
}

/// Outstanding amounts in cents, zero included.
fn money_strategy() -> impl Strategy<Value = Money> {
    (0i64..=10_000_000).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Strictly positive outstanding amounts in cents.
fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (1i64..=10_000_000).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

fn document_strategy() -> impl Strategy<Value = Document> {
    (
        kind_strategy(),
        any::<bool>(),
        any::<bool>(),
        submit_state_strategy(),
        money_strategy(),
    )
        .prop_map(|(kind, inserted, dirty, submit_state, outstanding)| {
            let mut doc = Document::draft(kind);
            if inserted {
                doc = doc.with_name("DOC-0001").persisted().with_dirty(dirty);
            }
            doc.with_submit_state(submit_state)
                .with_outstanding(outstanding)
        })
}

// CLASSIFIER LAWS

proptest! {
    /// Unpersisted documents are always Draft, whatever the other fields say.
    #[test]
    fn unpersisted_is_always_draft(
        kind in kind_strategy(),
        submit_state in submit_state_strategy(),
        outstanding in money_strategy(),
    ) {
        let doc = Document::draft(kind)
            .with_submit_state(submit_state)
            .with_outstanding(outstanding);
        prop_assert_eq!(classify(Some(&doc)), DocStatus::Draft);
    }

    /// Unsaved edits always display as NotSaved, even on submitted docs.
    #[test]
    fn dirty_is_always_not_saved(
        kind in kind_strategy(),
        submit_state in submit_state_strategy(),
        outstanding in money_strategy(),
    ) {
        let doc = Document::draft(kind)
            .with_name("DOC-0001")
            .persisted()
            .with_dirty(true)
            .with_submit_state(submit_state)
            .with_outstanding(outstanding);
        prop_assert_eq!(classify(Some(&doc)), DocStatus::NotSaved);
    }

    /// A clean, submitted invoice with zero outstanding is Paid.
    #[test]
    fn settled_submitted_invoice_is_paid(invoice_kind in prop_oneof![
        Just(DocKind::SalesInvoice),
        Just(DocKind::PurchaseInvoice),
    ]) {
        let doc = Document::draft(invoice_kind)
            .with_name("INV-0001")
            .persisted()
            .with_submit_state(SubmitState::Submitted)
            .with_outstanding(Money::zero());
        prop_assert_eq!(classify(Some(&doc)), DocStatus::Paid);
    }

    /// A clean, submitted invoice with a positive outstanding is Unpaid.
    #[test]
    fn outstanding_submitted_invoice_is_unpaid(
        invoice_kind in prop_oneof![
            Just(DocKind::SalesInvoice),
            Just(DocKind::PurchaseInvoice),
        ],
        outstanding in positive_money_strategy(),
    ) {
        let doc = Document::draft(invoice_kind)
            .with_name("INV-0001")
            .persisted()
            .with_submit_state(SubmitState::Submitted)
            .with_outstanding(outstanding);
        prop_assert_eq!(classify(Some(&doc)), DocStatus::Unpaid);
    }

    /// A cancelled invoice is Cancelled no matter the outstanding amount.
    #[test]
    fn cancelled_invoice_is_cancelled(
        invoice_kind in prop_oneof![
            Just(DocKind::SalesInvoice),
            Just(DocKind::PurchaseInvoice),
        ],
        outstanding in money_strategy(),
    ) {
        let doc = Document::draft(invoice_kind)
            .with_name("INV-0001")
            .persisted()
            .with_submit_state(SubmitState::Cancelled)
            .with_outstanding(outstanding);
        prop_assert_eq!(classify(Some(&doc)), DocStatus::Cancelled);
    }

    /// Clean persisted non-submittable documents are always plain Saved.
    #[test]
    fn non_submittable_is_saved(
        kind in prop_oneof![Just(DocKind::Item), Just(DocKind::Party)],
        outstanding in money_strategy(),
    ) {
        let doc = Document::draft(kind)
            .with_name("DOC-0001")
            .persisted()
            .with_outstanding(outstanding);
        prop_assert_eq!(classify(Some(&doc)), DocStatus::Saved);
    }

    /// Classification is total and the display tables cover every result.
    #[test]
    fn every_document_classifies_and_renders(doc in document_strategy()) {
        let status = classify(Some(&doc));
        prop_assert!(DocStatus::ALL.contains(&status));
        prop_assert!(!status.color().is_empty());
        // only the absent-document status has an empty label
        if status != DocStatus::Empty {
            prop_assert!(!status.label().is_empty());
        }
    }

    /// A persisted document never classifies as Draft or Empty.
    #[test]
    fn persisted_is_never_draft(doc in document_strategy()) {
        prop_assume!(!doc.not_inserted());
        let status = classify(Some(&doc));
        prop_assert_ne!(status, DocStatus::Draft);
        prop_assert_ne!(status, DocStatus::Empty);
    }
}
