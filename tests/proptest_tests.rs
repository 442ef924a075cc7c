//! Property-based tests over the editing session.
//!
//! Run with: `cargo test --test proptest_tests`

use std::collections::HashSet;

use proptest::prelude::*;
use rust_decimal::Decimal;
use seikyu::core::{ItemEdit, TAX_RATE};
use seikyu::session::InvoiceEditor;

/// One user-level editing action. Indices are raw and reduced modulo the
/// current row count when applied.
#[derive(Debug, Clone)]
enum Op {
    Describe(usize, String),
    Quantity(usize, Decimal),
    UnitPrice(usize, Decimal),
    Add,
    Remove(usize),
}

fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (1i64..=1000).prop_map(Decimal::from)
}

fn arb_price() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(Decimal::from)
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<usize>(), "[a-zA-Z0-9 ]{0,16}").prop_map(|(i, s)| Op::Describe(i, s)),
        (any::<usize>(), arb_quantity()).prop_map(|(i, q)| Op::Quantity(i, q)),
        (any::<usize>(), arb_price()).prop_map(|(i, p)| Op::UnitPrice(i, p)),
        Just(Op::Add),
        any::<usize>().prop_map(Op::Remove),
    ]
}

fn apply(editor: &mut InvoiceEditor, op: Op) {
    let len = editor.draft().items.len();
    match op {
        Op::Describe(i, s) => editor.update_item(i % len, ItemEdit::Description(s)),
        Op::Quantity(i, q) => editor.update_item(i % len, ItemEdit::Quantity(q)),
        Op::UnitPrice(i, p) => editor.update_item(i % len, ItemEdit::UnitPrice(p)),
        Op::Add => editor.add_item(),
        Op::Remove(i) => {
            let _ = editor.remove_item(i % len);
        }
    }
}

proptest! {
    /// After every single operation, every derived field matches its
    /// formula and the item list is never empty.
    #[test]
    fn derived_fields_stay_consistent(ops in proptest::collection::vec(arb_op(), 1..40)) {
        let mut editor = InvoiceEditor::new();
        for op in ops {
            apply(&mut editor, op);

            let draft = editor.draft();
            prop_assert!(!draft.items.is_empty());
            for item in &draft.items {
                prop_assert_eq!(item.amount, item.quantity * item.unit_price);
            }
            let subtotal: Decimal = draft.items.iter().map(|i| i.amount).sum();
            prop_assert_eq!(draft.subtotal, subtotal);
            prop_assert_eq!(draft.tax, (subtotal * TAX_RATE).floor());
            prop_assert_eq!(draft.total, draft.subtotal + draft.tax);
        }
    }

    /// Adding a row never moves the totals.
    #[test]
    fn add_never_changes_totals(ops in proptest::collection::vec(arb_op(), 0..20)) {
        let mut editor = InvoiceEditor::new();
        for op in ops {
            apply(&mut editor, op);
        }
        let before = editor.draft().totals();
        editor.add_item();
        prop_assert_eq!(editor.draft().totals(), before);
    }

    /// Item identifiers stay unique across any sequence of adds and
    /// removes.
    #[test]
    fn item_ids_stay_unique(ops in proptest::collection::vec(arb_op(), 1..60)) {
        let mut editor = InvoiceEditor::new();
        for op in ops {
            apply(&mut editor, op);

            let ids: HashSet<&str> =
                editor.draft().items.iter().map(|i| i.id.as_str()).collect();
            prop_assert_eq!(ids.len(), editor.draft().items.len());
        }
    }
}
