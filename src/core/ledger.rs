//! Pure line-item ledger arithmetic.
//!
//! Every operation returns a fresh item sequence plus recomputed
//! [`Totals`]; inputs are never mutated.

use rust_decimal::Decimal;

use super::types::{DraftItem, ItemEdit, TAX_RATE, Totals};

/// Recompute document totals over `items`.
///
/// The tax is floored once here, at document level — line items never
/// carry their own tax. Flooring is toward negative infinity, matching
/// the behavior the editing surface has always shown for transient
/// negative subtotals.
pub fn recompute(items: &[DraftItem]) -> Totals {
    let subtotal: Decimal = items.iter().map(|item| item.amount).sum();
    let tax = (subtotal * TAX_RATE).floor();
    Totals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Apply `edit` to the item at `index`.
///
/// Returns a fresh sequence plus recomputed totals; the input is never
/// modified, so a caller can swap its state atomically and no
/// intermediate state is ever observable. Quantity and unit-price edits
/// recompute the item's `amount`; a description edit leaves it alone.
///
/// # Panics
///
/// Panics if `index` is out of range. An invalid index is a caller bug —
/// the editing surface only addresses rows it is displaying.
pub fn update_item(
    items: &[DraftItem],
    index: usize,
    edit: ItemEdit,
) -> (Vec<DraftItem>, Totals) {
    let mut next = items.to_vec();
    let item = &mut next[index];
    match edit {
        ItemEdit::Description(text) => item.description = text,
        ItemEdit::Quantity(quantity) => {
            item.quantity = quantity;
            item.amount = item.quantity * item.unit_price;
        }
        ItemEdit::UnitPrice(price) => {
            item.unit_price = price;
            item.amount = item.quantity * item.unit_price;
        }
    }
    let totals = recompute(&next);
    (next, totals)
}

/// Append a fresh empty row carrying the caller-supplied identifier.
///
/// The new row contributes zero, so the totals are unchanged in value;
/// they are still recomputed so the caller always gets a consistent pair.
pub fn add_item(items: &[DraftItem], id: impl Into<String>) -> (Vec<DraftItem>, Totals) {
    let mut next = items.to_vec();
    next.push(DraftItem::empty(id));
    let totals = recompute(&next);
    (next, totals)
}

/// Remove the item at `index`, refusing to empty the list.
///
/// Returns `None` when exactly one item remains — a draft always keeps at
/// least one row, and callers are expected to disable the action in that
/// state.
///
/// # Panics
///
/// Panics if `index` is out of range and more than one item remains.
pub fn remove_item(items: &[DraftItem], index: usize) -> Option<(Vec<DraftItem>, Totals)> {
    if items.len() <= 1 {
        return None;
    }
    let mut next = items.to_vec();
    next.remove(index);
    let totals = recompute(&next);
    Some((next, totals))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn row(id: &str, quantity: Decimal, unit_price: Decimal) -> DraftItem {
        DraftItem {
            id: id.into(),
            description: format!("row {id}"),
            quantity,
            unit_price,
            amount: quantity * unit_price,
        }
    }

    #[test]
    fn update_recomputes_edited_amount_only() {
        let items = vec![row("1", dec!(2), dec!(500)), row("2", dec!(4), dec!(250))];
        let (next, totals) = update_item(&items, 0, ItemEdit::Quantity(dec!(3)));

        assert_eq!(next[0].amount, dec!(1500));
        assert_eq!(next[1].amount, dec!(1000), "other rows untouched");
        assert_eq!(totals.subtotal, dec!(2500));
        assert_eq!(totals.tax, dec!(250));
        assert_eq!(totals.total, dec!(2750));
        // input sequence is not mutated
        assert_eq!(items[0].amount, dec!(1000));
    }

    #[test]
    fn description_edit_keeps_amount() {
        let items = vec![row("1", dec!(2), dec!(500))];
        let (next, totals) = update_item(&items, 0, ItemEdit::Description("改訂".into()));
        assert_eq!(next[0].description, "改訂");
        assert_eq!(next[0].amount, dec!(1000));
        assert_eq!(totals.subtotal, dec!(1000));
    }

    #[test]
    fn add_item_keeps_totals() {
        let items = vec![row("1", dec!(3), dec!(1000))];
        let before = recompute(&items);
        let (next, totals) = add_item(&items, "2");

        assert_eq!(next.len(), 2);
        assert_eq!(next[1].id, "2");
        assert_eq!(next[1].quantity, dec!(1));
        assert_eq!(next[1].unit_price, dec!(0));
        assert_eq!(next[1].amount, dec!(0));
        assert_eq!(totals, before);
    }

    #[test]
    fn remove_item_refuses_last_row() {
        let items = vec![row("1", dec!(1), dec!(100))];
        assert!(remove_item(&items, 0).is_none());
    }

    #[test]
    fn remove_item_recomputes() {
        let items = vec![row("1", dec!(3), dec!(1000)), row("2", dec!(1), dec!(999))];
        let (next, totals) = remove_item(&items, 0).unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, "2");
        assert_eq!(totals.subtotal, dec!(999));
        assert_eq!(totals.tax, dec!(99));
        assert_eq!(totals.total, dec!(1098));
    }

    #[test]
    fn tax_floors_fractional_subtotal() {
        // 3999 * 0.10 = 399.9 → 399
        let items = vec![row("1", dec!(3), dec!(1000)), row("2", dec!(1), dec!(999))];
        let totals = recompute(&items);
        assert_eq!(totals.subtotal, dec!(3999));
        assert_eq!(totals.tax, dec!(399));
        assert_eq!(totals.total, dec!(4398));
    }

    #[test]
    fn tax_floor_is_toward_negative_infinity() {
        // Editing is unconstrained, so a transiently negative quantity can
        // produce a negative subtotal: -5 * 0.10 = -0.5 → -1.
        let items = vec![row("1", dec!(-1), dec!(5))];
        let totals = recompute(&items);
        assert_eq!(totals.subtotal, dec!(-5));
        assert_eq!(totals.tax, dec!(-1));
        assert_eq!(totals.total, dec!(-6));
    }
}
