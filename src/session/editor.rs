use chrono::{Local, NaiveDate};

use crate::core::{
    self, DraftItem, Invoice, InvoiceDraft, ItemEdit, SeikyuError, Totals,
};

/// The owner of one in-progress invoice draft.
///
/// One editor per editing session: create it when the form opens, drop it
/// when the user leaves or completes the flow. All arithmetic goes through
/// the ledger and all validation through [`finalize`](Self::finalize), so
/// the draft satisfies the derived-field invariants at every point a
/// caller can observe it. The presentation layer reads via
/// [`draft`](Self::draft) and writes only through the setters here.
#[derive(Debug, Clone)]
pub struct InvoiceEditor {
    draft: InvoiceDraft,
    /// Monotonically increasing item-id source. Never reset within a
    /// session, so ids stay unique even after rows are removed and
    /// re-added.
    next_item_id: u64,
}

impl InvoiceEditor {
    /// A fresh session: empty header fields, today's dates, one empty row.
    pub fn new() -> Self {
        Self::starting_on(Local::now().date_naive())
    }

    /// A fresh session with both dates set to `date`. Useful for tests
    /// and for callers that pin "today" themselves.
    pub fn starting_on(date: NaiveDate) -> Self {
        let items = vec![DraftItem::empty("1")];
        let totals = core::recompute(&items);
        Self {
            draft: InvoiceDraft {
                company_name: String::new(),
                company_address: String::new(),
                company_email: String::new(),
                client_company_name: String::new(),
                client_contact_name: String::new(),
                client_address: String::new(),
                client_email: String::new(),
                invoice_number: String::new(),
                issue_date: date,
                due_date: date,
                items,
                subtotal: totals.subtotal,
                tax: totals.tax,
                total: totals.total,
                notes: None,
            },
            next_item_id: 2,
        }
    }

    /// Read access to the working copy.
    pub fn draft(&self) -> &InvoiceDraft {
        &self.draft
    }

    pub fn set_company_name(&mut self, value: impl Into<String>) {
        self.draft.company_name = value.into();
    }

    pub fn set_company_address(&mut self, value: impl Into<String>) {
        self.draft.company_address = value.into();
    }

    pub fn set_company_email(&mut self, value: impl Into<String>) {
        self.draft.company_email = value.into();
    }

    pub fn set_client_company_name(&mut self, value: impl Into<String>) {
        self.draft.client_company_name = value.into();
    }

    pub fn set_client_contact_name(&mut self, value: impl Into<String>) {
        self.draft.client_contact_name = value.into();
    }

    pub fn set_client_address(&mut self, value: impl Into<String>) {
        self.draft.client_address = value.into();
    }

    pub fn set_client_email(&mut self, value: impl Into<String>) {
        self.draft.client_email = value.into();
    }

    pub fn set_invoice_number(&mut self, value: impl Into<String>) {
        self.draft.invoice_number = value.into();
    }

    pub fn set_issue_date(&mut self, date: NaiveDate) {
        self.draft.issue_date = date;
    }

    /// No ordering constraint against the issue date is enforced.
    pub fn set_due_date(&mut self, date: NaiveDate) {
        self.draft.due_date = date;
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.draft.notes = notes;
    }

    /// Apply a single-field edit to the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range — the presentation layer only
    /// edits rows it is displaying.
    pub fn update_item(&mut self, index: usize, edit: ItemEdit) {
        let (items, totals) = core::update_item(&self.draft.items, index, edit);
        self.apply(items, totals);
    }

    /// Append an empty row. Its identifier comes from the session-wide
    /// counter, so ids never repeat even after removals.
    pub fn add_item(&mut self) {
        let id = self.next_item_id.to_string();
        self.next_item_id += 1;
        let (items, totals) = core::add_item(&self.draft.items, id);
        self.apply(items, totals);
    }

    /// Whether removal is currently allowed. Presentation layers use this
    /// to disable the remove action when one row remains.
    pub fn can_remove_item(&self) -> bool {
        self.draft.items.len() > 1
    }

    /// Remove the row at `index`. Returns `false` and leaves the draft
    /// untouched when only one row remains.
    pub fn remove_item(&mut self, index: usize) -> bool {
        match core::remove_item(&self.draft.items, index) {
            Some((items, totals)) => {
                self.apply(items, totals);
                true
            }
            None => false,
        }
    }

    /// Stamp identity and audit fields and validate the draft into a
    /// finalized [`Invoice`].
    ///
    /// The draft is preserved unchanged either way: on failure the user
    /// corrects fields and resubmits, on success the session can keep
    /// editing (e.g. to export again with a new invoice number).
    pub fn finalize(&self) -> Result<Invoice, SeikyuError> {
        core::finalize(&self.draft)
    }

    fn apply(&mut self, items: Vec<DraftItem>, totals: Totals) {
        self.draft.items = items;
        self.draft.subtotal = totals.subtotal;
        self.draft.tax = totals.tax;
        self.draft.total = totals.total;
    }
}

impl Default for InvoiceEditor {
    fn default() -> Self {
        Self::new()
    }
}
