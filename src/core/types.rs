use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Consumption tax (消費税) standard rate: 10%, applied once at document
/// level. Fixed policy, not configurable.
pub const TAX_RATE: Decimal = dec!(0.10);

/// One billable row of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftItem {
    /// Opaque identifier, unique within the draft's item list. Used only
    /// for stable addressing while editing, never for cross-document
    /// reference.
    pub id: String,
    /// Free text. Unconstrained while editing; must be non-empty to pass
    /// validation.
    pub description: String,
    /// Must be strictly positive to pass validation.
    pub quantity: Decimal,
    /// Must be non-negative to pass validation.
    pub unit_price: Decimal,
    /// Derived: `quantity * unit_price`. Never edited directly — the
    /// ledger recomputes it on every quantity or unit-price change.
    pub amount: Decimal,
}

impl DraftItem {
    /// A fresh empty row: quantity 1, price and amount 0.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            quantity: Decimal::ONE,
            unit_price: Decimal::ZERO,
            amount: Decimal::ZERO,
        }
    }
}

/// A single-field edit to a line item.
///
/// The editable fields are exactly description, quantity, and unit price.
/// `amount` is derived and deliberately has no variant here, so a caller
/// cannot write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEdit {
    Description(String),
    Quantity(Decimal),
    UnitPrice(Decimal),
}

/// Document-level derived amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of all item amounts.
    pub subtotal: Decimal,
    /// `floor(subtotal * 0.10)`.
    pub tax: Decimal,
    /// `subtotal + tax`.
    pub total: Decimal,
}

/// The working copy of an invoice during editing.
///
/// Carries no identity or audit fields — those are stamped at finalize
/// time. The derived fields (`amount` per item, `subtotal`, `tax`,
/// `total`) are owned by the ledger; nothing else may write them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    // Issuer
    /// Issuer company name (会社名).
    pub company_name: String,
    /// Issuer postal address.
    pub company_address: String,
    /// Issuer email; must be syntactically valid at validation time.
    pub company_email: String,

    // Client
    /// Client company name (請求先会社名).
    pub client_company_name: String,
    /// Client contact person (担当者名).
    pub client_contact_name: String,
    /// Client postal address.
    pub client_address: String,
    /// Client email; must be syntactically valid at validation time.
    pub client_email: String,

    // Document
    /// Free text; required but no uniqueness is enforced.
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    /// No ordering constraint against `issue_date` — a due date in the
    /// past of the issue date is accepted.
    pub due_date: NaiveDate,

    /// Ordered line items; display order is insertion order. Never empty
    /// after construction — removal of the last row is refused.
    pub items: Vec<DraftItem>,

    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,

    /// Optional free text (備考).
    pub notes: Option<String>,
}

impl InvoiceDraft {
    /// The document-level derived amounts as one value.
    pub fn totals(&self) -> Totals {
        Totals {
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
        }
    }
}

/// A finalized, validated invoice.
///
/// Produced by [`finalize`](super::finalize); exists only transiently for
/// one validation-and-export call and is never stored by this library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Random identity, assigned at finalize time.
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub company_name: String,
    pub company_address: String,
    pub company_email: String,

    pub client_company_name: String,
    pub client_contact_name: String,
    pub client_address: String,
    pub client_email: String,

    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,

    pub items: Vec<DraftItem>,

    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,

    pub notes: Option<String>,
}
