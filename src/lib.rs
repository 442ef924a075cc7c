//! # seikyu
//!
//! Invoice drafting library covering the single-document creation flow:
//! an editing session, a pure line-item ledger with consumption-tax
//! totals, submission-time validation, and single-page PDF export.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Amounts are yen; the 10% consumption tax (消費税) is floored once at
//! document level, never per line.
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use seikyu::core::ItemEdit;
//! use seikyu::session::InvoiceEditor;
//!
//! let mut editor = InvoiceEditor::new();
//! editor.set_company_name("山田商事株式会社");
//! editor.set_company_address("東京都千代田区丸の内1-1-1");
//! editor.set_company_email("billing@yamada.example");
//! editor.set_client_company_name("鈴木工業株式会社");
//! editor.set_client_contact_name("鈴木 一郎");
//! editor.set_client_address("大阪府大阪市北区梅田2-2-2");
//! editor.set_client_email("suzuki@example.co.jp");
//! editor.set_invoice_number("INV-2024-001");
//!
//! editor.update_item(0, ItemEdit::Description("コンサルティング".into()));
//! editor.update_item(0, ItemEdit::Quantity(dec!(2)));
//! editor.update_item(0, ItemEdit::UnitPrice(dec!(5000)));
//!
//! let invoice = editor.finalize().unwrap();
//! assert_eq!(invoice.subtotal, dec!(10000));
//! assert_eq!(invoice.tax, dec!(1000));
//! assert_eq!(invoice.total, dec!(11000));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Draft/invoice types, ledger engine, validation, editing session |
//! | `pdf` | Single-page PDF rendering and atomic file export |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod session;

#[cfg(feature = "pdf")]
pub mod pdf;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
