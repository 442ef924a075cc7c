//! Submission-time validation and finalization.
//!
//! Validation is a pure check: it reads a draft, reports every offending
//! field, and mutates nothing. Messages are the user-facing Japanese
//! strings the form surfaces inline.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::error::{FieldError, SeikyuError};
use super::types::{DraftItem, Invoice, InvoiceDraft};

/// Validate a draft against the submission rules.
///
/// Returns all errors found (not just the first); an empty vector means
/// the draft is ready to finalize. Field paths use the serialized
/// (camelCase) names, dot-joined with array indices for item-level
/// errors, so the presentation layer can key inline messages directly.
pub fn validate(draft: &InvoiceDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    require_text(&draft.company_name, "companyName", "会社名は必須です", &mut errors);
    require_text(&draft.company_address, "companyAddress", "住所は必須です", &mut errors);
    require_email(&draft.company_email, "companyEmail", &mut errors);

    require_text(
        &draft.client_company_name,
        "clientCompanyName",
        "請求先会社名は必須です",
        &mut errors,
    );
    require_text(
        &draft.client_contact_name,
        "clientContactName",
        "担当者名は必須です",
        &mut errors,
    );
    require_text(
        &draft.client_address,
        "clientAddress",
        "請求先住所は必須です",
        &mut errors,
    );
    require_email(&draft.client_email, "clientEmail", &mut errors);

    require_text(
        &draft.invoice_number,
        "invoiceNumber",
        "請求書番号は必須です",
        &mut errors,
    );

    // issue_date / due_date carry no constraint beyond being valid dates,
    // which the type system guarantees. In particular the due date may
    // precede the issue date.

    if draft.items.is_empty() {
        errors.push(FieldError::new("items", "明細は1件以上必要です"));
    }
    for (i, item) in draft.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    errors
}

/// Stamp identity and audit fields and validate, producing a finalized
/// [`Invoice`].
///
/// `id`, `created_at`, and `updated_at` are assigned here and nowhere
/// else — a draft never carries them. On failure the full error list is
/// returned and the draft is left untouched.
pub fn finalize(draft: &InvoiceDraft) -> Result<Invoice, SeikyuError> {
    let errors = validate(draft);
    if !errors.is_empty() {
        return Err(SeikyuError::Validation(errors));
    }

    let now = Utc::now();
    Ok(Invoice {
        id: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
        company_name: draft.company_name.clone(),
        company_address: draft.company_address.clone(),
        company_email: draft.company_email.clone(),
        client_company_name: draft.client_company_name.clone(),
        client_contact_name: draft.client_contact_name.clone(),
        client_address: draft.client_address.clone(),
        client_email: draft.client_email.clone(),
        invoice_number: draft.invoice_number.clone(),
        issue_date: draft.issue_date,
        due_date: draft.due_date,
        items: draft.items.clone(),
        subtotal: draft.subtotal,
        tax: draft.tax,
        total: draft.total,
        notes: draft.notes.clone(),
    })
}

fn validate_item(item: &DraftItem, index: usize, errors: &mut Vec<FieldError>) {
    if item.description.trim().is_empty() {
        errors.push(FieldError::new(
            format!("items.{index}.description"),
            "品目名は必須です",
        ));
    }

    if item.quantity <= Decimal::ZERO {
        errors.push(FieldError::new(
            format!("items.{index}.quantity"),
            "数量は1以上を入力してください",
        ));
    }

    if item.unit_price < Decimal::ZERO {
        errors.push(FieldError::new(
            format!("items.{index}.unitPrice"),
            "単価は0以上を入力してください",
        ));
    }
}

fn require_text(value: &str, field: &str, message: &str, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

fn require_email(value: &str, field: &str, errors: &mut Vec<FieldError>) {
    if !is_valid_email(value) {
        errors.push(FieldError::new(field, "正しいメールアドレスを入力してください"));
    }
}

/// Syntactic email check: exactly one '@', a non-empty local part, and a
/// dotted domain with non-empty labels. No deliverability check — the
/// system never sends mail.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.split('.').any(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("billing@example.co.jp"));
        assert!(is_valid_email("a.b+c@example.com"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@.example.com"));
    }
}
