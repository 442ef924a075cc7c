use chrono::{Datelike, NaiveDate};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use rust_decimal::Decimal;

use crate::core::{Invoice, SeikyuError};

// A4 in PDF points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 40.0;

const BODY_SIZE: f32 = 10.0;
const TITLE_SIZE: f32 = 24.0;
const LINE_HEIGHT: f32 = 14.0;

// Item table column x-positions: description, then right-aligned-ish
// numeric columns. Matches the 40/20/20/20 split of the print preview.
const COL_DESCRIPTION: f32 = MARGIN;
const COL_QUANTITY: f32 = 280.0;
const COL_UNIT_PRICE: f32 = 380.0;
const COL_AMOUNT: f32 = 480.0;

/// Render a finalized invoice to a single A4 PDF page.
///
/// Layout: issuer block top-left, client block top-right, centered title
/// and document info, item table, totals block bottom-right, optional
/// notes. The caller guarantees the invoice's derived-field invariants;
/// nothing is recomputed here.
pub fn render(invoice: &Invoice) -> Result<Vec<u8>, SeikyuError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(regular_id),
            "F2" => Object::Reference(bold_id),
        },
    });

    let content = Content {
        operations: page_operations(invoice),
    };
    let encoded = content
        .encode()
        .map_err(|e| SeikyuError::Render(format!("failed to encode content stream: {e}")))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "Contents" => Object::Reference(content_id),
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![Object::Reference(page_id)],
        "Count" => 1,
        "Resources" => Object::Reference(resources_id),
        "MediaBox" => vec![
            0.into(),
            0.into(),
            PAGE_WIDTH.into(),
            PAGE_HEIGHT.into(),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", catalog_id);

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| SeikyuError::Render(format!("failed to save PDF: {e}")))?;
    Ok(output)
}

fn page_operations(invoice: &Invoice) -> Vec<Operation> {
    let mut ops = Vec::new();

    // Header: issuer top-left, client top-right.
    let mut y = PAGE_HEIGHT - MARGIN - BODY_SIZE;
    for line in [
        invoice.company_name.as_str(),
        invoice.company_address.as_str(),
        invoice.company_email.as_str(),
    ] {
        text(&mut ops, "F1", BODY_SIZE, MARGIN, y, line);
        y -= LINE_HEIGHT;
    }

    let mut y = PAGE_HEIGHT - MARGIN - BODY_SIZE;
    let client_sama = format!("{} 様", invoice.client_contact_name);
    for line in [
        invoice.client_company_name.as_str(),
        client_sama.as_str(),
        invoice.client_address.as_str(),
        invoice.client_email.as_str(),
    ] {
        text(&mut ops, "F1", BODY_SIZE, PAGE_WIDTH / 2.0 + 40.0, y, line);
        y -= LINE_HEIGHT;
    }

    // Centered title and document info.
    let mut y = PAGE_HEIGHT - 180.0;
    text(&mut ops, "F2", TITLE_SIZE, PAGE_WIDTH / 2.0 - 60.0, y, "請求書");
    y -= 30.0;
    for line in [
        format!("請求書番号: {}", invoice.invoice_number),
        format!("発行日: {}", format_date(invoice.issue_date)),
        format!("支払期限: {}", format_date(invoice.due_date)),
    ] {
        text(&mut ops, "F1", BODY_SIZE, PAGE_WIDTH / 2.0 - 80.0, y, &line);
        y -= LINE_HEIGHT;
    }

    // Item table: header row, rule, one row per item.
    y -= 20.0;
    text(&mut ops, "F2", BODY_SIZE, COL_DESCRIPTION, y, "品目");
    text(&mut ops, "F2", BODY_SIZE, COL_QUANTITY, y, "数量");
    text(&mut ops, "F2", BODY_SIZE, COL_UNIT_PRICE, y, "単価");
    text(&mut ops, "F2", BODY_SIZE, COL_AMOUNT, y, "金額");
    y -= 5.0;
    rule(&mut ops, MARGIN, y, PAGE_WIDTH - MARGIN, y);
    y -= LINE_HEIGHT;

    for item in &invoice.items {
        text(&mut ops, "F1", BODY_SIZE, COL_DESCRIPTION, y, &item.description);
        text(&mut ops, "F1", BODY_SIZE, COL_QUANTITY, y, &item.quantity.to_string());
        text(&mut ops, "F1", BODY_SIZE, COL_UNIT_PRICE, y, &format_amount(item.unit_price));
        text(&mut ops, "F1", BODY_SIZE, COL_AMOUNT, y, &format_amount(item.amount));
        y -= LINE_HEIGHT;
    }

    // Notes, under the table.
    if let Some(notes) = &invoice.notes {
        y -= 2.0 * LINE_HEIGHT;
        text(&mut ops, "F2", BODY_SIZE, MARGIN, y, "備考");
        y -= LINE_HEIGHT;
        for line in notes.lines() {
            text(&mut ops, "F1", BODY_SIZE, MARGIN, y, line);
            y -= LINE_HEIGHT;
        }
    }

    // Totals block, pinned to the bottom-right.
    let label_x = PAGE_WIDTH - 220.0;
    let value_x = PAGE_WIDTH - 120.0;
    let mut y = MARGIN + 3.0 * LINE_HEIGHT;
    text(&mut ops, "F1", BODY_SIZE, label_x, y, "小計:");
    text(&mut ops, "F1", BODY_SIZE, value_x, y, &format!("{}円", format_amount(invoice.subtotal)));
    y -= LINE_HEIGHT;
    text(&mut ops, "F1", BODY_SIZE, label_x, y, "消費税（10%）:");
    text(&mut ops, "F1", BODY_SIZE, value_x, y, &format!("{}円", format_amount(invoice.tax)));
    y -= 5.0;
    rule(&mut ops, label_x, y, PAGE_WIDTH - MARGIN, y);
    y -= LINE_HEIGHT;
    text(&mut ops, "F2", BODY_SIZE, label_x, y, "合計:");
    text(&mut ops, "F2", BODY_SIZE, value_x, y, &format!("{}円", format_amount(invoice.total)));

    ops
}

fn text(ops: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, s: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::string_literal(s.as_bytes().to_vec())],
    ));
    ops.push(Operation::new("ET", vec![]));
}

fn rule(ops: &mut Vec<Operation>, x1: f32, y1: f32, x2: f32, y2: f32) {
    ops.push(Operation::new("m", vec![x1.into(), y1.into()]));
    ops.push(Operation::new("l", vec![x2.into(), y2.into()]));
    ops.push(Operation::new("S", vec![]));
}

/// `yyyy年M月d日`, the form the print preview uses.
fn format_date(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// Thousands-grouped amount, e.g. `1,234,567`. Fractional digits only
/// appear when an amount actually carries them.
fn format_amount(value: Decimal) -> String {
    let normalized = value.normalize();
    let s = normalized.to_string();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::new();
    let chars: Vec<char> = int_part.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
