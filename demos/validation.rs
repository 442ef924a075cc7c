use rust_decimal_macros::dec;
use seikyu::core::ItemEdit;
use seikyu::session::InvoiceEditor;

fn main() {
    // A half-filled form: missing client details, broken email, and an
    // item row with no description.
    let mut editor = InvoiceEditor::new();
    editor.set_company_name("山田商事株式会社");
    editor.set_company_address("東京都千代田区丸の内1-1-1");
    editor.set_company_email("not-an-email");
    editor.set_invoice_number("INV-2024-002");
    editor.update_item(0, ItemEdit::Quantity(dec!(2)));
    editor.update_item(0, ItemEdit::UnitPrice(dec!(5000)));

    match editor.finalize() {
        Ok(_) => unreachable!("the draft above is incomplete"),
        Err(err) => {
            println!("submission rejected:");
            for field_error in err.field_errors() {
                println!("  {:30} {}", field_error.field, field_error.message);
            }
        }
    }

    // The working copy is untouched — correct the fields and resubmit.
    editor.set_company_email("billing@yamada.example");
    editor.set_client_company_name("鈴木工業株式会社");
    editor.set_client_contact_name("鈴木 一郎");
    editor.set_client_address("大阪府大阪市北区梅田2-2-2");
    editor.set_client_email("suzuki@example.co.jp");
    editor.update_item(0, ItemEdit::Description("コンサルティング".into()));

    let invoice = editor.finalize().expect("corrected draft is valid");
    println!("resubmitted OK: 合計 {}円", invoice.total);
}
