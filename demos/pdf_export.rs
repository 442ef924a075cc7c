use rust_decimal_macros::dec;
use seikyu::core::ItemEdit;
use seikyu::pdf;
use seikyu::session::InvoiceEditor;

fn main() {
    let mut editor = InvoiceEditor::new();
    editor.set_company_name("山田商事株式会社");
    editor.set_company_address("東京都千代田区丸の内1-1-1");
    editor.set_company_email("billing@yamada.example");
    editor.set_client_company_name("鈴木工業株式会社");
    editor.set_client_contact_name("鈴木 一郎");
    editor.set_client_address("大阪府大阪市北区梅田2-2-2");
    editor.set_client_email("suzuki@example.co.jp");
    editor.set_invoice_number("INV-2024-003");
    editor.update_item(0, ItemEdit::Description("コンサルティング".into()));
    editor.update_item(0, ItemEdit::Quantity(dec!(2)));
    editor.update_item(0, ItemEdit::UnitPrice(dec!(5000)));
    editor.set_notes(Some("お振込手数料はご負担ください。".into()));

    let invoice = editor.finalize().expect("invoice should be valid");

    match pdf::export_to_file(&invoice, ".") {
        Ok(path) => println!("exported: {}", path.display()),
        Err(err) => eprintln!("export failed, nothing written: {err}"),
    }
}
