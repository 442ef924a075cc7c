use rust_decimal_macros::dec;
use seikyu::core::ItemEdit;
use seikyu::session::InvoiceEditor;

fn main() {
    // One editing session, exactly as a form-backed UI would drive it.
    let mut editor = InvoiceEditor::new();
    editor.set_company_name("山田商事株式会社");
    editor.set_company_address("東京都千代田区丸の内1-1-1");
    editor.set_company_email("billing@yamada.example");
    editor.set_client_company_name("鈴木工業株式会社");
    editor.set_client_contact_name("鈴木 一郎");
    editor.set_client_address("大阪府大阪市北区梅田2-2-2");
    editor.set_client_email("suzuki@example.co.jp");
    editor.set_invoice_number("INV-2024-001");

    editor.update_item(0, ItemEdit::Description("システム設計".into()));
    editor.update_item(0, ItemEdit::Quantity(dec!(10)));
    editor.update_item(0, ItemEdit::UnitPrice(dec!(80000)));

    editor.add_item();
    editor.update_item(1, ItemEdit::Description("保守サポート（月額）".into()));
    editor.update_item(1, ItemEdit::UnitPrice(dec!(30000)));

    let invoice = editor.finalize().expect("invoice should be valid");

    println!("Invoice: {}", invoice.invoice_number);
    println!("Issued:  {}", invoice.issue_date);
    println!("Issuer:  {}", invoice.company_name);
    println!("Client:  {}", invoice.client_company_name);
    println!("---");
    for item in &invoice.items {
        println!(
            "  {} x {} @ {} = {}",
            item.quantity, item.description, item.unit_price, item.amount
        );
    }
    println!("---");
    println!("小計:   {}円", invoice.subtotal);
    println!("消費税: {}円", invoice.tax);
    println!("合計:   {}円", invoice.total);
}
