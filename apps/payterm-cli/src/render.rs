//! Renders receipt line items as fixed-width text.
//!
//! Stand-in for the terminal's thermal printer: 32 columns, the usual
//! width of a 58mm roll.

use payterm_core::ReceiptLineItem;

/// Printable width in characters.
pub const PAPER_WIDTH: usize = 32;

/// Renders a composed receipt as plain text, one item per line.
pub fn render(items: &[ReceiptLineItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&render_item(item));
        out.push('\n');
    }
    out
}

fn render_item(item: &ReceiptLineItem) -> String {
    match item {
        ReceiptLineItem::Text {
            content, centered, ..
        } => {
            if *centered {
                center(content)
            } else {
                content.clone()
            }
        }
        ReceiptLineItem::Blank => String::new(),
        ReceiptLineItem::Image { source } => center(&format!("[image: {}]", source)),
        ReceiptLineItem::Separator => "-".repeat(PAPER_WIDTH),
    }
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= PAPER_WIDTH {
        return text.to_string();
    }
    let pad = (PAPER_WIDTH - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
