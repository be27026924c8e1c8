//! # Receipt Composition
//!
//! Transforms a completed [`PaymentResult`] plus merchant metadata into an
//! ordered sequence of printable line items.
//!
//! ## Construction Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       compose() output order                            │
//! │                                                                         │
//! │   [logo image]                 ← optional                               │
//! │   [merchant name]              ← optional, bold/title/centered          │
//! │   [merchant address]           ← optional, centered                     │
//! │   [Tel: phone]                 ← optional, centered                     │
//! │   ────────────────────────     ← separator (always)                     │
//! │   PAYMENT RECEIPT              ← bold/title/centered (always)           │
//! │                                ← blank (always)                         │
//! │   Amount: ₦250.00              ← bold (always)                          │
//! │   [Card Type: VERVE]           ← optional                               │
//! │   [Card No: 506099******1234]  ← optional                               │
//! │   [RRN: 000000123456]          ← optional                               │
//! │   Ref: TXN_..._...             ← always                                 │
//! │   [Date: 2026-08-30 14:05:11]  ← optional                               │
//! │   [Auth Code: 123456]          ← optional                               │
//! │   [STAN: 000042]               ← optional                               │
//! │   ────────────────────────     ← separator (always)                     │
//! │   APPROVED / DECLINED          ← bold/title/centered (always)           │
//! │                                ← blank ×2 (always)                      │
//! │   Thank you for your patronage!                                         │
//! │   Please keep this receipt for your records                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Absent optional fields are omitted entirely, never rendered blank, so
//! the sequence length is result-dependent. Composition never fails.

use serde::{Deserialize, Serialize};

use crate::types::{MerchantInfo, PaymentResult};

// =============================================================================
// Receipt Line Item
// =============================================================================

/// One unit of printable receipt content.
///
/// An ordered `Vec<ReceiptLineItem>` forms a complete receipt. Items are
/// constructed fresh per transaction and consumed by the print call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReceiptLineItem {
    /// A line of text with optional emphasis flags.
    Text {
        content: String,
        /// Render in the printer's title (enlarged) style.
        title: bool,
        bold: bool,
        centered: bool,
    },
    /// An empty feed line.
    Blank,
    /// An image reference (printer-resident slot or file path).
    Image { source: String },
    /// A full-width horizontal rule.
    Separator,
}

impl ReceiptLineItem {
    /// Plain left-aligned text.
    pub fn plain(content: impl Into<String>) -> Self {
        ReceiptLineItem::Text {
            content: content.into(),
            title: false,
            bold: false,
            centered: false,
        }
    }

    /// Bold left-aligned text.
    pub fn bold(content: impl Into<String>) -> Self {
        ReceiptLineItem::Text {
            content: content.into(),
            title: false,
            bold: true,
            centered: false,
        }
    }

    /// Centered plain text.
    pub fn centered(content: impl Into<String>) -> Self {
        ReceiptLineItem::Text {
            content: content.into(),
            title: false,
            bold: false,
            centered: true,
        }
    }

    /// Title style: enlarged, bold, centered.
    pub fn heading(content: impl Into<String>) -> Self {
        ReceiptLineItem::Text {
            content: content.into(),
            title: true,
            bold: true,
            centered: true,
        }
    }
}

// =============================================================================
// Composition
// =============================================================================

/// Composes the full receipt for a payment result.
///
/// Deterministic: identical inputs always produce the identical sequence.
/// There is no error path — absent optional merchant/card data simply
/// shortens the output.
pub fn compose(result: &PaymentResult, merchant: Option<&MerchantInfo>) -> Vec<ReceiptLineItem> {
    let mut items = Vec::with_capacity(21);

    // Merchant header block.
    if let Some(merchant) = merchant {
        if let Some(logo) = non_empty(merchant.logo.as_deref()) {
            items.push(ReceiptLineItem::Image {
                source: logo.to_string(),
            });
        }
        if let Some(name) = non_empty(Some(merchant.name.as_str())) {
            items.push(ReceiptLineItem::heading(name));
        }
        if let Some(address) = non_empty(merchant.address.as_deref()) {
            items.push(ReceiptLineItem::centered(address));
        }
        if let Some(phone) = non_empty(merchant.phone.as_deref()) {
            items.push(ReceiptLineItem::centered(format!("Tel: {}", phone)));
        }
    }

    items.push(ReceiptLineItem::Separator);
    items.push(ReceiptLineItem::heading("PAYMENT RECEIPT"));
    items.push(ReceiptLineItem::Blank);

    // Transaction block. Amount always renders with two decimal places.
    items.push(ReceiptLineItem::bold(format!("Amount: {}", result.amount)));

    let card = result.card.as_ref();
    if let Some(card_type) = card.and_then(|c| non_empty(c.card_type.as_deref())) {
        items.push(ReceiptLineItem::plain(format!("Card Type: {}", card_type)));
    }
    if let Some(pan) = card.and_then(|c| non_empty(c.masked_pan.as_deref())) {
        items.push(ReceiptLineItem::plain(format!("Card No: {}", pan)));
    }
    if let Some(rrn) = non_empty(result.rrn.as_deref()) {
        items.push(ReceiptLineItem::plain(format!("RRN: {}", rrn)));
    }

    items.push(ReceiptLineItem::plain(format!("Ref: {}", result.reference)));

    if let Some(ts) = result.timestamp {
        items.push(ReceiptLineItem::plain(format!(
            "Date: {}",
            ts.format("%Y-%m-%d %H:%M:%S")
        )));
    }
    if let Some(auth) = non_empty(result.auth_code.as_deref()) {
        items.push(ReceiptLineItem::plain(format!("Auth Code: {}", auth)));
    }
    if let Some(stan) = non_empty(result.stan.as_deref()) {
        items.push(ReceiptLineItem::plain(format!("STAN: {}", stan)));
    }

    // Status block.
    items.push(ReceiptLineItem::Separator);
    items.push(ReceiptLineItem::heading(result.status_title()));
    items.push(ReceiptLineItem::Blank);
    items.push(ReceiptLineItem::Blank);
    items.push(ReceiptLineItem::centered("Thank you for your patronage!"));
    items.push(ReceiptLineItem::centered(
        "Please keep this receipt for your records",
    ));

    items
}

/// Composes the minimal 7-item receipt for light-weight integrations.
///
/// No conditional branches: the output is always exactly 7 items
/// regardless of what the result carries. This is an alternative contract,
/// not a fallback on failure.
pub fn compose_simple(result: &PaymentResult) -> Vec<ReceiptLineItem> {
    vec![
        ReceiptLineItem::heading("PAYMENT RECEIPT"),
        ReceiptLineItem::Separator,
        ReceiptLineItem::bold(format!("Amount: {}", result.amount)),
        ReceiptLineItem::plain(format!("Ref: {}", result.reference)),
        ReceiptLineItem::heading(result.status_title()),
        ReceiptLineItem::Separator,
        ReceiptLineItem::centered("Thank you for your patronage!"),
    ]
}

/// Treats empty and whitespace-only strings the same as absent fields.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::reference::TransactionRef;
    use crate::types::{CardDetails, CompletionStatus};
    use chrono::{TimeZone, Utc};

    /// Items the full receipt always contains, merchant or not:
    /// separator, title, blank, amount, ref, separator, status,
    /// blank, blank, thank-you, reminder.
    const SKELETON_LEN: usize = 11;

    fn bare_result(approved: bool) -> PaymentResult {
        PaymentResult {
            approved,
            response_code: "00".to_string(),
            response_message: "Approved".to_string(),
            reference: TransactionRef::from_raw("TXN_1700000000000_7"),
            rrn: None,
            amount: Money::from_kobo(25_000),
            card: None,
            auth_code: None,
            stan: None,
            timestamp: None,
            status: CompletionStatus::Completed,
        }
    }

    fn full_result() -> PaymentResult {
        PaymentResult {
            rrn: Some("000000123456".to_string()),
            card: Some(CardDetails {
                card_type: Some("VERVE".to_string()),
                masked_pan: Some("506099******1234".to_string()),
                expiry: Some("12/27".to_string()),
                holder_name: Some("ADA OBI".to_string()),
            }),
            auth_code: Some("123456".to_string()),
            stan: Some("000042".to_string()),
            timestamp: Some(Utc.with_ymd_and_hms(2026, 8, 30, 14, 5, 11).unwrap()),
            ..bare_result(true)
        }
    }

    fn merchant() -> MerchantInfo {
        MerchantInfo {
            name: "Mama Nkechi Stores".to_string(),
            address: Some("12 Allen Avenue, Ikeja".to_string()),
            phone: Some("+234 801 234 5678".to_string()),
            logo: Some("logo.bmp".to_string()),
        }
    }

    fn text_contents(items: &[ReceiptLineItem]) -> Vec<String> {
        items
            .iter()
            .filter_map(|item| match item {
                ReceiptLineItem::Text { content, .. } => Some(content.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_bare_result_without_merchant_is_skeleton() {
        let items = compose(&bare_result(true), None);
        assert_eq!(items.len(), SKELETON_LEN);

        // Required transaction lines are present.
        let texts = text_contents(&items);
        assert!(texts.iter().any(|t| t == "PAYMENT RECEIPT"));
        assert!(texts.iter().any(|t| t == "Amount: ₦250.00"));
        assert!(texts.iter().any(|t| t == "Ref: TXN_1700000000000_7"));
        assert!(texts.iter().any(|t| t == "APPROVED"));
    }

    #[test]
    fn test_every_optional_field_adds_exactly_one_line() {
        let bare_len = compose(&bare_result(true), None).len();

        // 6 result optionals: card type, pan, rrn, timestamp, auth, stan.
        let full_len = compose(&full_result(), None).len();
        assert_eq!(full_len, bare_len + 6);

        // 4 merchant optionals: logo, name, address, phone.
        let with_merchant = compose(&full_result(), Some(&merchant())).len();
        assert_eq!(with_merchant, full_len + 4);
    }

    #[test]
    fn test_full_receipt_order() {
        let items = compose(&full_result(), Some(&merchant()));

        assert_eq!(
            items[0],
            ReceiptLineItem::Image {
                source: "logo.bmp".to_string()
            }
        );
        assert_eq!(items[1], ReceiptLineItem::heading("Mama Nkechi Stores"));
        assert_eq!(items[2], ReceiptLineItem::centered("12 Allen Avenue, Ikeja"));
        assert_eq!(
            items[3],
            ReceiptLineItem::centered("Tel: +234 801 234 5678")
        );
        assert_eq!(items[4], ReceiptLineItem::Separator);
        assert_eq!(items[5], ReceiptLineItem::heading("PAYMENT RECEIPT"));
        assert_eq!(items[6], ReceiptLineItem::Blank);
        assert_eq!(items[7], ReceiptLineItem::bold("Amount: ₦250.00"));
        assert_eq!(items[8], ReceiptLineItem::plain("Card Type: VERVE"));
        assert_eq!(items[9], ReceiptLineItem::plain("Card No: 506099******1234"));
        assert_eq!(items[10], ReceiptLineItem::plain("RRN: 000000123456"));
        assert_eq!(items[11], ReceiptLineItem::plain("Ref: TXN_1700000000000_7"));
        assert_eq!(items[12], ReceiptLineItem::plain("Date: 2026-08-30 14:05:11"));
        assert_eq!(items[13], ReceiptLineItem::plain("Auth Code: 123456"));
        assert_eq!(items[14], ReceiptLineItem::plain("STAN: 000042"));
        assert_eq!(items[15], ReceiptLineItem::Separator);
        assert_eq!(items[16], ReceiptLineItem::heading("APPROVED"));
        assert_eq!(items[17], ReceiptLineItem::Blank);
        assert_eq!(items[18], ReceiptLineItem::Blank);
        assert_eq!(
            items[19],
            ReceiptLineItem::centered("Thank you for your patronage!")
        );
        assert_eq!(
            items[20],
            ReceiptLineItem::centered("Please keep this receipt for your records")
        );
    }

    #[test]
    fn test_declined_status_text() {
        let items = compose(&bare_result(false), None);
        let texts = text_contents(&items);
        assert!(texts.iter().any(|t| t == "DECLINED"));
        assert!(!texts.iter().any(|t| t == "APPROVED"));
    }

    #[test]
    fn test_empty_strings_are_omitted_not_blank() {
        let mut result = bare_result(true);
        result.rrn = Some("   ".to_string());
        result.auth_code = Some(String::new());
        result.card = Some(CardDetails {
            card_type: Some(String::new()),
            ..CardDetails::default()
        });

        let items = compose(&result, None);
        assert_eq!(items.len(), SKELETON_LEN);
    }

    #[test]
    fn test_merchant_without_logo_or_phone() {
        let merchant = MerchantInfo {
            name: "Corner Shop".to_string(),
            address: None,
            phone: None,
            logo: None,
        };
        let items = compose(&bare_result(true), Some(&merchant));
        assert_eq!(items.len(), SKELETON_LEN + 1);
        assert_eq!(items[0], ReceiptLineItem::heading("Corner Shop"));
    }

    #[test]
    fn test_compose_simple_is_always_seven_items() {
        assert_eq!(compose_simple(&bare_result(true)).len(), 7);
        assert_eq!(compose_simple(&bare_result(false)).len(), 7);
        assert_eq!(compose_simple(&full_result()).len(), 7);
    }

    #[test]
    fn test_compose_simple_order() {
        let items = compose_simple(&bare_result(false));
        assert_eq!(items[0], ReceiptLineItem::heading("PAYMENT RECEIPT"));
        assert_eq!(items[1], ReceiptLineItem::Separator);
        assert_eq!(items[2], ReceiptLineItem::bold("Amount: ₦250.00"));
        assert_eq!(items[3], ReceiptLineItem::plain("Ref: TXN_1700000000000_7"));
        assert_eq!(items[4], ReceiptLineItem::heading("DECLINED"));
        assert_eq!(items[5], ReceiptLineItem::Separator);
        assert_eq!(
            items[6],
            ReceiptLineItem::centered("Thank you for your patronage!")
        );
    }

    #[test]
    fn test_compose_is_deterministic() {
        let result = full_result();
        let merchant = merchant();
        assert_eq!(
            compose(&result, Some(&merchant)),
            compose(&result, Some(&merchant))
        );
    }
}
