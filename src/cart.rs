//! Cart Logic
//!
//! Line-item construction, the JSON codec used for persistence and the
//! view models the mini cart renders from. DOM-free so it can be tested
//! natively.

use chrono::{DateTime, Utc};

use crate::config::CART_KEY;
use crate::error::CartDecodeError;
use crate::models::LineItem;
use crate::storage::KeyValueStore;

/// Parse a price the way JavaScript's `parseInt` does with no radix:
/// leading whitespace and sign are accepted, then the longest run of
/// digits (`0x` switches to hex). No digits at all yields `None`, and so
/// does a digit run too large for `i64`, where `parseInt` would still give
/// a (lossy) number. Plan prices are fixed markup, so that case never comes
/// up in practice.
pub fn parse_price(text: &str) -> Option<i64> {
    let s = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = if s.starts_with("0x") || s.starts_with("0X") {
        (16, &s[2..])
    } else {
        (10, s)
    };

    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    let magnitude = i64::from_str_radix(&s[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Millisecond timestamp id, bumped past every id already in the cart
pub fn next_line_item_id(cart: &[LineItem], now_ms: i64) -> i64 {
    match cart.iter().map(|item| item.id).max() {
        Some(max) if max >= now_ms => max.saturating_add(1),
        _ => now_ms,
    }
}

/// Build the line item an "add to cart" action appends
pub fn new_line_item(cart: &[LineItem], plan: &str, price_text: &str, now: DateTime<Utc>) -> LineItem {
    LineItem {
        id: next_line_item_id(cart, now.timestamp_millis()),
        plan: plan.to_string(),
        price: parse_price(price_text),
        date: now,
    }
}

/// Append a new line item and write the whole cart through to `store`.
/// A failed write leaves the in-memory cart updated.
pub fn add_item(
    cart: &mut Vec<LineItem>,
    store: &dyn KeyValueStore,
    plan: &str,
    price_text: &str,
    now: DateTime<Utc>,
) -> LineItem {
    let item = new_line_item(cart, plan, price_text, now);
    cart.push(item.clone());
    persist_cart(store, cart);
    item
}

pub fn encode_cart(cart: &[LineItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(cart)
}

pub fn decode_cart(text: &str) -> Result<Vec<LineItem>, CartDecodeError> {
    Ok(serde_json::from_str(text)?)
}

/// Write-through of the whole cart under `CART_KEY`
pub fn persist_cart(store: &dyn KeyValueStore, cart: &[LineItem]) {
    match encode_cart(cart) {
        Ok(text) => store.set(CART_KEY, &text),
        Err(e) => log::error!("failed to encode cart: {}", e),
    }
}

/// One rendered row of the mini cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    /// Index in the cart; saved carts may repeat ids, positions never repeat
    pub position: usize,
    pub id: i64,
    pub title: String,
    pub price_label: String,
}

pub fn format_price(price: Option<i64>) -> String {
    match price {
        Some(value) => format!("R$ {}", value),
        None => "R$ NaN".to_string(),
    }
}

/// Rows in insertion order, one per line item
pub fn cart_rows(cart: &[LineItem]) -> Vec<CartRow> {
    cart.iter()
        .enumerate()
        .map(|(position, item)| CartRow {
            position,
            id: item.id,
            title: item.plan.clone(),
            price_label: format_price(item.price),
        })
        .collect()
}

impl CartRow {
    /// Key for keyed list rendering, unique within one `cart_rows` result
    pub fn key(&self) -> (usize, i64) {
        (self.position, self.id)
    }
}

/// Cart badge: item count, hidden when the cart is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartBadge {
    pub label: String,
    pub visible: bool,
}

pub fn cart_badge(count: usize) -> CartBadge {
    CartBadge {
        label: count.to_string(),
        visible: count > 0,
    }
}

/// Toast text after adding `plan`
pub fn added_notice(plan: &str) -> String {
    format!("\"{}\" adicionado ao carrinho!", plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::DisabledStore;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_parse_price_like_parse_int() {
        assert_eq!(parse_price("199"), Some(199));
        assert_eq!(parse_price("  42abc"), Some(42));
        assert_eq!(parse_price("-7"), Some(-7));
        assert_eq!(parse_price("+8"), Some(8));
        assert_eq!(parse_price("0x1A"), Some(26));
        assert_eq!(parse_price("12.99"), Some(12));
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("-"), None);
    }

    #[test]
    fn test_ids_never_collide() {
        let mut cart = Vec::new();
        // Three adds within the same millisecond
        for _ in 0..3 {
            let item = new_line_item(&cart, "Premium", "399", at(1_000));
            cart.push(item);
        }
        let ids: Vec<i64> = cart.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1_000, 1_001, 1_002]);

        // A later clock reading wins again
        assert_eq!(next_line_item_id(&cart, 5_000), 5_000);
    }

    #[test]
    fn test_id_bump_saturates() {
        let text = r#"[{"id":9223372036854775807,"plan":"Premium","price":399,"date":"2024-01-01T00:00:00Z"}]"#;
        let cart = decode_cart(text).unwrap();
        assert_eq!(next_line_item_id(&cart, 5), i64::MAX);
    }

    #[test]
    fn test_rows_keep_duplicate_saved_ids_apart() {
        let text = r#"[
            {"id":1700000000000,"plan":"Essencial","price":199,"date":"2023-11-14T22:13:20.000Z"},
            {"id":1700000000000,"plan":"Premium","price":399,"date":"2023-11-14T22:13:20.000Z"}
        ]"#;
        let rows = cart_rows(&decode_cart(text).unwrap());
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0].key(), rows[1].key());

        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Essencial", "Premium"]);
    }

    #[test]
    fn test_add_item_writes_through_each_time() {
        let store = MemoryStore::new();
        let mut cart = Vec::new();
        let adds = [("Essencial", "199"), ("Premium", "399"), ("Premium", "399")];
        for (i, (plan, price)) in adds.iter().enumerate() {
            let item = add_item(&mut cart, &store, plan, price, at(100 + i as i64));
            assert_eq!(cart.last(), Some(&item));

            let saved = decode_cart(&store.get(CART_KEY).unwrap()).unwrap();
            assert_eq!(saved, cart);
            assert_eq!(saved.len(), i + 1);
        }

        let plans: Vec<&str> = cart.iter().map(|i| i.plan.as_str()).collect();
        assert_eq!(plans, vec!["Essencial", "Premium", "Premium"]);
    }

    #[test]
    fn test_add_item_with_disabled_storage() {
        let store = DisabledStore;
        let mut cart = Vec::new();
        add_item(&mut cart, &store, "Essencial", "199", at(1));
        add_item(&mut cart, &store, "Exclusivo", "799", at(1));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart[1].price, Some(799));
        assert_ne!(cart[0].id, cart[1].id);
        assert_eq!(store.get(CART_KEY), None);
    }

    #[test]
    fn test_rows_follow_insertion_order() {
        let adds = [("Essencial", "199"), ("Premium", "399"), ("Exclusivo", "799"), ("Premium", "399")];
        let mut cart = Vec::new();
        for (i, (plan, price)) in adds.iter().enumerate() {
            let item = new_line_item(&cart, plan, price, at(10 + i as i64));
            cart.push(item);
        }

        assert_eq!(cart.len(), adds.len());
        let rows = cart_rows(&cart);
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Essencial", "Premium", "Exclusivo", "Premium"]);
        assert_eq!(rows[1].price_label, "R$ 399");
    }

    #[test]
    fn test_codec_roundtrip() {
        let cart = vec![
            new_line_item(&[], "Essencial", "199", at(1_700_000_000_123)),
            LineItem {
                id: 1_700_000_000_124,
                plan: "Sem preço".to_string(),
                price: None,
                date: at(1_700_000_000_124),
            },
        ];

        let text = encode_cart(&cart).unwrap();
        assert!(text.contains("\"price\":null"));
        assert_eq!(decode_cart(&text).unwrap(), cart);
    }

    #[test]
    fn test_decodes_browser_written_payload() {
        let text = r#"[{"id":1700000000000,"plan":"Premium","price":399,"date":"2023-11-14T22:13:20.000Z"}]"#;
        let cart = decode_cart(text).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].plan, "Premium");
        assert_eq!(cart[0].price, Some(399));
    }

    #[test]
    fn test_malformed_payloads_are_rejected() {
        assert!(decode_cart("not json").is_err());
        assert!(decode_cart("{\"id\":1}").is_err());
        assert!(decode_cart("null").is_err());
        assert!(decode_cart("[{\"id\":1}]").is_err());
    }

    #[test]
    fn test_persist_cart_writes_key() {
        let store = MemoryStore::new();
        let cart = vec![new_line_item(&[], "Premium", "399", at(1))];
        persist_cart(&store, &cart);

        let saved = store.get(CART_KEY).unwrap();
        assert_eq!(decode_cart(&saved).unwrap(), cart);
    }

    #[test]
    fn test_badge() {
        assert_eq!(cart_badge(0), CartBadge { label: "0".to_string(), visible: false });
        assert_eq!(cart_badge(3), CartBadge { label: "3".to_string(), visible: true });
        assert_eq!(format_price(None), "R$ NaN");
        assert_eq!(added_notice("Premium"), "\"Premium\" adicionado ao carrinho!");
    }
}
