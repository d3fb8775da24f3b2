//! Line-item conversion functions.

use shipstation_endpoint_core::NormalizedLineItem;

use crate::shipstation::OrderItemPayload;

/// Convert normalized line items into ShipStation order items.
///
/// An empty input list is an empty output list, not an error: orders with
/// no items are legal on the remote side.
#[must_use]
pub fn to_remote(items: &[NormalizedLineItem]) -> Vec<OrderItemPayload> {
    items
        .iter()
        .map(|item| OrderItemPayload {
            sku: item.product_id.clone(),
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            quantity: item.quantity,
            unit_price: item.price,
            options: render_properties(&item.properties),
        })
        .collect()
}

/// Flatten free-form item properties into ShipStation's options text field,
/// one `key:value` line per entry in hub insertion order.
///
/// An absent/empty map leaves the field unset rather than sending "".
fn render_properties(properties: &serde_json::Map<String, serde_json::Value>) -> Option<String> {
    if properties.is_empty() {
        return None;
    }

    let mut rendered = String::new();
    for (key, value) in properties {
        // Bare strings render without their JSON quotes.
        match value.as_str() {
            Some(s) => rendered.push_str(&format!("{key}:{s}\n")),
            None => rendered.push_str(&format!("{key}:{value}\n")),
        }
    }
    Some(rendered)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(to_remote(&[]).is_empty());
    }

    #[test]
    fn test_item_fields_map_across() {
        let items = vec![NormalizedLineItem {
            name: Some("Spree T-Shirt".to_string()),
            product_id: Some("SPREE-T-SHIRT".to_string()),
            quantity: 9,
            price: Some(Decimal::from(9)),
            image_url: Some("https://example.com/shirt.png".to_string()),
            properties: serde_json::Map::new(),
        }];

        let remote = to_remote(&items);
        assert_eq!(remote.len(), 1);
        let item = remote.first().expect("one item");
        assert_eq!(item.sku.as_deref(), Some("SPREE-T-SHIRT"));
        assert_eq!(item.name.as_deref(), Some("Spree T-Shirt"));
        assert_eq!(item.quantity, 9);
        assert_eq!(item.unit_price, Some(Decimal::from(9)));
    }

    #[test]
    fn test_properties_render_in_insertion_order() {
        let mut properties = serde_json::Map::new();
        properties.insert("color".to_string(), json!("blue"));
        properties.insert("size".to_string(), json!("M"));
        properties.insert("count".to_string(), json!(2));

        let items = vec![NormalizedLineItem {
            quantity: 1,
            properties,
            ..Default::default()
        }];

        let remote = to_remote(&items);
        let options = remote
            .first()
            .and_then(|item| item.options.as_deref())
            .expect("options rendered");
        assert_eq!(options, "color:blue\nsize:M\ncount:2\n");
    }

    #[test]
    fn test_absent_properties_leave_options_unset() {
        let items = vec![NormalizedLineItem {
            quantity: 1,
            ..Default::default()
        }];
        let remote = to_remote(&items);
        assert_eq!(remote.first().and_then(|item| item.options.clone()), None);
    }
}
