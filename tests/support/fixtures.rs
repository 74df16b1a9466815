use serde_json::{json, Value};

/// A three-product storefront feed.
///
/// `1001` costs 12.95, `1002` is on sale at 20.00 and `1003` is a drink.
pub const FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<products>
  <product>
    <id>1001</id>
    <title>Letmælk 1 L</title>
    <price>12,95 DKK</price>
    <brand>Arla</brand>
    <imageLink>https://img.example/1001.jpg</imageLink>
    <product_type>Mejeri</product_type>
  </product>
  <product>
    <id>1002</id>
    <title>Skyr Vanilje</title>
    <price>24,95 DKK</price>
    <sale_price>20,00 DKK</sale_price>
    <brand>Arla</brand>
    <product_type>Mejeri</product_type>
  </product>
  <product>
    <id>1003</id>
    <title>Appelsinjuice</title>
    <price>18,00 DKK</price>
    <brand>Rynkeby</brand>
    <product_type>Drikkevarer</product_type>
  </product>
</products>"#;

/// Catalog response where Netto undercuts Rema 1000 on `1001`.
pub fn catalog_json() -> Value {
    json!({
        "success": true,
        "rema1000": [
            { "product_id": "1001", "price": 12.95 },
            { "product_id": "1002", "price": 24.95, "sale_price": 20.00 },
        ],
        "netto": [
            { "productId": "1001", "price": "11.50" },
            { "productId": "1003", "price": 17 },
        ],
    })
}
