//! Business records served by the data source: daily sales and ingredient stock.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

/// One day of sales, in the order the source lists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySalesRecord {
    pub date: String,
    pub sales: Vec<Sale>,
}

/// A single menu item's sales for the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub item: String,
    pub quantity: i64,
    pub revenue: f64,
}

/// Remaining ingredient stock, in the order the source lists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientStock {
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Always an integer once loaded, whatever the source wrote.
    #[serde(deserialize_with = "quantity_as_int")]
    pub quantity: i64,
}

/// Source representations accepted for an ingredient quantity.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Coerce a quantity to an integer: floats truncate toward zero, strings must
/// hold an integer.
fn quantity_as_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawQuantity::deserialize(deserializer)? {
        RawQuantity::Int(n) => Ok(n),
        RawQuantity::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
        RawQuantity::Float(f) => Err(D::Error::custom(format!(
            "quantity {f} is not a finite number"
        ))),
        RawQuantity::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("quantity {s:?} is not an integer"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_quantity_from_integer() {
        let stock: IngredientStock =
            serde_json::from_str(r#"{"ingredients":[{"name":"rice","quantity":12}]}"#).unwrap();
        assert_eq!(stock.ingredients[0].quantity, 12);
    }

    #[test]
    fn test_ingredient_quantity_from_string() {
        let stock: IngredientStock =
            serde_json::from_str(r#"{"ingredients":[{"name":"pork","quantity":" 7 "}]}"#)
                .unwrap();
        assert_eq!(stock.ingredients[0].quantity, 7);
    }

    #[test]
    fn test_ingredient_quantity_from_float_truncates() {
        let stock: IngredientStock = serde_json::from_str(
            r#"{"ingredients":[{"name":"basil","quantity":2.9},{"name":"egg","quantity":-1.5}]}"#,
        )
        .unwrap();
        assert_eq!(stock.ingredients[0].quantity, 2);
        assert_eq!(stock.ingredients[1].quantity, -1);
    }

    #[test]
    fn test_ingredient_quantity_rejects_non_numeric_string() {
        let result: Result<IngredientStock, _> =
            serde_json::from_str(r#"{"ingredients":[{"name":"rice","quantity":"lots"}]}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("not an integer"), "got: {err}");
    }

    #[test]
    fn test_daily_sales_requires_sales_list() {
        let result: Result<DailySalesRecord, _> = serde_json::from_str(r#"{"date":"2023-06-01"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_daily_sales_keeps_source_order() {
        let json = r#"{"date":"2023-06-01","sales":[
            {"item":"Pad Thai","quantity":3,"revenue":180},
            {"item":"Som Tam","quantity":5,"revenue":250.5}
        ]}"#;
        let record: DailySalesRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.sales[0].item, "Pad Thai");
        assert_eq!(record.sales[1].revenue, 250.5);
    }
}
