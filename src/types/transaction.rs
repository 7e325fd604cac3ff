//! Sales transaction record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single e-commerce sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sale date
    pub date: NaiveDate,

    /// Product name, drawn from the category's product list
    pub product: String,

    /// Product category
    pub category: Option<String>,

    /// Price per unit, always positive
    pub unit_price: f64,

    /// Units sold (1-4 by default)
    pub quantity: u32,

    /// Sales region; `None` when missing in the raw data
    pub region: Option<String>,

    /// `unit_price * quantity`
    pub revenue: f64,
}

/// Hashable identity of a row across every field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey {
    date: NaiveDate,
    product: String,
    category: Option<String>,
    unit_price: u64,
    quantity: u32,
    region: Option<String>,
    revenue: u64,
}

impl Transaction {
    /// Create a transaction, deriving revenue from price and quantity
    pub fn new(
        date: NaiveDate,
        product: &str,
        category: &str,
        unit_price: f64,
        quantity: u32,
        region: &str,
    ) -> Self {
        Self {
            date,
            product: product.to_string(),
            category: Some(category.to_string()),
            unit_price,
            quantity,
            region: Some(region.to_string()),
            revenue: unit_price * quantity as f64,
        }
    }

    /// Recompute revenue from the current price and quantity
    pub fn recompute_revenue(&mut self) {
        self.revenue = self.unit_price * self.quantity as f64;
    }

    /// Year-month bucket used by the monthly revenue series, e.g. "2024-03"
    pub fn month_label(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// True when either of the fields required for analysis is absent
    pub fn is_incomplete(&self) -> bool {
        self.region.is_none() || self.category.is_none()
    }

    /// Key for exact-duplicate detection. Floats compare by bit pattern.
    pub fn row_key(&self) -> RowKey {
        RowKey {
            date: self.date,
            product: self.product.clone(),
            category: self.category.clone(),
            unit_price: self.unit_price.to_bits(),
            quantity: self.quantity,
            region: self.region.clone(),
            revenue: self.revenue.to_bits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            "Laptop",
            "Electronics",
            812.5,
            2,
            "South",
        )
    }

    #[test]
    fn test_revenue_derived() {
        let tx = sample();
        assert_eq!(tx.revenue, 1625.0);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(sample().month_label(), "2024-03");
    }

    #[test]
    fn test_row_key_distinguishes_missing_region() {
        let tx = sample();
        let mut missing = tx.clone();
        missing.region = None;

        assert_eq!(tx.row_key(), sample().row_key());
        assert_ne!(tx.row_key(), missing.row_key());
        assert!(missing.is_incomplete());
        assert!(!tx.is_incomplete());
    }

    #[test]
    fn test_transaction_serialization() {
        let tx = sample();

        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains("\"date\":\"2024-03-15\""));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, deserialized);
    }
}
