//! Product catalog used by the data synthesizer

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};

/// A product category with its base unit price and product list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    /// Category name (e.g. "Electronics")
    pub name: String,
    /// Mean of the unit price distribution
    pub base_price: f64,
    /// Products sold under this category
    pub products: Vec<String>,
}

impl CategorySpec {
    pub fn new(name: &str, base_price: f64, products: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            base_price,
            products: products.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Fixed sets of categories, products and regions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub categories: Vec<CategorySpec>,
    pub regions: Vec<String>,
}

impl Catalog {
    /// Check that every set the synthesizer samples from is non-empty
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(DashboardError::InvalidCatalog(
                "at least one category is required".to_string(),
            ));
        }
        if self.regions.is_empty() {
            return Err(DashboardError::InvalidCatalog(
                "at least one region is required".to_string(),
            ));
        }
        for category in &self.categories {
            if category.products.is_empty() {
                return Err(DashboardError::InvalidCatalog(format!(
                    "category '{}' has no products",
                    category.name
                )));
            }
            if !(category.base_price.is_finite() && category.base_price > 0.0) {
                return Err(DashboardError::InvalidCatalog(format!(
                    "category '{}' has non-positive base price {}",
                    category.name, category.base_price
                )));
            }
        }
        Ok(())
    }

    /// Look up a category by name
    pub fn category(&self, name: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|c| c.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            categories: vec![
                CategorySpec::new(
                    "Electronics",
                    800.0,
                    &["Smartphone", "Laptop", "Tablet", "Monitor"],
                ),
                CategorySpec::new("Clothing", 50.0, &["T-Shirt", "Jeans", "Jacket", "Sneakers"]),
                CategorySpec::new("Home", 300.0, &["Sofa", "Table", "Lamp", "Gaming Chair"]),
            ],
            regions: ["Southeast", "South", "Northeast", "North", "Center-West"]
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.categories.len(), 3);
        assert_eq!(catalog.regions.len(), 5);
        assert_eq!(catalog.category("Home").map(|c| c.base_price), Some(300.0));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_empty_products_rejected() {
        let mut catalog = Catalog::default();
        catalog.categories[1].products.clear();

        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("Clothing"));
    }

    #[test]
    fn test_empty_regions_rejected() {
        let catalog = Catalog {
            regions: Vec::new(),
            ..Catalog::default()
        };
        assert!(matches!(
            catalog.validate(),
            Err(DashboardError::InvalidCatalog(_))
        ));
    }
}
