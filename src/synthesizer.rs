//! Deterministic generator of fictitious sales transactions.
//!
//! Rows are sampled from a seeded [`StdRng`], so the same row count and
//! seed always produce an identical table. After sampling, a fraction of
//! rows is appended again as duplicates and then a fraction of regions is
//! blanked, in that order, to give the cleaner something to do.

use crate::config::SynthesisConfig;
use crate::error::{DashboardError, Result};
use crate::types::catalog::Catalog;
use crate::types::transaction::Transaction;
use chrono::Duration;
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::{debug, info};

/// Generator of the raw (dirty) transaction table
pub struct DataSynthesizer {
    config: SynthesisConfig,
    catalog: Catalog,
    /// Unit price distribution per category, parallel to `catalog.categories`
    prices: Vec<Normal<f64>>,
}

impl DataSynthesizer {
    /// Create a synthesizer, validating parameters up front
    pub fn new(config: SynthesisConfig, catalog: Catalog) -> Result<Self> {
        config.validate()?;
        catalog.validate()?;

        let prices = catalog
            .categories
            .iter()
            .map(|category| {
                Normal::new(category.base_price, config.price_std_dev).map_err(|e| {
                    DashboardError::InvalidCatalog(format!(
                        "price distribution for '{}': {}",
                        category.name, e
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            config,
            catalog,
            prices,
        })
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Generate `rows` clean samples plus injected duplicates and gaps.
    ///
    /// Fails with [`DashboardError::InvalidRowCount`] when `rows` is zero.
    pub fn generate(&self, rows: usize) -> Result<Vec<Transaction>> {
        if rows == 0 {
            return Err(DashboardError::InvalidRowCount(rows));
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut table: Vec<Transaction> = (0..rows).map(|_| self.sample_row(&mut rng)).collect();

        let duplicates = self.append_duplicates(&mut rng, &mut table);

        // Duplicates copy revenue verbatim; recompute so it never drifts.
        for row in &mut table {
            row.recompute_revenue();
        }

        let blanked = self.blank_regions(&mut rng, &mut table);

        info!(
            rows = rows,
            seed = self.config.seed,
            duplicates = duplicates,
            missing_regions = blanked,
            total = table.len(),
            "Synthesized transaction table"
        );

        Ok(table)
    }

    fn sample_row(&self, rng: &mut StdRng) -> Transaction {
        // validate() guarantees non-empty categories, products and regions
        let pick = rng.gen_range(0..self.catalog.categories.len());
        let category = &self.catalog.categories[pick];
        let product = &category.products[rng.gen_range(0..category.products.len())];

        let sampled = round_cents(self.prices[pick].sample(rng));
        let unit_price = if sampled > 0.0 {
            sampled
        } else {
            self.config.fallback_price
        };

        let quantity = rng.gen_range(self.config.quantity_min..=self.config.quantity_max);
        let region = &self.catalog.regions[rng.gen_range(0..self.catalog.regions.len())];
        let offset = rng.gen_range(0..self.config.window_days);
        let date = self.config.start_date + Duration::days(i64::from(offset));

        Transaction::new(date, product, &category.name, unit_price, quantity, region)
    }

    /// Append a with-replacement resample of existing rows
    fn append_duplicates(&self, rng: &mut StdRng, table: &mut Vec<Transaction>) -> usize {
        let count = sample_size(table.len(), self.config.duplicate_fraction);
        let picked: Vec<Transaction> = (0..count)
            .filter_map(|_| table.choose(rng).cloned())
            .collect();

        debug!(count = picked.len(), "Appending duplicate rows");
        table.extend(picked);
        count
    }

    /// Blank the region of distinct positions in the post-duplication table
    fn blank_regions(&self, rng: &mut StdRng, table: &mut [Transaction]) -> usize {
        let count = sample_size(table.len(), self.config.missing_region_fraction);
        for position in index::sample(rng, table.len(), count) {
            table[position].region = None;
        }

        debug!(count = count, "Blanked region values");
        count
    }
}

/// Number of rows a fractional sample selects, rounded half away from zero
fn sample_size(len: usize, fraction: f64) -> usize {
    ((len as f64 * fraction).round() as usize).min(len)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn synthesizer() -> DataSynthesizer {
        DataSynthesizer::new(SynthesisConfig::default(), Catalog::default()).unwrap()
    }

    #[test]
    fn test_deterministic_output() {
        let synth = synthesizer();
        let first = synth.generate(1000).unwrap();
        let second = synth.generate(1000).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_default_scenario_shape() {
        let table = synthesizer().generate(1000).unwrap();

        // 2% duplicates appended
        assert_eq!(table.len(), 1020);
        assert!(table.len() >= 1000 && table.len() <= 1300);

        // 5% of the post-duplication rows lose their region
        let missing = table.iter().filter(|t| t.region.is_none()).count();
        assert_eq!(missing, 51);
        assert!(table.iter().all(|t| t.category.is_some()));
    }

    #[test]
    fn test_revenue_invariant() {
        let table = synthesizer().generate(500).unwrap();
        for row in &table {
            assert_eq!(row.revenue, row.unit_price * row.quantity as f64);
        }
    }

    #[test]
    fn test_values_within_catalog_and_window() {
        let catalog = Catalog::default();
        let table = synthesizer().generate(1000).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = start + Duration::days(364);

        for row in &table {
            let category = catalog
                .category(row.category.as_deref().unwrap())
                .expect("known category");
            assert!(category.products.contains(&row.product));
            if let Some(region) = &row.region {
                assert!(catalog.regions.contains(region));
            }
            assert!((1..=4).contains(&row.quantity));
            assert!(row.unit_price > 0.0);
            assert!(row.date >= start && row.date <= end);
        }
    }

    #[test]
    fn test_duplicates_are_exact_copies() {
        let table = synthesizer().generate(1000).unwrap();
        let distinct: HashSet<_> = table.iter().map(Transaction::row_key).collect();
        assert!(distinct.len() < table.len());
    }

    #[test]
    fn test_negative_samples_use_fallback() {
        let config = SynthesisConfig {
            price_std_dev: 500.0,
            ..SynthesisConfig::default()
        };
        let catalog = Catalog {
            categories: vec![crate::types::CategorySpec::new("Clothing", 50.0, &["Jeans"])],
            ..Catalog::default()
        };
        let table = DataSynthesizer::new(config, catalog)
            .unwrap()
            .generate(500)
            .unwrap();

        assert!(table.iter().any(|t| t.unit_price == 20.0));
        assert!(table.iter().all(|t| t.unit_price > 0.0));
    }

    #[test]
    fn test_prices_centered_on_base_price() {
        let table = synthesizer().generate(3000).unwrap();
        let catalog = Catalog::default();

        for spec in &catalog.categories {
            let prices: Vec<f64> = table
                .iter()
                .filter(|t| t.category.as_deref() == Some(spec.name.as_str()))
                .map(|t| t.unit_price)
                .collect();
            let mean = prices.iter().sum::<f64>() / prices.len() as f64;
            // Clothing (base 50) is pulled up slightly by the fallback floor
            assert!((mean - spec.base_price).abs() < 15.0, "{}: {}", spec.name, mean);
        }
    }

    #[test]
    fn test_invalid_std_dev_rejected_at_construction() {
        let config = SynthesisConfig {
            price_std_dev: f64::INFINITY,
            ..SynthesisConfig::default()
        };
        assert!(matches!(
            DataSynthesizer::new(config, Catalog::default()),
            Err(DashboardError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_zero_rows_rejected() {
        assert_eq!(
            synthesizer().generate(0),
            Err(DashboardError::InvalidRowCount(0))
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let other = DataSynthesizer::new(
            SynthesisConfig {
                seed: 7,
                ..SynthesisConfig::default()
            },
            Catalog::default(),
        )
        .unwrap();

        assert_ne!(synthesizer().generate(100).unwrap(), other.generate(100).unwrap());
    }

    #[test]
    fn test_sample_size_rounding() {
        assert_eq!(sample_size(1000, 0.02), 20);
        assert_eq!(sample_size(1020, 0.05), 51);
        assert_eq!(sample_size(10, 0.02), 0);
        assert_eq!(sample_size(3, 1.0), 3);
    }
}
