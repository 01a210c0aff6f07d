//! Shared test utilities for domain testing
//!
//! - `TestDataBuilder`: deterministic product names, SKUs and prices
//! - `assertions`: custom assertion helpers
//!
//! # Usage
//!
//! ```
//! use test_utils::TestDataBuilder;
//!
//! let builder = TestDataBuilder::from_test_name("create_product");
//! let name = builder.name("product", "main");
//! let sku = builder.sku(1);
//! assert!(sku.starts_with("TST"));
//! ```

/// Builder for test data with deterministic randomization
///
/// The same seed always yields the same data, so failures reproduce.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Unique display name, e.g. `"test-product-12345-main"`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Upper-case SKU unique per builder and index, e.g. `"TST3039-1"`
    pub fn sku(&self, index: u32) -> String {
        format!("TST{}-{}", self.seed % 10_000, index)
    }

    /// Price in `[1.00, 200.00]` with two decimals
    pub fn price(&self, index: u32) -> f64 {
        let mixed = self
            .seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(u64::from(index).wrapping_mul(1_442_695_040_888_963_407));
        let cents = 100 + (mixed >> 33) % 19_901;
        cents as f64 / 100.0
    }
}

/// Test assertion helpers
pub mod assertions {
    use std::fmt::Debug;

    /// Assert that two id lists are equal, order included
    pub fn assert_ids_eq(actual: &[i64], expected: &[i64], context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected ids {:?}, got {:?}",
            context, expected, actual
        );
    }

    /// Assert that `items` is ordered by `key` (ascending, or descending when `descending`)
    pub fn assert_sorted_by<T, K, F>(items: &[T], key: F, descending: bool, context: &str)
    where
        K: PartialOrd + Debug,
        F: Fn(&T) -> K,
    {
        for (i, pair) in items.windows(2).enumerate() {
            let (a, b) = (key(&pair[0]), key(&pair[1]));
            let ordered = if descending { a >= b } else { a <= b };
            assert!(
                ordered,
                "{}: items {} and {} out of order ({:?}, {:?})",
                context,
                i,
                i + 1,
                a,
                b
            );
        }
    }
}
