//! Query shaping: filter, sort, then paginate a snapshot of products.
//!
//! Filters are independent predicates combined with AND. Sorting is keyed by
//! a closed set of [`SortField`]s; an unknown field name leaves the order
//! untouched. Pagination is applied last.

use std::cmp::Ordering;
use std::str::FromStr;

use strum::{Display, EnumString};
use tracing::trace;

use crate::models::{Product, ProductQueryParameters};

pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const MAX_PAGE_SIZE: usize = 100;

/// Sortable product properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SortField {
    Id,
    Name,
    Sku,
    Price,
    IsAvailable,
    CategoryId,
}

impl SortField {
    /// Ascending comparison of two products on this field.
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => compare_text(&a.name, &b.name),
            SortField::Sku => compare_text(&a.sku, &b.sku),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::IsAvailable => a.is_available.cmp(&b.is_available),
            SortField::CategoryId => a.category_id.cmp(&b.category_id),
        }
    }
}

/// Case-insensitive order; strings equal ignoring case fall back to byte order.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `"desc"` in any case selects descending; anything else is ascending.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    size: usize,
}

impl Pagination {
    /// Values below 1 are raised to 1 and `size` is capped at [`MAX_PAGE_SIZE`].
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: usize::try_from(page.max(1)).unwrap_or(usize::MAX),
            size: usize::try_from(size.max(1))
                .unwrap_or(MAX_PAGE_SIZE)
                .min(MAX_PAGE_SIZE),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn offset(&self) -> usize {
        self.size.saturating_mul(self.page - 1)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

pub type Predicate = Box<dyn Fn(&Product) -> bool + Send + Sync>;

/// A fully resolved list request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search_term: Option<String>,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub sort: Option<(SortField, SortOrder)>,
    /// `None` returns every match.
    pub pagination: Option<Pagination>,
    pub available_only: bool,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve raw query parameters. Blank strings count as absent and an
    /// unrecognised `sortBy` disables sorting.
    pub fn from_parameters(params: &ProductQueryParameters) -> Self {
        let sort = params
            .sort_by
            .as_deref()
            .and_then(|field| SortField::from_str(field.trim()).ok())
            .map(|field| (field, SortOrder::from_param(params.sort_order.as_deref())));

        Self {
            min_price: params.min_price,
            max_price: params.max_price,
            search_term: non_empty(&params.search_term),
            sku: non_empty(&params.sku),
            name: non_empty(&params.name),
            sort,
            pagination: Some(Pagination::new(
                params.page.unwrap_or(1),
                params.size.unwrap_or(DEFAULT_PAGE_SIZE as i64),
            )),
            available_only: false,
        }
    }

    pub fn available_only(mut self, available_only: bool) -> Self {
        self.available_only = available_only;
        self
    }

    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort = Some((field, order));
        self
    }

    pub fn paginate(mut self, page: i64, size: i64) -> Self {
        self.pagination = Some(Pagination::new(page, size));
        self
    }

    pub fn unpaginated(mut self) -> Self {
        self.pagination = None;
        self
    }

    /// Build the predicate list for the filters that are set.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates: Vec<Predicate> = Vec::new();

        if let Some(min) = self.min_price {
            predicates.push(Box::new(move |p| p.price >= min));
        }
        if let Some(max) = self.max_price {
            predicates.push(Box::new(move |p| p.price <= max));
        }
        if let Some(term) = &self.search_term {
            let term = term.to_lowercase();
            predicates.push(Box::new(move |p| {
                p.name.to_lowercase().contains(&term) || p.sku.to_lowercase().contains(&term)
            }));
        }
        if let Some(sku) = &self.sku {
            let sku = sku.to_lowercase();
            predicates.push(Box::new(move |p| p.sku.to_lowercase() == sku));
        }
        if let Some(name) = &self.name {
            let name = name.to_lowercase();
            predicates.push(Box::new(move |p| p.name.to_lowercase().contains(&name)));
        }
        if self.available_only {
            predicates.push(Box::new(|p| p.is_available));
        }

        predicates
    }
}

/// Filter, sort and paginate `products`.
///
/// Sorting is stable so equal keys keep their incoming order.
pub fn apply(products: Vec<Product>, query: &ProductQuery) -> Vec<Product> {
    let total = products.len();
    let predicates = query.predicates();

    let mut matched: Vec<Product> = products
        .into_iter()
        .filter(|product| predicates.iter().all(|predicate| predicate(product)))
        .collect();

    if let Some((field, order)) = query.sort {
        matched.sort_by(|a, b| match order {
            SortOrder::Asc => field.compare(a, b),
            SortOrder::Desc => field.compare(b, a),
        });
    }

    let matched_count = matched.len();
    let shaped: Vec<Product> = match query.pagination {
        Some(pagination) => matched
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.size())
            .collect(),
        None => matched,
    };

    trace!(total, matched = matched_count, returned = shaped.len(), "query applied");
    shaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, sku: &str, price: f64, available: bool) -> Product {
        Product {
            id,
            name: name.to_string(),
            sku: sku.to_string(),
            price,
            is_available: available,
            category_id: 1,
            version: 0,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Shirt", "AWMS1", 20.0, true),
            product(2, "Jeans", "ABSH1", 60.0, false),
            product(3, "Jacket", "AWMJ1", 125.0, true),
            product(4, "Water", "MWB", 2.5, true),
            product(5, "Tank", "AWWT", 20.0, true),
        ]
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let query = ProductQuery {
            min_price: Some(20.0),
            max_price: Some(60.0),
            ..Default::default()
        };
        assert_eq!(ids(&apply(catalog(), &query)), vec![1, 2, 5]);
    }

    #[test]
    fn test_search_term_matches_name_or_sku_case_insensitively() {
        let query = ProductQuery {
            search_term: Some("SH".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(catalog(), &query)), vec![1, 2]);
    }

    #[test]
    fn test_sku_is_exact_and_combines_with_search() {
        let query = ProductQuery {
            sku: Some("absh1".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(catalog(), &query)), vec![2]);

        let query = ProductQuery {
            sku: Some("ABSH".into()),
            ..Default::default()
        };
        assert!(apply(catalog(), &query).is_empty());

        let query = ProductQuery {
            sku: Some("ABSH1".into()),
            search_term: Some("shirt".into()),
            ..Default::default()
        };
        assert!(apply(catalog(), &query).is_empty());
    }

    #[test]
    fn test_name_is_substring_match() {
        let query = ProductQuery {
            name: Some("ja".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(catalog(), &query)), vec![3]);
    }

    #[test]
    fn test_available_only_flag() {
        let query = ProductQuery::new().available_only(true);
        assert_eq!(ids(&apply(catalog(), &query)), vec![1, 3, 4, 5]);
        assert_eq!(apply(catalog(), &ProductQuery::new()).len(), 5);
    }

    #[test]
    fn test_sort_descending_is_stable_for_ties() {
        let query = ProductQuery::new().sorted_by(SortField::Price, SortOrder::Desc);
        assert_eq!(ids(&apply(catalog(), &query)), vec![3, 2, 1, 5, 4]);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let products = vec![
            product(1, "Zip Hoodie", "zh1", 40.0, true),
            product(2, "apple Tee", "AT1", 15.0, true),
            product(3, "Apple Tee", "at1", 15.0, true),
        ];

        let by_name = ProductQuery::new().sorted_by(SortField::Name, SortOrder::Asc);
        assert_eq!(ids(&apply(products.clone(), &by_name)), vec![3, 2, 1]);

        let by_sku = ProductQuery::new().sorted_by(SortField::Sku, SortOrder::Desc);
        assert_eq!(ids(&apply(products, &by_sku)), vec![1, 3, 2]);
    }

    #[test]
    fn test_unknown_sort_field_keeps_order() {
        let params = ProductQueryParameters {
            sort_by: Some("colour".into()),
            sort_order: Some("desc".into()),
            ..Default::default()
        };
        let query = ProductQuery::from_parameters(&params);
        assert!(query.sort.is_none());
        assert_eq!(ids(&apply(catalog(), &query)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sort_field_parsing_is_case_insensitive() {
        assert_eq!(SortField::from_str("price").unwrap(), SortField::Price);
        assert_eq!(SortField::from_str("Price").unwrap(), SortField::Price);
        assert_eq!(
            SortField::from_str("isAvailable").unwrap(),
            SortField::IsAvailable
        );
        assert_eq!(
            SortField::from_str("CATEGORYID").unwrap(),
            SortField::CategoryId
        );
        assert!(SortField::from_str("colour").is_err());
    }

    #[test]
    fn test_sort_order_from_param() {
        assert_eq!(SortOrder::from_param(Some("DESC")), SortOrder::Desc);
        assert_eq!(SortOrder::from_param(Some("descending")), SortOrder::Asc);
        assert_eq!(SortOrder::from_param(None), SortOrder::Asc);
    }

    #[test]
    fn test_second_page_of_ten_over_twenty_five() {
        let products: Vec<Product> = (1..=25)
            .map(|i| product(i, &format!("Item {i}"), &format!("SKU{i}"), i as f64, true))
            .collect();
        let query = ProductQuery::new().paginate(2, 10);
        assert_eq!(ids(&apply(products, &query)), (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_pagination_saturates_and_caps() {
        let pagination = Pagination::new(0, -5);
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.size(), 1);
        assert_eq!(pagination.offset(), 0);

        assert_eq!(Pagination::new(1, 1_000).size(), MAX_PAGE_SIZE);
        assert_eq!(Pagination::new(i64::MAX, 100).offset(), usize::MAX);
    }

    #[test]
    fn test_blank_strings_are_ignored() {
        let params = ProductQueryParameters {
            sku: Some("  ".into()),
            search_term: Some(String::new()),
            ..Default::default()
        };
        let query = ProductQuery::from_parameters(&params);
        assert!(query.sku.is_none());
        assert!(query.search_term.is_none());
        assert_eq!(query.pagination, Some(Pagination::default()));
    }
}
