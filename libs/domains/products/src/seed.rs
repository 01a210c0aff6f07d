//! Demo catalog loaded at startup when `SEED_DATABASE` is enabled.

use crate::models::{Category, Product};

const CATEGORIES: &[(i64, &str)] = &[
    (1, "Active Wear - Men"),
    (2, "Active Wear - Women"),
    (3, "Mineral Water"),
    (4, "Publications"),
    (5, "Supplements"),
];

// (id, category, name, sku, price, available)
const PRODUCTS: &[(i64, i64, &str, &str, f64, bool)] = &[
    (1, 1, "Grunge Skater Jeans", "AWMGSJ", 68.0, true),
    (2, 1, "Polo Shirt", "AWMPS", 35.0, true),
    (3, 1, "Skater Graphic T-Shirt", "AWMSGT", 33.0, true),
    (4, 1, "Slicker Jacket", "AWMSJ", 125.0, true),
    (5, 1, "Thermal Fleece Jacket", "AWMTFJ", 60.0, true),
    (6, 1, "Unisex Thermal Vest", "AWMUTV", 95.0, true),
    (7, 1, "V-Neck Pullover", "AWMVNP", 65.0, true),
    (8, 1, "V-Neck Sweater", "AWMVNS", 65.0, true),
    (9, 1, "V-Neck T-Shirt", "AWMVNT", 17.0, true),
    (10, 2, "Bamboo Thermal Ski Coat", "AWWBTSC", 99.0, true),
    (11, 2, "Cross-Back Training Tank", "AWWCTT", 0.0, false),
    (12, 2, "Grunge Skater Jeans", "AWWGSJ", 68.0, true),
    (13, 2, "Slicker Jacket", "AWWSJ", 125.0, true),
    (14, 2, "Stretchy Dance Pants", "AWWSDP", 55.0, true),
    (15, 2, "Ultra-Soft Tank Top", "AWWUSTT", 22.0, true),
    (16, 2, "Unisex Thermal Vest", "AWWUTV", 95.0, true),
    (17, 2, "V-Neck Pullover", "AWWVNP", 65.0, false),
    (18, 3, "Blueberry Mineral Water", "MWB", 2.8, true),
    (19, 3, "Lemon-Lime Mineral Water", "MWLL", 2.8, true),
    (20, 3, "Orange Mineral Water", "MWO", 2.8, true),
    (21, 3, "Peach Mineral Water", "MWP", 2.8, true),
    (22, 3, "Raspberry Mineral Water", "MWR", 2.8, false),
    (23, 3, "Strawberry Mineral Water", "MWS", 2.8, true),
    (24, 4, "In the Kitchen with H+ Sport", "PITK", 24.99, true),
    (25, 5, "Calcium 400 IU (150 tablets)", "SC400", 9.99, true),
    (26, 5, "Flaxseed Oil 100 mg (90 capsules)", "SFO100", 12.49, true),
    (27, 5, "Iron 65 mg (150 caplets)", "SI65", 13.99, true),
    (28, 5, "Magnesium 250 mg (100 tablets)", "SM250", 12.49, false),
    (29, 5, "Multi-Vitamin (90 capsules)", "SMV", 9.99, true),
];

pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|&(id, name)| Category {
            id,
            name: name.to_string(),
        })
        .collect()
}

pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|&(id, category_id, name, sku, price, is_available)| Product {
            id,
            name: name.to_string(),
            sku: sku.to_string(),
            price,
            is_available,
            category_id,
            version: 0,
        })
        .collect()
}
