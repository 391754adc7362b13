//! Smartphone purchase fixtures: brand, RAM, storage and price band against
//! whether the phone was bought (`Ya` / `Tidak`).

use crate::core::{Dataset, DatasetError, QueryInstance};

pub const RELATION: &str = "smartphone";
pub const ATTRIBUTE_NAMES: [&str; 4] = ["Brand", "RAM", "Storage", "Harga"];
pub const CLASS_NAME: &str = "Beli";

const SMARTPHONE_ROWS: [[&str; 5]; 12] = [
    ["Samsung", "6GB", "128GB", "Mahal", "Ya"],
    ["Samsung", "4GB", "64GB", "Murah", "Tidak"],
    ["Xiaomi", "8GB", "256GB", "Sedang", "Ya"],
    ["Xiaomi", "4GB", "64GB", "Murah", "Tidak"],
    ["Oppo", "6GB", "128GB", "Sedang", "Ya"],
    ["Oppo", "4GB", "64GB", "Murah", "Ya"],
    ["iPhone", "8GB", "256GB", "Mahal", "Ya"],
    ["iPhone", "4GB", "128GB", "Mahal", "Tidak"],
    ["Samsung", "8GB", "256GB", "Mahal", "Tidak"],
    ["Xiaomi", "6GB", "128GB", "Sedang", "Ya"],
    ["Oppo", "6GB", "64GB", "Murah", "Tidak"],
    ["iPhone", "6GB", "128GB", "Sedang", "Ya"],
];

const SMARTPHONE_EXTENDED_ROWS: [[&str; 5]; 96] = [
    ["Samsung", "6GB", "128GB", "Mahal", "Ya"],
    ["Samsung", "4GB", "64GB", "Murah", "Tidak"],
    ["Xiaomi", "8GB", "256GB", "Sedang", "Ya"],
    ["Xiaomi", "4GB", "64GB", "Murah", "Tidak"],
    ["Oppo", "6GB", "128GB", "Sedang", "Ya"],
    ["Oppo", "4GB", "64GB", "Murah", "Ya"],
    ["iPhone", "8GB", "256GB", "Mahal", "Ya"],
    ["iPhone", "4GB", "128GB", "Mahal", "Tidak"],
    ["Samsung", "8GB", "256GB", "Mahal", "Tidak"],
    ["Xiaomi", "6GB", "128GB", "Sedang", "Ya"],
    ["Oppo", "6GB", "64GB", "Murah", "Tidak"],
    ["iPhone", "6GB", "128GB", "Sedang", "Ya"],
    ["Samsung", "6GB", "64GB", "Sedang", "Ya"],
    ["Xiaomi", "6GB", "64GB", "Murah", "Tidak"],
    ["Oppo", "8GB", "256GB", "Mahal", "Ya"],
    ["iPhone", "6GB", "64GB", "Sedang", "Tidak"],
    ["Samsung", "4GB", "128GB", "Murah", "Tidak"],
    ["Xiaomi", "4GB", "128GB", "Sedang", "Ya"],
    ["Oppo", "4GB", "128GB", "Sedang", "Tidak"],
    ["iPhone", "8GB", "128GB", "Mahal", "Ya"],
    ["Samsung", "8GB", "128GB", "Mahal", "Ya"],
    ["Xiaomi", "8GB", "128GB", "Sedang", "Ya"],
    ["Oppo", "8GB", "128GB", "Mahal", "Ya"],
    ["iPhone", "4GB", "64GB", "Murah", "Tidak"],
    ["Xiaomi", "6GB", "256GB", "Sedang", "Ya"],
    ["Samsung", "6GB", "256GB", "Sedang", "Ya"],
    ["Oppo", "6GB", "256GB", "Mahal", "Ya"],
    ["iPhone", "6GB", "256GB", "Mahal", "Ya"],
    ["Samsung", "4GB", "256GB", "Sedang", "Tidak"],
    ["Xiaomi", "4GB", "256GB", "Murah", "Tidak"],
    ["Oppo", "4GB", "256GB", "Sedang", "Tidak"],
    ["iPhone", "4GB", "256GB", "Sedang", "Tidak"],
    ["Samsung", "8GB", "64GB", "Mahal", "Tidak"],
    ["Xiaomi", "8GB", "64GB", "Sedang", "Ya"],
    ["Oppo", "8GB", "64GB", "Mahal", "Ya"],
    ["iPhone", "8GB", "64GB", "Mahal", "Ya"],
    ["Samsung", "6GB", "128GB", "Sedang", "Ya"],
    ["Xiaomi", "6GB", "128GB", "Murah", "Ya"],
    ["Oppo", "6GB", "128GB", "Murah", "Tidak"],
    ["iPhone", "6GB", "128GB", "Mahal", "Ya"],
    ["Samsung", "4GB", "64GB", "Murah", "Tidak"],
    ["Xiaomi", "4GB", "64GB", "Murah", "Tidak"],
    ["Oppo", "4GB", "64GB", "Murah", "Ya"],
    ["iPhone", "4GB", "64GB", "Murah", "Tidak"],
    ["Samsung", "8GB", "256GB", "Mahal", "Ya"],
    ["Xiaomi", "8GB", "256GB", "Sedang", "Ya"],
    ["Oppo", "8GB", "256GB", "Mahal", "Ya"],
    ["iPhone", "8GB", "256GB", "Mahal", "Ya"],
    ["Samsung", "6GB", "64GB", "Sedang", "Ya"],
    ["Xiaomi", "6GB", "64GB", "Murah", "Tidak"],
    ["Oppo", "6GB", "64GB", "Sedang", "Tidak"],
    ["iPhone", "6GB", "64GB", "Sedang", "Tidak"],
    ["Samsung", "4GB", "128GB", "Murah", "Tidak"],
    ["Xiaomi", "4GB", "128GB", "Sedang", "Ya"],
    ["Oppo", "4GB", "128GB", "Sedang", "Tidak"],
    ["iPhone", "4GB", "128GB", "Sedang", "Tidak"],
    ["Samsung", "8GB", "128GB", "Mahal", "Ya"],
    ["Xiaomi", "8GB", "128GB", "Sedang", "Ya"],
    ["Oppo", "8GB", "128GB", "Mahal", "Ya"],
    ["iPhone", "8GB", "128GB", "Mahal", "Ya"],
    ["Samsung", "6GB", "256GB", "Mahal", "Ya"],
    ["Xiaomi", "6GB", "256GB", "Sedang", "Ya"],
    ["Oppo", "6GB", "256GB", "Sedang", "Ya"],
    ["iPhone", "6GB", "256GB", "Mahal", "Ya"],
    ["Samsung", "4GB", "256GB", "Murah", "Tidak"],
    ["Xiaomi", "4GB", "256GB", "Murah", "Tidak"],
    ["Oppo", "4GB", "256GB", "Sedang", "Tidak"],
    ["iPhone", "4GB", "256GB", "Murah", "Tidak"],
    ["Samsung", "8GB", "64GB", "Mahal", "Ya"],
    ["Xiaomi", "8GB", "64GB", "Sedang", "Ya"],
    ["Oppo", "8GB", "64GB", "Mahal", "Ya"],
    ["iPhone", "8GB", "64GB", "Mahal", "Ya"],
    ["Samsung", "6GB", "128GB", "Sedang", "Ya"],
    ["Xiaomi", "6GB", "128GB", "Murah", "Ya"],
    ["Oppo", "6GB", "128GB", "Sedang", "Tidak"],
    ["iPhone", "6GB", "128GB", "Mahal", "Ya"],
    ["Samsung", "4GB", "64GB", "Murah", "Tidak"],
    ["Xiaomi", "4GB", "64GB", "Murah", "Tidak"],
    ["Oppo", "4GB", "64GB", "Murah", "Ya"],
    ["iPhone", "4GB", "64GB", "Murah", "Tidak"],
    ["Samsung", "8GB", "256GB", "Mahal", "Ya"],
    ["Xiaomi", "8GB", "256GB", "Sedang", "Ya"],
    ["Oppo", "8GB", "256GB", "Mahal", "Ya"],
    ["iPhone", "8GB", "256GB", "Mahal", "Ya"],
    ["Samsung", "6GB", "64GB", "Sedang", "Ya"],
    ["Xiaomi", "6GB", "64GB", "Murah", "Tidak"],
    ["Oppo", "6GB", "64GB", "Sedang", "Tidak"],
    ["iPhone", "6GB", "64GB", "Sedang", "Tidak"],
    ["Samsung", "4GB", "128GB", "Murah", "Tidak"],
    ["Xiaomi", "4GB", "128GB", "Sedang", "Ya"],
    ["Oppo", "4GB", "128GB", "Sedang", "Tidak"],
    ["iPhone", "4GB", "128GB", "Sedang", "Tidak"],
    ["Samsung", "8GB", "128GB", "Mahal", "Ya"],
    ["Xiaomi", "8GB", "128GB", "Sedang", "Ya"],
    ["Oppo", "8GB", "128GB", "Mahal", "Ya"],
    ["iPhone", "8GB", "128GB", "Mahal", "Ya"],
];

// The last query uses a feature combination absent from the 12-row set.
const QUERY_ROWS: [[&str; 4]; 5] = [
    ["Samsung", "4GB", "64GB", "Murah"],
    ["iPhone", "6GB", "128GB", "Sedang"],
    ["Oppo", "6GB", "64GB", "Murah"],
    ["Xiaomi", "4GB", "64GB", "Murah"],
    ["iPhone", "4GB", "64GB", "Murah"],
];

pub fn smartphone() -> Result<Dataset, DatasetError> {
    Dataset::from_rows(RELATION, &ATTRIBUTE_NAMES, CLASS_NAME, &SMARTPHONE_ROWS)
}

pub fn smartphone_extended() -> Result<Dataset, DatasetError> {
    Dataset::from_rows(
        "smartphone-extended",
        &ATTRIBUTE_NAMES,
        CLASS_NAME,
        &SMARTPHONE_EXTENDED_ROWS,
    )
}

pub fn smartphone_queries() -> Vec<QueryInstance> {
    QUERY_ROWS
        .iter()
        .map(|row| QueryInstance::unlabeled(row.as_slice()))
        .collect()
}
