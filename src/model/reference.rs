use std::collections::BTreeSet;

use crate::model::table::{AtarTable, TableError};

/// Subject ids that satisfy the English requirement by default.
const DEFAULT_MANDATORY_SUBJECTS: &[&str] = &["ENGLISH", "ENGLISH_LANGUAGE", "LITERATURE", "EAL"];

/// (percentile rank, minimum aggregate) for the bundled reference year.
const REFERENCE_CHECKPOINTS: &[(f64, f64)] = &[
    (99.95, 195.00),
    (99.90, 190.00),
    (99.80, 185.50),
    (99.70, 182.00),
    (99.60, 179.00),
    (99.50, 176.50),
    (99.25, 172.00),
    (99.00, 168.50),
    (98.50, 163.00),
    (98.00, 158.80),
    (97.50, 155.20),
    (97.00, 152.10),
    (96.00, 146.90),
    (95.00, 142.60),
    (94.00, 138.90),
    (93.00, 135.60),
    (92.00, 132.60),
    (91.00, 129.90),
    (90.00, 127.40),
    (89.00, 125.00),
    (88.00, 122.80),
    (87.00, 120.70),
    (86.00, 118.70),
    (85.00, 116.80),
    (84.00, 115.00),
    (83.00, 113.30),
    (82.00, 111.60),
    (81.00, 110.00),
    (80.00, 108.40),
    (77.50, 104.70),
    (75.00, 101.20),
    (72.50, 97.90),
    (70.00, 94.80),
    (65.00, 90.60),
    (60.00, 87.20),
    (55.00, 84.60),
    (50.00, 82.60),
    (45.00, 80.90),
    (40.00, 79.51),
];

pub fn reference_table() -> Result<AtarTable, TableError> {
    AtarTable::from_pairs(REFERENCE_CHECKPOINTS.iter().copied())
}

pub fn default_mandatory_subjects() -> BTreeSet<String> {
    DEFAULT_MANDATORY_SUBJECTS
        .iter()
        .map(|s| s.to_string())
        .collect()
}
