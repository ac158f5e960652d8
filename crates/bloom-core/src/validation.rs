//! # Validation Module
//!
//! Checks applied to product records before they become part of a catalog.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Catalog::new(products)                                                │
//! │  ├── THIS MODULE: per-product rules (id, name, price)                  │
//! │  └── THIS MODULE: cross-product rule (unique ids)                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Catalog is immutable afterwards: query and ledger code can rely on    │
//! │  every id being positive and unique without re-checking.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a single product record.
///
/// ## Rules
/// - id must be positive (0 is reserved as "no product")
/// - name, category and skin type must not be blank
/// - price must be non-negative (zero is a free sample)
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.id.get() == 0 {
        return Err(ValidationError::MustBePositive {
            field: "id".to_string(),
        });
    }

    for (field, value) in [
        ("name", &product.name),
        ("category", &product.category),
        ("skin type", &product.skin_type),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }
    }

    if product.price.is_negative() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates that no two products share an id.
pub fn validate_unique_ids(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: product.id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str, price: i64) -> Product {
        Product::new(id, name, "", price, "Serums", "Seca", false)
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&product(1, "Serum", 1000)).is_ok());
        assert!(validate_product(&product(1, "Sample", 0)).is_ok());

        assert!(matches!(
            validate_product(&product(0, "Serum", 1000)),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_product(&product(1, "   ", 1000)),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_product(&product(1, "Serum", -5)).is_err());
    }

    #[test]
    fn test_validate_product_blank_facets() {
        let mut p = product(1, "Serum", 1000);
        p.skin_type = String::new();
        let err = validate_product(&p).unwrap_err();
        assert_eq!(err.to_string(), "skin type is required");
    }

    #[test]
    fn test_validate_unique_ids() {
        let ok = vec![product(1, "A", 1), product(2, "B", 2)];
        assert!(validate_unique_ids(&ok).is_ok());

        let dup = vec![product(1, "A", 1), product(2, "B", 2), product(1, "C", 3)];
        let err = validate_unique_ids(&dup).unwrap_err();
        assert_eq!(err.to_string(), "id '1' already exists");
    }
}
