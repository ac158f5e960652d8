//! # Catalog
//!
//! The fixed, immutable set of purchasable products.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Catalog::builtin() / Catalog::new(products)                            │
//! │        │  validate every product, reject duplicate ids                  │
//! │        ▼                                                                │
//! │  ┌───────────────────────────────────────────────┐                      │
//! │  │  products: Vec<Product>   (catalog order)     │ ◄── query engine     │
//! │  │  index:    ProductId → position               │ ◄── cart ledger      │
//! │  └───────────────────────────────────────────────┘                      │
//! │        never mutated again                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog order matters: it is the tie-breaker for every sort mode.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::{FacetFilter, Product, ProductId};
use crate::validation::{validate_product, validate_unique_ids};

/// Immutable, ordered product catalog with O(1) id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Builds a catalog from product records, in the given order.
    ///
    /// ## Errors
    /// - `CoreError::EmptyCatalog` if `products` is empty
    /// - `CoreError::Validation` if a record is invalid or an id repeats
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        if products.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }

        for product in &products {
            validate_product(product)?;
        }
        validate_unique_ids(&products)?;

        Ok(Self::assemble(products))
    }

    /// The storefront's shipped skincare catalog.
    pub fn builtin() -> Self {
        Self::assemble(vec![
            Product::new(
                1,
                "Serum Vitamina C",
                "Ilumina y unifica el tono con activos antioxidantes.",
                78000,
                "Serums",
                "Todo tipo",
                true,
            ),
            Product::new(
                2,
                "Crema de Rosas",
                "Nutrición profunda con extracto de rosas y karité.",
                92000,
                "Hidratantes",
                "Seca",
                true,
            ),
            Product::new(
                3,
                "Gel Calmante Aloe",
                "Reduce rojeces y refresca pieles sensibles.",
                65000,
                "Hidratantes",
                "Sensible",
                false,
            ),
            Product::new(
                4,
                "Mascarilla Detox Arcilla",
                "Limpieza profunda y control de brillo.",
                54000,
                "Mascarillas",
                "Grasa",
                false,
            ),
            Product::new(
                5,
                "Aceite Facial Nocturno",
                "Repara la barrera cutánea con omegas esenciales.",
                88000,
                "Aceites",
                "Mixta",
                true,
            ),
            Product::new(
                6,
                "Bruma Hidratante",
                "Reaplica hidratación durante el día.",
                45000,
                "Brumas",
                "Todo tipo",
                false,
            ),
        ])
    }

    fn assemble(products: Vec<Product>) -> Self {
        let index = products
            .iter()
            .enumerate()
            .map(|(pos, product)| (product.id, pos))
            .collect();
        Catalog { products, index }
    }

    /// Resolves an id to its product.
    #[inline]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&pos| &self.products[pos])
    }

    /// Resolves an id, reporting absence as an error.
    pub fn require(&self, id: ProductId) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    #[inline]
    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    /// All products in catalog order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Choices for the category select: `Any`, then each distinct category in
    /// first-seen catalog order.
    pub fn category_options(&self) -> Vec<FacetFilter> {
        self.facet_options(|p| &p.category)
    }

    /// Choices for the skin type select, same shape as `category_options`.
    pub fn skin_type_options(&self) -> Vec<FacetFilter> {
        self.facet_options(|p| &p.skin_type)
    }

    fn facet_options<F>(&self, facet: F) -> Vec<FacetFilter>
    where
        F: Fn(&Product) -> &String,
    {
        let mut options = vec![FacetFilter::Any];
        for product in &self.products {
            let value = facet(product);
            if !options.iter().any(|o| matches!(o, FacetFilter::Exactly(v) if v == value)) {
                options.push(FacetFilter::Exactly(value.clone()));
            }
        }
        options
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
