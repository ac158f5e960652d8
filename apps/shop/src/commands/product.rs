//! # Product Commands
//!
//! Filter-bar handlers, the product detail lookup and the select options.
//!
//! ## Filter Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Shopper types "crema" / picks "Hidratantes" / picks "price-asc"        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_search / set_category / set_skin_type / set_sort                   │
//! │       │  overwrite one Query field                                      │
//! │       ▼                                                                 │
//! │  compute_filtered_view(catalog, query)   (whole view, every time)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> ──► product grid ("no results" if empty)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bloom_core::{FacetFilter, FilteredView, Product, ProductId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::error::ApiResult;
use crate::state::Session;

/// What the detail view shows for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDetails {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Rendered as "Ideal para: ..."
    pub skin_type: String,
}

impl From<&Product> for ProductDetails {
    fn from(p: &Product) -> Self {
        ProductDetails {
            id: p.id,
            name: p.name.clone(),
            description: p.description.clone(),
            skin_type: p.skin_type.clone(),
        }
    }
}

/// Options for the two facet select boxes, `Any` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FilterOptions {
    pub categories: Vec<FacetFilter>,
    pub skin_types: Vec<FacetFilter>,
}

fn to_owned_view(view: FilteredView<'_>, field: &str) -> Vec<Product> {
    let products: Vec<Product> = view.into_iter().cloned().collect();
    info!(count = products.len(), changed = field, "product view recomputed");
    products
}

/// Current filtered product list.
pub fn get_products(session: &Session) -> Vec<Product> {
    debug!("get_products command");
    to_owned_view(session.filtered_view(), "none")
}

/// Search box input.
pub fn set_search(session: &mut Session, search: String) -> Vec<Product> {
    debug!(search = %search, "set_search command");
    to_owned_view(session.set_search(search), "search")
}

/// Category select change.
pub fn set_category(session: &mut Session, category: FacetFilter) -> Vec<Product> {
    debug!(?category, "set_category command");
    to_owned_view(session.set_category(category), "category")
}

/// Skin type select change.
pub fn set_skin_type(session: &mut Session, skin_type: FacetFilter) -> Vec<Product> {
    debug!(?skin_type, "set_skin_type command");
    to_owned_view(session.set_skin_type(skin_type), "skin_type")
}

/// Sort select change, taking the raw `<option value>`.
pub fn set_sort(session: &mut Session, sort: &str) -> Vec<Product> {
    debug!(sort = %sort, "set_sort command");
    to_owned_view(session.set_sort_raw(sort), "sort")
}

/// Product detail lookup ("Ver detalles").
///
/// ## Errors
/// `NOT_FOUND` if the id is not in the catalog.
pub fn view_details(session: &Session, product_id: ProductId) -> ApiResult<ProductDetails> {
    debug!(product_id = %product_id, "view_details command");
    let product = session.product(product_id)?;
    Ok(ProductDetails::from(product))
}

/// Choices for the category and skin type selects.
pub fn get_filter_options(session: &Session) -> FilterOptions {
    FilterOptions {
        categories: session.catalog().category_options(),
        skin_types: session.catalog().skin_type_options(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bloom_core::SortMode;

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_search_crema() {
        let mut session = Session::default();
        assert_eq!(ids(&set_search(&mut session, "crema".to_string())), vec![2]);
    }

    #[test]
    fn test_filters_combine() {
        let mut session = Session::default();
        set_category(&mut session, FacetFilter::exactly("Hidratantes"));
        let products = set_sort(&mut session, "price-asc");
        assert_eq!(ids(&products), vec![3, 2]);

        let products = set_skin_type(&mut session, FacetFilter::exactly("Seca"));
        assert_eq!(ids(&products), vec![2]);
    }

    #[test]
    fn test_unknown_sort_value_falls_back() {
        let mut session = Session::default();
        set_sort(&mut session, "price-desc");
        let products = set_sort(&mut session, "popularity");

        assert_eq!(ids(&products), vec![1, 2, 5, 3, 4, 6]);
        assert_eq!(session.query().sort, SortMode::Featured);
    }

    #[test]
    fn test_get_products_default() {
        let session = Session::default();
        assert_eq!(ids(&get_products(&session)), vec![1, 2, 5, 3, 4, 6]);
    }

    #[test]
    fn test_view_details() {
        let session = Session::default();
        let details = view_details(&session, ProductId::new(3)).unwrap();
        assert_eq!(details.name, "Gel Calmante Aloe");
        assert_eq!(details.skin_type, "Sensible");

        let err = view_details(&session, ProductId::new(42)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_filter_options() {
        let session = Session::default();
        let options = get_filter_options(&session);
        assert_eq!(options.categories.len(), 6);
        assert_eq!(options.skin_types.len(), 6);
        assert_eq!(options.categories[0], FacetFilter::Any);
        assert_eq!(options.skin_types[0], FacetFilter::Any);
    }
}
