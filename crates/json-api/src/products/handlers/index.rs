//! Product Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use nexus_core::products::Category;

use crate::{extensions::*, products::get::ProductResponse, state::State};

/// Product List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

fn parse_category(name: &str) -> Result<Category, StatusError> {
    match name {
        "hardware" => Ok(Category::Hardware),
        "game" => Ok(Category::Game),
        "deals" => Ok(Category::Deals),
        _ => Err(StatusError::bad_request().brief("Unknown category")),
    }
}

/// Product Index Handler
///
/// Returns the catalog, optionally filtered to one category section.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "The product list"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown category"),
    ),
)]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = match category.into_inner() {
        Some(name) => {
            state
                .app
                .catalog
                .list_by_category(parse_category(&name)?)
                .await
        }
        None => state.app.catalog.list_products().await,
    };

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
