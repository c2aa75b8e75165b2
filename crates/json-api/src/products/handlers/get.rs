//! Get Product Handler

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use nexus_core::products::{Category, Product, Review};

use crate::{extensions::*, state::State};

/// One customer review
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    pub id: String,
    pub user: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        ReviewResponse {
            id: review.id,
            user: review.user,
            rating: review.rating,
            comment: review.comment,
            date: review.date,
        }
    }
}

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub rating: f64,
    /// Catalog section: hardware, game, or deals
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub specs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<ReviewResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

pub(crate) fn category_name(category: Category) -> &'static str {
    match category {
        Category::Hardware => "hardware",
        Category::Game => "game",
        Category::Deals => "deals",
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price.to_f64().unwrap_or_default(),
            image: product.image,
            rating: product.rating.to_f64().unwrap_or_default(),
            category: category_name(product.category).to_string(),
            brand: product.brand,
            specs: product.specs,
            platform: product.platform,
            genre: product.genre,
            reviews: product.reviews.into_iter().map(Into::into).collect(),
            original_price: product.original_price.and_then(|p| p.to_f64()),
            in_stock: product.in_stock,
            is_new: product.is_new,
        }
    }
}

/// Get Product Handler
///
/// Returns a single product by id.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "The product"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown product id"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .catalog
        .get_by_id(&id.into_inner())
        .await
        .ok_or_else(StatusError::not_found)?;

    Ok(Json(product.into()))
}
