//! App Router

use salvo::Router;

use crate::{checkout, products};

pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("checkout").post(checkout::create::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{id}").get(products::get::handler)),
        )
}
