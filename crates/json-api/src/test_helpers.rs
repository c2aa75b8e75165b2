//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use nexus_app::{catalog::MockCatalogService, context::AppContext, orders::MockOrdersService};

use crate::state::State;

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_submit_order().never();

    orders
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_products().never();
    catalog.expect_get_by_id().never();
    catalog.expect_list_by_category().never();

    catalog
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    Arc::new(State::new(AppContext::new(
        Arc::new(orders),
        Arc::new(strict_catalog_mock()),
    )))
}

pub(crate) fn state_with_catalog(catalog: MockCatalogService) -> Arc<State> {
    Arc::new(State::new(AppContext::new(
        Arc::new(strict_orders_mock()),
        Arc::new(catalog),
    )))
}

pub(crate) fn checkout_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with_orders(orders))).push(route))
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with_catalog(catalog))).push(route))
}
