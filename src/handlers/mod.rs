//! Command handlers, one module per command.
//!
//! Handlers follow the service convention: a `COMMAND` name, an optional
//! `guard` validating input shape, and `handle`. Role gating runs inside
//! `handle` through `ctx.identity()` / `ctx.require_admin()`.

pub mod cafe_get;
pub mod cafe_update;
pub mod dashboard_stats;
pub mod menu_create;
pub mod menu_delete;
pub mod menu_get;
pub mod menu_list;
pub mod menu_recommendations;
pub mod menu_update;
pub mod order_get;
pub mod order_list_all;
pub mod order_list_mine;
pub mod order_place;
pub mod order_set_status;

use crate::service::Service;
use crate::state::AppState;

/// Build the service with every command registered.
pub fn service(state: AppState) -> Service<AppState> {
    let service = Service::new(state)
        .command(menu_list::COMMAND, menu_list::handle)
        .command(menu_recommendations::COMMAND, menu_recommendations::handle)
        .command(order_list_mine::COMMAND, order_list_mine::handle)
        .command(order_list_all::COMMAND, order_list_all::handle)
        .command(cafe_get::COMMAND, cafe_get::handle)
        .command(dashboard_stats::COMMAND, dashboard_stats::handle);

    crate::register_handlers!(
        service,
        menu_get,
        menu_create,
        menu_update,
        menu_delete,
        order_place,
        order_get,
        order_set_status,
        cafe_update,
    )
}
