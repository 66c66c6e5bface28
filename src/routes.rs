//! The application's route table, shared by the render server and the
//! client bootstrap.

use crate::pages::{load_items, HOME, PARK};
use crate::routing::{RouteDescriptor, RouteError, RouteTable};

pub const HOME_KEY: &str = "homepage";
pub const PARK_KEY: &str = "park";

/// Build the route table.
pub fn app_routes() -> Result<RouteTable, RouteError> {
    RouteTable::new(vec![
        RouteDescriptor::new(HOME_KEY, "/", true, &HOME).with_loader(load_items),
        RouteDescriptor::new(PARK_KEY, "/park", true, &PARK),
    ])
}
