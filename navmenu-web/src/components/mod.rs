mod control;
mod controller;
mod route_marker;

pub use controller::MenuToggleController;
pub use route_marker::mark_route;
