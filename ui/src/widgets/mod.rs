mod checkbox_demo;
mod nav_bar;
pub mod users;

pub use checkbox_demo::checkbox_demo;
pub use nav_bar::{nav_bar, route_placeholder};
pub use users::users_panel;
