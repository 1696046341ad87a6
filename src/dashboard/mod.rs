pub mod controller;
pub mod selection;

pub use controller::{DashboardController, DashboardData, DashboardSnapshot};
pub use selection::Selection;
