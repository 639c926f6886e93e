//! The expense overview page: table, charts, view controls, and forms.

mod charts;
mod controls;
mod handlers;
mod tables;

pub use handlers::get_expenses_page;
