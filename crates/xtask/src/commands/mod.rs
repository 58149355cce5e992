//! Command implementations.

mod check;
mod clean;
mod list;
mod show;

pub use check::Check;
pub use clean::Clean;
pub use list::List;
pub use show::Show;
