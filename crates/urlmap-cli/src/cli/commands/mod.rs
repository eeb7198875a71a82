//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod export;
mod link;
mod list;
mod man;
mod profiles;
mod resolve;

pub use check::run_check;
pub use completions::run_completions;
pub use export::run_export;
pub use link::run_link;
pub use list::run_list;
pub use man::run_man;
pub use profiles::run_profiles;
pub use resolve::run_resolve;

pub(crate) use resolve::resolve_base_url;
