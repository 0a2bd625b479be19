//! Command implementations behind the `rpkgs` CLI.

pub mod config;
mod browse;
mod libs;
mod list;
mod show;

pub use browse::{browse, browse_with};
pub use config::Config;
pub use libs::libs;
pub use list::{list, render_list};
pub use show::{find_packages, render_details, show};
