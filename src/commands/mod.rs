pub mod init;
pub mod sort;

pub use init::init_config;
pub use sort::{print_summary, render_terminal, sort_command, RunSummary, SortOptions};
