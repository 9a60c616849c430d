pub mod repl;
pub mod setup;
pub mod task;

pub use repl::run_repl_mode;
pub use setup::{connect, init_logging, setup_from_cli};
pub use task::run_message_mode;
