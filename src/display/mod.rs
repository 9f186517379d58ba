pub mod console;
pub mod report;

pub use console::ConsoleObserver;
pub use report::batch_summary;
pub use report::failure_report;
pub use report::tier_stats_failure;
pub use report::tier_stats_report;
pub use report::usage;
pub use report::wallet_report;
