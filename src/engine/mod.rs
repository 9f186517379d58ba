pub mod batch;
pub mod checker;
pub mod proxy;

pub use batch::BatchDelay;
pub use batch::BatchObserver;
pub use batch::run_batch;
pub use checker::Checker;
pub use checker::CheckerArgs;
pub use proxy::Proxy;
pub use proxy::ProxyArgs;
