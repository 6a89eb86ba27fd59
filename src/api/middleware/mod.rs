pub mod context;
pub mod request_id;
pub mod timing;

pub use context::ContextMiddleware;
pub use request_id::{RequestId, RequestIdMiddleware};
pub use timing::TimingMiddleware;
