pub mod health;
pub mod pages;
pub mod session;

pub use health::{AppStartTime, HealthService, health_routes};
pub use pages::{PagesService, pages_routes};
pub use session::{SessionService, session_routes};
