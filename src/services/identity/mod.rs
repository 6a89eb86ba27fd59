//! Identity 服务模块
//!
//! 从请求解析用户与工作区身份，支持：
//! - 可信反向代理头（生产部署）
//! - 配置固定身份（本地开发）
//! - 关闭解析（所有请求匿名）

mod null;
mod provider;
mod static_identity;
mod trusted_header;

pub use null::NullResolver;
pub use provider::{IdentityProvider, IdentityResolver};
pub use static_identity::StaticResolver;
pub use trusted_header::{IdentityClaims, TrustedHeaderResolver};
