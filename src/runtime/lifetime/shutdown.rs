use tokio::signal;
use tracing::{info, warn};

/// 等待关闭信号
///
/// 服务没有需要落盘的后台状态，收到信号后交还控制权即可，
/// 连接排空由 actix 的 graceful shutdown 完成。
pub async fn listen_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, draining connections...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }
}
