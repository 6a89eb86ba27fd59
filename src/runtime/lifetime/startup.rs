use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, get_config, validate_config};
use crate::display::FormatOptions;
use crate::services::{IdentityProvider, PageShell};

/// 服务器启动时组装的组件
pub struct StartupContext {
    pub shell: PageShell,
    pub identity: IdentityProvider,
    pub display: FormatOptions,
    pub pages_enabled: bool,
}

/// 准备服务器启动的上下文
/// 包括页面外壳、身份解析器和展示格式
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let config = get_config();

    // 配置体检，只提示不拦截
    validate_config(&config);

    // 模板启动时检查一次。坏模板不阻止启动，/healthz 和页面请求会持续上报
    let shell = PageShell::from_config();
    match PageShell::verify_template() {
        Ok(()) => debug!("Shell template verified"),
        Err(e) => warn!("Shell template check failed: {}", e),
    }

    let identity = IdentityProvider::from_config(&config.identity);
    let display = FormatOptions::from_config(&config.display);

    check_component_enabled(&config);

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        shell,
        identity,
        display,
        pages_enabled: config.pages.enabled,
    })
}

fn check_component_enabled(config: &AppConfig) {
    if config.pages.enabled {
        info!("Dashboard pages available at: /");
    } else {
        info!("Dashboard pages are disabled (pages.enabled = false)");
    }

    info!("Session API available at: /api/v1/me");
    info!("Health API available at: /healthz");
}
