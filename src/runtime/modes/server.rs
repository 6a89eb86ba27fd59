//! Server mode
//!
//! HTTP 服务器的组装与启动：中间件栈、路由、绑定与优雅关闭。

use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::Result;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::api::middleware::{ContextMiddleware, RequestIdMiddleware, TimingMiddleware};
use crate::api::services::{AppStartTime, health_routes, pages_routes, session_routes};
use crate::config::CorsConfig;
use crate::runtime::lifetime;

/// CORS 配置体检，启动时跑一次
fn validate_cors_config(cors: &CorsConfig) {
    if !cors.enabled {
        return;
    }

    if cors.allowed_origins.is_empty() {
        warn!(
            "CORS enabled but allowed_origins is empty, no cross-origin request will be allowed"
        );
    }

    // 任意来源 + 凭据会让任何站点带 cookie 跨域，actix-cors 会回显
    // Origin 而不是 *，浏览器照单全收。这种组合强制降级为无凭据。
    if cors.allowed_origins.iter().any(|o| o == "*") && cors.allow_credentials {
        error!(
            "cors.allowed_origins = [\"*\"] together with allow_credentials is unsafe, \
            credentials support stays off"
        );
    }
}

/// 按配置构建 CORS 中间件
///
/// 关闭时退回同源策略；开启但 origins 为空同样只允许同源。
fn build_cors_middleware(config: &CorsConfig) -> Cors {
    if !config.enabled {
        return Cors::default();
    }

    let any_origin = config.allowed_origins.iter().any(|o| o == "*");

    let mut cors = Cors::default();
    if any_origin {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.to_string().parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    for header in &config.allowed_headers {
        cors = cors.allowed_header(header);
    }
    cors = cors.max_age(config.max_age as usize);

    if config.allow_credentials && !any_origin {
        cors = cors.supports_credentials();
    }

    cors
}

/// Run the HTTP server
///
/// 前提：配置与日志系统已在 main 里初始化完毕。
/// 启动流程：准备组件（外壳、身份、展示选项）→ 组装 App →
/// 绑定 TCP 或 Unix socket → 与关闭信号竞争。
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let startup = lifetime::startup::prepare_server_startup()
        .await
        .map_err(|e| {
            error!("Server startup failed: {}", e);
            e
        })?;

    let shell = startup.shell.clone();
    let identity = startup.identity.clone();
    let display = startup.display.clone();
    let pages_enabled = startup.pages_enabled;

    let config = crate::config::get_config();
    let cors_config = config.cors.clone();
    validate_cors_config(&cors_config);

    let workers = config.server.cpu_count.clamp(1, 32);
    info!("Using {} worker(s) for the server", workers);

    let server = HttpServer::new(move || {
        // actix 的 wrap 后注册者在外层：实际执行顺序为
        // Timing > RequestId > CORS > Compress > DefaultHeaders > Context
        App::new()
            .wrap(ContextMiddleware::new(identity.clone())) // 最内层，身份注入后才进 handler
            .wrap(
                DefaultHeaders::new()
                    .add(("Connection", "keep-alive"))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .wrap(Compress::default())
            .wrap(build_cors_middleware(&cors_config))
            .wrap(RequestIdMiddleware)
            .wrap(TimingMiddleware)
            .app_data(web::Data::new(shell.clone()))
            .app_data(web::Data::new(identity.clone()))
            .app_data(web::Data::new(display.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(1024 * 1024))
            .service(web::scope("/api").service(session_routes()))
            .service(web::scope("/healthz").service(health_routes()))
            .configure(|cfg| {
                if pages_enabled {
                    cfg.service(pages_routes());
                }
            })
    })
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_millis(5000))
    .client_disconnect_timeout(Duration::from_millis(1000))
    .workers(workers);

    // 绑定监听地址：优先 Unix socket（配置了的话），否则 TCP
    let server = {
        #[cfg(unix)]
        {
            if let Some(socket_path) = config.server.unix_socket.as_deref() {
                info!("Starting server on Unix socket: {}", socket_path);
                if std::path::Path::new(socket_path).exists() {
                    std::fs::remove_file(socket_path)?;
                }
                server.bind_uds(socket_path)?
            } else {
                let addr = format!("{}:{}", config.server.host, config.server.port);
                info!("Starting server at http://{}", addr);
                server.bind(addr)?
            }
        }

        #[cfg(not(unix))]
        {
            let addr = format!("{}:{}", config.server.host, config.server.port);
            info!("Starting server at http://{}", addr);
            server.bind(addr)?
        }
    }
    .run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            info!("Graceful shutdown complete");
        }
    }

    Ok(())
}
