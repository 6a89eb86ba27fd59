//! Middleware tests
//!
//! ContextMiddleware / RequestIdMiddleware / TimingMiddleware 的行为验证，
//! 全部用进程内 actix test app 完成，不需要真实网络。

use actix_cors::Cors;
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, HttpResponse, web};
use uuid::Uuid;

use workdeck::api::middleware::{ContextMiddleware, RequestIdMiddleware, TimingMiddleware};
use workdeck::config::{IdentityConfig, IdentityMode, StaticIdentityConfig};
use workdeck::context::{AuthenticatedUser, Plan, RequestContext, Role, Workspace};
use workdeck::services::{IdentityClaims, IdentityProvider};

// =============================================================================
// Test Setup
// =============================================================================

const IDENTITY_HEADER: &str = "x-workdeck-identity";

fn trusted_header_provider() -> IdentityProvider {
    IdentityProvider::from_config(&IdentityConfig {
        mode: IdentityMode::TrustedHeader,
        header: IDENTITY_HEADER.to_string(),
        static_identity: StaticIdentityConfig::default(),
    })
}

fn claims_json(paired: bool) -> String {
    let workspace_id = Uuid::new_v4();
    let claims = IdentityClaims {
        user: AuthenticatedUser {
            id: Uuid::new_v4(),
            email: "ada@acme.test".to_string(),
            name: "Ada Lovelace".to_string(),
            role: Role::Admin,
            workspace_id: if paired { workspace_id } else { Uuid::new_v4() },
        },
        workspace: Workspace {
            id: workspace_id,
            name: "Acme Inc".to_string(),
            slug: "acme".to_string(),
            plan: Plan::Starter,
        },
    };
    serde_json::to_string(&claims).unwrap()
}

async fn ping() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Handler 回显上下文内容，测试从响应体断言
async fn whoami(ctx: RequestContext) -> HttpResponse {
    match ctx.user() {
        Some(user) => HttpResponse::Ok().body(format!("user:{}", user.email)),
        None => HttpResponse::Ok().body("anonymous"),
    }
}

// =============================================================================
// ContextMiddleware
// =============================================================================

#[actix_web::test]
async fn test_trusted_header_attaches_identity() {
    let app = test::init_service(
        App::new()
            .wrap(ContextMiddleware::new(trusted_header_provider()))
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = TestRequest::get()
        .uri("/whoami")
        .insert_header((IDENTITY_HEADER, claims_json(true)))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "user:ada@acme.test".as_bytes());
}

#[actix_web::test]
async fn test_missing_header_stays_anonymous() {
    let app = test::init_service(
        App::new()
            .wrap(ContextMiddleware::new(trusted_header_provider()))
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = TestRequest::get().uri("/whoami").to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "anonymous".as_bytes());
}

#[actix_web::test]
async fn test_malformed_claims_stay_anonymous() {
    let app = test::init_service(
        App::new()
            .wrap(ContextMiddleware::new(trusted_header_provider()))
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = TestRequest::get()
        .uri("/whoami")
        .insert_header((IDENTITY_HEADER, "{\"user\": 42}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // 身份不可解析不是错误，请求照常走匿名路径
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "anonymous".as_bytes());
}

#[actix_web::test]
async fn test_mismatched_tenant_claims_are_discarded() {
    let app = test::init_service(
        App::new()
            .wrap(ContextMiddleware::new(trusted_header_provider()))
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = TestRequest::get()
        .uri("/whoami")
        .insert_header((IDENTITY_HEADER, claims_json(false)))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;

    // 用户声称属于别的工作区：整份声明作废
    assert_eq!(body, "anonymous".as_bytes());
}

#[actix_web::test]
async fn test_static_mode_signs_in_every_request() {
    let provider = IdentityProvider::from_config(&IdentityConfig {
        mode: IdentityMode::Static,
        header: IDENTITY_HEADER.to_string(),
        static_identity: StaticIdentityConfig::default(),
    });
    let app = test::init_service(
        App::new()
            .wrap(ContextMiddleware::new(provider))
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = TestRequest::get().uri("/whoami").to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "user:dev@workdeck.local".as_bytes());
}

#[actix_web::test]
async fn test_none_mode_ignores_identity_headers() {
    let provider = IdentityProvider::from_config(&IdentityConfig {
        mode: IdentityMode::None,
        header: IDENTITY_HEADER.to_string(),
        static_identity: StaticIdentityConfig::default(),
    });
    let app = test::init_service(
        App::new()
            .wrap(ContextMiddleware::new(provider))
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = TestRequest::get()
        .uri("/whoami")
        .insert_header((IDENTITY_HEADER, claims_json(true)))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "anonymous".as_bytes());
}

#[actix_web::test]
async fn test_extractor_without_middleware_is_anonymous() {
    // 中间件没挂上的 handler 也能提取，得到匿名上下文
    let app = test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;

    let req = TestRequest::get()
        .uri("/whoami")
        .insert_header((IDENTITY_HEADER, claims_json(true)))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "anonymous".as_bytes());
}

// =============================================================================
// RequestIdMiddleware / TimingMiddleware
// =============================================================================

#[actix_web::test]
async fn test_request_id_header_is_returned() {
    let app = test::init_service(
        App::new()
            .wrap(RequestIdMiddleware)
            .route("/ping", web::get().to(ping)),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/ping").to_request()).await;

    let header = resp
        .headers()
        .get("x-request-id")
        .expect("x-request-id header missing");
    Uuid::parse_str(header.to_str().unwrap()).expect("x-request-id is not a UUID");
}

#[actix_web::test]
async fn test_request_ids_are_unique_per_request() {
    let app = test::init_service(
        App::new()
            .wrap(RequestIdMiddleware)
            .route("/ping", web::get().to(ping)),
    )
    .await;

    let first = test::call_service(&app, TestRequest::get().uri("/ping").to_request()).await;
    let second = test::call_service(&app, TestRequest::get().uri("/ping").to_request()).await;

    assert_ne!(
        first.headers().get("x-request-id").unwrap(),
        second.headers().get("x-request-id").unwrap()
    );
}

#[actix_web::test]
async fn test_inbound_request_id_is_reused() {
    let app = test::init_service(
        App::new()
            .wrap(RequestIdMiddleware)
            .route("/ping", web::get().to(ping)),
    )
    .await;

    let upstream_id = Uuid::new_v4().to_string();
    let req = TestRequest::get()
        .uri("/ping")
        .insert_header(("x-request-id", upstream_id.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // 上游代理带来的合法 UUID 原样回显，整条链路共用一个关联 ID
    assert_eq!(
        resp.headers().get("x-request-id").unwrap().to_str().unwrap(),
        upstream_id
    );
}

#[actix_web::test]
async fn test_non_uuid_request_id_is_replaced() {
    let app = test::init_service(
        App::new()
            .wrap(RequestIdMiddleware)
            .route("/ping", web::get().to(ping)),
    )
    .await;

    let req = TestRequest::get()
        .uri("/ping")
        .insert_header(("x-request-id", "trace-007/not-a-uuid"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // 不是 UUID 的值不进日志字段也不回显，换成新生成的
    let echoed = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    Uuid::parse_str(echoed).expect("replacement id is not a UUID");
}

#[actix_web::test]
async fn test_timing_header_is_returned() {
    let app = test::init_service(
        App::new()
            .wrap(TimingMiddleware)
            .route("/ping", web::get().to(ping)),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/ping").to_request()).await;

    let value = resp
        .headers()
        .get("x-response-time")
        .expect("x-response-time header missing")
        .to_str()
        .unwrap();
    assert!(value.ends_with("ms"), "unexpected timing value: {}", value);
}

// =============================================================================
// Full stack ordering
// =============================================================================

#[actix_web::test]
async fn test_cors_preflight_passes_through_outer_layers() {
    // 注册顺序与 server.rs 一致：Context 最内，Timing 最外
    let app = test::init_service(
        App::new()
            .wrap(ContextMiddleware::new(trusted_header_provider()))
            .wrap(Cors::permissive())
            .wrap(RequestIdMiddleware)
            .wrap(TimingMiddleware)
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/whoami")
        .insert_header(("Origin", "https://app.workdeck.test"))
        .insert_header(("Access-Control-Request-Method", "GET"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // 预检在 CORS 层短路，不进 handler，但计时和关联 ID 在更外层，照样打上
    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key("access-control-allow-origin"));
    assert!(resp.headers().contains_key("x-request-id"));
    assert!(resp.headers().contains_key("x-response-time"));
}
