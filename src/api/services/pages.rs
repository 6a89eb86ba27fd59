//! 仪表盘页面服务
//!
//! 服务端渲染的 HTML 页面与静态资源。页面 body 由这里拼出，
//! 再交给 [`PageShell`] 包进共享外壳。

use actix_web::{HttpRequest, HttpResponse, Result, web};
use tracing::{debug, error, trace};

use crate::context::{AuthenticatedUser, RequestContext, Workspace};
use crate::services::layout::{self, PageShell, escape_html};

pub struct PagesService;

impl PagesService {
    /// 仪表盘首页
    ///
    /// 登录状态决定 body：已登录显示工作区抬头，未登录显示引导页。
    pub async fn handle_index(
        ctx: RequestContext,
        shell: web::Data<PageShell>,
    ) -> Result<HttpResponse> {
        trace!("Serving dashboard index for {}", ctx.actor());

        let body = match (ctx.user(), ctx.workspace()) {
            (Some(user), Some(workspace)) => signed_in_body(user, workspace),
            _ => signed_out_body(shell.app_name()),
        };

        match shell.render("Dashboard", &body) {
            Ok(html) => Ok(HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(html)),
            Err(e) => {
                error!("Failed to render dashboard index: {}", e);
                Ok(crate::api::response::error_from_workdeck(&e))
            }
        }
    }

    /// 处理静态资源文件
    pub async fn handle_static(req: HttpRequest) -> Result<HttpResponse> {
        let path = req.match_info().query("path");
        trace!("Serving static file: {}", path);

        let content_type = Self::get_content_type(path);

        match layout::asset(path) {
            Some(content) => Ok(HttpResponse::Ok()
                .content_type(content_type)
                .body(content.into_owned())),
            None => {
                debug!("Static file not found: {}", path);
                Ok(HttpResponse::NotFound().body("File not found"))
            }
        }
    }

    /// 处理 favicon.ico 请求
    pub async fn handle_favicon(_req: HttpRequest) -> Result<HttpResponse> {
        trace!("Serving favicon");

        match layout::asset("favicon.ico") {
            Some(favicon_data) => Ok(HttpResponse::Ok()
                .content_type("image/x-icon")
                .body(favicon_data.into_owned())),
            None => {
                // 没有打包 favicon 时返回空体，避免浏览器反复重试报错
                Ok(HttpResponse::Ok().content_type("image/x-icon").body(vec![]))
            }
        }
    }

    /// 根据文件扩展名确定 Content-Type
    fn get_content_type(path: &str) -> &'static str {
        match path.split('.').next_back() {
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("json") => "application/json",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("svg") => "image/svg+xml",
            Some("ico") => "image/x-icon",
            Some("woff") => "font/woff",
            Some("woff2") => "font/woff2",
            _ => "application/octet-stream",
        }
    }
}

/// 已登录状态的首页 body
fn signed_in_body(user: &AuthenticatedUser, workspace: &Workspace) -> String {
    format!(
        "<section class=\"workspace-header\">\
         <span class=\"avatar\" aria-hidden=\"true\">{}</span>\
         <div><h1>{}</h1>\
         <p>Signed in as {} &lt;{}&gt; ({})</p></div>\
         <span class=\"plan-badge\">{} plan</span>\
         </section>",
        escape_html(&user.initials()),
        escape_html(&workspace.name),
        escape_html(&user.name),
        escape_html(&user.email),
        user.role.label(),
        workspace.plan.label(),
    )
}

/// 未登录状态的首页 body
fn signed_out_body(app_name: &str) -> String {
    format!(
        "<section class=\"signed-out\">\
         <h1>Welcome to {}</h1>\
         <p>Sign in through your workspace portal to see your dashboard.</p>\
         </section>",
        escape_html(app_name),
    )
}

/// Pages 路由配置
pub fn pages_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(PagesService::handle_index))
        .route("/assets/{path:.*}", web::get().to(PagesService::handle_static))
        .route("/favicon.ico", web::get().to(PagesService::handle_favicon))
}
