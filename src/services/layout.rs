//! Page shell rendering
//!
//! 所有页面共享的 HTML 外壳：嵌入的 shell.html 模板加占位符替换。
//! 页面内容通过 %CONTENT% 插槽原样注入，通知挂载点
//! （notification portal）固定在模板里，任何页面都能向其投递提示。

use rust_embed::Embed;
use std::borrow::Cow;
use tracing::debug;

use crate::errors::{Result, WorkdeckError};

// 使用 RustEmbed 自动嵌入构建好的前端资源
#[derive(Embed)]
#[folder = "dashboard/dist/"]
struct DashboardAssets;

/// 外壳模板文件名
const SHELL_TEMPLATE: &str = "shell.html";

/// 页面内容插槽
const CONTENT_SLOT: &str = "%CONTENT%";

/// 角落通知的挂载点 ID，前端脚本按此 ID 查找容器
const NOTIFICATION_PORTAL_ID: &str = "notification-portal";

/// Shared page shell
///
/// Wraps page bodies in the embedded HTML template. The body goes in
/// verbatim, everything else (app name, title, version) is escaped.
#[derive(Clone, Debug)]
pub struct PageShell {
    app_name: String,
}

impl PageShell {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// 从 `[pages]` 配置节构建
    pub fn from_config() -> Self {
        let config = crate::config::get_config();
        Self::new(config.pages.app_name.clone())
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// 读取外壳模板
    ///
    /// 先查嵌入资源，取不到时退回编译时包含的副本。
    fn template_source() -> String {
        match DashboardAssets::get(SHELL_TEMPLATE) {
            Some(content) => String::from_utf8_lossy(&content.data).into_owned(),
            None => {
                debug!("Embedded shell template missing, using compile-time copy");
                include_str!(concat!(
                    env!("CARGO_MANIFEST_DIR"),
                    "/dashboard/dist/shell.html"
                ))
                .to_string()
            }
        }
    }

    /// Render a page body inside the shell
    ///
    /// `children` 原样注入，不做任何转义或改写；因此内容插槽最后替换，
    /// body 里长得像占位符的文本不会被二次展开。
    pub fn render(&self, title: &str, children: &str) -> Result<String> {
        let template = Self::template_source();
        if !template.contains(CONTENT_SLOT) {
            return Err(WorkdeckError::render(format!(
                "Shell template has no {} slot",
                CONTENT_SLOT
            )));
        }

        let html = template
            .replace("%APP_NAME%", &escape_html(&self.app_name))
            .replace("%PAGE_TITLE%", &escape_html(title))
            .replace("%VERSION%", env!("CARGO_PKG_VERSION"))
            .replace(CONTENT_SLOT, children);

        Ok(html)
    }

    /// 模板完整性检查，就绪探针使用
    ///
    /// 1. 内容插槽必须存在
    /// 2. 通知挂载点必须存在
    pub fn verify_template() -> Result<()> {
        let template = Self::template_source();
        if !template.contains(CONTENT_SLOT) {
            return Err(WorkdeckError::template_missing(format!(
                "shell.html has no {} slot",
                CONTENT_SLOT
            )));
        }
        if !template.contains(NOTIFICATION_PORTAL_ID) {
            return Err(WorkdeckError::template_missing(
                "shell.html has no notification portal container",
            ));
        }
        Ok(())
    }
}

/// 查找嵌入的静态资源
pub fn asset(path: &str) -> Option<Cow<'static, [u8]>> {
    DashboardAssets::get(path).map(|file| file.data)
}

/// Minimal HTML escaping for text interpolations
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
