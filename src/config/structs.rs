use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumMessage, IntoEnumIterator};
use ts_rs::TS;

use crate::api::constants::DEFAULT_IDENTITY_HEADER;
use crate::api::types::TS_EXPORT_PATH;
use crate::context::{Plan, Role};
use crate::display::Locale;

/// 获取默认允许的 HTTP 方法列表
///
/// 使用 EnumIter 自动从 HttpMethod 枚举生成，保证类型安全。
pub fn default_http_methods() -> Vec<HttpMethod> {
    HttpMethod::iter().collect()
}

/// 请求身份解析模式
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    TS,
    EnumIter,
    AsRefStr,
    EnumMessage,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum IdentityMode {
    #[default]
    #[strum(message = "No identity resolution, every request is anonymous")]
    None,
    #[strum(message = "Fixed identity from config, for local development")]
    Static,
    #[strum(message = "Trust identity claims from a proxy-set header")]
    TrustedHeader,
}

impl std::fmt::Display for IdentityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Static => write!(f, "static"),
            Self::TrustedHeader => write!(f, "trusted-header"),
        }
    }
}

impl std::str::FromStr for IdentityMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "static" => Ok(Self::Static),
            "trusted-header" | "trusted_header" => Ok(Self::TrustedHeader),
            _ => Err(format!(
                "Invalid identity mode: '{}'. Valid: none, static, trusted-header",
                s
            )),
        }
    }
}

/// HTTP 方法枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, EnumIter, AsRefStr)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
            Self::Patch => write!(f, "PATCH"),
            Self::Head => write!(f, "HEAD"),
            Self::Options => write!(f, "OPTIONS"),
        }
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(format!(
                "Invalid HTTP method: '{}'. Valid: GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS",
                s
            )),
        }
    }
}

/// 应用配置（从 TOML 加载，启动时使用）
///
/// 包含全部配置节：
/// - server: 服务器地址、端口、CPU 数量
/// - logging: 日志配置
/// - display: 数字 / 货币 / 日期的展示格式
/// - identity: 请求身份解析方式
/// - pages: 页面外壳配置
/// - cors: 跨域配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub pages: PagesConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl AppConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：WD，分隔符：__
    /// 示例：WD__SERVER__PORT=9999
    pub fn load(path: Option<&str>) -> Self {
        use config::{Config, Environment, File};

        let path = path.unwrap_or("config.toml");

        let builder = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖，前缀 WD，分隔符 __
            .add_source(
                Environment::with_prefix("WD")
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<AppConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// 生成示例 TOML 配置文件，文件头带 identity.mode 取值说明
    pub fn generate_sample_config() -> String {
        let mut sample = String::from("# Workdeck sample configuration\n#\n# identity.mode:\n");
        for mode in IdentityMode::iter() {
            let note = mode.get_message().unwrap_or_default();
            sample.push_str(&format!("#   \"{}\" - {}\n", mode, note));
        }
        sample.push('\n');

        let sample_config = Self::default();
        match toml::to_string_pretty(&sample_config) {
            Ok(body) => {
                sample.push_str(&body);
                sample
            }
            Err(e) => format!("Error generating sample config: {}", e),
        }
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        // Create parent directories if needed
        if let Some(parent) = path.as_ref().parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default)]
    pub unix_socket: Option<String>,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// 展示格式配置
///
/// 数字、货币、日期格式化都从这里取值，`FormatOptions::from_config`
/// 负责转换（并把 max_fraction_digits 提升到不小于 min）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub locale: Locale,
    /// ISO 4217 货币代码
    #[serde(default = "default_display_currency")]
    pub currency: String,
    #[serde(default = "default_min_fraction_digits")]
    pub min_fraction_digits: u8,
    #[serde(default = "default_max_fraction_digits")]
    pub max_fraction_digits: u8,
}

/// 请求身份解析配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default)]
    pub mode: IdentityMode,
    /// trusted-header 模式下携带身份 JSON 的请求头
    #[serde(default = "default_identity_header")]
    pub header: String,
    /// static 模式下的固定身份
    #[serde(default)]
    pub static_identity: StaticIdentityConfig,
}

/// static 模式的固定身份
///
/// ID 可以在配置里固定（演示环境重启后身份不变），
/// 不写时 StaticResolver 启动生成一次。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticIdentityConfig {
    /// 固定的用户 ID，缺省则每次启动生成
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<uuid::Uuid>,
    /// 固定的工作区 ID，缺省则每次启动生成
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<uuid::Uuid>,
    #[serde(default = "default_static_email")]
    pub email: String,
    #[serde(default = "default_static_name")]
    pub name: String,
    #[serde(default = "default_static_role")]
    pub role: Role,
    #[serde(default = "default_static_workspace_name")]
    pub workspace_name: String,
    #[serde(default = "default_static_workspace_slug")]
    pub workspace_slug: String,
    #[serde(default = "default_static_plan")]
    pub plan: Plan,
}

/// 页面外壳配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    #[serde(default = "default_pages_enabled")]
    pub enabled: bool,
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

/// 跨域配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub enabled: bool,
    /// 允许的来源，`["*"]` 表示任意来源，空数组表示仅同源
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_http_methods")]
    pub allowed_methods: Vec<HttpMethod>,
    #[serde(default = "default_cors_allowed_headers")]
    pub allowed_headers: Vec<String>,
    /// 预检请求缓存时间（秒）
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
    #[serde(default)]
    pub allow_credentials: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_display_currency() -> String {
    "USD".to_string()
}

fn default_min_fraction_digits() -> u8 {
    0
}

fn default_max_fraction_digits() -> u8 {
    0
}

fn default_identity_header() -> String {
    DEFAULT_IDENTITY_HEADER.to_string()
}

fn default_static_email() -> String {
    "dev@workdeck.local".to_string()
}

fn default_static_name() -> String {
    "Dev User".to_string()
}

fn default_static_role() -> Role {
    Role::Owner
}

fn default_static_workspace_name() -> String {
    "Acme Inc".to_string()
}

fn default_static_workspace_slug() -> String {
    "acme".to_string()
}

fn default_static_plan() -> Plan {
    Plan::Pro
}

fn default_pages_enabled() -> bool {
    true
}

fn default_app_name() -> String {
    "Workdeck".to_string()
}

fn default_cors_allowed_headers() -> Vec<String> {
    vec![
        "Content-Type".to_string(),
        "Authorization".to_string(),
        "Accept".to_string(),
    ]
}

fn default_cors_max_age() -> u64 {
    3600
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            unix_socket: None,
            cpu_count: default_cpu_count(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            currency: default_display_currency(),
            min_fraction_digits: default_min_fraction_digits(),
            max_fraction_digits: default_max_fraction_digits(),
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            mode: IdentityMode::default(),
            header: default_identity_header(),
            static_identity: StaticIdentityConfig::default(),
        }
    }
}

impl Default for StaticIdentityConfig {
    fn default() -> Self {
        Self {
            user_id: None,
            workspace_id: None,
            email: default_static_email(),
            name: default_static_name(),
            role: default_static_role(),
            workspace_name: default_static_workspace_name(),
            workspace_slug: default_static_workspace_slug(),
            plan: default_static_plan(),
        }
    }
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            enabled: default_pages_enabled(),
            app_name: default_app_name(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allowed_origins: Vec::new(),
            allowed_methods: default_http_methods(),
            allowed_headers: default_cors_allowed_headers(),
            max_age: default_cors_max_age(),
            allow_credentials: false,
        }
    }
}
