use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum WorkdeckError {
    Config(String),
    Validation(String),
    Render(String),
    TemplateMissing(String),
    IdentityRejected(String),
    NotFound(String),
    Unauthorized(String),
    Serialization(String),
    DateParse(String),
    FileOperation(String),
}

impl WorkdeckError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            WorkdeckError::Config(_) => "E001",
            WorkdeckError::Validation(_) => "E002",
            WorkdeckError::Render(_) => "E003",
            WorkdeckError::TemplateMissing(_) => "E004",
            WorkdeckError::IdentityRejected(_) => "E005",
            WorkdeckError::NotFound(_) => "E006",
            WorkdeckError::Unauthorized(_) => "E007",
            WorkdeckError::Serialization(_) => "E008",
            WorkdeckError::DateParse(_) => "E009",
            WorkdeckError::FileOperation(_) => "E010",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            WorkdeckError::Config(_) => "Configuration Error",
            WorkdeckError::Validation(_) => "Validation Error",
            WorkdeckError::Render(_) => "Render Error",
            WorkdeckError::TemplateMissing(_) => "Template Missing",
            WorkdeckError::IdentityRejected(_) => "Identity Rejected",
            WorkdeckError::NotFound(_) => "Resource Not Found",
            WorkdeckError::Unauthorized(_) => "Unauthorized",
            WorkdeckError::Serialization(_) => "Serialization Error",
            WorkdeckError::DateParse(_) => "Date Parse Error",
            WorkdeckError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            WorkdeckError::Config(msg) => msg,
            WorkdeckError::Validation(msg) => msg,
            WorkdeckError::Render(msg) => msg,
            WorkdeckError::TemplateMissing(msg) => msg,
            WorkdeckError::IdentityRejected(msg) => msg,
            WorkdeckError::NotFound(msg) => msg,
            WorkdeckError::Unauthorized(msg) => msg,
            WorkdeckError::Serialization(msg) => msg,
            WorkdeckError::DateParse(msg) => msg,
            WorkdeckError::FileOperation(msg) => msg,
        }
    }

    /// HTTP status this error maps to at the API boundary
    pub fn http_status(&self) -> StatusCode {
        match self {
            WorkdeckError::Validation(_) | WorkdeckError::DateParse(_) => StatusCode::BAD_REQUEST,
            WorkdeckError::Unauthorized(_) | WorkdeckError::IdentityRejected(_) => {
                StatusCode::UNAUTHORIZED
            }
            WorkdeckError::NotFound(_) => StatusCode::NOT_FOUND,
            WorkdeckError::Config(_)
            | WorkdeckError::Render(_)
            | WorkdeckError::TemplateMissing(_)
            | WorkdeckError::Serialization(_)
            | WorkdeckError::FileOperation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for WorkdeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for WorkdeckError {}

// 便捷的构造函数
impl WorkdeckError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        WorkdeckError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        WorkdeckError::Validation(msg.into())
    }

    pub fn render<T: Into<String>>(msg: T) -> Self {
        WorkdeckError::Render(msg.into())
    }

    pub fn template_missing<T: Into<String>>(msg: T) -> Self {
        WorkdeckError::TemplateMissing(msg.into())
    }

    pub fn identity_rejected<T: Into<String>>(msg: T) -> Self {
        WorkdeckError::IdentityRejected(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        WorkdeckError::NotFound(msg.into())
    }

    pub fn unauthorized<T: Into<String>>(msg: T) -> Self {
        WorkdeckError::Unauthorized(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        WorkdeckError::Serialization(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        WorkdeckError::DateParse(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        WorkdeckError::FileOperation(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for WorkdeckError {
    fn from(err: std::io::Error) -> Self {
        WorkdeckError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for WorkdeckError {
    fn from(err: serde_json::Error) -> Self {
        WorkdeckError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for WorkdeckError {
    fn from(err: chrono::ParseError) -> Self {
        WorkdeckError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WorkdeckError>;
