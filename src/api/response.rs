//! API 响应帮助函数

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::errors::WorkdeckError;

use super::error_code::ErrorCode;
use super::types::ApiResponse;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code as i32,
            message: message.into(),
            data,
        })
}

/// 构建成功响应
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, ErrorCode::Success, "OK", Some(data))
}

/// 构建错误响应
pub fn error_response(status: StatusCode, error_code: ErrorCode, message: &str) -> HttpResponse {
    json_response::<()>(status, error_code, message, None)
}

/// 从 WorkdeckError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
pub fn error_from_workdeck(err: &WorkdeckError) -> HttpResponse {
    let status = err.http_status();
    let error_code = ErrorCode::from(err.clone());
    error_response(status, error_code, err.message())
}

/// 统一 Result → HttpResponse 转换
///
/// 成功时返回 200 OK + JSON 数据，失败时自动映射 WorkdeckError。
pub fn api_result<T, E>(result: Result<T, E>) -> HttpResponse
where
    T: Serialize,
    E: Into<WorkdeckError>,
{
    match result {
        Ok(data) => success_response(data),
        Err(e) => {
            let err: WorkdeckError = e.into();
            error_from_workdeck(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_response_structure() {
        let response = json_response(StatusCode::OK, ErrorCode::Success, "OK", Some("test_data"));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_success_response() {
        let response = success_response("success_data");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_error_response() {
        let response = error_response(
            StatusCode::BAD_REQUEST,
            ErrorCode::BadRequest,
            "Something went wrong",
        );
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_from_workdeck_maps_status() {
        let err = WorkdeckError::unauthorized("no session");
        let response = error_from_workdeck(&err);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let err = WorkdeckError::template_missing("shell.html");
        let response = error_from_workdeck(&err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_result_ok_and_err() {
        let ok: Result<&str, WorkdeckError> = Ok("data");
        assert_eq!(api_result(ok).status(), StatusCode::OK);

        let err: Result<&str, WorkdeckError> = Err(WorkdeckError::not_found("missing"));
        assert_eq!(api_result(err).status(), StatusCode::NOT_FOUND);
    }
}
