//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # Features
//!
//! - 사용자 레코드 CRUD API 엔드포인트
//! - 헬스체크 엔드포인트
//!
//! 핸들러는 `web::Data<UserService>`를 요구하므로, 앱에 서비스를 등록한 뒤 라우트를 구성합니다.
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use crate::config::Environment;
use crate::core::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 요청 본문 최대 크기
const JSON_PAYLOAD_LIMIT: usize = 16 * 1024;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
}

/// JSON 본문과 쿼리 추출 실패도 `AppError` JSON 형식으로 응답하도록 설정합니다
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_PAYLOAD_LIMIT)
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `POST /api/v1/users` - 사용자 생성
/// - `GET /api/v1/users` - 사용자 목록 (`?email=` 필터)
/// - `GET /api/v1/users/{id}` - 사용자 조회
/// - `PATCH /api/v1/users/{id}` - 사용자 부분 수정
/// - `DELETE /api/v1/users/{id}` - 사용자 삭제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","username":"newuser"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_record_service",
///   "version": "0.1.0",
///   "environment": "Production",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "storage": "in-memory",
///     "validation": "validator"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": format!("{:?}", Environment::current()),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "storage": "in-memory",
            "validation": "validator"
        }
    }))
}
