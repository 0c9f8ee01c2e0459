use std::sync::Arc;

use actix_web::error::InternalError;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::ErrorBody;
use crate::api::ShortUrlBuilder;
use crate::errors::LinksyError;
use crate::services::LinkService;
use crate::utils::{UrlValidationError, validate_url};

pub const EXHAUSTED_MESSAGE: &str = "Failed to generate unique short code (max probes reached)";
pub const STORE_FAILURE_MESSAGE: &str = "Database error while creating short URL";

/// `POST /shorten` body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[serde(default)]
    pub long_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
}

pub struct ShortenService;

impl ShortenService {
    pub async fn shorten(
        body: web::Json<ShortenRequest>,
        link_service: web::Data<Arc<LinkService>>,
        url_builder: web::Data<ShortUrlBuilder>,
    ) -> impl Responder {
        let long_url = body.into_inner().long_url.unwrap_or_default();

        if let Err(e) = validate_url(&long_url) {
            return Self::rejected(e);
        }
        let long_url = long_url.trim();

        match link_service.create_short_link(long_url).await {
            Ok(result) => {
                if result.created {
                    info!("Created short link '{}'", result.link.code);
                }
                HttpResponse::Ok().json(ShortenResponse {
                    short_url: url_builder.build(&result.link.code),
                    short_code: result.link.code,
                    long_url: result.link.target,
                })
            }
            Err(e @ LinksyError::Exhausted(_)) => {
                warn!("Shorten failed: {}", e);
                HttpResponse::InternalServerError().json(ErrorBody::new(EXHAUSTED_MESSAGE))
            }
            Err(e) => {
                error!("Shorten failed: {}", e);
                HttpResponse::InternalServerError().json(ErrorBody::new(STORE_FAILURE_MESSAGE))
            }
        }
    }

    fn rejected(err: UrlValidationError) -> HttpResponse {
        HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()))
    }
}

/// 请求体无法解析时同样返回 `{"error": ...}`
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            let message = err.to_string();
            InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ErrorBody::new(message)),
            )
            .into()
        })
}

/// Shorten 路由配置
pub fn shorten_routes() -> actix_web::Scope {
    web::scope("/shorten")
        .app_data(json_config())
        .route("", web::post().to(ShortenService::shorten))
}
