use std::sync::Arc;

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, error, trace};

use crate::errors::LinksyError;
use crate::services::LinkService;

pub const NOT_FOUND_BODY: &str = "404 - Short link not found";
pub const SERVER_ERROR_BODY: &str = "Server error";

pub struct RedirectService;

impl RedirectService {
    pub async fn handle_redirect(
        path: web::Path<String>,
        link_service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let key = path.into_inner();
        trace!("Redirect lookup for '{}'", key);

        match link_service.resolve_short_link(&key).await {
            Ok(target) => HttpResponse::Found()
                .insert_header((header::LOCATION, target))
                .finish(),
            Err(LinksyError::NotFound(_)) => {
                debug!("Redirect miss: {}", key);
                Self::text(HttpResponse::NotFound(), NOT_FOUND_BODY)
            }
            Err(e) => {
                error!("Redirect lookup for '{}' failed: {}", key, e);
                Self::text(HttpResponse::InternalServerError(), SERVER_ERROR_BODY)
            }
        }
    }

    fn text(mut builder: actix_web::HttpResponseBuilder, body: &'static str) -> HttpResponse {
        builder
            .content_type("text/plain; charset=utf-8")
            .body(body)
    }
}

/// Redirect 路由配置，`prefix` 需已规范化（见 `short_url::normalize_prefix`）
pub fn redirect_routes(prefix: &str) -> actix_web::Scope {
    web::scope(prefix)
        .route("/{key}", web::get().to(RedirectService::handle_redirect))
        .route("/{key}", web::head().to(RedirectService::handle_redirect))
}
