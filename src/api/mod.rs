// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::path::Path;

use axum::{
    extract::{DefaultBodyLimit, Request},
    http::HeaderValue,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::AdminClaims,
    config::CorsOrigins,
    models::{
        ContactSubmittedResponse, CreateContactRequest, CreateGalleryItemRequest,
        CreateServiceRequest, LoginRequest, LoginResponse, MessageResponse,
        UpdateGalleryItemRequest, UpdateServiceRequest, UploadResponse, VerifyResponse,
    },
    providers::UPLOADS_URL_PREFIX,
    state::AppState,
    storage::{ContactSubmission, GalleryItem, Service},
};

pub mod auth;
pub mod contacts;
pub mod gallery;
pub mod health;
pub mod public;
pub mod services;
pub mod uploads;

/// Build the full application: JSON API, uploaded files and API docs.
pub fn router(state: AppState, cors: CorsLayer, uploads_dir: &Path) -> Router {
    let public_routes = Router::new()
        .route("/services", get(public::list_services))
        .route("/gallery", get(public::list_gallery))
        .route("/contact", post(public::submit_contact));

    let admin_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/verify", get(auth::verify))
        .route(
            "/services",
            get(services::list_services).post(services::create_service),
        )
        .route(
            "/services/{service_id}",
            put(services::update_service).delete(services::delete_service),
        )
        .route(
            "/gallery",
            get(gallery::list_gallery).post(gallery::create_gallery_item),
        )
        .route(
            "/gallery/{item_id}",
            put(gallery::update_gallery_item).delete(gallery::delete_gallery_item),
        )
        .route("/contacts", get(contacts::list_contacts))
        .route("/contacts/{contact_id}", delete(contacts::delete_contact))
        .route(
            "/upload-image",
            post(uploads::upload_image).layer(DefaultBodyLimit::max(uploads::MAX_UPLOAD_BYTES)),
        )
        .route("/uploads/{filename}", delete(uploads::delete_upload));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .nest("/api", public_routes.nest("/admin", admin_routes))
        .with_state(state)
        .nest_service(UPLOADS_URL_PREFIX, ServeDir::new(uploads_dir))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// CORS policy for the configured origins.
pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    match origins {
        CorsOrigins::Any => CorsLayer::permissive(),
        CorsOrigins::List(list) => {
            let allowed: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::liveness,
        public::list_services,
        public::list_gallery,
        public::submit_contact,
        auth::login,
        auth::verify,
        services::list_services,
        services::create_service,
        services::update_service,
        services::delete_service,
        gallery::list_gallery,
        gallery::create_gallery_item,
        gallery::update_gallery_item,
        gallery::delete_gallery_item,
        contacts::list_contacts,
        contacts::delete_contact,
        uploads::upload_image,
        uploads::delete_upload
    ),
    components(
        schemas(
            Service,
            GalleryItem,
            ContactSubmission,
            AdminClaims,
            CreateServiceRequest,
            UpdateServiceRequest,
            CreateGalleryItemRequest,
            UpdateGalleryItemRequest,
            CreateContactRequest,
            ContactSubmittedResponse,
            LoginRequest,
            LoginResponse,
            VerifyResponse,
            UploadResponse,
            MessageResponse,
            uploads::UploadForm,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and readiness"),
        (name = "Public", description = "Catalog and contact form for the public site"),
        (name = "Admin", description = "Admin session"),
        (name = "Admin Services", description = "Service catalog management"),
        (name = "Admin Gallery", description = "Gallery management"),
        (name = "Admin Contacts", description = "Contact submission review"),
        (name = "Admin Uploads", description = "Image upload and removal")
    )
)]
struct ApiDoc;
