use crate::cli::Args;
use crate::history::{ HistoryError, HistorySource };
use crate::models::chat::ChatMessage;
use crate::models::fragment::Fragment;
use crate::render::render_opt;
use crate::view::render_conversation;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{ get, post },
    Router,
    Json,
    extract::{ State, Path, rejection::JsonRejection },
    response::{ IntoResponse, Response },
    http::StatusCode,
};
use serde::{ Deserialize, Serialize };
use tower_http::cors::{ Any, CorsLayer };
use log::{ info, debug, error, warn };

#[derive(Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Serialize)]
pub struct RenderResponse {
    pub html: Fragment,
}

#[derive(Serialize)]
pub struct ConversationResponse {
    pub conversation_id: String,
    pub message_count: usize,
    pub html: Fragment,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Clone)]
pub struct AppState {
    pub history: Arc<dyn HistorySource>,
}

impl IntoResponse for HistoryError {
    fn into_response(self) -> Response {
        let code = match &self {
            HistoryError::InvalidId(_) => StatusCode::BAD_REQUEST,
            HistoryError::NotFound(_) => StatusCode::NOT_FOUND,
            HistoryError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HistoryError::Status { .. } |
            HistoryError::Request(_) |
            HistoryError::Decode(_) |
            HistoryError::Url(_) => StatusCode::BAD_GATEWAY,
        };
        if code.is_server_error() {
            error!("Conversation lookup failed: {}", self);
        } else {
            warn!("Conversation lookup rejected: {}", self);
        }
        (code, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/render", post(render_handler))
        .route("/api/render/messages", post(render_messages_handler))
        .route("/api/conversations/{id}/html", get(conversation_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_http_server(
    args: &Args,
    history: Arc<dyn HistorySource>
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = args.server_addr.parse::<SocketAddr>()?;
    let app = router(AppState { history });

    if args.enable_tls {
        let (cert_path, key_path) = tls_paths(
            args.tls_cert_path.as_deref(),
            args.tls_key_path.as_deref()
        )?;
        info!("TLS enabled. Loading certificate from '{}' and key from '{}'", cert_path, key_path);
        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
            cert_path,
            key_path
        ).await?;

        info!("Starting HTTPS render server on: https://{}", addr);
        axum_server::bind_rustls(addr, tls_config).serve(app.into_make_service()).await?;
    } else {
        info!("Starting HTTP render server on: http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e|
            format!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e)
        )?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

fn tls_paths<'a>(
    cert_path: Option<&'a str>,
    key_path: Option<&'a str>
) -> Result<(&'a str, &'a str), &'static str> {
    match (cert_path, key_path) {
        (Some(cert), Some(key)) => Ok((cert, key)),
        (Some(_), None) | (None, Some(_)) => {
            error!("Both --tls-cert-path and --tls-key-path must be provided to enable TLS.");
            Err("Missing TLS certificate or key path")
        }
        (None, None) => {
            error!("--enable-tls was set but no certificate/key paths provided.");
            Err("TLS enabled without cert/key")
        }
    }
}

fn rejection_response(rejection: JsonRejection) -> Response {
    let code = match &rejection {
        JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };
    warn!("Rejected request body: {}", rejection.body_text());
    (code, Json(ErrorResponse { error: rejection.body_text() })).into_response()
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn render_handler(payload: Result<Json<RenderRequest>, JsonRejection>) -> Response {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => return rejection_response(rejection),
    };
    let html = render_opt(req.content.as_deref());
    debug!("Rendered message into {} bytes of HTML", html.len());
    Json(RenderResponse { html: Fragment::from_html(html) }).into_response()
}

async fn render_messages_handler(
    payload: Result<Json<Vec<ChatMessage>>, JsonRejection>
) -> Response {
    let Json(messages) = match payload {
        Ok(messages) => messages,
        Err(rejection) => return rejection_response(rejection),
    };
    debug!("Rendering {} messages", messages.len());
    Json(RenderResponse { html: render_conversation(&messages) }).into_response()
}

async fn conversation_handler(
    State(state): State<AppState>,
    Path(id): Path<String>
) -> Result<Json<ConversationResponse>, HistoryError> {
    let conversation = state.history.get_conversation(&id).await?;
    Ok(
        Json(ConversationResponse {
            message_count: conversation.messages.len(),
            html: render_conversation(&conversation.messages),
            conversation_id: conversation.id,
        })
    )
}
