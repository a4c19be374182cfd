//! Server Implementation
//!
//! 路由装配和 HTTP 服务器启动

use std::net::SocketAddr;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::api;
use crate::core::{Config, ServerState};
use crate::utils::{AppError, AppResult};

/// 标记当前库存模式的响应头
pub const INVENTORY_MODE_HEADER: &str = "x-inventory-mode";

/// HTTP 请求日志中间件
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis();
    tracing::info!(target: "http_access", "{} {} {} {}ms", method, uri, status, latency_ms);

    response
}

/// 库存模式响应头中间件
///
/// 每个响应 (包括错误响应) 都带 x-inventory-mode，客户端据此识别
/// 降级 (demo) 模式
async fn inventory_mode_header(
    State(state): State<ServerState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        INVENTORY_MODE_HEADER,
        HeaderValue::from_static(state.inventory.mode().as_str()),
    );
    response
}

/// 构建 Axum 应用
pub fn build_app(state: ServerState) -> Router {
    Router::new()
        .merge(api::health::router())
        .merge(api::lessons::router())
        .merge(api::orders::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            inventory_mode_header,
        ))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

/// HTTP 服务器
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// 使用现成的状态创建服务器
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// 启动服务器，阻塞到收到 Ctrl+C
    pub async fn run(&self) -> AppResult<()> {
        let state = match &self.state {
            Some(state) => state.clone(),
            None => ServerState::initialize(&self.config).await,
        };

        let app = build_app(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        tracing::info!(
            mode = %state.mode(),
            environment = %self.config.environment,
            "🚀 Booking server listening on {}",
            addr
        );

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        Ok(())
    }
}
