use crate::config::HttpServerConfig;
use axum::Router;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpServer {
    config: HttpServerConfig,
    router: Arc<Router>,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
        }
    }

    pub async fn start(&self) -> std::io::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.config.addr()).await?;
        tracing::info!("listening on http://{}", listener.local_addr()?);

        axum::serve(listener, (*self.router).clone()).await
    }
}
