use crate::adapters::http::router;
use crate::config::ServerConfig;
use crate::core::analyzer::SentimentService;
use crate::domain::ports::Scorer;
use crate::utils::error::Result;
use tokio::net::TcpListener;

pub struct SentimentServer<S: Scorer> {
    config: ServerConfig,
    service: SentimentService<S>,
}

impl<S: Scorer + 'static> SentimentServer<S> {
    pub fn new(config: ServerConfig, service: SentimentService<S>) -> Self {
        Self { config, service }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Binds the configured address and serves until the process stops.
    pub async fn run(self) -> Result<()> {
        let address = self.config.bind_address();
        let listener = TcpListener::bind(&address).await?;
        self.run_with_listener(listener).await
    }

    /// Serves on an already bound listener.
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<()> {
        let app = router(self.service, &self.config)?;

        tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);
        tracing::info!(
            "🌐 CORS origins: {}",
            self.config.cors.allowed_origins.join(", ")
        );
        if self.config.reload {
            // 程式本身不監看檔案；交給 cargo-watch 之類的外部工具重啟
            tracing::warn!(
                "🔁 Reload requested: restart on change is handled by an external watcher"
            );
        }

        axum::serve(listener, app).await?;
        Ok(())
    }
}
