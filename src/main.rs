use anyhow::Context;
use clap::Parser;
use procon_sentiment::utils::{logger, validation::Validate};
use procon_sentiment::{
    CliArgs, PatternScorer, SentimentServer, SentimentService, API_TITLE, API_VERSION,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 載入配置 (預設值 -> TOML 檔案 -> 命令列參數)
    let settings = match args.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(&settings.logging);

    tracing::info!("Starting {} v{}", API_TITLE, API_VERSION);
    tracing::debug!("Settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let scorer = PatternScorer::new().context("failed to build sentiment lexicon")?;
    tracing::info!("📚 Loaded sentiment lexicon with {} entries", scorer.len());

    let server = SentimentServer::new(settings.server_config(), SentimentService::new(scorer));
    server
        .run()
        .await
        .with_context(|| format!("server on {} stopped", settings.server.bind_address()))?;

    Ok(())
}
