use clap::Parser;
use drive_upload::utils::logger;
use drive_upload::{CliConfig, LocalStorage, SaveEvent, SaveEventHandler, UploadAdapter};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting drive-upload");

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    if cli.verbose {
        tracing::debug!("Upload config: {:?}", config);
    }

    let adapter = UploadAdapter::new(LocalStorage::default(), config);

    // 每個檔案觸發一次事件，依序處理
    let mut handled = 0usize;
    let mut skipped = 0usize;

    if cli.files.is_empty() {
        tracing::info!("📥 Reading saved filenames from stdin");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let filename = line.trim();
            if filename.is_empty() {
                continue;
            }
            dispatch(&adapter, filename, &mut handled, &mut skipped).await;
        }
    } else {
        for filename in &cli.files {
            dispatch(&adapter, filename, &mut handled, &mut skipped).await;
        }
    }

    tracing::info!(
        "✅ Done: {} uploaded, {} skipped",
        handled,
        skipped
    );
    Ok(())
}

async fn dispatch<H: SaveEventHandler>(
    handler: &H,
    filename: &str,
    handled: &mut usize,
    skipped: &mut usize,
) {
    match handler.on_image_saved(&SaveEvent::new(filename)).await {
        Ok(Some(_)) => *handled += 1,
        Ok(None) => *skipped += 1,
        Err(e) => {
            tracing::error!(
                "❌ Upload of {} failed: {} (Category: {:?})",
                filename,
                e,
                e.category()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(3);
        }
    }
}
