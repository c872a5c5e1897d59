use clap::Parser;
use service_harvest::core::persister::list_services;
use service_harvest::core::ConfigProvider;
use service_harvest::utils::{logger, validation::Validate};
use service_harvest::{CliConfig, HarvestEngine, HarvestError, HarvestPipeline, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 載入 TOML 配置（如有指定）
    let toml_config = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(mut config) => {
                // 命令列覆蓋設定
                if let Some(refresh) = args.refresh {
                    config.source.refresh = Some(refresh);
                }
                Some(config)
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    let verbose = args.verbose || toml_config.as_ref().is_some_and(|c| c.verbose());
    let log_format = args
        .log_format
        .or_else(|| toml_config.as_ref().and_then(|c| c.log_format()))
        .unwrap_or_default();
    logger::init_cli_logger(verbose, log_format);

    tracing::info!("Starting service-harvest");
    if verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let list_only = args.list;
    let status = match toml_config {
        Some(config) => execute(config, list_only).await,
        None => execute(args, list_only).await,
    };

    if let Err(e) = status {
        report_failure(&e);
    }

    Ok(())
}

async fn execute<C>(config: C, list_only: bool) -> service_harvest::Result<()>
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    config.validate()?;

    let storage = LocalStorage::new(config.base_dir().to_string());

    if list_only {
        for name in list_services(&storage, config.state_path()).await? {
            println!("{}", name);
        }
        return Ok(());
    }

    let pipeline = HarvestPipeline::new(storage, config);
    let engine = HarvestEngine::new(pipeline);

    let report = engine.run().await?;
    tracing::info!("✅ Harvest completed, {} new service names", report.added.len());
    print!("{}", report.summary()?);

    Ok(())
}

fn report_failure(e: &HarvestError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Harvest failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code())
}
