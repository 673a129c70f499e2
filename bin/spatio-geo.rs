use spatio_core::client::{cli_args, CliArgs, Command, Dataset, OutputFormatter};
use spatio_core::config::LoggingConfig;
use spatio_core::{Result, SpatioConfig, SpatioError};
use tracing::{debug, Level};

fn main() -> Result<()> {
    let args = CliArgs::parse_args();

    // 验证参数
    if let Err(e) = args.validate() {
        eprintln!("{}", OutputFormatter::format_error(&e));
        std::process::exit(1);
    }

    // 加载配置，命令行参数覆盖配置文件
    let mut config = SpatioConfig::from_file(&args.config)?;
    if let Some(log_level) = &args.log_level {
        config.logging.level = log_level.clone();
    }
    config.validate()?;

    init_logging(&config.logging);
    debug!("Using configuration {:?}", config);

    let dataset = Dataset::load(&args.file, &config)?;
    run_command(&dataset, &args)
}

fn run_command(dataset: &Dataset, args: &CliArgs) -> Result<()> {
    match &args.command {
        Command::Stats => {
            println!("{}", OutputFormatter::format_stats(&dataset.stats()));
        }
        Command::Search { bounds } | Command::Within { bounds } => {
            let rect = cli_args::bounds_rect(bounds).map_err(SpatioError::InvalidArgument)?;
            let features = if matches!(args.command, Command::Search { .. }) {
                dataset.search(rect)
            } else {
                dataset.within(rect)
            };
            if args.json {
                println!("{}", OutputFormatter::features_json(&features)?);
            } else {
                println!("{}", OutputFormatter::format_features(&features));
            }
        }
        Command::Nearby { point, limit } => {
            let point = cli_args::query_point(point).map_err(SpatioError::InvalidArgument)?;
            let results = dataset.nearby(point, *limit);
            if args.json {
                let features: Vec<_> = results.iter().map(|(feature, _)| *feature).collect();
                println!("{}", OutputFormatter::features_json(&features)?);
            } else {
                println!("{}", OutputFormatter::format_nearby(&results));
            }
        }
        Command::Clip { bounds } => {
            let rect = cli_args::bounds_rect(bounds).map_err(SpatioError::InvalidArgument)?;
            println!("{}", OutputFormatter::object_json(&dataset.clip(rect))?);
        }
    }
    Ok(())
}

/// 初始化日志系统，日志写到 stderr，不干扰 stdout 上的查询结果
fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
        .init();
}
