use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use yt_audio_url::cli::Cli;
use yt_audio_url::common::logger::init_logger;
use yt_audio_url::{ExtractorConfig, WatchPageClient, resolve_audio_url};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 解析命令行参数，参数错误统一以 1 退出
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logger(args.verbose) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let config = ExtractorConfig::from(&args);
    debug!("配置: {:?}", config);
    let extractor = config.extractor.build();

    let client = match WatchPageClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match resolve_audio_url(&client, &extractor, &args.video_id).await {
        Ok(Some(url)) => {
            println!("{}", url);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            debug!("未能提取到音频直链");
            ExitCode::FAILURE
        }
        Err(e) => {
            debug!("抓取失败: {:?}", e.kind());
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
