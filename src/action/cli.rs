use std::io::{self, Write};
use clap::Parser;
use crate::config::config::{Cli, COMPLETION_MESSAGE, DEFAULT_LOG_LEVEL};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::facade::report_facade::ReportFacade;
use crate::facade::traits::i_report::ReportFacadeTrait;
use crate::models::report::ReportOutput;
use crate::service::config_service::{CliConfigAdapter, ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> io::Result<ReportOutput> {
    if args.len() == 1 {
        process_default_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_default_mode() -> io::Result<ReportOutput> {
    setup_logging(DEFAULT_LOG_LEVEL)?;
    let (_, output) = run_report(Box::new(DefaultConfigAdapter::new()))?;
    Ok(output)
}

pub fn process_cli_mode() -> io::Result<ReportOutput> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let (config, output) = run_report(Box::new(CliConfigAdapter::new(cli.clone())))?;

    // 若啟用 --show-config，在報告完成後顯示配置
    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
        println!("報告結果：{:#?}", output);
    }

    Ok(output)
}

/// 從配置來源取得配置並執行一次完整的掃描與報告
pub fn run_report(config_port: Box<dyn ConfigPort>) -> io::Result<(AppConfig, ReportOutput)> {
    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;

    let facade: Box<dyn ReportFacadeTrait> = Box::new(ReportFacade::with_default_services());
    let output = facade.execute_report(config.clone().into())?;
    Ok((config, output))
}

/// 報告完成後輸出固定的完成訊息（即使報告為空）
pub fn report_completion<W: Write>(writer: &mut W, output: &ReportOutput) -> io::Result<()> {
    log::info!(
        "程式執行完成，報告檔案：{}，共 {} 行，產生時間：{}",
        output.report_path.display(),
        output.lines_written,
        output.generated_at
    );
    writeln!(writer, "{}", COMPLETION_MESSAGE)
}
