use clap::Parser;
use column_unifier::utils::error::ErrorSeverity;
use column_unifier::utils::{logger, validation::Validate};
use column_unifier::{
    CliConfig, LocalStorage, RunOutcome, Session, TerminalShell, DELIVERY_ADDRESS_RULES,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting column-unifier");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.print_rules {
        println!("{}", serde_json::to_string_pretty(&DELIVERY_ADDRESS_RULES)?);
        return Ok(());
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut shell = TerminalShell::stdio(config.input, config.output);
    let session = Session::new(LocalStorage::new());

    if let RunOutcome::Failed { severity, .. } = session.run(&mut shell) {
        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match severity {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
