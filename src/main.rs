//! `feedbackpilot` 바이너리 진입점.

use anyhow::Result;
use tokio::io::AsyncReadExt;

use feedbackpilot::domain::feedback::Variant;
use feedbackpilot::interface::cli::{Cli, CliAction};

#[tokio::main]
async fn main() {
    // .env가 없어도 무시한다.
    dotenvy::dotenv().ok();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    init_tracing(matches!(action, CliAction::Serve { .. }));

    let result = match action {
        CliAction::Serve { variant, bind } => feedbackpilot::serve_variant(variant, bind).await,
        CliAction::Analyze { variant, text } => run_analyze(variant, text).await,
        CliAction::InspectConfig => {
            feedbackpilot::inspect_config_pretty_json().map(|json| println!("{json}"))
        }
        CliAction::InitConfig => feedbackpilot::init_config(),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(serving: bool) {
    let fallback = if serving {
        "warn,feedbackpilot=info,tower_http=info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run_analyze(variant: Variant, text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };
    let rendered = feedbackpilot::analyze_once(variant, text).await?;
    print!("{rendered}");
    Ok(())
}
