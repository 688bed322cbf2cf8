//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

use crate::domain::feedback::Variant;

#[derive(Debug, Parser)]
#[command(name = "feedbackpilot")]
#[command(about = "Feedback classification form backed by a hosted LLM")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve the feedback classifier page
    Classifier {
        /// Listen address (defaults to config `defaults.bind_addr`)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Serve the feedback analyzer page with the sentiment report
    Analyzer {
        /// Listen address (defaults to config `defaults.bind_addr`)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Analyze one feedback text in the terminal (reads stdin when TEXT is omitted)
    Analyze {
        /// classifier | analyzer
        #[arg(long, default_value = "classifier")]
        variant: String,
        text: Option<String>,
    },
    /// Show effective merged config, or write a template with --init
    Config {
        #[arg(long)]
        init: bool,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Serve {
        variant: Variant,
        bind: Option<String>,
    },
    Analyze {
        variant: Variant,
        text: Option<String>,
    },
    InspectConfig,
    InitConfig,
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        match self.command {
            Commands::Classifier { bind } => Ok(CliAction::Serve {
                variant: Variant::Classifier,
                bind,
            }),
            Commands::Analyzer { bind } => Ok(CliAction::Serve {
                variant: Variant::Analyzer,
                bind,
            }),
            Commands::Analyze { variant, text } => {
                let Some(variant) = Variant::from_name(&variant) else {
                    return Err(format!(
                        "unknown variant `{variant}` (expected classifier or analyzer)"
                    ));
                };
                Ok(CliAction::Analyze { variant, text })
            }
            Commands::Config { init: true } => Ok(CliAction::InitConfig),
            Commands::Config { init: false } => Ok(CliAction::InspectConfig),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(args: &[&str]) -> Result<CliAction, String> {
        Cli::try_parse_from(args).map_err(|e| e.to_string())?.into_action()
    }

    #[test]
    fn serve_subcommands_select_variant() {
        assert_eq!(
            action(&["feedbackpilot", "classifier"]).unwrap(),
            CliAction::Serve {
                variant: Variant::Classifier,
                bind: None
            }
        );
        assert_eq!(
            action(&["feedbackpilot", "analyzer", "--bind", "0.0.0.0:9000"]).unwrap(),
            CliAction::Serve {
                variant: Variant::Analyzer,
                bind: Some("0.0.0.0:9000".to_string())
            }
        );
    }

    #[test]
    fn analyze_defaults_to_classifier_and_rejects_unknown_variant() {
        assert_eq!(
            action(&["feedbackpilot", "analyze", "buen trabajo"]).unwrap(),
            CliAction::Analyze {
                variant: Variant::Classifier,
                text: Some("buen trabajo".to_string())
            }
        );
        assert_eq!(
            action(&["feedbackpilot", "analyze", "--variant", "b"]).unwrap(),
            CliAction::Analyze {
                variant: Variant::Analyzer,
                text: None
            }
        );
        let err = action(&["feedbackpilot", "analyze", "--variant", "c", "x"]).unwrap_err();
        assert!(err.contains("unknown variant `c`"));
    }

    #[test]
    fn config_flags() {
        assert_eq!(action(&["feedbackpilot", "config"]).unwrap(), CliAction::InspectConfig);
        assert_eq!(
            action(&["feedbackpilot", "config", "--init"]).unwrap(),
            CliAction::InitConfig
        );
    }
}
