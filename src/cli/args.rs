//! CLI 引数の解析

use clap::builder::ArgAction;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -s / --system: 初期システムプロンプト（未指定ならデフォルト）
    pub system: Option<String>,
    /// -m / --model: 設定のモデル名を上書き
    pub model: Option<String>,
    /// --no-interactive: 対話ループに入らず、引数メッセージを 1 回送って終了
    pub no_interactive: bool,
    /// -v / --verbose: 調査用の冗長ログを stderr に出力する
    pub verbose: bool,
    /// 位置引数（結合して 1 メッセージとして送る）
    pub message_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            system: None,
            model: None,
            no_interactive: false,
            verbose: false,
            message_args: Vec::new(),
        }
    }
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("promptlab")
        .about("Send a message with a system prompt to the LLM and refine the prompt from feedback")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("system")
                .short('s')
                .long("system")
                .help("Initial system prompt")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .help("Override the configured model name")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("no-interactive")
                .long("no-interactive")
                .help("Send the message given as arguments once and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose debug logs to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(clap::Arg::new("message").num_args(0..))
}

pub fn parse_args() -> Result<Config, Error> {
    parse_from(std::env::args().collect())
}

fn parse_from(args: Vec<String>) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(Config {
        help: matches.get_flag("help"),
        system: matches.get_one::<String>("system").cloned(),
        model: matches.get_one::<String>("model").cloned(),
        no_interactive: matches.get_flag("no-interactive"),
        verbose: matches.get_flag("verbose"),
        message_args: matches
            .get_many::<String>("message")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
    })
}
