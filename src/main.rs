mod adapter;
mod cli;
mod domain;
mod error;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{parse_args, Config};
use domain::DEFAULT_SYSTEM_PROMPT;
use error::Error;
use ports::inbound::UseCaseRunner;
use ports::outbound::{now_iso8601, LogLevel, LogRecord};
use wiring::{wire_promptlab, App};

/// Config をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let mode = run_mode(&config);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "session started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("mode".to_string(), serde_json::json!(mode));
                Some(m)
            },
        });

        let system_prompt = config
            .system
            .clone()
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        let result = if config.help {
            print_help();
            Ok(0)
        } else if !config.message_args.is_empty() {
            let message = config.message_args.join(" ");
            self.app.session.run_once(&message, &system_prompt)
        } else if config.no_interactive {
            Err(Error::invalid_argument(
                "No message provided. Pass the message as arguments when using --no-interactive.",
            ))
        } else {
            self.app.session.run_interactive(&system_prompt)
        };

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "session finished".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("mode".to_string(), serde_json::json!(mode));
                m.insert("exit_code".to_string(), serde_json::json!(code));
                Some(m)
            },
        });
        if let Err(ref e) = result {
            let _ = self.app.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

fn run_mode(config: &Config) -> &'static str {
    if config.help {
        "help"
    } else if !config.message_args.is_empty() || config.no_interactive {
        "once"
    } else {
        "interactive"
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("promptlab: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = parse_args()?;
    let mut lab_config = adapter::load_config()?;
    if let Some(ref model) = config.model {
        lab_config.model = model.clone();
    }
    let app = wire_promptlab(&lab_config, config.verbose);
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: promptlab [options] [message...]");
}

fn print_help() {
    println!("Usage: promptlab [options] [message...]");
    println!("Options:");
    println!("  -h, --help             Show this help message");
    println!("  -s, --system <TEXT>    Initial system prompt");
    println!("  -m, --model <NAME>     Override the configured model name");
    println!("      --no-interactive   Send the message given as arguments once and exit");
    println!("  -v, --verbose          Emit verbose debug logs to stderr");
    println!();
    println!("Without message arguments, promptlab starts an interactive session:");
    println!("enter a message, read the output, rate it up or down, and on a down");
    println!("rating describe what was wrong to have the system prompt rewritten.");
    println!();
    println!("Environment:");
    println!("  OPENAI_API_KEY     API key (name configurable via api_key_env)");
    println!("  PROMPTLAB_CONFIG   Path to a JSON config file");
    println!("  PROMPTLAB_LOG      Path to a JSONL log file");
}
