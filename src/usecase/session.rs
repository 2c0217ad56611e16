//! 対話セッション（状態機械を Console 越しに駆動する表示層）
//!
//! メッセージ入力 → 送信 → 出力表示 → 評価（up / down / スキップ）→
//! down ならフィードバック入力 → プロンプト改善、のループ。
//! 呼び出しは全て同期で、状態機械のガードにより同時実行は起きない。

use std::sync::Arc;

use crate::domain::Interaction;
use crate::error::Error;
use crate::ports::outbound::{now_iso8601, Console, Log, LogLevel, LogRecord};
use crate::usecase::playground::PlaygroundUseCase;

const MESSAGE_PROMPT: &str = "message> ";
const RATING_PROMPT: &str = "good? [u]p / [d]own / Enter to skip> ";
const FEEDBACK_PROMPT: &str = "what was wrong?> ";

pub struct SessionDeps {
    pub playground: Arc<PlaygroundUseCase>,
    pub console: Arc<dyn Console>,
    pub log: Arc<dyn Log>,
}

pub struct SessionUseCase {
    deps: SessionDeps,
}

impl SessionUseCase {
    pub fn new(deps: SessionDeps) -> Self {
        Self { deps }
    }

    /// 1 メッセージだけ送って出力を表示する（--no-interactive / 引数メッセージ用）
    pub fn run_once(&self, message: &str, system_prompt: &str) -> Result<i32, Error> {
        let mut interaction = Interaction::new(system_prompt);
        interaction.submit(message)?;
        let output = self
            .deps
            .playground
            .generate(interaction.user_message(), interaction.system_prompt())?;
        interaction.complete(output)?;
        // complete 直後なので output は必ずある
        if let Some(out) = interaction.output() {
            self.deps.console.print(out)?;
        }
        Ok(0)
    }

    /// 対話ループ。EOF で終了する
    pub fn run_interactive(&self, initial_system_prompt: &str) -> Result<i32, Error> {
        let mut interaction = Interaction::new(initial_system_prompt);
        loop {
            let message = match self.deps.console.read_line(MESSAGE_PROMPT)? {
                Some(line) => line,
                None => return Ok(0),
            };
            if message.trim().is_empty() {
                continue;
            }
            interaction.submit(&message)?;
            let output = self
                .deps
                .playground
                .generate(interaction.user_message(), interaction.system_prompt())?;
            interaction.complete(output)?;
            if let Some(out) = interaction.output() {
                self.deps.console.print(out)?;
            }
            self.ask_rating(&mut interaction)?;
        }
    }

    fn ask_rating(&self, interaction: &mut Interaction) -> Result<(), Error> {
        let answer = match self.deps.console.read_line(RATING_PROMPT)? {
            Some(line) => line,
            None => return Ok(()),
        };
        match answer.trim() {
            "u" | "U" | "y" | "Y" => interaction.rate_positive()?,
            "d" | "D" | "n" | "N" => {
                interaction.rate_negative()?;
                self.ask_feedback(interaction)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// thumbs down 後のフィードバック入力と改善呼び出し。
    /// 空入力・EOF は取りやめ。改善失敗時はプロンプトを据え置き、1 行だけ知らせる。
    fn ask_feedback(&self, interaction: &mut Interaction) -> Result<(), Error> {
        let feedback = self.deps.console.read_line(FEEDBACK_PROMPT)?;
        let feedback = match feedback {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                interaction.cancel_feedback()?;
                return Ok(());
            }
        };

        let req = interaction.begin_refine(&feedback)?;
        match self.deps.playground.improve_system_prompt(
            &req.user_message,
            &req.system_prompt,
            &req.output,
            &req.feedback,
        ) {
            Ok(new_prompt) => {
                interaction.apply_refined_prompt(new_prompt)?;
                self.deps.console.print(&format!(
                    "System prompt updated:\n{}",
                    interaction.system_prompt()
                ))?;
            }
            Err(e) => {
                interaction.refine_failed()?;
                let _ = self.deps.log.log(&LogRecord {
                    ts: now_iso8601(),
                    level: LogLevel::Warn,
                    message: format!("prompt refinement failed: {}", e),
                    layer: Some("usecase".to_string()),
                    kind: Some("provider".to_string()),
                    fields: None,
                });
                self.deps.console.print(&format!(
                    "Prompt refinement failed: {} (keeping the current prompt)",
                    e
                ))?;
            }
        }
        Ok(())
    }
}
