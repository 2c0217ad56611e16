//! 1 回のやり取り（Interaction）と状態機械
//!
//! 呼び出し順序を支配する状態機械:
//! `Idle → Submitting → Completed → {AwaitingFeedback, Done}`、
//! `AwaitingFeedback → Refining → Completed`。
//! Submitting と Refining が重なることはない（同時実行は高々 1 リクエスト）。
//! 不正な遷移は黙殺せずエラーにする。

use crate::domain::refine::FeedbackRequest;
use crate::error::Error;

/// 初期システムプロンプトのデフォルト
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant...";

/// 出力への評価
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackRating {
    None,
    Positive,
    Negative,
}

/// Interaction の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Submitting,
    Completed,
    AwaitingFeedback,
    Refining,
    Done,
}

/// 1 回のやり取り（セッション層が所有する一時状態。永続化しない）
#[derive(Debug, Clone)]
pub struct Interaction {
    state: InteractionState,
    user_message: String,
    system_prompt: String,
    output: Option<String>,
    rating: FeedbackRating,
}

impl Interaction {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            state: InteractionState::Idle,
            user_message: String::new(),
            system_prompt: system_prompt.into(),
            output: None,
            rating: FeedbackRating::None,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn rating(&self) -> FeedbackRating {
        self.rating
    }

    /// リクエスト実行中か（Submitting / Refining）。実行中は再送信を受け付けない
    pub fn is_busy(&self) -> bool {
        matches!(
            self.state,
            InteractionState::Submitting | InteractionState::Refining
        )
    }

    /// メッセージを送信して Submitting に入る。
    /// ガード: メッセージ非空（trim 後）、かつ実行中でないこと。
    /// 前回の output と rating はここで破棄される。
    pub fn submit(&mut self, message: &str) -> Result<(), Error> {
        if self.is_busy() {
            return Err(Error::invalid_argument("a request is already in flight"));
        }
        if message.trim().is_empty() {
            return Err(Error::invalid_argument("message must not be empty"));
        }
        match self.state {
            InteractionState::Idle | InteractionState::Completed | InteractionState::Done => {
                self.user_message = message.to_string();
                self.output = None;
                self.rating = FeedbackRating::None;
                self.state = InteractionState::Submitting;
                Ok(())
            }
            InteractionState::AwaitingFeedback => Err(Error::invalid_argument(
                "finish or cancel the feedback step before submitting",
            )),
            // is_busy で弾いているため到達しない
            InteractionState::Submitting | InteractionState::Refining => {
                Err(Error::invalid_argument("a request is already in flight"))
            }
        }
    }

    /// 応答（またはインラインのエラー文字列）を受け取って Completed に遷移
    pub fn complete(&mut self, output: impl Into<String>) -> Result<(), Error> {
        if self.state != InteractionState::Submitting {
            return Err(Error::invalid_argument("no submission in flight"));
        }
        self.output = Some(output.into());
        self.state = InteractionState::Completed;
        Ok(())
    }

    /// thumbs up: Completed → Done
    pub fn rate_positive(&mut self) -> Result<(), Error> {
        if self.state != InteractionState::Completed {
            return Err(Error::invalid_argument("nothing to rate"));
        }
        self.rating = FeedbackRating::Positive;
        self.state = InteractionState::Done;
        Ok(())
    }

    /// thumbs down: Completed → AwaitingFeedback
    pub fn rate_negative(&mut self) -> Result<(), Error> {
        if self.state != InteractionState::Completed {
            return Err(Error::invalid_argument("nothing to rate"));
        }
        self.rating = FeedbackRating::Negative;
        self.state = InteractionState::AwaitingFeedback;
        Ok(())
    }

    /// フィードバック入力の取りやめ（空入力・EOF）: AwaitingFeedback → Completed（変更なし）
    pub fn cancel_feedback(&mut self) -> Result<(), Error> {
        if self.state != InteractionState::AwaitingFeedback {
            return Err(Error::invalid_argument("no feedback step to cancel"));
        }
        self.state = InteractionState::Completed;
        Ok(())
    }

    /// フィードバック本文を受けて Refining に入り、改善リクエストを返す。
    /// FeedbackRequest はちょうど 1 回消費される。
    pub fn begin_refine(&mut self, feedback: &str) -> Result<FeedbackRequest, Error> {
        if self.state != InteractionState::AwaitingFeedback {
            return Err(Error::invalid_argument("no feedback step in progress"));
        }
        if feedback.trim().is_empty() {
            return Err(Error::invalid_argument("feedback must not be empty"));
        }
        let output = self
            .output
            .clone()
            .ok_or_else(|| Error::invalid_argument("no output to refine against"))?;
        self.state = InteractionState::Refining;
        Ok(FeedbackRequest {
            user_message: self.user_message.clone(),
            system_prompt: self.system_prompt.clone(),
            output,
            feedback: feedback.to_string(),
        })
    }

    /// 改善結果の受領: Refining → Completed、システムプロンプトを差し替える
    pub fn apply_refined_prompt(&mut self, new_prompt: impl Into<String>) -> Result<(), Error> {
        if self.state != InteractionState::Refining {
            return Err(Error::invalid_argument("no refinement in flight"));
        }
        self.system_prompt = new_prompt.into();
        self.state = InteractionState::Completed;
        Ok(())
    }

    /// 改善の失敗: Refining → Completed、システムプロンプトは据え置き
    pub fn refine_failed(&mut self) -> Result<(), Error> {
        if self.state != InteractionState::Refining {
            return Err(Error::invalid_argument("no refinement in flight"));
        }
        self.state = InteractionState::Completed;
        Ok(())
    }
}
