//! テスト用スタブ（ChatCompletion / ApiKeyResolver / Console）

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::Error;
use crate::ports::outbound::{ApiKeyResolver, ChatCompletion, ChatRequest, Console};

/// テスト用: 台本どおりの結果を順に返し、受け取ったリクエストを記録する ChatCompletion
pub struct StubChat {
    results: Mutex<VecDeque<Result<Option<String>, Error>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl StubChat {
    pub fn new(results: Vec<Result<Option<String>, Error>>) -> Self {
        Self {
            results: Mutex::new(results.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ChatCompletion for StubChat {
    fn complete(&self, request: &ChatRequest) -> Result<Option<String>, Error> {
        self.requests.lock().unwrap().push(request.clone());
        match self.results.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Err(Error::http("stub: no scripted response left")),
        }
    }
}

/// テスト用: 固定の API キー（None なら未設定扱い）
pub struct StubApiKey(pub Option<String>);

impl ApiKeyResolver for StubApiKey {
    fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}

/// テスト用: 台本どおりの入力行を返し、出力を記録する Console
pub struct StubConsole {
    inputs: Mutex<VecDeque<String>>,
    outputs: Mutex<Vec<String>>,
}

impl StubConsole {
    /// 入力行の台本を渡す。尽きたら read_line は EOF（None）を返す
    pub fn new(inputs: Vec<&str>) -> Self {
        Self {
            inputs: Mutex::new(inputs.into_iter().map(|s| s.to_string()).collect()),
            outputs: Mutex::new(Vec::new()),
        }
    }

    pub fn outputs(&self) -> Vec<String> {
        self.outputs.lock().unwrap().clone()
    }
}

impl Console for StubConsole {
    fn read_line(&self, _prompt: &str) -> Result<Option<String>, Error> {
        Ok(self.inputs.lock().unwrap().pop_front())
    }

    fn print(&self, text: &str) -> Result<(), Error> {
        self.outputs.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
