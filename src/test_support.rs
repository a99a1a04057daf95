//! Scripted [`JsonFetcher`] double for unit tests

use crate::fetcher::JsonFetcher;
use crate::{PokeWeatherError, Result};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Replies from a queue in call order, then from `reply_always` if set
#[derive(Default)]
pub struct ScriptedFetcher {
    replies: RefCell<VecDeque<Result<Value>>>,
    fallback: Option<Value>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedFetcher {
    pub fn reply(self, value: Value) -> Self {
        self.replies.borrow_mut().push_back(Ok(value));
        self
    }

    pub fn fail(self, error: PokeWeatherError) -> Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub fn reply_always(mut self, value: Value) -> Self {
        self.fallback = Some(value);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.url.clone()).collect()
    }
}

impl JsonFetcher for ScriptedFetcher {
    fn fetch(&self, url: &str, headers: &[(&str, &str)], body: Option<&Value>) -> Result<Value> {
        self.calls.borrow_mut().push(RecordedCall {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            body: body.cloned(),
        });

        match self.replies.borrow_mut().pop_front() {
            Some(reply) => reply,
            None => self
                .fallback
                .clone()
                .ok_or_else(|| PokeWeatherError::request(format!("no scripted reply for {url}"))),
        }
    }
}
