// shared test helpers - a generator that answers from a script

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use zenvibe::Error;
use zenvibe::core::{GenerationRequest, Generator};

/// Replays canned answers and remembers every request it saw.
pub struct ScriptedGenerator {
    answers: Mutex<VecDeque<Result<String, Error>>>,
    seen: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl ScriptedGenerator {
    pub fn new(answers: Vec<Result<String, Error>>) -> (Self, Arc<Mutex<Vec<GenerationRequest>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let generator = Self {
            answers: Mutex::new(answers.into()),
            seen: seen.clone(),
        };
        (generator, seen)
    }

    pub fn answering(text: &str) -> (Self, Arc<Mutex<Vec<GenerationRequest>>>) {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn failing(error: Error) -> (Self, Arc<Mutex<Vec<GenerationRequest>>>) {
        Self::new(vec![Err(error)])
    }
}

#[async_trait]
impl Generator for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "test-model"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, Error> {
        self.seen.lock().unwrap().push(request.clone());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Server("script exhausted".to_string())))
    }
}

pub fn api_error() -> Error {
    Error::Api {
        provider: "scripted",
        status: 503,
        body: "overloaded".to_string(),
    }
}
