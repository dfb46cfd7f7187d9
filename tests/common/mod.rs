//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use serde_json::{Value, json};
use startup_sunsets::generator::{GenerationRequest, Generator, GeneratorError};

/// Builder for one generated company object, as the generator would return it
pub struct CompanyBuilder {
    fields: serde_json::Map<String, Value>,
}

impl CompanyBuilder {
    /// A company with every required field filled in
    pub fn new(name: &str) -> Self {
        let value = json!({
            "name": name,
            "industry": "Consumer Hardware",
            "founded": "2013",
            "founders": "Doug Evans",
            "sunset": "2017",
            "raised": "$120M",
            "description": "A Wi-Fi connected juicer that pressed proprietary packs.",
            "lessonLearned": "Overengineering",
            "whatIf": "A manual press at a tenth of the price might have found a market.",
            "focusArea": "Hardware",
            "analogy": "Like building a robot to squeeze a lemon you could squeeze by hand.",
            "mentalModel": "Solution in Search of a Problem",
            "pivotStrategy": "Sell the packs through grocery chains.",
            "sourceUrl": "https://www.theguardian.com/technology/2017/sep/01/juicero-silicon-valley-shutting-down"
        });
        let Value::Object(fields) = value else { unreachable!() };
        Self { fields }
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.fields.insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Serialize companies into the JSON array text a generator replies with
pub fn reply_with(companies: Vec<CompanyBuilder>) -> String {
    Value::Array(companies.into_iter().map(CompanyBuilder::build).collect()).to_string()
}

/// Generator that answers from a queue of canned replies, recording prompts.
/// An `Err(status)` reply is reported as an HTTP failure.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, u16>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<Result<String, u16>>) -> Self {
        Self { replies: Mutex::new(replies.into()), prompts: Mutex::new(Vec::new()) }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Generator for ScriptedGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError> {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(status)) => {
                Err(GeneratorError::Status { status, message: "scripted failure".to_string() })
            }
            None => Ok("[]".to_string()),
        }
    }
}

/// Generator whose calls block until the test releases them.
///
/// Each gate is keyed by a substring of the prompt; the call whose prompt
/// contains the key waits for the reply sent through the matching sender, so
/// tests decide the order in which responses arrive.
pub struct GatedGenerator {
    gates: Mutex<Vec<(String, Receiver<String>)>>,
}

impl GatedGenerator {
    pub fn new() -> Self {
        Self { gates: Mutex::new(Vec::new()) }
    }

    /// Register a gate and return the sender that releases it
    pub fn gate(&self, key: &str) -> Sender<String> {
        let (tx, rx) = mpsc::channel();
        self.gates.lock().unwrap().push((key.to_string(), rx));
        tx
    }
}

impl Generator for GatedGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError> {
        let rx = {
            let mut gates = self.gates.lock().unwrap();
            let pos = gates
                .iter()
                .position(|(key, _)| request.prompt.contains(key.as_str()))
                .expect("no gate registered for prompt");
            gates.remove(pos).1
        };
        rx.recv().map_err(|_| GeneratorError::MalformedEnvelope("gate dropped".to_string()))
    }
}

/// Wrap generated text in a `generateContent` response envelope
pub fn gemini_envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

/// Answer exactly one HTTP request on a local port with `200 OK` and `body`.
/// Returns the base URL and a receiver for the raw request text.
pub fn serve_one_reply(body: String) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw);
            let Some(header_end) = text.find("\r\n\r\n") else { continue };
            let content_length = text[..header_end]
                .lines()
                .find_map(|l| {
                    let (name, value) = l.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok()).flatten()
                })
                .unwrap_or(0);
            if raw.len() >= header_end + 4 + content_length {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        tx.send(String::from_utf8_lossy(&raw).into_owned()).unwrap();
    });

    (format!("http://{}", addr), rx)
}
