//! SOAP reply reader.
//!
//! Converts a reply document into a [`Value`] tree:
//! - namespace prefixes are dropped and element names are snake-cased
//! - repeated sibling elements become an array; a single occurrence does not
//! - empty and `xsi:nil="true"` elements become `null`
//! - attributes other than `nil` are ignored

use heck::ToSnakeCase;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Value};

use crate::TransportError;

#[derive(Default)]
struct Frame {
    name: String,
    children: Map<String, Value>,
    text: String,
    nil: bool,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Self {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).to_snake_case();
        let nil = start
            .attributes()
            .flatten()
            .any(|attribute| attribute.key.local_name().as_ref() == b"nil" && attribute.value.as_ref() == b"true");
        Self {
            name,
            nil,
            ..Self::default()
        }
    }

    fn close(self) -> (String, Value) {
        let value = if !self.children.is_empty() {
            Value::Object(self.children)
        } else if self.nil || self.text.is_empty() {
            Value::Null
        } else {
            Value::String(self.text)
        };
        (self.name, value)
    }

    fn attach(&mut self, name: String, value: Value) {
        match self.children.get_mut(&name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                self.children.insert(name, value);
            }
        }
    }
}

/// Parse a SOAP reply and return the content of its `Body`.
///
/// A `Fault` inside the body is returned as [`TransportError::Fault`].
pub fn parse_reply(xml: &str) -> Result<Value, TransportError> {
    let document = parse_document(xml)?;
    let body = document
        .get("envelope")
        .and_then(|envelope| envelope.get("body"))
        .ok_or_else(|| TransportError::malformed("reply has no SOAP Envelope/Body"))?;

    let body = match body {
        Value::Null => Value::Object(Map::new()),
        other => other.clone(),
    };
    if let Some(fault) = body.get("fault") {
        return Err(fault_error(fault));
    }
    Ok(body)
}

fn parse_document(xml: &str) -> Result<Map<String, Value>, TransportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack = vec![Frame::default()];
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => stack.push(Frame::open(&start)),
            Ok(Event::Empty(start)) => {
                let (name, value) = Frame::open(&start).close();
                if let Some(parent) = stack.last_mut() {
                    parent.attach(name, value);
                }
            }
            Ok(Event::Text(text)) => {
                let unescaped = text
                    .unescape()
                    .map_err(|error| TransportError::malformed(format!("invalid text content: {error}")))?;
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                if stack.len() < 2 {
                    return Err(TransportError::malformed("unexpected closing tag"));
                }
                let (name, value) = stack.pop().map(Frame::close).unwrap_or_default();
                if let Some(parent) = stack.last_mut() {
                    parent.attach(name, value);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(error) => {
                return Err(TransportError::malformed(format!(
                    "error at position {}: {error}",
                    reader.buffer_position()
                )));
            }
        }
    }

    if stack.len() != 1 {
        return Err(TransportError::malformed("reply ended with unclosed elements"));
    }
    Ok(stack.pop().map(|root| root.children).unwrap_or_default())
}

/// Read SOAP 1.1 (`faultcode`/`faultstring`) or SOAP 1.2 (`Code/Value`, `Reason/Text`) faults.
fn fault_error(fault: &Value) -> TransportError {
    let text_at = |path: &[&str]| {
        path.iter()
            .try_fold(fault, |value, key| value.get(key))
            .and_then(Value::as_str)
            .map(str::to_string)
    };
    let code = text_at(&["faultcode"])
        .or_else(|| text_at(&["code", "value"]))
        .unwrap_or_else(|| "unknown".to_string());
    let message = text_at(&["faultstring"])
        .or_else(|| text_at(&["reason", "text"]))
        .unwrap_or_else(|| "no fault description".to_string());
    TransportError::fault(code, message)
}
