use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::types::{OracleError, RecognizedItem};

static STRUCTURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(\{.*\}|\[.*\])").expect("static regex"));
static ORIGINAL_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""originalText"\s*:\s*"([^"]+)""#).expect("static regex"));
static TRANSLATION_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""translation"\s*:\s*"([^"]+)""#).expect("static regex"));
static REGION_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^region_(\d+)$").expect("static regex"));

const ORIGINAL_KEYS: &[&str] = &["originalText", "original_text", "original", "text"];
const TRANSLATION_KEYS: &[&str] = &["translation", "translatedText", "translated_text", "translated"];

/// Which tier of the degrade path produced the items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeTier {
    /// The whole payload decoded as JSON.
    Strict,
    /// A `{...}` or `[...]` span inside the payload decoded as JSON.
    Structural,
    /// Individual string fields were pulled out with a pattern match.
    FieldExtraction,
}

/// Items recovered from one raw oracle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalized {
    pub items: Vec<RecognizedItem>,
    pub tier: DecodeTier,
}

/// Remove markdown code fences models like to wrap JSON in.
fn strip_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Normalize a raw payload into items, degrading strict -> structural ->
/// field extraction -> labeled failure.
pub fn normalize(raw: &str) -> Result<Normalized, OracleError> {
    let cleaned = strip_fences(raw);
    if cleaned.is_empty() {
        return Err(OracleError::EmptyResponse);
    }

    if let Ok(value) = serde_json::from_str::<Value>(&cleaned) {
        return interpret(value).map(|items| Normalized {
            items,
            tier: DecodeTier::Strict,
        });
    }

    if let Some(span) = STRUCTURE_RE.find(&cleaned) {
        if let Ok(value) = serde_json::from_str::<Value>(span.as_str()) {
            return interpret(value).map(|items| Normalized {
                items,
                tier: DecodeTier::Structural,
            });
        }
    }

    let original = ORIGINAL_FIELD_RE
        .captures(&cleaned)
        .map(|c| c[1].to_string());
    let translation = TRANSLATION_FIELD_RE
        .captures(&cleaned)
        .map(|c| c[1].to_string());
    if original.is_some() || translation.is_some() {
        return Ok(Normalized {
            items: vec![RecognizedItem::new(
                original.unwrap_or_else(|| "...".to_string()),
                translation.unwrap_or_else(|| cleaned.clone()),
            )],
            tier: DecodeTier::FieldExtraction,
        });
    }

    Err(OracleError::Malformed(
        "could not find a JSON structure".to_string(),
    ))
}

/// Normalize a payload expected to hold a single item; extra items are ignored.
pub fn normalize_single(raw: &str) -> Result<(RecognizedItem, DecodeTier), OracleError> {
    let normalized = normalize(raw)?;
    let tier = normalized.tier;
    normalized
        .items
        .into_iter()
        .next()
        .map(|item| (item, tier))
        .ok_or_else(|| OracleError::Malformed("response contained no items".to_string()))
}

/// Turn decoded JSON into items.
///
/// Accepts an array of item objects or strings, a single item object, a
/// `region_N` map, or a wrapper object holding one such array. An `error`
/// object becomes [`OracleError::Reported`].
fn interpret(value: Value) -> Result<Vec<RecognizedItem>, OracleError> {
    match value {
        Value::Array(entries) => Ok(entries.into_iter().filter_map(entry_to_item).collect()),
        Value::Object(map) => interpret_object(map),
        Value::String(s) => Ok(vec![RecognizedItem::new("", s)]),
        other => Err(OracleError::Malformed(format!(
            "unexpected JSON value: {other}"
        ))),
    }
}

fn interpret_object(map: Map<String, Value>) -> Result<Vec<RecognizedItem>, OracleError> {
    if let Some(item) = object_to_item(&map) {
        return Ok(vec![item]);
    }

    if let Some(err) = map.get("error") {
        let msg = match err {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(OracleError::Reported(msg));
    }

    let mut regions: Vec<(u64, String)> = map
        .iter()
        .filter_map(|(key, value)| {
            let n = REGION_KEY_RE.captures(key)?[1].parse::<u64>().ok()?;
            Some((n, value.as_str()?.to_string()))
        })
        .collect();
    if !regions.is_empty() {
        regions.sort_by_key(|(n, _)| *n);
        return Ok(regions
            .into_iter()
            .map(|(_, translation)| RecognizedItem::new("", translation))
            .collect());
    }

    let arrays: Vec<Value> = map
        .into_iter()
        .filter_map(|(_, v)| v.is_array().then_some(v))
        .collect();
    if let [single] = arrays.as_slice() {
        return interpret(single.clone());
    }

    Err(OracleError::Malformed(
        "unrecognized JSON structure".to_string(),
    ))
}

fn entry_to_item(entry: Value) -> Option<RecognizedItem> {
    match entry {
        Value::Object(map) => object_to_item(&map),
        Value::String(s) => Some(RecognizedItem::new("", s)),
        _ => None,
    }
}

fn object_to_item(map: &Map<String, Value>) -> Option<RecognizedItem> {
    let field = |keys: &[&str]| {
        keys.iter()
            .find_map(|k| map.get(*k).and_then(Value::as_str))
            .map(str::to_string)
    };
    let original = field(ORIGINAL_KEYS);
    let translation = field(TRANSLATION_KEYS);
    if original.is_none() && translation.is_none() {
        return None;
    }
    Some(RecognizedItem::new(
        original.unwrap_or_default(),
        translation.unwrap_or_default(),
    ))
}
