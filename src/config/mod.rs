use crate::error::{ReturnerError, ReturnerResult};
use serde_json::{Map, Value};
use std::fs::read_to_string;
pub mod constants;

// Resolve the effective delivery options for a single call.
// The host configuration is a flat JSON object with dotted string keys:
// <name>.level, <name>.facility, <name>.remote_ip, <name>.remote_port,
// <name>.logger_name and <name>.tag, where <name> is the returner name.
// An alternate profile block <profile>.<name>.* overrides the plain block
// when the job record selects a profile via its "ret_config" key, and
// per-call overrides in the record's "ret_kwargs" object take precedence
// over everything. Missing keys fall back to the hard-coded defaults.

/// Effective options for one delivery, produced fresh per call.
///
/// `remote_port` and `tag` keep their raw JSON value so that a mistyped
/// host setting is detected during verification instead of being coerced.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOptions {
    pub level: String,
    pub facility: String,
    pub remote_ip: String,
    pub remote_port: Value,
    pub logger_name: String,
    pub tag: Option<Value>,
}

pub fn resolve_options(host: &Map<String, Value>, record: &Value) -> ResolvedOptions {
    let kwargs = record
        .get(constants::RET_KWARGS_KEY)
        .and_then(Value::as_object);
    let profile = record
        .get(constants::RET_CONFIG_KEY)
        .and_then(Value::as_str);

    let string_opt = |key: &str, default: &str| -> String {
        match lookup(host, kwargs, profile, key) {
            Some(value) => as_config_string(value),
            None => default.to_string(),
        }
    };

    let level = string_opt("level", constants::DEFAULT_LEVEL);
    let facility = string_opt("facility", constants::DEFAULT_FACILITY);
    let remote_ip = string_opt("remote_ip", constants::DEFAULT_REMOTE_IP);
    let logger_name = string_opt("logger_name", constants::DEFAULT_LOGGER_NAME);
    let remote_port = lookup(host, kwargs, profile, "remote_port")
        .cloned()
        .unwrap_or_else(|| Value::from(constants::DEFAULT_REMOTE_PORT));
    let tag = lookup(host, kwargs, profile, "tag").cloned();

    ResolvedOptions {
        level,
        facility,
        remote_ip,
        remote_port,
        logger_name,
        tag,
    }
}

// Highest precedence first: per-call kwargs, the selected profile block,
// then the returner's own block. The first layer holding the key wins,
// whatever the value's type; verification deals with mistypes later.
fn lookup<'a>(
    host: &'a Map<String, Value>,
    kwargs: Option<&'a Map<String, Value>>,
    profile: Option<&str>,
    key: &str,
) -> Option<&'a Value> {
    if let Some(kwargs) = kwargs {
        if let Some(value) = kwargs.get(key) {
            return Some(value);
        }
    }
    if let Some(profile) = profile {
        let profile_key = format!("{profile}.{}.{key}", constants::RETURNER_NAME);
        if let Some(value) = host.get(&profile_key) {
            return Some(value);
        }
    }
    host.get(&format!("{}.{key}", constants::RETURNER_NAME))
}

// String-typed options accept any JSON scalar; non-strings keep their
// JSON rendering so the operator can spot the mistake in the datagram.
fn as_config_string(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

/// Read and parse the host configuration file, a single JSON object.
pub fn parse_host_config(path: &str) -> ReturnerResult<Map<String, Value>> {
    let content = read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ReturnerError::msg(format!(
            "host configuration {path} must be a JSON object"
        ))),
    }
}
