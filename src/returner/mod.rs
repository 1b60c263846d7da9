use crate::config::{self, constants, ResolvedOptions};
use crate::error::{ReturnerResult, ReturnerWrap};
use log::{error, warn};
use serde_json::{Map, Value};
use std::fmt;
use std::net::UdpSocket;
use std::str::FromStr;
use syslog::{Facility, Formatter3164, Severity};

/// Why a delivery was skipped instead of sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    PortNotAnInteger,
    TagNotAString,
    TagTooLong,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::PortNotAnInteger => "remote_port must be an integer",
            Self::TagNotAString => "tag must be a string",
            Self::TagTooLong => "tag size is limited to 32 characters",
        };
        write!(f, "{msg}")
    }
}

/// Outcome of one call: either the record went out, or verification
/// rejected the resolved options and nothing was sent.
#[derive(Debug, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    Skipped(SkipReason),
}

/// Forward a job record to the remote syslog endpoint.
///
/// Options are resolved fresh for this call; on a verification failure the
/// record is silently dropped and the caller sees `Delivery::Skipped`.
/// Transport faults are the only errors surfaced.
pub fn returner(host: &Map<String, Value>, record: &Value) -> ReturnerResult<Delivery> {
    let options = config::resolve_options(host, record);

    if let Err(reason) = verify_options(&options) {
        error!("{reason}");
        return Ok(Delivery::Skipped(reason));
    }

    deliver(record, &options)?;
    Ok(Delivery::Delivered)
}

/// Check the two option invariants: an integer port and a string tag of at
/// most 32 characters. Violations are reported, never raised.
pub fn verify_options(options: &ResolvedOptions) -> Result<(), SkipReason> {
    // Sanity check port
    if !(options.remote_port.is_i64() || options.remote_port.is_u64()) {
        return Err(SkipReason::PortNotAnInteger);
    }

    // Sanity check tag; the limit counts characters, not UTF-8 bytes
    if let Some(tag) = &options.tag {
        match tag.as_str() {
            Some(tag) if tag.chars().count() > constants::MAX_TAG_LEN => {
                return Err(SkipReason::TagTooLong)
            }
            Some(_) => {}
            None => return Err(SkipReason::TagNotAString),
        }
    }

    Ok(())
}

// Opens a fresh UDP syslog client for every call, on purpose: nothing is
// cached across calls, matching the one-shot lifecycle of the options.
fn deliver(record: &Value, options: &ResolvedOptions) -> ReturnerResult<()> {
    let severity = parse_level(&options.level);
    let facility = parse_facility(&options.facility);

    // The tag, when set, stands in for the logger name on the wire.
    let process = options
        .tag
        .as_ref()
        .and_then(Value::as_str)
        .unwrap_or(&options.logger_name);

    let formatter = Formatter3164 {
        facility,
        hostname: None,
        process: process.to_string(),
        pid: 0,
    };

    let server = format!("{}:{}", options.remote_ip, options.remote_port);
    let mut logger = syslog::udp(formatter, "0.0.0.0:0", server.as_str())
        .wrap(format!("connect syslog endpoint {server}"))?;

    let message = serde_json::to_string(record)?;
    match severity {
        Severity::LOG_EMERG => logger.emerg(message),
        Severity::LOG_ALERT => logger.alert(message),
        Severity::LOG_CRIT => logger.crit(message),
        Severity::LOG_ERR => logger.err(message),
        Severity::LOG_WARNING => logger.warning(message),
        Severity::LOG_NOTICE => logger.notice(message),
        Severity::LOG_INFO => logger.info(message),
        Severity::LOG_DEBUG => logger.debug(message),
    }
    .wrap(format!("send syslog datagram to {server}"))
}

fn parse_level(level: &str) -> Severity {
    match level.to_uppercase().as_str() {
        "EMERG" | "EMERGENCY" => Severity::LOG_EMERG,
        "ALERT" => Severity::LOG_ALERT,
        "CRIT" | "CRITICAL" => Severity::LOG_CRIT,
        "ERR" | "ERROR" => Severity::LOG_ERR,
        "WARNING" | "WARN" => Severity::LOG_WARNING,
        "NOTICE" => Severity::LOG_NOTICE,
        "INFO" => Severity::LOG_INFO,
        "DEBUG" => Severity::LOG_DEBUG,
        _ => {
            warn!("unknown level {level:?}, sending at INFO");
            Severity::LOG_INFO
        }
    }
}

fn parse_facility(facility: &str) -> Facility {
    match Facility::from_str(&facility.to_lowercase()) {
        Ok(f) => f,
        Err(_) => {
            warn!("unknown facility {facility:?}, using LOG_USER");
            Facility::LOG_USER
        }
    }
}

/// Prepare a job id: a passed id is taken as-is, otherwise the host's
/// generator supplies one. No format check is applied.
pub fn prep_jid<F>(_nocache: bool, passed_jid: Option<String>, gen_jid: F) -> String
where
    F: FnOnce() -> String,
{
    match passed_jid {
        Some(jid) => jid,
        None => gen_jid(),
    }
}

/// Required by the returner contract; this returner persists nothing.
pub fn save_load(_jid: &str, _load: &Value, _minions: Option<&[String]>) {}

/// Required by the returner contract; always an empty record.
pub fn get_load(_jid: &str) -> Value {
    Value::Object(Map::new())
}

/// Load-time availability gate: report a descriptive reason to the host's
/// module loader when a UDP socket cannot be created at all.
pub fn check_available() -> ReturnerResult<()> {
    UdpSocket::bind("0.0.0.0:0").wrap("syslog returner unavailable, cannot create a UDP socket")?;
    Ok(())
}
