//! Forwards a single job record to the configured syslog endpoint.
use crate::config::{self, constants};
use crate::error::{ReturnerResult, ReturnerWrap};
use crate::returner::{self, Delivery};
use clap::Parser;
use serde_json::{Map, Value};
use std::fs::read_to_string;
use std::io::Read;

#[derive(Parser, Debug)]
pub struct Forward {
    /// Path to a file holding the job record as JSON, defaults to stdin
    pub record: Option<String>,
}

impl Forward {
    pub fn new() -> Self {
        Self { record: None }
    }

    pub fn exec(&self, config: Option<String>, profile: Option<String>) -> ReturnerResult<()> {
        let host = match config {
            Some(path) => config::parse_host_config(&path)?,
            None => Map::new(),
        };

        let mut record = self.read_record()?;

        // --profile wins over a ret_config already present in the record
        if let Some(profile) = profile {
            if let Value::Object(map) = &mut record {
                map.insert(
                    constants::RET_CONFIG_KEY.to_string(),
                    Value::String(profile),
                );
            }
        }

        match returner::returner(&host, &record)? {
            Delivery::Delivered => println!("delivered"),
            Delivery::Skipped(reason) => println!("skipped: {reason}"),
        }
        Ok(())
    }

    fn read_record(&self) -> ReturnerResult<Value> {
        let content = match &self.record {
            Some(path) => {
                read_to_string(path).wrap(format!("read record file {path}"))?
            }
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        serde_json::from_str(&content).wrap("parse job record")
    }
}

impl Default for Forward {
    fn default() -> Self {
        Self::new()
    }
}
