//! Forward job result records to a remote syslog facility over UDP.
//!
//! The following keys can be set in the host configuration file:
//!
//! ```text
//! syslog.level       (optional, Default: INFO)
//! syslog.facility    (optional, Default: LOG_USER)
//! syslog.remote_port (optional, Default: 514)
//! syslog.remote_ip   (optional, Default: 127.0.0.1)
//! syslog.logger_name (optional, Default: Salt-Master)
//! syslog.tag         (optional, at most 32 characters)
//! ```
//!
//! An alternate profile block `<profile>.syslog.*` applies when the job
//! record carries `ret_config`, and per-call overrides in `ret_kwargs`
//! take precedence over everything else.

pub mod commands;
pub mod config;
pub mod error;
pub mod returner;
