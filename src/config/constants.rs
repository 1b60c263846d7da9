// Name of this returner, used as the prefix of its configuration block.
pub const RETURNER_NAME: &str = "syslog";

// Record keys that steer option resolution for a single call.
pub const RET_CONFIG_KEY: &str = "ret_config";
pub const RET_KWARGS_KEY: &str = "ret_kwargs";

pub const DEFAULT_LEVEL: &str = "INFO";
pub const DEFAULT_FACILITY: &str = "LOG_USER";
pub const DEFAULT_REMOTE_IP: &str = "127.0.0.1";
pub const DEFAULT_REMOTE_PORT: u16 = 514;
pub const DEFAULT_LOGGER_NAME: &str = "Salt-Master";

pub const MAX_TAG_LEN: usize = 32;
