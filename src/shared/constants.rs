pub const APP_NAME: &str = "calibrate";

pub const CALIBRATE_CONFIG_FILE: &str = "calibrate.config";
pub const ERROR_LOG_FILE: &str = "error.log";
pub const DEBUG_LOG_FILE: &str = "debug.log";

// Cell size assumed when the terminal does not report its pixel size.
pub const DEFAULT_CHAR_WIDTH: u32 = 10;
pub const DEFAULT_CHAR_HEIGHT: u32 = 20;

pub const STATUS_ROWS: u16 = 2;

// xterm window ops. Terminals that do not support them ignore the sequence.
pub const XTERM_ENTER_FULLSCREEN: &str = "\x1b[10;1t";
