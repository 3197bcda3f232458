pub const RESULTS_COLLECTION: &str = "typingresult";
pub const DEFAULT_DB_NAME: &str = "typing_test";

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_RESULTS_LIMIT: u64 = 50;

// Applied when a stored document lacks a usable duration.
pub const DEFAULT_DURATION_SECS: i64 = 60;

pub const MAX_LISTED_COLLECTIONS: usize = 10;
pub const DIAGNOSTIC_ERROR_CHARS: usize = 50;
pub const ERROR_DETAIL_CHARS: usize = 200;

pub const MEMORY_URL_SCHEME: &str = "memory://";
