use dotenvy::dotenv;
use std::env;

use civica_domain::routing::DepartmentRouter;

pub struct Config {
    /// Warnings at which a user account is automatically blocked.
    pub warnings_block_threshold: u32,
    /// Maximum number of reports returned by queue/list queries.
    pub queue_limit: i64,
    /// Category ↔ department routing table, loaded once at startup.
    pub router: DepartmentRouter,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let warnings_block_threshold = match env::var("CIVICA_WARNINGS_BLOCK_THRESHOLD") {
            Ok(val) => val.parse::<u32>().unwrap_or(3).max(1),
            Err(_) => 3,
        };

        let queue_limit = match env::var("CIVICA_QUEUE_LIMIT") {
            Ok(val) => val.parse::<i64>().unwrap_or(50).clamp(1, 500),
            Err(_) => 50,
        };

        Self {
            warnings_block_threshold,
            queue_limit,
            router: DepartmentRouter::new(),
        }
    }
}
