//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length (users)
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username minimum length (admins)
pub const MIN_ADMIN_USERNAME_LENGTH: u64 = 2;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// EXECUTOR DEFAULTS
// =============================================================================

/// Default remote execution endpoint (Piston-compatible)
pub const DEFAULT_EXECUTOR_URL: &str = "https://emkc.org/api/v2/piston/execute";

/// Default HTTP timeout for one execution call, in seconds
pub const DEFAULT_EXECUTOR_TIMEOUT_SECONDS: u64 = 15;

/// Exit code reported when the executor returns no code (killed by a signal)
pub const SIGNALLED_EXIT_CODE: i32 = -1;

// =============================================================================
// SUPPORTED LANGUAGES
// =============================================================================

/// Language identifiers accepted on the wire
pub mod languages {
    pub const CPP: &str = "cpp";
    pub const PYTHON: &str = "python";
    pub const JAVASCRIPT: &str = "javascript";
    pub const JAVA: &str = "java";

    /// All supported language identifiers
    pub const ALL: &[&str] = &[CPP, PYTHON, JAVASCRIPT, JAVA];
}

/// Executor runtime pins (language name, version) for each language
pub mod runtimes {
    pub const CPP: (&str, &str) = ("c++", "10.2.0");
    pub const PYTHON: (&str, &str) = ("python", "3.10.0");
    pub const JAVASCRIPT: (&str, &str) = ("javascript", "18.15.0");
    pub const JAVA: (&str, &str) = ("java", "15.0.2");
}

// =============================================================================
// USER ROLES
// =============================================================================

/// Principal role identifiers carried in tokens
pub mod roles {
    pub const USER: &str = "user";
    pub const ADMIN: &str = "admin";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// VALIDATION
// =============================================================================

/// Minimum problem title length
pub const MIN_PROBLEM_TITLE_LENGTH: u64 = 3;

/// Maximum problem title length
pub const MAX_PROBLEM_TITLE_LENGTH: u64 = 256;

/// Minimum problem description length
pub const MIN_PROBLEM_DESCRIPTION_LENGTH: u64 = 10;

/// Maximum problem description length
pub const MAX_PROBLEM_DESCRIPTION_LENGTH: u64 = 65535;

/// Minimum problem slug length
pub const MIN_SLUG_LENGTH: u64 = 3;

/// Maximum problem slug length
pub const MAX_SLUG_LENGTH: u64 = 128;

/// Maximum source code size in bytes (64 KB)
pub const MAX_SOURCE_CODE_LENGTH: u64 = 64 * 1024;

/// Maximum request body size in bytes (2 MB)
pub const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;
