pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Constants for the quote dashboard, organized by functional area.

    // =============================================================================
    // STORAGE CONFIGURATION
    // =============================================================================

    /// Key under which the liked quotes collection is persisted.
    pub const LIKES_KEY: &str = "likes";

    /// Directory (relative to the user's home) holding config and stored data.
    pub const APP_DIR_NAME: &str = ".quote-dashboard";

    /// Name of the configuration file inside the app directory.
    pub const CONFIG_FILE_NAME: &str = "config.json";

    /// Name of the key-value store directory inside the app directory.
    pub const STORE_DIR_NAME: &str = "store";

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying fetch results back to the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 16;

    /// How long the splash screen stays up before the dashboard (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 1500;

    /// Key event poll interval of the UI loop (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Quote provider configuration
    pub mod quote_provider {
        use std::time::Duration;

        /// Default endpoint returning one random quote as JSON.
        pub const DEFAULT_QUOTE_URL: &str = "https://dummyjson.com/quotes/random";

        /// Connect timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
