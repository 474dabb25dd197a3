pub mod cli_consts {
    //! Dashboard Configuration Constants

    use std::time::Duration;

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel between the dashboard and its render target.
    pub const UPDATE_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Backend used when neither the command line nor the config file names one.
    pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

    /// Delay between the end of one client list fetch and the start of the next.
    pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

    /// Lower bound for the poll interval; 0 would poll without pause.
    pub const MIN_POLL_INTERVAL_SECS: u64 = 1;

    /// Connection establishment timeout. Requests themselves are not timed out.
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    pub fn connect_timeout() -> Duration {
        Duration::from_secs(CONNECT_TIMEOUT_SECS)
    }

    // =============================================================================
    // BACKEND CONTRACT
    // =============================================================================

    /// Message the backend returns for a completed delete.
    pub const SUCCESS_MESSAGE: &str = "success";

    /// Multipart field name for uploaded account files.
    pub const UPLOAD_FIELD: &str = "file";

    /// Status code counted by the "online" counter.
    pub const CONNECTED_STATUS: i64 = 2;

    // =============================================================================
    // USER NOTICES
    // =============================================================================

    pub const DELETE_SUCCESS_ALERT: &str = "User deleted successfully.";
    pub const UPLOAD_SUCCESS_ALERT: &str = "File uploaded successfully.";
    pub const UPLOAD_FAILURE_ALERT: &str = "File upload failed.";
    pub const CREATE_SUCCESS_ALERT: &str = "Client created successfully.";
}
