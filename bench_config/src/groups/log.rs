crate::config_group!({

    /// The log destination.  By default, logs go to the console.
    ///
    /// If this path exists as a directory or the path ends with a /, then logs will be written into a new
    /// timestamped file in that directory; otherwise the path is used as the log file.
    ///
    /// Use the environment variable `LINKBENCH_LOG_DEST` to set this value.
    ref dest : Option<String> = None;

    /// The format the logs are printed in. If "json", then logs are dumped as json blobs; otherwise they
    /// are treated as text.  By default logging to files is done in json and console logging is done with text.
    ///
    /// Use the environment variable `LINKBENCH_LOG_FORMAT` to set this value.
    ref format : Option<String> = None;

    /// The base name for a log file when logging to a directory.  The timestamp and pid are appended to this
    /// name to form the log file.
    ///
    /// Use the environment variable `LINKBENCH_LOG_PREFIX` to set this value.
    ref prefix : String = "linkbench".to_string();
});
