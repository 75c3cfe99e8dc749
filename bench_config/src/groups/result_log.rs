crate::config_group!({

    /// Append every test result to a CSV file.
    ///
    /// Use the environment variable `LINKBENCH_RESULT_LOG_CSV_LOGGING_ENABLED` to set this value.
    ref csv_logging_enabled: bool = true;

    /// Path of the CSV result log; created with a header row if missing or empty.
    ///
    /// The default value is "linkbench_results.csv" in the working directory.
    ///
    /// Use the environment variable `LINKBENCH_RESULT_LOG_CSV_PATH` to set this value.
    ref csv_path: String = "linkbench_results.csv".to_string();
});
