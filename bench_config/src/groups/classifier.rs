crate::config_group!({

    /// Lowest percentage of a link's theoretical bandwidth that still counts as a plausible measurement.
    ///
    /// Use the environment variable `LINKBENCH_CLASSIFIER_REALISTIC_MIN_PERCENT` to set this value.
    ref realistic_min_percent: f64 = 60.0;

    /// Highest percentage of a link's theoretical bandwidth that still counts as a plausible measurement.
    ///
    /// Use the environment variable `LINKBENCH_CLASSIFIER_REALISTIC_MAX_PERCENT` to set this value.
    ref realistic_max_percent: f64 = 95.0;
});
