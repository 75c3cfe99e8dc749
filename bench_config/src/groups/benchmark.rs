use utils::ByteSize;

crate::config_group!({

    /// Size of each transfer in the upload/download bandwidth tests.
    ///
    /// The default value is 256mib.
    ///
    /// Use the environment variable `LINKBENCH_BENCHMARK_LARGE_TRANSFER_BYTES` to set this value.
    ref large_transfer_bytes: ByteSize = ByteSize::new(256 << 20);

    /// Size of each transfer in the upload/download latency tests.
    ///
    /// The default value is 1 byte.
    ///
    /// Use the environment variable `LINKBENCH_BENCHMARK_SMALL_TRANSFER_BYTES` to set this value.
    ref small_transfer_bytes: ByteSize = ByteSize::new(1);

    /// Number of empty submissions timed by the command latency test.
    ///
    /// Use the environment variable `LINKBENCH_BENCHMARK_COMMAND_LATENCY_ITERATIONS` to set this value.
    ref command_latency_iterations: usize = 1000;

    /// Number of small transfers timed by each transfer latency test.
    ///
    /// Use the environment variable `LINKBENCH_BENCHMARK_TRANSFER_LATENCY_ITERATIONS` to set this value.
    ref transfer_latency_iterations: usize = 1000;

    /// Number of large copies submitted together in one timed bandwidth batch.
    ///
    /// Use the environment variable `LINKBENCH_BENCHMARK_COPIES_PER_BATCH` to set this value.
    ref copies_per_batch: usize = 4;

    /// Number of timed batches in each bandwidth test.
    ///
    /// Use the environment variable `LINKBENCH_BENCHMARK_BANDWIDTH_BATCHES` to set this value.
    ref bandwidth_batches: usize = 32;

    /// Repeat the whole suite until cancelled.
    ///
    /// Use the environment variable `LINKBENCH_BENCHMARK_CONTINUOUS_MODE` to set this value.
    ref continuous_mode: bool = false;
});
