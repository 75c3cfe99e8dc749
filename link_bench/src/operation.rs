use std::fmt;

use serde::Serialize;

use crate::error::OperationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransferDirection {
    /// Host memory to device memory.
    Upload,
    /// Device memory to host memory.
    Download,
}

impl fmt::Display for TransferDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferDirection::Upload => f.write_str("host->device"),
            TransferDirection::Download => f.write_str("device->host"),
        }
    }
}

/// One timed unit of work on the device.
///
/// `execute` submits the work and returns only once the device reports it complete; the harness times the
/// whole call.  Implementations own whatever buffers, queues and fences they need.
pub trait HardwareOperation {
    fn execute(&mut self) -> Result<(), OperationError>;
}

impl<F> HardwareOperation for F
where
    F: FnMut() -> Result<(), OperationError>,
{
    fn execute(&mut self) -> Result<(), OperationError> {
        self()
    }
}

/// A device backend: supplies the operations the benchmark suite times.
pub trait Backend {
    /// Short label written to the result log's API column.
    fn label(&self) -> &str;

    /// Human readable description of the selected device.
    fn device_description(&self) -> String;

    /// An operation performing `copies` transfers of `bytes` each in `direction` per execution.
    fn copy_operation(
        &mut self,
        direction: TransferDirection,
        bytes: u64,
        copies: usize,
    ) -> Result<Box<dyn HardwareOperation + '_>, OperationError>;

    /// An operation submitting an empty command and waiting for it to complete.
    fn noop_operation(&mut self) -> Result<Box<dyn HardwareOperation + '_>, OperationError>;
}
