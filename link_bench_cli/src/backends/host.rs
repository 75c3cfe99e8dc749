use std::hint::black_box;
use std::sync::atomic::{Ordering, fence};

use link_bench::{Backend, HardwareOperation, OperationError, TransferDirection};
use tracing::debug;

const FILL_BYTE: u8 = 0xA5;

/// Host memory standing in for a device: "device memory" is a second host buffer and every copy is a
/// `memcpy`.  Useful as a baseline for the memory path that any real transfer also pays.
#[derive(Debug, Default)]
pub struct HostBackend {
    host: Vec<u8>,
    device: Vec<u8>,
}

impl HostBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Grow `buffer` to `len` bytes, writing every byte so its pages are resident before timing starts.
fn ensure_len(buffer: &mut Vec<u8>, len: usize) -> Result<(), OperationError> {
    if buffer.len() < len {
        buffer
            .try_reserve_exact(len - buffer.len())
            .map_err(|_| OperationError::Allocation { bytes: len as u64 })?;
        buffer.resize(len, FILL_BYTE);
    }
    Ok(())
}

impl Backend for HostBackend {
    fn label(&self) -> &str {
        "host"
    }

    fn device_description(&self) -> String {
        let cpus = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        format!("host memory ({cpus} logical CPUs)")
    }

    fn copy_operation(
        &mut self,
        direction: TransferDirection,
        bytes: u64,
        copies: usize,
    ) -> Result<Box<dyn HardwareOperation + '_>, OperationError> {
        let len = usize::try_from(bytes).map_err(|_| OperationError::Allocation { bytes })?;
        ensure_len(&mut self.host, len)?;
        ensure_len(&mut self.device, len)?;
        debug!(%direction, bytes, copies, "prepared host copy");

        let (src, dst) = match direction {
            TransferDirection::Upload => (&self.host[..len], &mut self.device[..len]),
            TransferDirection::Download => (&self.device[..len], &mut self.host[..len]),
        };

        Ok(Box::new(move || -> Result<(), OperationError> {
            for _ in 0..copies {
                dst.copy_from_slice(black_box(src));
                black_box(&mut *dst);
            }
            fence(Ordering::SeqCst);
            Ok(())
        }))
    }

    fn noop_operation(&mut self) -> Result<Box<dyn HardwareOperation + '_>, OperationError> {
        Ok(Box::new(|| -> Result<(), OperationError> {
            fence(Ordering::SeqCst);
            black_box(());
            Ok(())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_copies_host_into_device() {
        let mut backend = HostBackend::new();
        backend.copy_operation(TransferDirection::Upload, 16, 1).unwrap().execute().unwrap();
        assert_eq!(backend.device.len(), 16);

        backend.host[..4].copy_from_slice(&[1, 2, 3, 4]);
        backend.copy_operation(TransferDirection::Upload, 16, 3).unwrap().execute().unwrap();
        assert_eq!(&backend.device[..4], &[1, 2, 3, 4]);
        assert_eq!(backend.device[4], FILL_BYTE);
    }

    #[test]
    fn test_download_copies_device_into_host() {
        let mut backend = HostBackend::new();
        backend.copy_operation(TransferDirection::Download, 8, 1).unwrap();
        backend.device.fill(7);
        backend.copy_operation(TransferDirection::Download, 8, 1).unwrap().execute().unwrap();
        assert!(backend.host.iter().all(|b| *b == 7));
    }

    #[test]
    fn test_buffers_only_grow() {
        let mut backend = HostBackend::new();
        backend.copy_operation(TransferDirection::Upload, 1024, 1).unwrap();
        backend.copy_operation(TransferDirection::Upload, 1, 1).unwrap().execute().unwrap();
        assert_eq!(backend.host.len(), 1024);
    }

    #[test]
    fn test_noop_succeeds() {
        let mut backend = HostBackend::new();
        let mut op = backend.noop_operation().unwrap();
        for _ in 0..3 {
            op.execute().unwrap();
        }
    }
}
