//! GPU backend
//!
//! Owns the wgpu device, queue and window surface.

pub mod wgpu_backend;

pub use wgpu_backend::{Frame, GpuContext, DEPTH_FORMAT};

use thiserror::Error;

/// Backend error types
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to initialize backend: {0}")]
    InitializationFailed(String),
    #[error("Failed to create surface: {0}")]
    SurfaceCreationFailed(String),
    #[error("Failed to create device: {0}")]
    DeviceCreationFailed(String),
    #[error("Surface lost")]
    SurfaceLost,
    #[error("Out of memory")]
    OutOfMemory,
    #[error("Timed out acquiring the next frame")]
    Timeout,
}

pub type BackendResult<T> = Result<T, BackendError>;

impl From<wgpu::SurfaceError> for BackendError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => BackendError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => BackendError::OutOfMemory,
            wgpu::SurfaceError::Timeout => BackendError::Timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_error_mapping() {
        assert!(matches!(
            BackendError::from(wgpu::SurfaceError::Outdated),
            BackendError::SurfaceLost
        ));
        assert!(matches!(
            BackendError::from(wgpu::SurfaceError::OutOfMemory),
            BackendError::OutOfMemory
        ));
        assert!(matches!(
            BackendError::from(wgpu::SurfaceError::Timeout),
            BackendError::Timeout
        ));
    }
}
