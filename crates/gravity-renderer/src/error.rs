//! Failures while bringing up the window surface and GPU device

use std::fmt;

#[derive(Debug)]
pub enum GpuError {
    /// The window could not back a wgpu surface
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No adapter can present to the surface
    NoAdapter(wgpu::RequestAdapterError),
    /// The adapter refused the requested device
    DeviceCreation(wgpu::RequestDeviceError),
    /// The adapter lists no texture formats for the surface
    UnsupportedSurface,
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "cannot draw into window: {}", e),
            GpuError::NoAdapter(e) => write!(f, "no GPU can present to the window: {}", e),
            GpuError::DeviceCreation(e) => write!(f, "GPU device request refused: {}", e),
            GpuError::UnsupportedSurface => {
                f.write_str("window surface offers no texture formats")
            }
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::UnsupportedSurface => None,
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::NoAdapter(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for GpuError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        GpuError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unsupported_surface_has_no_source() {
        let error = GpuError::UnsupportedSurface;
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "window surface offers no texture formats");
    }
}
