//! ACC shared memory acquisition and access.
//!
//! The simulator publishes each channel as a pagefile-backed named mapping.
//! Acquisition is create-or-open: the reader may start before the simulator,
//! in which case the page exists zeroed until the writer begins filling it.
//! This matches the protocol's own binding behavior.

use std::ptr::NonNull;

use tracing::{debug, trace};
use windows::Win32::Foundation::{CloseHandle, HANDLE, INVALID_HANDLE_VALUE};
use windows::Win32::System::Memory::{
    CreateFileMappingW, FILE_MAP_READ, MEMORY_MAPPED_VIEW_ADDRESS, MapViewOfFile, PAGE_READWRITE,
    UnmapViewOfFile,
};
use windows::core::PCWSTR;

/// OS-level failure while creating, opening, or mapping a shared region.
///
/// Carries the Win32 call that failed; the session layer wraps this with the
/// channel context.
#[derive(Debug)]
pub struct AcquireFailure {
    /// Name of the Win32 call that failed.
    pub operation: &'static str,
    /// The underlying OS error.
    pub source: windows_core::Error,
}

impl std::fmt::Display for AcquireFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.source)
    }
}

impl std::error::Error for AcquireFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A mapped view over one channel's shared memory page.
///
/// The buffer is rewritten in place by the simulator with no lock or version
/// stamp; [`SharedRegion::bytes`] is therefore a live, best-effort view.
/// Dropping the region unmaps the view and closes the handle.
pub struct SharedRegion {
    mapping: HANDLE,
    base: NonNull<u8>,
    size: usize,
}

impl SharedRegion {
    /// Create-or-open the named mapping at exactly `size` bytes and map it
    /// read-only into this process.
    ///
    /// A name collision with an existing object too small for `size` fails at
    /// the mapping step; the region is never left half-acquired.
    pub fn acquire(object_name: &str, size: usize) -> Result<Self, AcquireFailure> {
        trace!(object_name, size, "acquiring shared memory region");

        let wide_name = wide_string(object_name);
        let mapping = unsafe {
            CreateFileMappingW(
                INVALID_HANDLE_VALUE,
                None,
                PAGE_READWRITE,
                0,
                size as u32,
                PCWSTR::from_raw(wide_name.as_ptr()),
            )
        }
        .map_err(|source| AcquireFailure { operation: "CreateFileMappingW", source })?;

        let view = unsafe { MapViewOfFile(mapping, FILE_MAP_READ, 0, 0, size) };
        let base = match NonNull::new(view.Value as *mut u8) {
            Some(base) => base,
            None => {
                let source = windows::core::Error::from_thread();
                unsafe {
                    let _ = CloseHandle(mapping);
                }
                return Err(AcquireFailure { operation: "MapViewOfFile", source });
            }
        };

        debug!(object_name, size, "mapped shared memory region");
        Ok(Self { mapping, base, size })
    }

    /// Live, non-owning view over the mapped buffer.
    ///
    /// The contents can change between two reads of the same slice; callers
    /// snapshot by decoding, not by holding the slice.
    pub fn bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.base.as_ptr(), self.size) }
    }

    /// Mapped size in bytes, always the record size requested at acquire.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Drop for SharedRegion {
    fn drop(&mut self) {
        unsafe {
            let addr = MEMORY_MAPPED_VIEW_ADDRESS { Value: self.base.as_ptr() as *mut _ };
            let _ = UnmapViewOfFile(addr);
            let _ = CloseHandle(self.mapping);
        }
    }
}

// SAFETY: The region only holds a Windows handle and a memory pointer that
// are safe to send between threads for our read-only use case
unsafe impl Send for SharedRegion {}
unsafe impl Sync for SharedRegion {}

/// Convert string to null-terminated wide string for Windows APIs
fn wide_string(s: &str) -> Vec<u16> {
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;
    OsStr::new(s).encode_wide().chain(std::iter::once(0)).collect()
}
