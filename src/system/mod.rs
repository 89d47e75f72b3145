//! System abstraction for filesystem and network operations
//!
//! This module provides a unified trait for all external system interactions,
//! allowing presets to be resolved, fetched and applied against an in-memory
//! mock in tests.

use std::io;
use std::path::{Path, PathBuf};

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for system operations (filesystem + HTTP)
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs` and `reqwest`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    // ==================== Environment Operations ====================

    /// Get the current working directory
    fn current_dir(&self) -> io::Result<PathBuf>;

    // ==================== Filesystem Operations ====================

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write bytes to a file, creating it if it doesn't exist
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path points to a file
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a path points to a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Canonicalize a path (resolve to absolute path)
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    // ==================== Network Operations ====================

    /// Perform an HTTP GET and return the response body as text
    ///
    /// Non-success HTTP statuses are reported as errors.
    fn http_get(&self, url: &str) -> io::Result<String>;
}
