//! # Isoptera IO
//!
//! Everything that leaves the process: custom table files, compressed engine
//! snapshots, raster frames and video export.

/// Error types and result aliases for I/O operations
pub mod error;
/// Gzip-compressed engine snapshots
pub mod persistence;
/// Two-colour raster frames rendered from snapshots
pub mod raster;
/// JSON helpers and transition table files
pub mod serialization;
/// Animated GIF export
pub mod video;

pub use error::{IoError, Result};
pub use persistence::{load_snapshot, save_snapshot};
pub use raster::{Frame, Palette, Rgb};
pub use serialization::{from_json, read_json_file, read_table_spec, to_json_pretty, write_json_file, write_table_spec};
pub use video::{export_file_name, GifWriter};
