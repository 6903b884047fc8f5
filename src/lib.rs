//! Parse stream information from DSF (DSD Stream File) audio.
//!
//! DSF is Sony's container for DSD audio. Every stream opens with two
//! fixed-size chunks: a 28-byte `DSD ` chunk declaring the container size and
//! the offset of an embedded tag block, followed by a 52-byte `fmt ` chunk
//! declaring the audio properties. This crate decodes those two chunks into
//! an immutable [`DsfProperties`], leaving the tag block itself to whatever
//! tagging library the caller pairs this with.
//!
//! # Examples
//!
//! ## Reading from a path
//!
//! ```rust,no_run
//! # fn main() -> dsfinfo::error::Result<()> {
//! let properties = dsfinfo::read_from_path("test.dsf")?;
//!
//! println!("{}", properties);
//! # Ok(())
//! # }
//! ```
//!
//! ## Reading from an existing reader
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use dsfinfo::config::ParseOptions;
//!
//! # fn main() -> dsfinfo::error::Result<()> {
//! let mut file = Vec::new();
//! file.extend_from_slice(b"DSD ");
//! file.extend_from_slice(&28u64.to_le_bytes());
//! file.extend_from_slice(&1000u64.to_le_bytes()); // File size
//! file.extend_from_slice(&0u64.to_le_bytes()); // Tag offset (0, no tag)
//! file.extend_from_slice(b"fmt ");
//! file.extend_from_slice(&52u64.to_le_bytes());
//! file.extend_from_slice(&1u32.to_le_bytes()); // Format version
//! file.extend_from_slice(&0u32.to_le_bytes()); // Format ID
//! file.extend_from_slice(&2u32.to_le_bytes()); // Channel type
//! file.extend_from_slice(&2u32.to_le_bytes()); // Channel count
//! file.extend_from_slice(&2_822_400u32.to_le_bytes()); // Sample rate
//! file.extend_from_slice(&1u32.to_le_bytes()); // Bits per sample
//! file.extend_from_slice(&5_644_800u64.to_le_bytes()); // Sample count
//! file.extend_from_slice(&[0; 8]); // Block size and reserved
//!
//! let properties = dsfinfo::read_from(&mut Cursor::new(file), ParseOptions::new())?;
//!
//! assert_eq!(properties.sample_rate(), 2_822_400);
//! assert_eq!(properties.length_seconds(), 2.0);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub(crate) mod macros;
pub mod probe;
pub mod properties;
mod read;
mod util;
mod write;

pub use probe::read_from_path;
pub use properties::DsfProperties;
pub use read::read_from;
pub use write::update_header;
