//! Append auxiliary data to the end of an arbitrary byte buffer, and find it again later.
//!
//! A buffer carrying a trailer looks like this:
//!
//! ```text
//! | original content | payload | "DpR;" | offset: i32 LE |
//! ```
//!
//! The original content is left untouched, so a trailer can ride along at the end of an image,
//! document or executable without a sidecar file. See [`footer`] for the wire format and [`codec`]
//! for the operations.
//!
//! ```
//! use tailpiece::{TextEncoding, append_str, has_trailer, read_str};
//!
//! let image = [0u8; 10];
//! let tagged = append_str(&image, "hello", TextEncoding::Utf8).unwrap();
//! assert!(has_trailer(&tagged));
//! assert_eq!(&tagged[..10], &image);
//! assert_eq!(read_str(&tagged, TextEncoding::Utf8).unwrap(), "hello");
//! ```
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod buf;
pub mod codec;
pub mod error;
pub mod footer;
pub mod text;

pub use codec::{
    Trailer, append_all_into, append_into, data_index, extend_into, has_trailer, inspect, read,
    strip,
};
#[cfg(feature = "alloc")]
pub use codec::{append, append_all, extend};
pub use error::Error;
pub use text::TextEncoding;
#[cfg(feature = "alloc")]
pub use text::{append_all_str, append_str, read_str};
