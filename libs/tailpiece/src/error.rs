use thiserror::Error;

use crate::text::TextEncoding;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(miette::Diagnostic))]
pub enum Error {
    #[error("no trailer found")]
    #[cfg_attr(
        feature = "std",
        diagnostic(
            code(tailpiece::no_trailer),
            help("check `has_trailer` before reading the payload")
        )
    )]
    NoTrailer,

    #[error("buffer underflow")]
    #[cfg_attr(
        feature = "std",
        diagnostic(
            code(tailpiece::buf_underflow),
            help("buffer is too short to hold an offset field")
        )
    )]
    BufferUnderflow,

    #[error("buffer overflow")]
    #[cfg_attr(
        feature = "std",
        diagnostic(
            code(tailpiece::buf_overflow),
            help("ran out of room while writing to buffer")
        )
    )]
    BufferOverflow,

    #[error("offset overflow")]
    #[cfg_attr(
        feature = "std",
        diagnostic(
            code(tailpiece::offset_overflow),
            help("payload start does not fit in the 32-bit offset field")
        )
    )]
    OffsetOverflow,

    #[error("payload is not valid {0}")]
    #[cfg_attr(
        feature = "std",
        diagnostic(
            code(tailpiece::decode),
            help("the trailer payload could not be decoded with the requested text encoding")
        )
    )]
    Decode(TextEncoding),
}
