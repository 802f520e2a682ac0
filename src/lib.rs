//! Decoding of the Opus packet TOC (table-of-contents) byte as defined in
//! [RFC 6716, Section 3.1][1].
//!
//! The TOC byte is the first byte of every Opus packet and selects the coding
//! configuration (mode, bandwidth, frame duration), the channel mode and the
//! number of frames packed behind it. This crate resolves those fields into a
//! [`packet::header::Header`] without touching the compressed frame data.
//!
//! [1]: https://datatracker.ietf.org/doc/html/rfc6716#section-3.1

pub mod packet;
