use bitvec::prelude::*;
use std::time::Duration;
use thiserror::Error;

pub use super::config::*;

/// Code or type of packet. Primarily dictates the layout of frames inside a packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// One frame.
    Code0 = 0,
    /// Two frames.
    Code1 = 1,
    /// Two frames (variable length).
    Code2 = 2,
    /// Multiple frames (upto 120 ms total), the count signaled explicitly
    /// in the byte following the TOC.
    Code3 = 3,
}

impl From<u8> for Code {
    fn from(value: u8) -> Self {
        match value {
            0 => Code::Code0,
            1 => Code::Code1,
            2 => Code::Code2,
            3 => Code::Code3,
            _ => unreachable!(),
        }
    }
}

/// An error that occured while decoding the packet header, violating one of
/// the Opus packet handling rules defined in [RFC 6716, Sec 3.4][1].
///
/// Decoding either yields a complete [`Header`] or one of these; a failed
/// decode never produces a partially filled header.
///
/// [1]: https://datatracker.ietf.org/doc/html/rfc6716#section-3.4
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Packet is too small to hold the fields it claims to use.
    #[error("packet must contain at least {expected} byte(s), got {got}")]
    TooShort { expected: usize, got: usize },
    /// Code 3 packet signaling zero audio frames.
    #[error("frame count must be at least 1")]
    InvalidFrameCount,
}

/// Decoded Opus packet header: the TOC byte plus, for Code 3 packets,
/// the frame count byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Coding configuration shared by all frames in the packet.
    pub config: Config,
    /// (Non-zero) number of frames that exist in this packet.
    pub num_frames: usize,
    /// Stereophonic or monophonic signal.
    ///
    /// An Opus decoder may decode as monophonic or stereophonic as per preference,
    /// however it must accept both monophonic and stereophonic frames.
    pub is_stereo: bool,
}

impl Header {
    /// Total duration of audio in the packet, frame duration times frame count.
    pub fn full_duration(&self) -> Duration {
        self.config.frame_duration * self.num_frames as u32
    }
}

/// Decodes the header of a non-self-delimiting Opus packet: configuration,
/// channel mode and frame count.
///
/// Reads at most the first two bytes of `packet`; the compressed frame data
/// behind them is left untouched. Note that frame-count codes 1 and 2 both
/// decode to two frames, the CBR/VBR distinction between them only matters
/// once frame boundaries are parsed.
pub fn decode_header(packet: &[u8]) -> Result<Header, DecodeError> {
    if packet.is_empty() {
        return Err(DecodeError::TooShort { expected: 1, got: 0 });
    }

    //  0 1 2 3 4 5 6 7
    // +-+-+-+-+-+-+-+-+
    // | config  |s| c |
    // +-+-+-+-+-+-+-+-+
    let toc = packet[0].view_bits::<Msb0>();

    let config = OPUS_CONFIG_TABLE[toc[..5].load::<usize>()];
    let is_stereo = toc[5];
    let code = Code::from(toc[6..].load::<u8>());

    let num_frames = match code {
        // Code 0, 1 frame
        Code::Code0 => 1,

        // Codes 1 and 2, 2 frames
        Code::Code1 | Code::Code2 => 2,

        // Code 3, signaled number of frames (upto max 120ms of audio)
        Code::Code3 => {
            // This packet requires 2 bytes at min
            if packet.len() < 2 {
                return Err(DecodeError::TooShort { expected: 2, got: packet.len() });
            }

            //  0 1 2 3 4 5 6 7
            // +-+-+-+-+-+-+-+-+
            // |v|p|     M     |
            // +-+-+-+-+-+-+-+-+
            let num_frames = packet[1].view_bits::<Msb0>()[2..].load::<usize>();

            if num_frames < 1 {
                return Err(DecodeError::InvalidFrameCount);
            }

            num_frames
        }
    };

    Ok(Header { config, num_frames, is_stereo })
}
