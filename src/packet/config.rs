//! This module defines structures and enumerations based on the TOC.
//! TOC (Table of Contents) signals which of the various modes and
//! configurations a packet uses for coding one or multiple isoconfig
//! Opus frames upto 120 ms (Code 3 only).
//!
//! See [RFC 6716, Section 3.1][1].
//!
//! [1]: (https://datatracker.ietf.org/doc/html/rfc6716#section-3.1)

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Operating mode used for packet coding.
pub enum Mode {
    /// [SILK][2]-only mode for use in low bitrate with wide-band or
    /// more narrow bandwidth connections.
    ///
    /// [2]: https://en.wikipedia.org/wiki/SILK
    SILK,
    /// [CELT][3]-only mode for very low delay speech transmission as well
    /// as music transmission narrow-band to full-band.
    ///
    /// [3]: https://en.wikipedia.org/wiki/CELT
    CELT,
    /// Hybrid (SILK+CELT) mode for super-wide-band or full-band speech at
    /// medium bitrates.
    Hybrid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Bandwidth of the transmitted signal.
pub enum Bandwidth {
    /// 0-4 kHz (8 kHz samplerate).
    Narrow,
    /// 0-6 kHz (12 kHz samplerate).
    Medium,
    /// 0-8 kHz (16 kHz samplerate).
    Wide,
    /// 0-12 kHz (24 kHz samplerate).
    SuperWide,
    /// 0-20 kHz (48 kHz samplerate).
    ///
    /// Although the [sampling theorem][4] allows a bandwidth as large as half
    /// the sampling rate, Opus never codes audio above 20 kHz, as that is
    /// the generally accepted upper limit of human hearing.
    ///
    /// [4]: https://en.wikipedia.org/wiki/Nyquist%E2%80%93Shannon_sampling_theorem
    FullBand,
}

impl Bandwidth {
    /// Upper edge of the coded audio band, in kHz.
    pub const fn bandwidth_khz(&self) -> u32 {
        match self {
            Bandwidth::Narrow => 4,
            Bandwidth::Medium => 6,
            Bandwidth::Wide => 8,
            Bandwidth::SuperWide => 12,
            Bandwidth::FullBand => 20,
        }
    }

    /// Sampling rate the band is coded at, in kHz.
    pub const fn sample_rate_khz(&self) -> u32 {
        match self {
            Bandwidth::Narrow => 8,
            Bandwidth::Medium => 12,
            Bandwidth::Wide => 16,
            Bandwidth::SuperWide => 24,
            Bandwidth::FullBand => 48,
        }
    }
}

/// TOC configuration field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub bandwidth: Bandwidth,
    /// Length of an Opus frame, can be 2.5/5/10/20/40/60 ms depending
    /// on the mode used for coding. Any other value pertains to [Opus
    /// custom][5], which is unsupported here.
    ///
    /// [5]: https://datatracker.ietf.org/doc/html/rfc6716#section-6.2
    pub frame_duration: Duration,
}

impl Default for Config {
    /// Default according to the reference implementation (libopus).
    ///
    /// - Full-band CELT-mode.
    /// - 20 ms frames.
    fn default() -> Self {
        Self {
            mode: Mode::CELT,
            bandwidth: Bandwidth::FullBand,
            frame_duration: Duration::from_micros(20_000),
        }
    }
}

/// Possible configurations according to the `config` field of the TOC byte.
pub static OPUS_CONFIG_TABLE: [Config; 32] = [
    Config {mode: Mode::SILK, bandwidth: Bandwidth::Narrow, frame_duration: Duration::from_micros(10_000)},
    Config {mode: Mode::SILK, bandwidth: Bandwidth::Narrow, frame_duration: Duration::from_micros(20_000)},
    Config {mode: Mode::SILK, bandwidth: Bandwidth::Narrow, frame_duration: Duration::from_micros(40_000)},
    Config {mode: Mode::SILK, bandwidth: Bandwidth::Narrow, frame_duration: Duration::from_micros(60_000)},

    Config {mode: Mode::SILK, bandwidth: Bandwidth::Medium, frame_duration: Duration::from_micros(10_000)},
    Config {mode: Mode::SILK, bandwidth: Bandwidth::Medium, frame_duration: Duration::from_micros(20_000)},
    Config {mode: Mode::SILK, bandwidth: Bandwidth::Medium, frame_duration: Duration::from_micros(40_000)},
    Config {mode: Mode::SILK, bandwidth: Bandwidth::Medium, frame_duration: Duration::from_micros(60_000)},

    Config {mode: Mode::SILK, bandwidth: Bandwidth::Wide, frame_duration: Duration::from_micros(10_000)},
    Config {mode: Mode::SILK, bandwidth: Bandwidth::Wide, frame_duration: Duration::from_micros(20_000)},
    Config {mode: Mode::SILK, bandwidth: Bandwidth::Wide, frame_duration: Duration::from_micros(40_000)},
    Config {mode: Mode::SILK, bandwidth: Bandwidth::Wide, frame_duration: Duration::from_micros(60_000)},

    Config {mode: Mode::Hybrid, bandwidth: Bandwidth::SuperWide, frame_duration: Duration::from_micros(10_000)},
    Config {mode: Mode::Hybrid, bandwidth: Bandwidth::SuperWide, frame_duration: Duration::from_micros(20_000)},

    Config {mode: Mode::Hybrid, bandwidth: Bandwidth::FullBand, frame_duration: Duration::from_micros(10_000)},
    Config {mode: Mode::Hybrid, bandwidth: Bandwidth::FullBand, frame_duration: Duration::from_micros(20_000)},

    Config {mode: Mode::CELT, bandwidth: Bandwidth::Narrow, frame_duration: Duration::from_micros(2_500)},
    Config {mode: Mode::CELT, bandwidth: Bandwidth::Narrow, frame_duration: Duration::from_micros(5_000)},
    Config {mode: Mode::CELT, bandwidth: Bandwidth::Narrow, frame_duration: Duration::from_micros(10_000)},
    Config {mode: Mode::CELT, bandwidth: Bandwidth::Narrow, frame_duration: Duration::from_micros(20_000)},

    Config {mode: Mode::CELT, bandwidth: Bandwidth::Wide, frame_duration: Duration::from_micros(2_500)},
    Config {mode: Mode::CELT, bandwidth: Bandwidth::Wide, frame_duration: Duration::from_micros(5_000)},
    Config {mode: Mode::CELT, bandwidth: Bandwidth::Wide, frame_duration: Duration::from_micros(10_000)},
    Config {mode: Mode::CELT, bandwidth: Bandwidth::Wide, frame_duration: Duration::from_micros(20_000)},

    Config {mode: Mode::CELT, bandwidth: Bandwidth::SuperWide, frame_duration: Duration::from_micros(2_500)},
    Config {mode: Mode::CELT, bandwidth: Bandwidth::SuperWide, frame_duration: Duration::from_micros(5_000)},
    Config {mode: Mode::CELT, bandwidth: Bandwidth::SuperWide, frame_duration: Duration::from_micros(10_000)},
    Config {mode: Mode::CELT, bandwidth: Bandwidth::SuperWide, frame_duration: Duration::from_micros(20_000)},

    Config {mode: Mode::CELT, bandwidth: Bandwidth::FullBand, frame_duration: Duration::from_micros(2_500)},
    Config {mode: Mode::CELT, bandwidth: Bandwidth::FullBand, frame_duration: Duration::from_micros(5_000)},
    Config {mode: Mode::CELT, bandwidth: Bandwidth::FullBand, frame_duration: Duration::from_micros(10_000)},
    Config {mode: Mode::CELT, bandwidth: Bandwidth::FullBand, frame_duration: Duration::from_micros(20_000)},
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_table_matches_rfc6716_table_2() {
        use Bandwidth::*;
        use Mode::*;

        let expected: [(Mode, u64, Bandwidth); 32] = [
            (SILK, 10_000, Narrow),
            (SILK, 20_000, Narrow),
            (SILK, 40_000, Narrow),
            (SILK, 60_000, Narrow),
            (SILK, 10_000, Medium),
            (SILK, 20_000, Medium),
            (SILK, 40_000, Medium),
            (SILK, 60_000, Medium),
            (SILK, 10_000, Wide),
            (SILK, 20_000, Wide),
            (SILK, 40_000, Wide),
            (SILK, 60_000, Wide),
            (Hybrid, 10_000, SuperWide),
            (Hybrid, 20_000, SuperWide),
            (Hybrid, 10_000, FullBand),
            (Hybrid, 20_000, FullBand),
            (CELT, 2_500, Narrow),
            (CELT, 5_000, Narrow),
            (CELT, 10_000, Narrow),
            (CELT, 20_000, Narrow),
            (CELT, 2_500, Wide),
            (CELT, 5_000, Wide),
            (CELT, 10_000, Wide),
            (CELT, 20_000, Wide),
            (CELT, 2_500, SuperWide),
            (CELT, 5_000, SuperWide),
            (CELT, 10_000, SuperWide),
            (CELT, 20_000, SuperWide),
            (CELT, 2_500, FullBand),
            (CELT, 5_000, FullBand),
            (CELT, 10_000, FullBand),
            (CELT, 20_000, FullBand),
        ];

        for (code, (mode, micros, bandwidth)) in expected.into_iter().enumerate() {
            let config = OPUS_CONFIG_TABLE[code];

            assert_eq!(config.mode, mode, "mode of config {code}");
            assert_eq!(
                config.frame_duration,
                Duration::from_micros(micros),
                "frame duration of config {code}"
            );
            assert_eq!(config.bandwidth, bandwidth, "bandwidth of config {code}");
        }
    }

    #[test]
    fn mode_ranges() {
        for (code, config) in OPUS_CONFIG_TABLE.iter().enumerate() {
            let mode = match code {
                0..=11 => Mode::SILK,
                12..=15 => Mode::Hybrid,
                _ => Mode::CELT,
            };

            assert_eq!(config.mode, mode, "mode of config {code}");
        }
    }

    #[test]
    fn bandwidth_band_edges() {
        assert_eq!(Bandwidth::Narrow.bandwidth_khz(), 4);
        assert_eq!(Bandwidth::Medium.bandwidth_khz(), 6);
        assert_eq!(Bandwidth::Wide.bandwidth_khz(), 8);
        assert_eq!(Bandwidth::SuperWide.bandwidth_khz(), 12);
        assert_eq!(Bandwidth::FullBand.bandwidth_khz(), 20);
    }

    #[test]
    fn bandwidth_sample_rates() {
        assert_eq!(Bandwidth::Narrow.sample_rate_khz(), 8);
        assert_eq!(Bandwidth::Medium.sample_rate_khz(), 12);
        assert_eq!(Bandwidth::Wide.sample_rate_khz(), 16);
        assert_eq!(Bandwidth::SuperWide.sample_rate_khz(), 24);
        assert_eq!(Bandwidth::FullBand.sample_rate_khz(), 48);
    }

    #[test]
    fn default_config_is_fullband_celt() {
        assert_eq!(Config::default(), OPUS_CONFIG_TABLE[31]);
    }
}
