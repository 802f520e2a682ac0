use std::env;

use ffmpeg_next::codec;
use ffmpeg_next::format;
use tracing::warn;

use opus_toc::packet::header::decode_header;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "opusstat=info".into()),
        )
        .init();

    let input_file = env::args()
    .nth(1)
    .expect("Input file unspecified");

    let mut input = format::input(&input_file).unwrap();

    let packets = input
    .packets()
    .filter(|p| p.0.codec().id() == codec::Id::OPUS);

    let mut last_header = None;
    let mut num_same_conf = 0;

    for (stream, packet) in packets {
        let header = match decode_header(packet.data().unwrap()) {
            Ok(header) => header,
            Err(err) => {
                warn!(stream = stream.id(), "skipping undecodable packet: {err}");
                continue;
            }
        };

        if last_header != Some(header) {
            println!("s={} mode={:?} bwidth={:?} dur={:?} nframes={} stereo?={} total={:?}",

            stream.id(),
            header.config.mode,
            header.config.bandwidth,
            header.config.frame_duration,
            header.num_frames,
            header.is_stereo,
            header.full_duration()
        );

            num_same_conf = 0;
        } else {
            num_same_conf += 1;
            print!("  \r... {}", num_same_conf);
        }

        last_header = Some(header);
    }
}
