//! Audio decoding using symphonia.

use crate::audio::AudioClip;
use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};

/// Decode an audio file to interleaved f32 samples.
///
/// Supports WAV, FLAC, MP3, AAC and MP4/M4A. Channel layout and sample rate
/// are kept as-is. A packet the codec reports as corrupt is skipped with a
/// warning; every other failure aborts the decode.
pub fn decode_audio_file(path: &Path) -> Result<AudioClip> {
    let file = File::open(path).map_err(|e| Error::AudioOpen {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    // Create hint from file extension
    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| Error::AudioOpen {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut format = probed.format;

    // Find the first audio track
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::NoAudioTracks {
            path: path.to_path_buf(),
        })?;

    let track_id = track.id;
    let mut sample_rate = track.codec_params.sample_rate;
    let mut channels = track
        .codec_params
        .channels
        .map(symphonia::core::audio::Channels::count);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut samples = Vec::new();
    let mut buffer: Option<SampleBuffer<f32>> = None;
    let mut buffer_frames = 0;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => {
                return Err(Error::AudioDecode {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(reason)) => {
                warn!("Skipping corrupt packet in {}: {reason}", path.display());
                continue;
            }
            Err(e) => {
                return Err(Error::AudioDecode {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };

        let spec = *decoded.spec();
        sample_rate = Some(spec.rate);
        channels = Some(spec.channels.count());

        // Packets never exceed the codec's max frame count, but re-size if one does
        if buffer.is_none() || decoded.capacity() > buffer_frames {
            buffer_frames = decoded.capacity();
            buffer = Some(SampleBuffer::new(buffer_frames as u64, spec));
        }
        if let Some(buf) = buffer.as_mut() {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    let sample_rate = sample_rate.ok_or_else(|| Error::AudioDecode {
        path: path.to_path_buf(),
        source: "missing sample rate".into(),
    })?;
    let channels = u16::try_from(channels.unwrap_or(1)).map_err(|_| Error::AudioDecode {
        path: path.to_path_buf(),
        source: "too many channels".into(),
    })?;

    let clip = AudioClip::new(samples, sample_rate, channels);
    debug!(
        "Decoded {} frames ({channels} ch @ {sample_rate} Hz) from {}",
        clip.frames(),
        path.display()
    );

    Ok(clip)
}
