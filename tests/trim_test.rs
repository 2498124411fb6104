//! End-to-end trims through the native backend.

use std::path::Path;

use audiotrim::Error;
use audiotrim::audio::{NativeBackend, SampleDepth};
use audiotrim::timestamp::{format_duration, parse_timestamp};
use audiotrim::trimmer::Trimmer;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tempfile::TempDir;

const RATE: u32 = 16_000;

/// Write a stereo ramp so slices can be checked by content.
fn write_ramp(path: &Path, seconds: u32) {
    let spec = WavSpec {
        channels: 2,
        sample_rate: RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for i in 0..RATE * seconds {
        // one step per millisecond
        let value = i16::try_from((i / 16) % 1000).unwrap();
        writer.write_sample(value).unwrap();
        writer.write_sample(-value).unwrap();
    }
    writer.finalize().unwrap();
}

#[test]
fn test_trim_two_to_eight_seconds() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("song.wav");
    let output = dir.path().join("song_trimmed.wav");
    write_ramp(&input, 10);

    let trimmer = Trimmer::new(NativeBackend::default());
    let start = parse_timestamp("0:02").unwrap();
    let end = parse_timestamp("8").unwrap();
    let report = trimmer.trim(&input, start, end, &output, "wav").unwrap();

    assert_eq!(report.source_duration_ms, 10_000);
    assert_eq!(report.duration_ms, 6000);
    assert_eq!(format_duration(report.duration_ms), "00:06.00");

    let reader = WavReader::open(&output).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, RATE);
    assert_eq!(reader.duration(), 6 * RATE);
}

#[test]
fn test_trimmed_clip_starts_at_requested_offset() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ramp.wav");
    let output = dir.path().join("cut.wav");
    write_ramp(&input, 2);

    Trimmer::new(NativeBackend::default())
        .trim(&input, 250, 750, &output, "wav")
        .unwrap();

    let mut reader = WavReader::open(&output).unwrap();
    let samples: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
    assert_eq!(samples.len(), 2 * 500 * 16);
    // int -> float -> int may lose one step
    let close = |actual: i16, expected: i16| (actual - expected).abs() <= 1;
    assert!(close(samples[0], 250), "first left sample {}", samples[0]);
    assert!(close(samples[1], -250), "first right sample {}", samples[1]);
    let last_left = samples[samples.len() - 2];
    assert!(close(last_left, 749), "last left sample {last_left}");
}

#[test]
fn test_range_is_clamped_to_clip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("short.wav");
    let output = dir.path().join("all.wav");
    write_ramp(&input, 3);

    let report = Trimmer::new(NativeBackend::default())
        .trim(&input, -5000, 90_000, &output, "wav")
        .unwrap();

    assert_eq!(report.bounds.start_ms(), 0);
    assert_eq!(report.bounds.end_ms(), 3000);
    assert_eq!(WavReader::open(&output).unwrap().duration(), 3 * RATE);
}

#[test]
fn test_float_output_depth() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    write_ramp(&input, 1);

    Trimmer::new(NativeBackend::new(SampleDepth::Float32))
        .trim(&input, 0, 500, &output, "wav")
        .unwrap();

    let spec = WavReader::open(&output).unwrap().spec();
    assert_eq!(spec.sample_format, SampleFormat::Float);
    assert_eq!(spec.bits_per_sample, 32);
}

#[test]
fn test_start_after_end_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    write_ramp(&input, 10);

    let result = Trimmer::new(NativeBackend::default()).trim(&input, 8000, 2000, &output, "wav");

    assert!(matches!(
        result,
        Err(Error::InvalidRange {
            start_ms: 8000,
            end_ms: 2000
        })
    ));
    assert!(!output.exists());
}

#[test]
fn test_unsupported_output_format() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.xyz");
    write_ramp(&input, 1);

    let result = Trimmer::new(NativeBackend::default()).trim(&input, 0, 500, &output, "xyz");

    assert!(matches!(result, Err(Error::UnsupportedOutputFormat { .. })));
    assert!(!output.exists());
}

#[test]
fn test_flac_round_trip() {
    if audiotrim::audio::ensure_ffmpeg().is_err() {
        eprintln!("Skipping test: ffmpeg not available");
        return;
    }

    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ramp.wav");
    let output = dir.path().join("cut.flac");
    write_ramp(&input, 2);

    let report = Trimmer::new(NativeBackend::default())
        .trim(&input, 250, 750, &output, "flac")
        .unwrap();
    assert_eq!(report.format, "flac");

    let clip = audiotrim::audio::decode_audio_file(&output).unwrap();
    assert_eq!(clip.channels(), 2);
    assert_eq!(clip.sample_rate(), RATE);
    assert_eq!(clip.frames(), u64::from(RATE) / 2);
}

#[test]
fn test_undecodable_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("noise.wav");
    std::fs::write(&input, b"definitely not audio").unwrap();

    let result = Trimmer::new(NativeBackend::default()).trim(
        &input,
        0,
        1000,
        &dir.path().join("out.wav"),
        "wav",
    );

    assert!(matches!(
        result,
        Err(Error::AudioOpen { .. } | Error::AudioDecode { .. } | Error::NoAudioTracks { .. })
    ));
}
