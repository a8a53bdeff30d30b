//! Round-trip tests decoding encoder output with an independent WAV parser.

use std::io::Cursor;

use vidgrab_audio::{encode_wav, AudioBuffer, TonePreset, ToneSpec};

const QUANT_STEP: f64 = 1.0 / 32767.0;

fn decode(wav: &[u8]) -> (hound::WavSpec, Vec<i16>) {
    let reader = hound::WavReader::new(Cursor::new(wav)).expect("hound should parse output");
    let spec = reader.spec();
    let samples = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .expect("samples should decode");
    (spec, samples)
}

fn assert_roundtrip(buffer: &AudioBuffer) {
    let wav = encode_wav(buffer);
    let (spec, samples) = decode(&wav);

    assert_eq!(spec.channels as usize, buffer.number_of_channels());
    assert_eq!(spec.sample_rate, buffer.sample_rate());
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(
        samples.len(),
        buffer.length() * buffer.number_of_channels()
    );

    let channels = buffer.number_of_channels();
    for (i, &decoded) in samples.iter().enumerate() {
        let frame = i / channels;
        let channel = i % channels;
        let original = buffer.channel(channel).unwrap()[frame].clamp(-1.0, 1.0);
        let restored = decoded as f64 / 32767.0;
        assert!(
            (restored - original).abs() <= QUANT_STEP,
            "frame {frame} channel {channel}: {original} decoded as {restored}"
        );
    }
}

#[test]
fn test_roundtrip_mono_ramp() {
    let samples: Vec<f64> = (0..1000).map(|i| i as f64 / 500.0 - 1.0).collect();
    assert_roundtrip(&AudioBuffer::mono(44100, samples).unwrap());
}

#[test]
fn test_roundtrip_stereo_distinct_channels() {
    let left: Vec<f64> = (0..512).map(|i| (i as f64 * 0.05).sin() * 0.8).collect();
    let right: Vec<f64> = (0..512).map(|i| (i as f64 * 0.03).cos() * -0.6).collect();
    assert_roundtrip(&AudioBuffer::new(48000, vec![left, right]).unwrap());
}

#[test]
fn test_roundtrip_many_channels() {
    let channels: Vec<Vec<f64>> = (0..6)
        .map(|c| (0..64).map(|i| ((i + c * 7) as f64 * 0.1).sin()).collect())
        .collect();
    assert_roundtrip(&AudioBuffer::new(96000, channels).unwrap());
}

#[test]
fn test_roundtrip_clipped_input() {
    let samples = vec![1.5, -1.5, 3.0, -0.25, 0.999];
    let wav = encode_wav(&AudioBuffer::mono(8000, samples.clone()).unwrap());
    let (_, decoded) = decode(&wav);
    assert_eq!(&decoded[..3], &[32767, -32767, 32767]);
    assert_roundtrip(&AudioBuffer::mono(8000, samples).unwrap());
}

#[test]
fn test_roundtrip_empty_buffer() {
    let wav = encode_wav(&AudioBuffer::silent(22050, 2, 0).unwrap());
    assert_eq!(wav.len(), 44);
    let (spec, samples) = decode(&wav);
    assert_eq!(spec.channels, 2);
    assert!(samples.is_empty());
}

#[test]
fn test_roundtrip_presets() {
    for preset in TonePreset::ALL {
        let spec = ToneSpec {
            duration_seconds: 0.1,
            ..preset.spec()
        };
        assert_roundtrip(&spec.render().unwrap());
    }
}
