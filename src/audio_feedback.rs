use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::f32::consts::PI;

/// Audible cue kind. The app's audience may not see the recording state or
/// the error toast, so these transitions are always announced by tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Recording started: ascending sweep
    RecordStart,
    /// Recording finished: descending sweep
    RecordStop,
    /// Processing failed: low buzz, longer and louder than the sweeps
    Error,
}

/// Tone parameters for one cue.
struct CueSpec {
    start_hz: f32,
    end_hz: f32,
    duration_secs: f32,
    amplitude: f32,
}

impl Cue {
    fn spec(self) -> CueSpec {
        match self {
            Cue::RecordStart => CueSpec {
                start_hz: 600.0,
                end_hz: 900.0,
                duration_secs: 0.15,
                amplitude: 0.3,
            },
            Cue::RecordStop => CueSpec {
                start_hz: 900.0,
                end_hz: 600.0,
                duration_secs: 0.15,
                amplitude: 0.3,
            },
            Cue::Error => CueSpec {
                start_hz: 320.0,
                end_hz: 220.0,
                duration_secs: 0.3,
                amplitude: 0.4,
            },
        }
    }
}

/// Render the cue as a swept sine with a linear fade-out envelope.
fn render_cue(cue: Cue, sample_rate: f32) -> Vec<f32> {
    let spec = cue.spec();
    let total_samples = (sample_rate * spec.duration_secs) as usize;

    let mut samples = Vec::with_capacity(total_samples);
    for i in 0..total_samples {
        let t = i as f32 / sample_rate;
        let progress = i as f32 / total_samples as f32;
        let freq = spec.start_hz + (spec.end_hz - spec.start_hz) * progress;
        let envelope = 1.0 - progress;
        samples.push((2.0 * PI * freq * t).sin() * envelope * spec.amplitude);
    }
    samples
}

/// Play a short cue tone. Spawns a thread and returns immediately.
pub fn play_cue(cue: Cue) {
    std::thread::spawn(move || {
        if let Err(e) = play_cue_blocking(cue) {
            log::warn!("Audio cue failed: {e}");
        }
    });
}

fn play_cue_blocking(cue: Cue) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or("No output device found")?;
    let config = device.default_output_config()?;
    let sample_rate = config.sample_rate() as f32;
    let channels = config.channels() as usize;

    let duration_ms = (cue.spec().duration_secs * 1000.0) as u64;
    let samples = std::sync::Arc::new(render_cue(cue, sample_rate));
    let samples_clone = samples.clone();
    let total = samples.len();

    let sample_idx = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let sample_idx_clone = sample_idx.clone();

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            let mut idx = sample_idx_clone.load(std::sync::atomic::Ordering::Relaxed);
            for frame in data.chunks_mut(channels) {
                let value = if idx < total { samples_clone[idx] } else { 0.0 };
                for sample in frame.iter_mut() {
                    *sample = value;
                }
                idx += 1;
            }
            sample_idx_clone.store(idx, std::sync::atomic::Ordering::Relaxed);
        },
        |err| log::error!("Audio output error: {err}"),
        None,
    )?;

    stream.play()?;

    // Wait for playback to finish + small buffer
    std::thread::sleep(std::time::Duration::from_millis(duration_ms + 50));

    drop(stream);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_length_matches_the_cue_duration() {
        let samples = render_cue(Cue::RecordStart, 48_000.0);
        assert_eq!(samples.len(), (48_000.0_f32 * 0.15) as usize);
    }

    #[test]
    fn samples_stay_within_the_cue_amplitude() {
        for cue in [Cue::RecordStart, Cue::RecordStop, Cue::Error] {
            let amplitude = cue.spec().amplitude;
            let samples = render_cue(cue, 44_100.0);
            assert!(samples.iter().all(|s| s.abs() <= amplitude));
        }
    }

    #[test]
    fn envelope_fades_to_silence() {
        let samples = render_cue(Cue::RecordStop, 44_100.0);
        let tail = &samples[samples.len() - 10..];
        assert!(tail.iter().all(|s| s.abs() < 0.01));
    }

    #[test]
    fn error_cue_is_longer_and_lower_than_the_sweeps() {
        let error = Cue::Error.spec();
        let start = Cue::RecordStart.spec();
        assert!(error.duration_secs > start.duration_secs);
        assert!(error.start_hz < start.start_hz);
    }
}
