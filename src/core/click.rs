//! Sample data for the percussive click: a short burst of white noise under
//! a fast exponential decay. Playback lives in the web audio sink.

use rand::Rng;

/// Length of one click in seconds.
pub const CLICK_DURATION_SEC: f64 = 0.018;
/// Decay rate of the envelope over the normalised buffer position.
pub const CLICK_ENVELOPE_RATE: f32 = 20.0;

/// Number of frames one click occupies at `sample_rate`.
#[inline]
pub fn click_frame_count(sample_rate: f32) -> usize {
    (f64::from(sample_rate) * CLICK_DURATION_SEC).floor() as usize
}

/// Envelope gain at normalised position `t` in [0, 1).
#[inline]
pub fn click_envelope(t: f32) -> f32 {
    (-t * CLICK_ENVELOPE_RATE).exp()
}

/// Fills a fresh buffer of `len` samples with enveloped noise in [-1, 1].
pub fn noise_burst<G: Rng + ?Sized>(len: usize, rng: &mut G) -> Vec<f32> {
    let mut data = Vec::with_capacity(len);
    for i in 0..len {
        let t = i as f32 / len as f32;
        let noise: f32 = rng.gen_range(-1.0..1.0);
        data.push(noise * click_envelope(t));
    }
    data
}
