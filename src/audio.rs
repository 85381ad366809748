use crate::constants::{CLICK_FILTER_HZ, CLICK_FILTER_Q, CLICK_GAIN, CLICK_MIN_GAP_SEC};
use crate::core::click::{click_frame_count, noise_burst};
use crate::core::AudioSink;
use web_sys as web;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

/// Click player on WebAudio. The context only exists after `ensure` has
/// been called from a user gesture; until then clicks are dropped.
#[derive(Default)]
pub struct ClickAudio {
    audio_ctx: Option<web::AudioContext>,
    last_click_sec: Option<f64>,
}

impl ClickAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the context on first use and resumes it if the browser
    /// suspended it.
    pub fn ensure(&mut self) {
        if self.audio_ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => {
                    log::info!("[audio] context created sr={}", ctx.sample_rate());
                    self.audio_ctx = Some(ctx);
                }
                Err(e) => {
                    log::error!("AudioContext error: {:?}", e);
                    return;
                }
            }
        }
        if let Some(ctx) = &self.audio_ctx {
            if ctx.state() == web::AudioContextState::Suspended {
                _ = ctx.resume();
            }
        }
    }

    fn play(&self, audio_ctx: &web::AudioContext) -> Result<(), ()> {
        let sample_rate = audio_ctx.sample_rate();
        let len = click_frame_count(sample_rate);
        if len == 0 {
            return Err(());
        }
        let mut data = noise_burst(len, &mut rand::thread_rng());
        let buffer = audio_ctx
            .create_buffer(1, len as u32, sample_rate)
            .map_err(|e| {
                log::error!("AudioBuffer error: {:?}", e);
            })?;
        buffer.copy_to_channel(&mut data, 0).map_err(|e| {
            log::error!("AudioBuffer copy error: {:?}", e);
        })?;

        let source = audio_ctx.create_buffer_source().map_err(|e| {
            log::error!("AudioBufferSourceNode error: {:?}", e);
        })?;
        source.set_buffer(Some(&buffer));

        let filter = web::BiquadFilterNode::new(audio_ctx).map_err(|e| {
            log::error!("BiquadFilterNode error: {:?}", e);
        })?;
        filter.set_type(web::BiquadFilterType::Bandpass);
        filter.frequency().set_value(CLICK_FILTER_HZ);
        filter.q().set_value(CLICK_FILTER_Q);

        let gain = create_gain(audio_ctx, CLICK_GAIN, "Click")?;

        let _ = source.connect_with_audio_node(&filter);
        let _ = filter.connect_with_audio_node(&gain);
        let _ = gain.connect_with_audio_node(&audio_ctx.destination());
        #[allow(deprecated)]
        let started = source.start();
        started.map_err(|e| {
            log::error!("click start error: {:?}", e);
        })
    }
}

impl AudioSink for ClickAudio {
    fn click(&mut self) {
        let Some(audio_ctx) = self.audio_ctx.as_ref() else {
            return;
        };
        let now = audio_ctx.current_time();
        if let Some(last) = self.last_click_sec {
            if now - last < CLICK_MIN_GAP_SEC {
                log::trace!("[audio] click dropped, {:.4}s after previous", now - last);
                return;
            }
        }
        if self.play(audio_ctx).is_ok() {
            self.last_click_sec = Some(now);
        }
    }
}
