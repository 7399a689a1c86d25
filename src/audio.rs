//! Cue playback. The browser implementation synthesizes short Web Audio tones.

use std::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

use crate::model::Cue;

pub trait AudioSink {
    fn play(&self, cue: Cue);
}

#[derive(Clone, Copy)]
enum Sweep {
    Hold,
    Linear(f32),
    Exponential(f32),
}

#[derive(Clone, Copy)]
struct Tone {
    wave: OscillatorType,
    hz: f32,
    sweep: Sweep,
    sweep_secs: f64,
    gain: f32,
    gain_floor: f32,
    /// Offset from "now" at which the tone starts.
    delay: f64,
    duration: f64,
}

fn tones_for(cue: Cue) -> Vec<Tone> {
    match cue {
        Cue::Select => vec![Tone {
            wave: OscillatorType::Square,
            hz: 800.0,
            sweep: Sweep::Exponential(400.0),
            sweep_secs: 0.05,
            gain: 0.05,
            gain_floor: 0.01,
            delay: 0.0,
            duration: 0.05,
        }],
        Cue::Connect => vec![Tone {
            wave: OscillatorType::Sine,
            hz: 1200.0,
            sweep: Sweep::Exponential(1800.0),
            sweep_secs: 0.1,
            gain: 0.1,
            gain_floor: 0.01,
            delay: 0.0,
            duration: 0.2,
        }],
        Cue::Error => vec![Tone {
            wave: OscillatorType::Sawtooth,
            hz: 150.0,
            sweep: Sweep::Linear(100.0),
            sweep_secs: 0.3,
            gain: 0.2,
            gain_floor: 0.01,
            delay: 0.0,
            duration: 0.3,
        }],
        Cue::Victory => [440.0, 554.0, 659.0]
            .iter()
            .enumerate()
            .map(|(i, hz)| Tone {
                wave: OscillatorType::Square,
                hz: *hz,
                sweep: Sweep::Hold,
                sweep_secs: 0.0,
                gain: 0.1,
                gain_floor: 0.01,
                delay: i as f64 * 0.1,
                duration: 0.5,
            })
            .collect(),
        Cue::Tick => vec![Tone {
            wave: OscillatorType::Square,
            hz: 1000.0,
            sweep: Sweep::Hold,
            sweep_secs: 0.0,
            gain: 0.15,
            gain_floor: 0.001,
            delay: 0.0,
            duration: 0.03,
        }],
    }
}

/// Oscillator-based cue player. The `AudioContext` is created on first use,
/// which browsers only allow after a user gesture.
#[derive(Default)]
pub struct SynthAudio {
    ctx: RefCell<Option<AudioContext>>,
}

impl SynthAudio {
    fn context(&self) -> Result<AudioContext, JsValue> {
        let mut slot = self.ctx.borrow_mut();
        if let Some(ctx) = slot.as_ref() {
            return Ok(ctx.clone());
        }
        let ctx = AudioContext::new()?;
        *slot = Some(ctx.clone());
        Ok(ctx)
    }

    fn schedule(&self, ctx: &AudioContext, tone: Tone) -> Result<(), JsValue> {
        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        let start = ctx.current_time() + tone.delay;
        let end = start + tone.duration;

        osc.set_type(tone.wave);
        let freq = osc.frequency();
        freq.set_value_at_time(tone.hz, start)?;
        match tone.sweep {
            Sweep::Hold => {}
            Sweep::Linear(to) => {
                freq.linear_ramp_to_value_at_time(to, start + tone.sweep_secs)?;
            }
            Sweep::Exponential(to) => {
                freq.exponential_ramp_to_value_at_time(to, start + tone.sweep_secs)?;
            }
        }

        let level = gain.gain();
        level.set_value_at_time(tone.gain, start)?;
        level.exponential_ramp_to_value_at_time(tone.gain_floor, end)?;

        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        osc.start_with_when(start)?;
        osc.stop_with_when(end)?;
        Ok(())
    }
}

impl AudioSink for SynthAudio {
    fn play(&self, cue: Cue) {
        let result = self
            .context()
            .and_then(|ctx| tones_for(cue).into_iter().try_for_each(|t| self.schedule(&ctx, t)));
        if let Err(err) = result {
            log::debug!("cue {cue:?} not played: {err:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn victory_is_a_staggered_triad() {
        let tones = tones_for(Cue::Victory);
        assert_eq!(tones.len(), 3);
        let delays: Vec<f64> = tones.iter().map(|t| t.delay).collect();
        assert_eq!(delays, vec![0.0, 0.1, 0.2]);
    }

    #[test]
    fn every_cue_has_audible_envelope() {
        for cue in [Cue::Select, Cue::Connect, Cue::Error, Cue::Victory, Cue::Tick] {
            for tone in tones_for(cue) {
                assert!(tone.gain > tone.gain_floor);
                assert!(tone.gain_floor > 0.0, "exponential ramps need a positive floor");
                assert!(tone.duration > 0.0);
            }
        }
    }
}
