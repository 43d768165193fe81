use core::f64::consts::PI;
use gloo::timers::callback::Timeout;
use gloo::utils::{body, document};

use crate::utils::js_random;

/// How long a particle stays in the DOM, must outlast the CSS animation.
const PARTICLE_LIFETIME_MS: u32 = 3_000;

const COLORS: [&str; 7] = [
    "#26ccff", "#a25afd", "#ff5e7e", "#88ff5a", "#fcff42", "#ffa62d", "#ff36ff",
];

/// Shape of one confetti burst.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Burst {
    pub particle_count: u32,
    /// Opening angle of the cone, in degrees, centered straight up.
    pub spread: f64,
    /// Vertical launch point as a fraction of the viewport height.
    pub origin_y: f64,
}

impl Default for Burst {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread: 70.0,
            origin_y: 0.6,
        }
    }
}

/// One piece of confetti, positioned in viewport units.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Particle {
    pub dx: f64,
    pub dy: f64,
    pub rotation: f64,
    pub color: &'static str,
}

impl Particle {
    fn style(&self, origin_y: f64) -> String {
        format!(
            "left:50vw;top:{:.1}vh;background:{};--dx:{:.2}vw;--dy:{:.2}vh;--rot:{:.0}deg",
            origin_y * 100.0,
            self.color,
            self.dx,
            self.dy,
            self.rotation
        )
    }
}

impl Burst {
    /// Maps three uniform samples in `[0, 1)` to a particle inside the cone.
    pub(crate) fn particle(&self, [direction, speed, tint]: [f64; 3]) -> Particle {
        let angle = 90.0 + (direction - 0.5) * self.spread;
        let distance = 20.0 + 25.0 * speed;
        let radians = angle * PI / 180.0;
        let color_index = ((tint * COLORS.len() as f64) as usize).min(COLORS.len() - 1);

        Particle {
            dx: distance * radians.cos(),
            // screen y grows downwards
            dy: -distance * radians.sin(),
            rotation: 720.0 * (direction - speed),
            color: COLORS[color_index],
        }
    }

    /// Throws the confetti. Nothing is awaited, the layer cleans itself up.
    pub(crate) fn fire(self) {
        let document = document();
        let layer = match document.create_element("div") {
            Ok(layer) => layer,
            Err(err) => {
                log::error!("failed to create confetti layer: {:?}", err);
                return;
            }
        };
        layer.set_class_name("confetti");

        for _ in 0..self.particle_count {
            let particle = self.particle([js_random(), js_random(), js_random()]);
            let element = match document.create_element("i") {
                Ok(element) => element,
                Err(err) => {
                    log::error!("failed to create confetti particle: {:?}", err);
                    return;
                }
            };
            if let Err(err) = element.set_attribute("style", &particle.style(self.origin_y)) {
                log::error!("failed to style confetti particle: {:?}", err);
            }
            if let Err(err) = layer.append_child(&element) {
                log::error!("failed to attach confetti particle: {:?}", err);
            }
        }

        if let Err(err) = body().append_child(&layer) {
            log::error!("failed to attach confetti layer: {:?}", err);
            return;
        }
        log::debug!("confetti: {} particles", self.particle_count);

        Timeout::new(PARTICLE_LIFETIME_MS, move || layer.remove()).forget();
    }
}

/// Fires `burst` after `delay_ms`. Dropping the returned handle cancels it.
pub(crate) fn schedule(burst: Burst, delay_ms: u32) -> Timeout {
    Timeout::new(delay_ms, move || burst.fire())
}
