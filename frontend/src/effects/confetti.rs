use std::f64::consts::PI;

use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FRAME_MS: u32 = 16;

const PALETTE: [(u8, u8, u8); 7] = [
    (0x26, 0xcc, 0xff),
    (0xa2, 0x5a, 0xfd),
    (0xff, 0x5e, 0x7e),
    (0x88, 0xff, 0x5a),
    (0xfc, 0xff, 0x42),
    (0xff, 0xa6, 0x2d),
    (0xff, 0x36, 0xff),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    /// Launch angle in degrees, 90 being straight up.
    fn angle(self) -> f64 {
        match self {
            Edge::Left => 60.0,
            Edge::Right => 120.0,
        }
    }

    /// Origin as a fraction of the viewport.
    fn origin(self) -> (f64, f64) {
        match self {
            Edge::Left => (0.0, 0.6),
            Edge::Right => (1.0, 0.6),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BurstOptions {
    pub particle_count: usize,
    pub spread: f64,
    pub start_velocity: f64,
    pub decay: f64,
    pub gravity: f64,
    pub drift: f64,
    pub ticks: u32,
    pub scalar: f64,
}

impl Default for BurstOptions {
    fn default() -> Self {
        Self {
            particle_count: 50,
            spread: 45.0,
            start_velocity: 45.0,
            decay: 0.9,
            gravity: 1.0,
            drift: 0.0,
            ticks: 200,
            scalar: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    wobble: f64,
    wobble_speed: f64,
    velocity: f64,
    angle_2d: f64,
    tilt_angle: f64,
    color: (u8, u8, u8),
    tick: u32,
    total_ticks: u32,
    decay: f64,
    drift: f64,
    random: f64,
    gravity: f64,
    scalar: f64,
    wobble_x: f64,
    wobble_y: f64,
}

impl Particle {
    fn launch(
        origin: (f64, f64),
        angle: f64,
        options: &BurstOptions,
        color: (u8, u8, u8),
        rng: &mut impl FnMut() -> f64,
    ) -> Self {
        let rad_angle = angle.to_radians();
        let rad_spread = options.spread.to_radians();

        Self {
            x: origin.0,
            y: origin.1,
            wobble: rng() * 10.0,
            wobble_speed: (rng() * 0.1 + 0.05).min(0.11),
            velocity: options.start_velocity * 0.5 + rng() * options.start_velocity,
            angle_2d: -rad_angle + (0.5 * rad_spread - rng() * rad_spread),
            tilt_angle: (rng() * 0.5 + 0.25) * PI,
            color,
            tick: 0,
            total_ticks: options.ticks,
            decay: options.decay,
            drift: options.drift,
            random: rng() + 2.0,
            gravity: options.gravity * 3.0,
            scalar: options.scalar,
            wobble_x: origin.0,
            wobble_y: origin.1,
        }
    }

    /// Advance one frame. Returns false once the particle has burned out.
    pub fn step(&mut self, rng: &mut impl FnMut() -> f64) -> bool {
        self.x += self.angle_2d.cos() * self.velocity + self.drift;
        self.y += self.angle_2d.sin() * self.velocity + self.gravity;
        self.velocity *= self.decay;
        self.wobble += self.wobble_speed;
        self.wobble_x = self.x + 10.0 * self.scalar * self.wobble.cos();
        self.wobble_y = self.y + 10.0 * self.scalar * self.wobble.sin();
        self.tilt_angle += 0.1;
        self.random = rng() + 2.0;
        self.tick += 1;
        self.tick < self.total_ticks
    }

    pub fn alpha(&self) -> f64 {
        (1.0 - f64::from(self.tick) / f64::from(self.total_ticks)).max(0.0)
    }

    /// Corners of the tumbling paper square for the current frame.
    pub fn quad(&self) -> [(f64, f64); 4] {
        let (sin, cos) = self.tilt_angle.sin_cos();
        let x1 = self.x + self.random * cos;
        let y1 = self.y + self.random * sin;
        let x2 = self.wobble_x + self.random * cos;
        let y2 = self.wobble_y + self.random * sin;

        [
            (self.x.floor(), self.y.floor()),
            (self.wobble_x.floor(), y1.floor()),
            (x2.floor(), y2.floor()),
            (x1.floor(), self.wobble_y.floor()),
        ]
    }

    fn fill_style(&self) -> String {
        let (r, g, b) = self.color;
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha())
    }
}

/// One cannon shot of paper from a viewport edge.
pub fn burst(
    edge: Edge,
    viewport: (f64, f64),
    options: &BurstOptions,
    rng: &mut impl FnMut() -> f64,
) -> Vec<Particle> {
    let (fx, fy) = edge.origin();
    let origin = (fx * viewport.0, fy * viewport.1);

    (0..options.particle_count)
        .map(|i| Particle::launch(origin, edge.angle(), options, PALETTE[i % PALETTE.len()], &mut *rng))
        .collect()
}

/// The success shot: 180 pieces split across both edges.
pub fn celebration_options() -> BurstOptions {
    BurstOptions {
        particle_count: 90,
        spread: 120.0,
        ..BurstOptions::default()
    }
}

/// Fire-and-forget. Spawn this after the success state is committed; the
/// canvas removes itself once the last particle expires.
pub async fn celebrate() {
    if let Err(e) = run_celebration().await {
        warn!("Confetti skipped: {:?}", e);
    }
}

async fn run_celebration() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    canvas.set_attribute(
        "style",
        "position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 100;",
    )?;
    body.append_child(&canvas)?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let mut rng = web_sys::js_sys::Math::random;
    let options = celebration_options();
    let mut particles = burst(Edge::Left, (width, height), &options, &mut rng);
    particles.extend(burst(Edge::Right, (width, height), &options, &mut rng));
    info!("Firing {} confetti pieces", particles.len());

    while !particles.is_empty() {
        ctx.clear_rect(0.0, 0.0, width, height);
        particles.retain_mut(|particle| {
            let alive = particle.step(&mut rng);
            draw(&ctx, particle);
            alive
        });
        TimeoutFuture::new(FRAME_MS).await;
    }

    canvas.remove();
    Ok(())
}

fn draw(ctx: &CanvasRenderingContext2d, particle: &Particle) {
    let [a, b, c, d] = particle.quad();
    ctx.set_fill_style_str(&particle.fill_style());
    ctx.begin_path();
    ctx.move_to(a.0, a.1);
    ctx.line_to(b.0, b.1);
    ctx.line_to(c.0, c.1);
    ctx.line_to(d.0, d.1);
    ctx.close_path();
    ctx.fill();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn bursts_start_at_their_edge() {
        let options = celebration_options();
        let mut rng = fixed(0.5);

        let left = burst(Edge::Left, (1000.0, 800.0), &options, &mut rng);
        let right = burst(Edge::Right, (1000.0, 800.0), &options, &mut rng);

        assert_eq!(left.len() + right.len(), 180);
        assert!(left.iter().all(|p| p.x == 0.0 && (p.y - 480.0).abs() < 1e-9));
        assert!(right.iter().all(|p| p.x == 1000.0 && (p.y - 480.0).abs() < 1e-9));
    }

    #[test]
    fn edges_fire_inwards() {
        let options = BurstOptions {
            particle_count: 1,
            gravity: 0.0,
            ..BurstOptions::default()
        };
        // 0.5 keeps each particle on the centre of the spread.
        let mut rng = fixed(0.5);

        let mut left = burst(Edge::Left, (1000.0, 800.0), &options, &mut rng);
        let mut right = burst(Edge::Right, (1000.0, 800.0), &options, &mut rng);
        left[0].step(&mut rng);
        right[0].step(&mut rng);

        assert!(left[0].x > 0.0);
        assert!(right[0].x < 1000.0);
        // Canvas y grows downwards, so "up" means smaller y.
        assert!(left[0].y < 480.0);
        assert!(right[0].y < 480.0);
    }

    #[test]
    fn particles_fade_and_expire_after_ticks() {
        let options = BurstOptions {
            particle_count: 1,
            ticks: 10,
            ..BurstOptions::default()
        };
        let mut rng = fixed(0.3);
        let mut particle = burst(Edge::Left, (800.0, 600.0), &options, &mut rng).remove(0);

        assert_eq!(particle.alpha(), 1.0);
        let mut frames = 0;
        while particle.step(&mut rng) {
            frames += 1;
        }
        assert_eq!(frames, 9);
        assert_eq!(particle.alpha(), 0.0);
    }

    #[test]
    fn velocity_decays_towards_rest() {
        let options = BurstOptions {
            particle_count: 1,
            gravity: 0.0,
            ..BurstOptions::default()
        };
        let mut rng = fixed(0.5);
        let mut particle = burst(Edge::Left, (800.0, 600.0), &options, &mut rng).remove(0);

        for _ in 0..150 {
            particle.step(&mut rng);
        }
        let (x, y) = (particle.x, particle.y);
        particle.step(&mut rng);

        assert!((particle.x - x).abs() < 1e-3);
        assert!((particle.y - y).abs() < 1e-3);
    }

    #[test]
    fn fill_style_carries_alpha() {
        let options = BurstOptions {
            particle_count: 1,
            ..BurstOptions::default()
        };
        let mut rng = fixed(0.1);
        let particle = burst(Edge::Right, (800.0, 600.0), &options, &mut rng).remove(0);

        assert_eq!(particle.fill_style(), "rgba(38, 204, 255, 1)");
    }
}
