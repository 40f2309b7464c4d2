//! Software-rendered visualizer using `minifb`.
//!
//! The CPU equivalent of an additive point-sprite pipeline: every frame
//! each particle is projected through an orbiting perspective camera,
//! sized by its view depth, and splatted into the framebuffer as a
//! soft-edged disc (or a heart footprint) with additive blending. A far
//! shell of static stars sits behind everything; the HUD and phrase
//! overlay are drawn last with a tiny bitmap font.

use glam::Vec3;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use hand_gesture::Gesture;
use particle_field::display::{
    circle_glow, heart_activation, heart_attenuation, heart_footprint, heart_position,
    heart_size, particle_alpha, particle_position, particle_size, size_attenuation,
    HEART_COLOR, HEART_VISIBLE_MIN,
};
use particle_field::ParticleCloud;
use rand::Rng;

use crate::source::SimPose;
use std::sync::mpsc::Sender;

// ════════════════════════════════════════════════════════════════════════════
// Layout and camera constants
// ════════════════════════════════════════════════════════════════════════════

pub const WIN_W: usize = 960;
pub const WIN_H: usize = 540;

const BG_COLOR: u32 = 0xFF050505;
const HUD_COLOR: u32 = 0xFFDDDDDD;
const LEGEND_COLOR: u32 = 0xFF777777;
const PHRASE_COLOR: u32 = 0xFFF2E8FF;
const OPEN_DOT_ON: u32 = 0xFF4ADE80;
const CLOSED_DOT_ON: u32 = 0xFFF87171;
const DOT_OFF: u32 = 0xFF3A3A3A;

const STAR_COUNT: usize = 700;

const CAM_FOV_DEG: f32 = 45.0;
const CAM_HEIGHT: f32 = 2.0;
const CAM_DIST_START: f32 = 16.0;
const CAM_DIST_MIN: f32 = 5.0;
const CAM_DIST_MAX: f32 = 25.0;

/// Radians per frame while the planet is formed enough to idle-spin.
const AUTO_ROTATE_RATE: f32 = 0.003;
/// Auto-rotate only below this expansion level.
const AUTO_ROTATE_BELOW: f32 = 0.2;

const ORBIT_STEP: f32 = 0.02;
const ZOOM_STEP: f32 = 0.15;

/// Particles closer than this to the camera plane are culled.
const NEAR_LIMIT: f32 = -0.1;

// ════════════════════════════════════════════════════════════════════════════
// OrbitCamera
// ════════════════════════════════════════════════════════════════════════════

/// Perspective camera orbiting the origin at a fixed height.
struct OrbitCamera {
    yaw: f32,
    distance: f32,
    height: f32,
    focal: f32,
}

impl OrbitCamera {
    fn new() -> Self {
        let half_fov = CAM_FOV_DEG.to_radians() * 0.5;
        OrbitCamera {
            yaw: 0.0,
            distance: CAM_DIST_START,
            height: CAM_HEIGHT,
            focal: (WIN_H as f32 * 0.5) / half_fov.tan(),
        }
    }

    fn eye(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.distance,
            self.height,
            self.yaw.cos() * self.distance,
        )
    }

    /// World → view space, looking at the origin. GL convention: z is
    /// negative in front of the camera.
    fn view(&self, world: Vec3) -> Vec3 {
        let eye = self.eye();
        let forward = (-eye).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        let rel = world - eye;
        Vec3::new(rel.dot(right), rel.dot(up), -rel.dot(forward))
    }

    /// View → screen coordinates (pixels).
    fn project(&self, view: Vec3) -> (f32, f32) {
        let inv_depth = 1.0 / -view.z;
        (
            WIN_W as f32 * 0.5 + view.x * self.focal * inv_depth,
            WIN_H as f32 * 0.5 - view.y * self.focal * inv_depth,
        )
    }

    fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta).clamp(CAM_DIST_MIN, CAM_DIST_MAX);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window: Window,
    buf: Vec<u32>,
    pose_tx: Sender<SimPose>,
    camera: OrbitCamera,
    stars: Vec<(Vec3, f32)>,
    show_hud: bool,
}

impl Visualizer {
    pub fn new(pose_tx: Sender<SimPose>, show_hud: bool) -> Result<Self, String> {
        let mut window = Window::new(
            "Saturn Live — Gesture Particle Planet",
            WIN_W,
            WIN_H,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| e.to_string())?;

        window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

        Ok(Visualizer {
            window,
            buf: vec![BG_COLOR; WIN_W * WIN_H],
            pose_tx,
            camera: OrbitCamera::new(),
            stars: make_stars(STAR_COUNT),
            show_hud,
        })
    }

    /// Returns false when the window should close.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Poll keyboard state: camera controls, HUD toggle, quit, and the
    /// simulated hand pose for this frame. Returns false on quit.
    pub fn poll_input(&mut self) -> bool {
        if !self.window.is_open() {
            return false;
        }
        if self.window.is_key_pressed(Key::Q, KeyRepeat::No) {
            return false;
        }
        if self.window.is_key_pressed(Key::B, KeyRepeat::No) {
            self.show_hud = !self.show_hud;
        }

        if self.window.is_key_down(Key::Left) {
            self.camera.yaw -= ORBIT_STEP;
        }
        if self.window.is_key_down(Key::Right) {
            self.camera.yaw += ORBIT_STEP;
        }
        if self.window.is_key_down(Key::Equal) || self.window.is_key_down(Key::NumPadPlus) {
            self.camera.zoom(-ZOOM_STEP);
        }
        if self.window.is_key_down(Key::Minus) || self.window.is_key_down(Key::NumPadMinus) {
            self.camera.zoom(ZOOM_STEP);
        }

        // The simulated camera reports one pose per poll; no key held
        // means no hand in view.
        let pose = if self.window.is_key_down(Key::O) {
            SimPose::OpenHand
        } else if self.window.is_key_down(Key::C) {
            SimPose::ClosedFist
        } else if self.window.is_key_down(Key::H) {
            SimPose::HalfOpen
        } else {
            SimPose::Empty
        };
        let _ = self.pose_tx.send(pose);

        true
    }

    /// Render one frame.
    pub fn render(
        &mut self,
        cloud: &ParticleCloud,
        level: f32,
        time: f32,
        gesture: Gesture,
        phrase: Option<&str>,
    ) {
        self.buf.fill(BG_COLOR);

        // Idle spin while the planet is formed.
        if level < AUTO_ROTATE_BELOW {
            self.camera.yaw += AUTO_ROTATE_RATE;
        }

        self.draw_stars();
        self.draw_particles(cloud, level, time);
        self.draw_hearts(cloud, level, time);

        if let Some(text) = phrase {
            self.draw_phrase(text);
        }
        if self.show_hud {
            self.draw_hud(gesture, level);
        }

        self.window.update_with_buffer(&self.buf, WIN_W, WIN_H).ok();
    }

    // ── Stars ─────────────────────────────────────────────────────────────

    fn draw_stars(&mut self) {
        for i in 0..self.stars.len() {
            let (pos, brightness) = self.stars[i];
            let view = self.camera.view(pos);
            if view.z > NEAR_LIMIT {
                continue;
            }
            let (sx, sy) = self.camera.project(view);
            if sx < 0.0 || sy < 0.0 || sx >= WIN_W as f32 || sy >= WIN_H as f32 {
                continue;
            }
            self.add_pixel(sx as usize, sy as usize, Vec3::ONE, brightness);
        }
    }

    // ── Primary particles ─────────────────────────────────────────────────

    fn draw_particles(&mut self, cloud: &ParticleCloud, level: f32, time: f32) {
        let alpha = particle_alpha(level);
        for p in &cloud.particles {
            let world = particle_position(p, level, time);
            let view = self.camera.view(world);
            if view.z > NEAR_LIMIT {
                continue;
            }
            let (sx, sy) = self.camera.project(view);
            let size_px = particle_size(p, level) * size_attenuation(view.z);
            self.splat_disc(sx, sy, size_px, p.color, alpha);
        }
    }

    fn splat_disc(&mut self, cx: f32, cy: f32, size_px: f32, color: Vec3, alpha: f32) {
        let size_px = size_px.max(1.0);
        let half = size_px * 0.5;
        let x0 = (cx - half).floor().max(0.0) as usize;
        let x1 = ((cx + half).ceil() as usize).min(WIN_W);
        let y0 = (cy - half).floor().max(0.0) as usize;
        let y1 = ((cy + half).ceil() as usize).min(WIN_H);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for py in y0..y1 {
            for px in x0..x1 {
                let u = (px as f32 + 0.5 - (cx - half)) / size_px;
                let v = (py as f32 + 0.5 - (cy - half)) / size_px;
                let du = u - 0.5;
                let dv = v - 0.5;
                let glow = circle_glow((du * du + dv * dv).sqrt());
                if glow <= 0.0 {
                    continue;
                }
                self.add_pixel(px, py, color, alpha * glow);
            }
        }
    }

    // ── Heart layer ───────────────────────────────────────────────────────

    fn draw_hearts(&mut self, cloud: &ParticleCloud, level: f32, time: f32) {
        let activation = heart_activation(level);
        if activation < HEART_VISIBLE_MIN {
            return;
        }
        for h in &cloud.hearts {
            let world = heart_position(h, time);
            let view = self.camera.view(world);
            if view.z > NEAR_LIMIT {
                continue;
            }
            let (sx, sy) = self.camera.project(view);
            let size_px = heart_size(h) * heart_attenuation(view.z);
            self.splat_heart(sx, sy, size_px, activation);
        }
    }

    fn splat_heart(&mut self, cx: f32, cy: f32, size_px: f32, opacity: f32) {
        let size_px = size_px.max(1.0);
        let half = size_px * 0.5;
        let x0 = (cx - half).floor().max(0.0) as usize;
        let x1 = ((cx + half).ceil() as usize).min(WIN_W);
        let y0 = (cy - half).floor().max(0.0) as usize;
        let y1 = ((cy + half).ceil() as usize).min(WIN_H);

        for py in y0..y1 {
            for px in x0..x1 {
                let u = (px as f32 + 0.5 - (cx - half)) / size_px;
                let v = (py as f32 + 0.5 - (cy - half)) / size_px;
                if heart_footprint(u, v) {
                    self.add_pixel(px, py, HEART_COLOR, opacity);
                }
            }
        }
    }

    // ── HUD and phrase overlay ────────────────────────────────────────────

    fn draw_hud(&mut self, gesture: Gesture, level: f32) {
        let status = format!("gesture: {:?}   expansion: {:.2}", gesture, level);
        self.draw_text(&status, 10, 10, 1, HUD_COLOR);

        // Open/closed indicator dots, mirroring the two tracked poses.
        let open_on = gesture == Gesture::Open;
        let closed_on = gesture == Gesture::Closed;
        self.fill_rect(10, 24, 6, 6, if open_on { OPEN_DOT_ON } else { DOT_OFF });
        self.draw_text("expand", 22, 24, 1, LEGEND_COLOR);
        self.fill_rect(58, 24, 6, 6, if closed_on { CLOSED_DOT_ON } else { DOT_OFF });
        self.draw_text("contract", 70, 24, 1, LEGEND_COLOR);

        self.draw_text(
            "hold o=open  c=fist  h=half  arrows=orbit  +/-=zoom  b=hud  q=quit",
            10,
            WIN_H - 14,
            1,
            LEGEND_COLOR,
        );
    }

    fn draw_phrase(&mut self, text: &str) {
        let scale = 3usize;
        let width = text.chars().count() * 4 * scale;
        let x = (WIN_W.saturating_sub(width)) / 2;
        let y = WIN_H / 2 - 40;
        self.draw_text(text, x, y, scale, PHRASE_COLOR);
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    /// Additive blend: channel-wise saturating add of `color * alpha`.
    fn add_pixel(&mut self, x: usize, y: usize, color: Vec3, alpha: f32) {
        if x >= WIN_W || y >= WIN_H {
            return;
        }
        let idx = y * WIN_W + x;
        let dst = self.buf[idx];
        let add = |channel: u32, value: f32| -> u32 {
            (channel + (value.clamp(0.0, 1.0) * alpha * 255.0) as u32).min(255)
        };
        let r = add((dst >> 16) & 0xFF, color.x);
        let g = add((dst >> 8) & 0xFF, color.y);
        let b = add(dst & 0xFF, color.z);
        self.buf[idx] = 0xFF000000 | (r << 16) | (g << 8) | b;
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(WIN_H) {
            for col in x..(x + w).min(WIN_W) {
                self.buf[row * WIN_W + col] = color;
            }
        }
    }

    /// Bitmap-font text at an integer pixel scale.
    fn draw_text(&mut self, text: &str, x: usize, y: usize, scale: usize, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        self.fill_rect(cx + col * scale, y + row * scale, scale, scale, color);
                    }
                }
            }
            cx += 4 * scale; // 3 wide + 1 gap
            if cx + 4 * scale > WIN_W {
                break;
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Star shell
// ════════════════════════════════════════════════════════════════════════════

/// Static far-shell backdrop: random directions at radii well outside the
/// particle cloud, each with its own brightness.
fn make_stars(count: usize) -> Vec<(Vec3, f32)> {
    let mut rng = rand::thread_rng();
    let mut stars = Vec::with_capacity(count);
    for _ in 0..count {
        let theta = rng.gen_range(0.0..std::f32::consts::TAU);
        let phi = rng.gen_range(-1.0f32..1.0).acos();
        let radius = rng.gen_range(50.0..100.0);
        stars.push((
            Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            ),
            rng.gen_range(0.2..0.8),
        ));
    }
    stars
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c.to_ascii_lowercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'o' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'r' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _ => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
