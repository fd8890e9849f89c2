use macroquad::prelude::*;
use ramp_evo::simulation::params::DisplayParams;
use ramp_evo::simulation::scene::Scene;
use ramp_evo::simulation::simulator::Frame;
use std::time::Duration;

const RAMP_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const OBSTACLE_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
const HIT_OBSTACLE_COLOR: Color = Color::new(0.4, 0.6, 1.0, 1.0);
const BALL_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Maps world coordinates into the part of the window left of the stats panel.
pub struct Viewport {
    world_width: f32,
    world_height: f32,
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(display: &DisplayParams, reserved_right: f32) -> Self {
        Self {
            world_width: display.world_width,
            world_height: display.world_height,
            width: (screen_width() - reserved_right).max(1.0),
            height: screen_height(),
        }
    }

    fn scale(&self) -> f32 {
        (self.width / self.world_width).min(self.height / self.world_height)
    }
}

trait ToScreen {
    type Output;
    fn to_screen(&self, viewport: &Viewport) -> Self::Output;
}

impl ToScreen for geo::Point<f32> {
    type Output = Vec2;
    fn to_screen(&self, viewport: &Viewport) -> Vec2 {
        let scale = viewport.scale();
        vec2(self.x() * scale, self.y() * scale)
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, viewport: &Viewport) -> f32 {
        self * viewport.scale()
    }
}

/// Frame pacing at a fixed rate.
pub struct Pacer {
    period: f64,
    last: f64,
}

impl Pacer {
    pub fn new(fps: f32) -> Self {
        Self {
            period: 1.0 / f64::from(fps.max(1.0)),
            last: get_time(),
        }
    }

    /// Presents the frame, then sleeps off whatever is left of the period.
    pub async fn tick(&mut self) {
        next_frame().await;
        let elapsed = get_time() - self.last;
        if elapsed < self.period {
            std::thread::sleep(Duration::from_secs_f64(self.period - elapsed));
        }
        self.last = get_time();
    }
}

/// Window-side state handed explicitly to every phase that draws.
pub struct RenderContext {
    pub display: DisplayParams,
    pub replay: Pacer,
    pub pause: Pacer,
}

impl RenderContext {
    pub fn new(display: &DisplayParams) -> Self {
        Self {
            display: display.clone(),
            replay: Pacer::new(display.replay_fps),
            pause: Pacer::new(display.pause_fps),
        }
    }

    pub fn viewport(&self, reserved_right: f32) -> Viewport {
        Viewport::new(&self.display, reserved_right)
    }
}

pub fn draw_scene(scene: &Scene, frame: Option<&Frame>, viewport: &Viewport) {
    clear_background(BLACK);

    // The ramp is a convex hull, so a triangle fan fills it.
    let ramp: Vec<Vec2> = scene
        .ramp_vertices()
        .iter()
        .map(|p| p.to_screen(viewport))
        .collect();
    if let Some((&first, rest)) = ramp.split_first() {
        for pair in rest.windows(2) {
            draw_triangle(first, pair[0], pair[1], RAMP_COLOR);
        }
    }

    for (i, obstacle) in scene.obstacles.iter().enumerate() {
        let center = obstacle.center.to_screen(viewport);
        let hit = frame.is_some_and(|f| f.hits.get(i).copied().unwrap_or(false));
        draw_circle(
            center.x,
            center.y,
            obstacle.radius.to_screen(viewport),
            if hit { HIT_OBSTACLE_COLOR } else { OBSTACLE_COLOR },
        );
    }

    let ball = frame.map_or(scene.ball.start, |f| f.ball).to_screen(viewport);
    draw_circle(ball.x, ball.y, scene.ball.radius.to_screen(viewport), BALL_COLOR);
}
