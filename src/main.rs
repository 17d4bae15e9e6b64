use std::collections::VecDeque;
use std::env;
use std::time::Instant;

use anyhow::Result;
use fish_school::{DVec2, Fish, Obstacle, Shape, SimConfig, World};
use macroquad::prelude::*;
use tracing::{error, info};

const MSAA_SAMPLE_COUNT: i32 = 4;
const FISH_COLOR: Color = Color::new(0.0, 0.83, 1.0, 1.0);
const ROCK_FILL: Color = Color::new(0.35, 0.35, 0.35, 1.0);
const ROCK_STROKE: Color = Color::new(0.23, 0.23, 0.23, 1.0);
const WATER: Color = Color::new(0.04, 0.09, 0.16, 1.0);

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Fish School".to_owned(),
        window_width: 1280,
        window_height: 720,
        sample_count: MSAA_SAMPLE_COUNT,
        high_dpi: true,
        ..Default::default()
    }
}

fn default_rocks(w: f64, h: f64) -> Result<Vec<Obstacle>> {
    Ok(vec![
        Obstacle::circle(DVec2::new(w * 0.3, h * 0.5), 40.0)?,
        Obstacle::rectangle(DVec2::new(w * 0.7, h * 0.35), 90.0, 50.0)?,
        Obstacle::square(DVec2::new(w * 0.55, h * 0.75), 25.0)?,
    ])
}

fn draw_fish(fish: &Fish) {
    let head = fish.pos;
    let tail = fish.tail();
    draw_line(
        tail.x as f32,
        tail.y as f32,
        head.x as f32,
        head.y as f32,
        2.0,
        FISH_COLOR,
    );
    draw_circle(head.x as f32, head.y as f32, 3.0, FISH_COLOR);
}

fn draw_obstacle(obstacle: &Obstacle, enabled: bool) {
    let alpha = if enabled { 1.0 } else { 0.35 };
    let fill = Color { a: alpha, ..ROCK_FILL };
    let stroke = Color { a: alpha, ..ROCK_STROKE };
    let c = obstacle.center();

    match obstacle.shape() {
        Shape::Circle { radius } => {
            draw_circle(c.x as f32, c.y as f32, radius as f32, fill);
            draw_circle_lines(c.x as f32, c.y as f32, radius as f32, 3.0, stroke);
            draw_circle(c.x as f32, c.y as f32, 4.0, stroke);
        }
        Shape::Rectangle { width, height } => {
            let x = (c.x - width / 2.0) as f32;
            let y = (c.y - height / 2.0) as f32;
            draw_rectangle(x, y, width as f32, height as f32, fill);
            draw_rectangle_lines(x, y, width as f32, height as f32, 3.0, stroke);
        }
    }
}

async fn run() -> Result<()> {
    let w = screen_width() as f64;
    let h = screen_height() as f64;

    let seed = env_or("FISH_SEED", 1u64);
    let fish_count = env_or("FISH_COUNT", 80usize);
    info!(seed, fish_count, width = w, height = h, "starting fish school");

    let config = SimConfig {
        width: w,
        height: h,
        fish_count,
        obstacles: default_rocks(w, h)?,
        seed: Some(seed),
        ..SimConfig::default()
    };
    let mut world = World::new(config)?;

    let mut paused = false;
    let mut frame_times_ms: VecDeque<f32> = VecDeque::with_capacity(100);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("quit requested");
            return Ok(());
        }
        if is_key_pressed(KeyCode::Space) {
            paused = !paused;
        }
        if is_key_pressed(KeyCode::O) {
            let enabled = !world.obstacles_enabled();
            world.set_obstacles_enabled(enabled);
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            let index = world.add_fish(x as f64, y as f64)?;
            info!(index, x, y, "fish added by click");
        }

        let dt = if paused { 0.0 } else { get_frame_time() as f64 };
        let start = Instant::now();
        world.step(dt)?;
        let engine_ms = start.elapsed().as_micros() as f32 / 1000.0;

        frame_times_ms.push_back(engine_ms);
        if frame_times_ms.len() > 100 {
            frame_times_ms.pop_front();
        }
        let avg_ms = frame_times_ms.iter().copied().sum::<f32>() / frame_times_ms.len() as f32;

        clear_background(WATER);
        for obstacle in world.obstacles() {
            draw_obstacle(obstacle, world.obstacles_enabled());
        }
        for fish in world.fishes() {
            draw_fish(fish);
        }

        draw_text(
            &format!(
                "Fish: {}  sim ({}) avg(100): {:.2}ms  obstacles: {}{}",
                world.len(),
                world.neighbor_search_name(),
                avg_ms,
                if world.obstacles_enabled() { "on" } else { "off" },
                if paused { "  [paused]" } else { "" },
            ),
            20.0,
            32.0,
            24.0,
            WHITE,
        );

        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        error!(%err, "fish school stopped");
    }
}
