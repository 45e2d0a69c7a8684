// src/main.rs
use log::{info, warn};
use nannou::prelude::*;

use trianglerow::{
    animation::PhaseAnimator,
    config::Config,
    models::{ShareVector, SlotTable, SLOT_COUNT},
    render::{Palette, SegmentRenderer},
};

struct Model {
    animator: PhaseAnimator,
    renderer: SegmentRenderer,
    random: rand::rngs::ThreadRng,

    // shares computed in update, drawn in view
    shares: ShareVector,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Falling back to default config: {}", e);
        Config::default()
    });
    info!("Loaded config: {:?}", config);

    // Create window
    app.new_window()
        .title("trianglerow")
        .size(config.window.width, config.window.height)
        .view(view)
        .resized(resized)
        .build()
        .expect("Failed to create window");

    let animator = PhaseAnimator::new(
        SlotTable::standard(),
        config.animation.clone(),
        app.time as f64,
    )
    .expect("Failed to start animator");

    Model {
        animator,
        renderer: SegmentRenderer::new(Palette::from(&config.style)),
        random: rand::thread_rng(),
        shares: [0.0; SLOT_COUNT],
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    model.shares = model.animator.update(app.time as f64, &mut model.random);
}

fn resized(_app: &App, _model: &mut Model, size: Vec2) {
    info!("Window resized to {}x{}", size.x, size.y);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    model.renderer.draw(
        &draw,
        app.window_rect(),
        &model.shares,
        model.animator.slots(),
    );

    draw.to_frame(app, &frame).expect("Failed to draw frame");
}
