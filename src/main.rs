use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use log::{error, info};
use raylib::prelude::*;

mod render;
mod texture_loader;

use image_slider::constants::*;
use image_slider::{Attributes, Carousel, Param, Rect, SliderView};

use crate::render::Presenter;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

/// Browse a directory of pictures with an image slider.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the images, shown in file name order
    image_directory: PathBuf,

    /// Slider width, in px or % of the window
    #[arg(long)]
    width: Option<String>,

    /// Slider height, in px or % of the window
    #[arg(long)]
    height: Option<String>,

    /// Autoplay period in milliseconds
    #[arg(long)]
    interval: Option<String>,

    /// Advance automatically
    #[arg(long)]
    autoslide: bool,

    /// Show one position marker per slide
    #[arg(long)]
    show_indicator: bool,
}

impl Args {
    fn attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        for (param, value) in [
            (Param::Width, &self.width),
            (Param::Height, &self.height),
            (Param::Interval, &self.interval),
        ] {
            if let Some(value) = value {
                attributes.set(param, value.as_str());
            }
        }
        if self.autoslide {
            attributes.set(Param::Autoslide, "");
        }
        if self.show_indicator {
            attributes.set(Param::ShowIndicator, "");
        }
        attributes
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Image Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let image_paths = match load_sorted_image_paths(&args.image_directory) {
        Ok(paths) => paths,
        Err(e) => {
            show_error(&mut rl, &thread, &format!("Error: {e}"));
            return Err(e);
        }
    };

    let mut textures = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => textures.push(texture),
            Err(e) => error!("Skipping {}: {e:#}", path.display()),
        }
    }

    if textures.is_empty() {
        show_error(&mut rl, &thread, "Error: No slides loaded.");
        bail!("No slides could be loaded from {}", args.image_directory.display());
    }
    info!("Loaded {} slide(s) from {}", textures.len(), args.image_directory.display());

    let mut carousel = Carousel::mount(textures, args.attributes());
    let mut view = SliderView::new();
    let mut presenter = Presenter::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let viewport = Rect::new(0.0, 0.0, rl.get_screen_width() as f32, rl.get_screen_height() as f32);

        handle_keys(&mut rl, &mut carousel);
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            if let Some(control) = view.hit_test(viewport, mouse.x, mouse.y) {
                carousel.activate(control);
            }
        }
        carousel.tick(Duration::from_secs_f32(dt));

        for change in carousel.take_changes() {
            view.apply(&change);
            presenter.on_change(&change);
        }
        presenter.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        presenter.draw(&mut d, &view, carousel.slides(), viewport);
        draw_status(&mut d, &carousel);
    }

    carousel.unmount();
    Ok(())
}

fn handle_keys(rl: &mut RaylibHandle, carousel: &mut Carousel<Texture2D>) {
    while let Some(key) = rl.get_key_pressed() {
        match key {
            KeyboardKey::KEY_RIGHT => carousel.next(),
            KeyboardKey::KEY_LEFT => carousel.previous(),
            KeyboardKey::KEY_A => {
                carousel.toggle_attribute(Param::Autoslide);
            }
            KeyboardKey::KEY_I => {
                carousel.toggle_attribute(Param::ShowIndicator);
            }
            KeyboardKey::KEY_EQUAL | KeyboardKey::KEY_KP_ADD => change_interval(carousel, true),
            KeyboardKey::KEY_MINUS | KeyboardKey::KEY_KP_SUBTRACT => change_interval(carousel, false),
            key => {
                if let Some(position) = digit_position(key) {
                    // Rejections are logged by the carousel
                    let _ = carousel.goto(position);
                }
            }
        }
    }
}

// Digits 1-9 select slides 0-8
fn digit_position(key: KeyboardKey) -> Option<usize> {
    let position = match key {
        KeyboardKey::KEY_ONE => 0,
        KeyboardKey::KEY_TWO => 1,
        KeyboardKey::KEY_THREE => 2,
        KeyboardKey::KEY_FOUR => 3,
        KeyboardKey::KEY_FIVE => 4,
        KeyboardKey::KEY_SIX => 5,
        KeyboardKey::KEY_SEVEN => 6,
        KeyboardKey::KEY_EIGHT => 7,
        KeyboardKey::KEY_NINE => 8,
        _ => return None,
    };
    Some(position)
}

fn change_interval(carousel: &mut Carousel<Texture2D>, longer: bool) {
    let current = carousel.interval().as_millis() as u64;
    let interval = if longer {
        current + INTERVAL_STEP_MS
    } else {
        current.saturating_sub(INTERVAL_STEP_MS).max(INTERVAL_STEP_MS)
    };
    carousel.set_attribute(Param::Interval, interval.to_string());
}

fn draw_status(d: &mut RaylibDrawHandle, carousel: &Carousel<Texture2D>) {
    let status = format!(
        "Slide {}/{}   interval {} ms   autoplay {}   indicators {}",
        carousel.current_index() + 1,
        carousel.len(),
        carousel.interval().as_millis(),
        if carousel.autoplay() { "on" } else { "off" },
        if carousel.show_indicators() { "on" } else { "off" },
    );
    d.draw_text(&status, 10, 10, 20, Color::LIGHTGRAY);
    d.draw_text(
        "Left/Right: navigate   1-9: jump   A: autoplay   I: indicators   +/-: interval",
        10,
        36,
        16,
        Color::GRAY,
    );
}

// Shows an error in the window for a few seconds before giving up
fn show_error(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);
    d.draw_text(message, 20, 20, 20, Color::RED);
    drop(d);
    std::thread::sleep(Duration::from_secs(5));
}
