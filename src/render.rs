use raylib::prelude::*;

use image_slider::constants::TRANSITION_DURATION;
use image_slider::{Change, Rect, SliderView};

const BUTTON_COLOR: Color = Color::new(0, 0, 0, 128);
const MARKER_COLOR: Color = Color::new(255, 255, 255, 128);
const EMPTY_COLOR: Color = Color::new(40, 40, 40, 255);

fn to_rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(rect.x, rect.y, rect.width, rect.height)
}

// Source rectangle that fills `dest` while keeping the texture's aspect ratio
fn cover_source(texture: &Texture2D, dest: Rect) -> Option<Rectangle> {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    if tex_width <= 0.0 || tex_height <= 0.0 || dest.width <= 0.0 || dest.height <= 0.0 {
        return None;
    }
    let scale = (dest.width / tex_width).max(dest.height / tex_height);
    let src_width = dest.width / scale;
    let src_height = dest.height / scale;
    Some(Rectangle::new(
        (tex_width - src_width) * 0.5,
        (tex_height - src_height) * 0.5,
        src_width,
        src_height,
    ))
}

/// Draws the slider view and eases the slide strip between positions.
pub struct Presenter {
    offset: f32, // Strip position, in slide widths
    target: f32,
    tween: Option<ease::Tween>,
    animation_timer: f32,
}

impl Presenter {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            tween: None,
            animation_timer: 0.0,
        }
    }

    pub fn on_change(&mut self, change: &Change) {
        match change {
            Change::Mounted { index, .. } => {
                self.offset = *index as f32;
                self.target = self.offset;
                self.tween = None;
            }
            Change::SlideChanged { index } => {
                self.target = *index as f32;
                self.tween = Some(ease::Tween::new(ease::sine_in_out, self.offset, self.target, TRANSITION_DURATION));
                self.animation_timer = 0.0;
            }
            _ => {}
        }
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.offset = tween.apply(dt);
        self.animation_timer += dt;
        if self.animation_timer >= TRANSITION_DURATION {
            self.offset = self.target;
            self.tween = None;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, view: &SliderView, slides: &[Texture2D], viewport: Rect) {
        let container = view.container(viewport);

        {
            let mut s = d.begin_scissor_mode(
                container.x as i32,
                container.y as i32,
                container.width as i32,
                container.height as i32,
            );
            s.draw_rectangle_rec(to_rectangle(container), EMPTY_COLOR);

            // Only the slides overlapping the container during a transition
            let first = self.offset.floor().max(0.0) as usize;
            let last = self.offset.ceil().max(0.0) as usize;
            for (position, texture) in slides.iter().enumerate().skip(first).take(last - first + 1) {
                let dest = view.slide_rect(container, position, self.offset);
                if let Some(source) = cover_source(texture, dest) {
                    s.draw_texture_pro(texture, source, to_rectangle(dest), Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
                }
            }
        }

        for (rect, label) in [
            (view.previous_button(container), "<"),
            (view.next_button(container), ">"),
        ] {
            d.draw_rectangle_rec(to_rectangle(rect), BUTTON_COLOR);
            d.draw_text(label, rect.center_x() as i32 - 5, rect.center_y() as i32 - 10, 20, Color::WHITE);
        }

        for (marker, rect) in view.marker_rects(container) {
            let color = if marker.active { Color::WHITE } else { MARKER_COLOR };
            d.draw_circle(rect.center_x() as i32, rect.center_y() as i32, rect.width * 0.5, color);
        }
    }
}
