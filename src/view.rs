use crate::carousel::{Change, Control};
use crate::config::Size;
use crate::constants::*;
use crate::indicator::Marker;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height * 0.5
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderView {
    size: Size,
    count: usize,
    index: usize,
    markers: Vec<Marker>,
}

impl SliderView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, change: &Change) {
        match change {
            Change::Mounted { count, index } => {
                self.count = *count;
                self.index = *index;
                self.markers.clear();
            }
            Change::SlideChanged { index } => self.index = *index,
            Change::IndicatorsRebuilt(markers) => self.markers = markers.clone(),
            Change::IndicatorsHighlighted { index } => {
                for marker in self.markers.iter_mut() {
                    marker.active = marker.position == *index;
                }
            }
            Change::Resized(size) => self.size = *size,
        }
    }

    pub fn apply_all<'a>(&mut self, changes: impl IntoIterator<Item = &'a Change>) {
        for change in changes {
            self.apply(change);
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn container(&self, viewport: Rect) -> Rect {
        let width = self.size.width.resolve(viewport.width);
        let height = self.size.height.resolve(viewport.height);
        Rect::new(
            viewport.x + (viewport.width - width) * 0.5,
            viewport.y + (viewport.height - height) * 0.5,
            width,
            height,
        )
    }

    // `offset_slides` is the strip position in slide widths
    pub fn slide_rect(&self, container: Rect, position: usize, offset_slides: f32) -> Rect {
        Rect::new(
            container.x + (position as f32 - offset_slides) * container.width,
            container.y,
            container.width,
            container.height,
        )
    }

    pub fn previous_button(&self, container: Rect) -> Rect {
        Rect::new(
            container.x,
            container.center_y() - NAV_BUTTON_HEIGHT * 0.5,
            NAV_BUTTON_WIDTH,
            NAV_BUTTON_HEIGHT,
        )
    }

    pub fn next_button(&self, container: Rect) -> Rect {
        Rect::new(
            container.x + container.width - NAV_BUTTON_WIDTH,
            container.center_y() - NAV_BUTTON_HEIGHT * 0.5,
            NAV_BUTTON_WIDTH,
            NAV_BUTTON_HEIGHT,
        )
    }

    pub fn marker_rects(&self, container: Rect) -> Vec<(Marker, Rect)> {
        let stride = INDICATOR_DOT_SIZE + INDICATOR_DOT_MARGIN * 2.0;
        let row_width = stride * self.markers.len() as f32;
        let left = container.center_x() - row_width * 0.5;
        let top = container.y + container.height - INDICATOR_BOTTOM_OFFSET - INDICATOR_DOT_SIZE;

        self.markers
            .iter()
            .enumerate()
            .map(|(i, marker)| {
                let x = left + stride * i as f32 + INDICATOR_DOT_MARGIN;
                (*marker, Rect::new(x, top, INDICATOR_DOT_SIZE, INDICATOR_DOT_SIZE))
            })
            .collect()
    }

    /// Maps a click to the control under it. Markers and buttons sit on top
    /// of the slides, so markers win over buttons where they overlap.
    pub fn hit_test(&self, viewport: Rect, x: f32, y: f32) -> Option<Control> {
        let container = self.container(viewport);
        if !container.contains(x, y) {
            return None;
        }
        if let Some((marker, _)) = self
            .marker_rects(container)
            .into_iter()
            .find(|(_, rect)| rect.contains(x, y))
        {
            return Some(Control::Indicator(marker.position));
        }
        if self.previous_button(container).contains(x, y) {
            Some(Control::Previous)
        } else if self.next_button(container).contains(x, y) {
            Some(Control::Next)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimension;

    const VIEWPORT: Rect = Rect { x: 0.0, y: 0.0, width: 800.0, height: 600.0 };

    fn markers(n: usize, active: usize) -> Vec<Marker> {
        (0..n).map(|position| Marker { position, active: position == active }).collect()
    }

    fn view_with_markers(n: usize) -> SliderView {
        let mut view = SliderView::new();
        view.apply_all(&[
            Change::Mounted { count: n, index: 0 },
            Change::Resized(Size::default()),
            Change::IndicatorsRebuilt(markers(n, 0)),
        ]);
        view
    }

    #[test]
    fn default_container_is_full_width_and_300px_high() {
        let view = view_with_markers(3);
        assert_eq!(view.container(VIEWPORT), Rect::new(0.0, 150.0, 800.0, 300.0));
    }

    #[test]
    fn percent_width_is_centered() {
        let mut view = SliderView::new();
        view.apply(&Change::Resized(Size {
            width: Dimension::Percent(50.0),
            height: Dimension::Pixels(200.0),
        }));
        assert_eq!(view.container(VIEWPORT), Rect::new(200.0, 200.0, 400.0, 200.0));
    }

    #[test]
    fn slide_changes_shift_the_strip() {
        let mut view = view_with_markers(3);
        view.apply(&Change::SlideChanged { index: 2 });
        assert_eq!(view.index(), 2);
        let container = view.container(VIEWPORT);
        assert_eq!(view.slide_rect(container, 2, 2.0).x, container.x);
    }

    #[test]
    fn highlight_moves_the_active_marker() {
        let mut view = view_with_markers(3);
        view.apply(&Change::IndicatorsHighlighted { index: 1 });
        let active: Vec<usize> = view.markers().iter().filter(|m| m.active).map(|m| m.position).collect();
        assert_eq!(active, vec![1]);
    }

    #[test]
    fn marker_row_is_centered_near_the_bottom() {
        let view = view_with_markers(2);
        let container = view.container(VIEWPORT);
        let rects = view.marker_rects(container);
        assert_eq!(rects[0].1, Rect::new(385.0, 430.0, 10.0, 10.0));
        assert_eq!(rects[1].1, Rect::new(405.0, 430.0, 10.0, 10.0));
    }

    #[test]
    fn hit_test_finds_controls() {
        let view = view_with_markers(2);
        assert_eq!(view.hit_test(VIEWPORT, 10.0, 300.0), Some(Control::Previous));
        assert_eq!(view.hit_test(VIEWPORT, 790.0, 300.0), Some(Control::Next));
        assert_eq!(view.hit_test(VIEWPORT, 410.0, 435.0), Some(Control::Indicator(1)));
        assert_eq!(view.hit_test(VIEWPORT, 400.0, 300.0), None);
        assert_eq!(view.hit_test(VIEWPORT, 400.0, 50.0), None);
    }

    #[test]
    fn removed_indicators_are_not_hit() {
        let mut view = view_with_markers(2);
        view.apply(&Change::IndicatorsRebuilt(Vec::new()));
        assert_eq!(view.hit_test(VIEWPORT, 410.0, 435.0), None);
    }
}
