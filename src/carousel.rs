use std::time::Duration;

use log::{debug, warn};

use crate::config::{parse_integer_prefix, parse_interval, Attributes, Param, Size};
use crate::constants::DEFAULT_INTERVAL_MS;
use crate::error::{Result, SliderError};
use crate::indicator::{IndicatorSet, Marker};
use crate::slide::SlideDeck;
use crate::state::TimerState;
use crate::timer::AutoplayTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
    Indicator(usize),
}

// State change signal, drained by the host and handed to its view
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Mounted { count: usize, index: usize },
    SlideChanged { index: usize },
    IndicatorsRebuilt(Vec<Marker>),
    IndicatorsHighlighted { index: usize },
    Resized(Size),
}

#[derive(Debug)]
pub struct Carousel<S> {
    deck: SlideDeck<S>,
    attributes: Attributes,

    interval: Duration,
    autoplay: bool,
    show_indicators: bool,
    size: Size,

    indicators: IndicatorSet,
    timer: AutoplayTimer,
    changes: Vec<Change>,
}

impl<S> Carousel<S> {
    pub fn mount(slides: Vec<S>, attributes: Attributes) -> Self {
        let deck = SlideDeck::new(slides);
        let mut carousel = Self {
            changes: vec![Change::Mounted {
                count: deck.len(),
                index: deck.index(),
            }],
            deck,
            attributes,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            autoplay: false,
            show_indicators: false,
            size: Size::default(),
            indicators: IndicatorSet::new(),
            timer: AutoplayTimer::new(),
        };
        debug!("Mounting slider with {} slide(s)", carousel.deck.len());
        for param in Param::MOUNT_ORDER {
            carousel.attribute_changed(param);
        }
        carousel
    }

    /// Releases the slider. Returns `true` if a live autoplay timer was cancelled.
    pub fn unmount(mut self) -> bool {
        self.teardown()
    }

    fn teardown(&mut self) -> bool {
        let cancelled = self.timer.stop();
        if cancelled {
            debug!("Slider unmounted, autoplay timer released");
        }
        cancelled
    }

    // --- Configuration ---

    pub fn attribute_changed(&mut self, param: Param) {
        match param {
            Param::Width | Param::Height => self.update_size(),
            Param::Interval => self.update_interval(),
            Param::Autoslide => self.update_autoslide(),
            Param::ShowIndicator => self.update_indicators(),
        }
    }

    pub fn set_attribute(&mut self, param: Param, value: impl Into<String>) {
        self.attributes.set(param, value);
        self.attribute_changed(param);
    }

    pub fn remove_attribute(&mut self, param: Param) {
        if self.attributes.remove(param) {
            self.attribute_changed(param);
        }
    }

    /// Adds a presence flag if absent, removes it otherwise. Returns whether
    /// the flag is now present.
    pub fn toggle_attribute(&mut self, param: Param) -> bool {
        if self.attributes.has(param) {
            self.remove_attribute(param);
            false
        } else {
            self.set_attribute(param, "");
            true
        }
    }

    fn update_size(&mut self) {
        self.size = Size::from_attributes(&self.attributes);
        self.changes.push(Change::Resized(self.size));
    }

    fn update_interval(&mut self) {
        match parse_interval(self.attributes.get(Param::Interval)) {
            Ok(ms) => {
                self.interval = Duration::from_millis(ms);
                self.reset_autoplay();
            }
            Err(e) if self.attributes.has(Param::Interval) => {
                warn!("Keeping interval at {} ms: {e}", self.interval.as_millis());
            }
            Err(_) => {}
        }
    }

    fn update_autoslide(&mut self) {
        self.autoplay = self.attributes.has(Param::Autoslide);
        if self.autoplay {
            self.timer.start(self.interval);
        } else {
            self.timer.stop();
        }
    }

    fn update_indicators(&mut self) {
        self.show_indicators = self.attributes.has(Param::ShowIndicator);
        self.indicators
            .rebuild(self.show_indicators, self.deck.len(), self.deck.index());
        self.changes
            .push(Change::IndicatorsRebuilt(self.indicators.markers().to_vec()));
    }

    // --- Navigation ---

    pub fn next(&mut self) {
        if let Some(index) = self.deck.next() {
            self.slide_changed(index);
        }
    }

    pub fn previous(&mut self) {
        if let Some(index) = self.deck.previous() {
            self.slide_changed(index);
        }
    }

    /// Jumps to `target`. A rejected target leaves the slider untouched.
    pub fn goto(&mut self, target: usize) -> Result<usize> {
        match self.deck.goto(target) {
            Ok(index) => {
                self.slide_changed(index);
                Ok(index)
            }
            Err(e) => {
                warn!("Ignoring navigation request: {e}");
                Err(e)
            }
        }
    }

    pub fn goto_str(&mut self, target: &str) -> Result<usize> {
        let parsed = parse_integer_prefix(target).and_then(|v| usize::try_from(v).ok());
        match parsed {
            Some(index) => self.goto(index),
            None => {
                let e = SliderError::InvalidTarget(target.to_string());
                warn!("Ignoring navigation request: {e}");
                Err(e)
            }
        }
    }

    pub fn activate(&mut self, control: Control) {
        match control {
            Control::Previous => self.previous(),
            Control::Next => self.next(),
            Control::Indicator(position) => {
                let _ = self.goto(position); // rejection already logged
            }
        }
    }

    fn slide_changed(&mut self, index: usize) {
        self.changes.push(Change::SlideChanged { index });
        if self.show_indicators {
            self.indicators.highlight(index);
            self.changes.push(Change::IndicatorsHighlighted { index });
        }
        self.reset_autoplay();
    }

    fn reset_autoplay(&mut self) {
        self.timer.reset(self.interval, self.autoplay);
    }

    // --- Time ---

    /// Feeds elapsed host time to the autoplay timer. Returns `true` if the
    /// timer fired and the slider advanced.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.timer.advance(elapsed) {
            debug!("Autoplay tick");
            self.next();
            true
        } else {
            false
        }
    }

    // --- Observers ---

    pub fn take_changes(&mut self) -> Vec<Change> {
        std::mem::take(&mut self.changes)
    }

    pub fn current_index(&self) -> usize {
        self.deck.index()
    }

    pub fn current_slide(&self) -> Option<&S> {
        self.deck.current()
    }

    pub fn slides(&self) -> &[S] {
        self.deck.slides()
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn show_indicators(&self) -> bool {
        self.show_indicators
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn time_to_next_advance(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl<S> Drop for Carousel<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
