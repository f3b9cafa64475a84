pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod indicator;
pub mod slide;
pub mod state;
pub mod timer;
pub mod view;

pub use carousel::{Carousel, Change, Control};
pub use config::{Attributes, Dimension, Param, Size};
pub use error::{Result, SliderError};
pub use indicator::{IndicatorSet, Marker};
pub use slide::SlideDeck;
pub use state::TimerState;
pub use timer::AutoplayTimer;
pub use view::{Rect, SliderView};
