#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub position: usize,
    pub active: bool,
}

/// Row of markers, one per slide. Empty while indicators are disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorSet {
    markers: Vec<Marker>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recreates the markers from scratch.
    pub fn rebuild(&mut self, enabled: bool, count: usize, current: usize) {
        self.markers.clear();
        if enabled {
            self.markers.extend((0..count).map(|position| Marker {
                position,
                active: position == current,
            }));
        }
    }

    /// Moves the highlight without recreating the markers.
    pub fn highlight(&mut self, current: usize) {
        for marker in self.markers.iter_mut() {
            marker.active = marker.position == current;
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn active(&self) -> Option<usize> {
        self.markers.iter().find(|m| m.active).map(|m| m.position)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_marks_current_position() {
        let mut set = IndicatorSet::new();
        set.rebuild(true, 4, 2);
        assert_eq!(set.len(), 4);
        assert_eq!(set.active(), Some(2));
        assert_eq!(set.markers().iter().filter(|m| m.active).count(), 1);
    }

    #[test]
    fn disabled_set_has_no_markers() {
        let mut set = IndicatorSet::new();
        set.rebuild(true, 3, 0);
        set.rebuild(false, 3, 0);
        assert!(set.is_empty());
        set.highlight(1);
        assert!(set.is_empty());
    }

    #[test]
    fn highlight_keeps_markers() {
        let mut set = IndicatorSet::new();
        set.rebuild(true, 3, 0);
        set.highlight(1);
        assert_eq!(set.len(), 3);
        assert_eq!(set.active(), Some(1));
        assert!(!set.markers()[0].active);
    }
}
