//! Turn sampled levels into discrete transitions.

/// Transition observed on a sampled digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rose,
    Fell,
}

/// One-shot latch over a polled input.
///
/// Each direction fires once, the latch of the opposite direction is
/// cleared so the next change of level fires again. There is no filtering
/// beyond a single poll. Both latches start cleared, so the very first
/// sample always reports the level it finds.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeDetector {
    is_high: bool,
    is_low: bool,
}

impl EdgeDetector {
    pub fn update(&mut self, level: bool) -> Option<Edge> {
        if level {
            if self.is_high {
                return None;
            }
            self.is_high = true;
            self.is_low = false;
            Some(Edge::Rose)
        } else {
            if self.is_low {
                return None;
            }
            self.is_high = false;
            self.is_low = true;
            Some(Edge::Fell)
        }
    }

    pub fn is_high(&self) -> bool {
        self.is_high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn when_goes_up_and_stays_up_it_rises_once() {
        let mut edge = EdgeDetector::default();
        assert_eq!(edge.update(false), Some(Edge::Fell));
        assert_eq!(edge.update(true), Some(Edge::Rose));
        assert_eq!(edge.update(true), None);
        assert_eq!(edge.update(true), None);
    }

    #[test]
    fn when_first_sampled_high_it_reports_rise() {
        let mut edge = EdgeDetector::default();
        assert_eq!(edge.update(true), Some(Edge::Rose));
        assert!(edge.is_high());
    }

    #[test]
    fn when_rises_and_falls_with_repeated_polls_it_fires_exactly_twice() {
        let mut edge = EdgeDetector::default();
        edge.update(false);

        let mut rose = 0;
        let mut fell = 0;
        for level in [true; 50].into_iter().chain([false; 50]) {
            match edge.update(level) {
                Some(Edge::Rose) => rose += 1,
                Some(Edge::Fell) => fell += 1,
                None => (),
            }
        }

        assert_eq!(rose, 1);
        assert_eq!(fell, 1);
    }

    proptest! {
        #[test]
        fn it_fires_only_on_change_of_level(levels in prop::collection::vec(any::<bool>(), 1..200)) {
            let mut edge = EdgeDetector::default();
            let mut previous = None;
            for level in levels {
                let expected = match (previous, level) {
                    (Some(p), l) if p == l => None,
                    (_, true) => Some(Edge::Rose),
                    (_, false) => Some(Edge::Fell),
                };
                prop_assert_eq!(edge.update(level), expected);
                previous = Some(level);
            }
        }
    }
}
