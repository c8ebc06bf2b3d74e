//! Form Validation Indicator
//!
//! Transient valid/invalid state of the form. Each `show` hands out a
//! generation; `clear` with a stale generation is a no-op, so an old timer
//! never strips the state set by a newer submission.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    Valid,
    Invalid,
}

impl IndicatorKind {
    pub fn class_name(self) -> &'static str {
        match self {
            IndicatorKind::Valid => "form--valid",
            IndicatorKind::Invalid => "form--invalid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub kind: IndicatorKind,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorState {
    current: Option<Indicator>,
    next_generation: u64,
}

impl IndicatorState {
    pub fn current(&self) -> Option<Indicator> {
        self.current
    }

    /// Show `kind`, returning the generation to clear it with later
    pub fn show(&mut self, kind: IndicatorKind) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.current = Some(Indicator { kind, generation });
        generation
    }

    /// Clear if `generation` is still the one on display
    pub fn clear(&mut self, generation: u64) -> bool {
        match self.current {
            Some(indicator) if indicator.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Form class list including the indicator class, if any
    pub fn form_class(&self) -> String {
        match self.current {
            Some(indicator) => format!("form {}", indicator.kind.class_name()),
            None => "form".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_clear() {
        let mut state = IndicatorState::default();
        assert_eq!(state.form_class(), "form");

        let generation = state.show(IndicatorKind::Invalid);
        assert_eq!(state.form_class(), "form form--invalid");
        assert!(state.clear(generation));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_stale_timer_keeps_newer_indicator() {
        let mut state = IndicatorState::default();
        let first = state.show(IndicatorKind::Invalid);
        let second = state.show(IndicatorKind::Valid);

        assert!(!state.clear(first));
        assert_eq!(state.form_class(), "form form--valid");
        assert!(state.clear(second));
        assert_eq!(state.form_class(), "form");
    }
}
