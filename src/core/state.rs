//! core/state.rs
//! Filter state owner + reset generation.
//!
//! - Views never touch `FilterCriteria` directly; they send `FilterCommand`s.
//! - `ResetAll` bumps a generation counter. Chart-local state lives in
//!   `ResetScoped<T>` cells owned by whoever needs them, and restores itself
//!   when it sees a newer generation. Nobody reaches into anyone else's state.

use tracing::debug;

use super::filter::FilterCriteria;
use super::types::{Dimension, DimensionValue};

/// Explicit mutations of the filter criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCommand {
    SetSearch(String),
    /// Add the value to its facet set, or remove it if already selected.
    ToggleFacet(DimensionValue),
    ClearFacet(Dimension),
    /// Set the drill for the value's dimension; same value again clears it.
    ToggleDrill(DimensionValue),
    ClearDrill(Dimension),
    ResetAll,
}

/// Monotonic counter bumped on every global reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResetGeneration(u64);

impl ResetGeneration {
    fn bump(&mut self) {
        self.0 += 1;
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterState {
    criteria: FilterCriteria,
    revision: u64,
    generation: ResetGeneration,
}

impl FilterState {
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Bumped on every effective criteria change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn generation(&self) -> ResetGeneration {
        self.generation
    }

    /// Apply one command. Returns true when the criteria changed.
    pub fn apply(&mut self, command: FilterCommand) -> bool {
        debug!(?command, revision = self.revision, "filter command");

        let changed = match command {
            FilterCommand::SetSearch(text) => {
                if self.criteria.search == text {
                    false
                } else {
                    self.criteria.search = text;
                    true
                }
            }
            FilterCommand::ToggleFacet(value) => {
                let dimension = value.dimension();
                let set = self.criteria.facets.entry(dimension).or_default();
                if !set.remove(&value) {
                    set.insert(value);
                }
                if set.is_empty() {
                    self.criteria.facets.remove(&dimension);
                }
                true
            }
            FilterCommand::ClearFacet(dimension) => self
                .criteria
                .facets
                .remove(&dimension)
                .is_some_and(|set| !set.is_empty()),
            FilterCommand::ToggleDrill(value) => {
                let dimension = value.dimension();
                if self.criteria.drills.get(&dimension) == Some(&value) {
                    self.criteria.drills.remove(&dimension);
                } else {
                    self.criteria.drills.insert(dimension, value);
                }
                true
            }
            FilterCommand::ClearDrill(dimension) => {
                self.criteria.drills.remove(&dimension).is_some()
            }
            FilterCommand::ResetAll => {
                // Generation moves even if criteria were already identity:
                // chart-local zoom/selection must still snap back.
                self.generation.bump();
                let was_identity = self.criteria == FilterCriteria::default();
                self.criteria = FilterCriteria::default();
                !was_identity
            }
        };

        if changed {
            self.revision += 1;
        }
        changed
    }
}

/// Chart-local state that snaps back to `T::default()` after a global reset.
#[derive(Debug, Clone, Default)]
pub struct ResetScoped<T> {
    value: T,
    seen: ResetGeneration,
}

impl<T: Default> ResetScoped<T> {
    pub fn new(generation: ResetGeneration) -> Self {
        Self {
            value: T::default(),
            seen: generation,
        }
    }

    /// Catch up with `generation`; resets the value if it is newer.
    pub fn sync(&mut self, generation: ResetGeneration) {
        if generation > self.seen {
            self.value = T::default();
            self.seen = generation;
        }
    }

    /// Read as of `generation`, without mutating.
    pub fn view(&self, generation: ResetGeneration) -> std::borrow::Cow<'_, T>
    where
        T: Clone,
    {
        if generation > self.seen {
            std::borrow::Cow::Owned(T::default())
        } else {
            std::borrow::Cow::Borrowed(&self.value)
        }
    }

    /// Mutable access as of `generation` (syncs first).
    pub fn get_mut(&mut self, generation: ResetGeneration) -> &mut T {
        self.sync(generation);
        &mut self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Zoom {
        level: u32,
        highlighted: Option<String>,
    }

    #[test]
    fn drill_toggles_off_on_second_click() {
        let mut state = FilterState::default();
        assert!(state.apply(FilterCommand::ToggleDrill(DimensionValue::Year(2010))));
        assert_eq!(
            state.criteria().drill(Dimension::Year),
            Some(&DimensionValue::Year(2010))
        );

        state.apply(FilterCommand::ToggleDrill(DimensionValue::Year(2010)));
        assert_eq!(state.criteria().drill(Dimension::Year), None);
    }

    #[test]
    fn drill_replaces_other_value_in_same_dimension() {
        let mut state = FilterState::default();
        state.apply(FilterCommand::ToggleDrill(DimensionValue::Singer("A".into())));
        state.apply(FilterCommand::ToggleDrill(DimensionValue::Singer("B".into())));
        assert_eq!(
            state.criteria().drill(Dimension::Singer),
            Some(&DimensionValue::Singer("B".into()))
        );
    }

    #[test]
    fn facet_toggle_adds_then_removes() {
        let mut state = FilterState::default();
        let v = DimensionValue::Composer("X".into());
        state.apply(FilterCommand::ToggleFacet(v.clone()));
        assert!(state.criteria().is_selected(&v));
        state.apply(FilterCommand::ToggleFacet(v.clone()));
        assert!(!state.criteria().is_selected(&v));
        assert!(state.criteria().is_identity());
    }

    #[test]
    fn clear_facet_reports_whether_anything_was_selected() {
        let mut state = FilterState::default();
        assert!(!state.apply(FilterCommand::ClearFacet(Dimension::Singer)));
        assert_eq!(state.revision(), 0);

        state.apply(FilterCommand::ToggleFacet(DimensionValue::Singer("A".into())));
        state.apply(FilterCommand::ToggleFacet(DimensionValue::Singer("B".into())));
        state.apply(FilterCommand::ToggleFacet(DimensionValue::Year(2010)));
        assert_eq!(state.revision(), 3);

        assert!(state.apply(FilterCommand::ClearFacet(Dimension::Singer)));
        assert_eq!(state.revision(), 4);
        assert_eq!(state.criteria().facet_len(Dimension::Singer), 0);
        assert_eq!(state.criteria().facet_len(Dimension::Year), 1);

        assert!(!state.apply(FilterCommand::ClearFacet(Dimension::Singer)));
        assert_eq!(state.revision(), 4);
    }

    #[test]
    fn revision_only_moves_on_effective_change() {
        let mut state = FilterState::default();
        assert!(!state.apply(FilterCommand::SetSearch(String::new())));
        assert!(!state.apply(FilterCommand::ClearDrill(Dimension::Year)));
        assert_eq!(state.revision(), 0);

        assert!(state.apply(FilterCommand::SetSearch("rahman".into())));
        assert_eq!(state.revision(), 1);
    }

    #[test]
    fn reset_restores_identity_and_resets_scoped_state() {
        let mut state = FilterState::default();
        let mut zoom: ResetScoped<Zoom> = ResetScoped::new(state.generation());

        state.apply(FilterCommand::ToggleDrill(DimensionValue::Year(2010)));
        state.apply(FilterCommand::SetSearch("sid".into()));
        state.apply(FilterCommand::ToggleFacet(DimensionValue::Lyricist("P".into())));
        zoom.get_mut(state.generation()).level = 3;
        zoom.get_mut(state.generation()).highlighted = Some("A".into());

        assert!(state.apply(FilterCommand::ResetAll));

        assert_eq!(state.criteria().drill(Dimension::Year), None);
        assert!(state.criteria().is_identity());
        assert_eq!(*zoom.view(state.generation()), Zoom::default());
        assert_eq!(*zoom.get_mut(state.generation()), Zoom::default());
    }

    #[test]
    fn reset_bumps_generation_even_at_identity() {
        let mut state = FilterState::default();
        let before = state.generation();
        assert!(!state.apply(FilterCommand::ResetAll));
        assert!(state.generation() > before);
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn scoped_state_survives_when_generation_unchanged() {
        let state = FilterState::default();
        let mut zoom: ResetScoped<Zoom> = ResetScoped::new(state.generation());
        zoom.get_mut(state.generation()).level = 2;
        assert_eq!(zoom.view(state.generation()).level, 2);
    }
}
