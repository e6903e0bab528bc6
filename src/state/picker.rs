/// Picker state: the currently displayed movie and the selecting flag
///
/// A pick happens in two steps. `trigger` clears the display and hands out
/// a `PendingPick` ticket; once the delay has elapsed, `resolve` redeems the
/// ticket and draws a random movie. Only the ticket from the latest trigger
/// is honored, only once, and nothing is honored after `unmount`.
use super::catalog::Catalog;
use super::data::Movie;
use super::random::{index_for, RandomSource};

/// Ticket for one trigger cycle's delayed continuation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPick {
    generation: u64,
}

/// What the view should render
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    /// Call-to-action, enabled
    Idle,
    /// Call-to-action, disabled with a loading indicator
    Selecting,
    /// Detail panel for the selected movie
    Detail(&'a Movie),
}

#[derive(Debug)]
pub struct Picker {
    catalog: Catalog,
    selected: Option<usize>,
    selecting: bool,
    /// Incremented on every trigger; identifies the live ticket
    generation: u64,
    mounted: bool,
}

impl Picker {
    /// Mount a fresh picker over the catalog
    pub fn new(catalog: Catalog) -> Self {
        Picker {
            catalog,
            selected: None,
            selecting: false,
            generation: 0,
            mounted: true,
        }
    }

    /// Start a pick cycle.
    /// Returns `None` once the picker has been unmounted.
    pub fn trigger(&mut self) -> Option<PendingPick> {
        if !self.mounted {
            return None;
        }

        self.selecting = true;
        self.selected = None;
        self.generation += 1;

        Some(PendingPick {
            generation: self.generation,
        })
    }

    /// Finish a pick cycle after the delay.
    ///
    /// Stale tickets, spent tickets and tickets arriving after unmount leave
    /// the state untouched and return `None`.
    pub fn resolve<R: RandomSource>(
        &mut self,
        pending: PendingPick,
        rng: &mut R,
    ) -> Option<&Movie> {
        if !self.mounted {
            tracing::debug!(
                generation = pending.generation,
                "Pick resolved after unmount, ignoring"
            );
            return None;
        }
        // Already-spent tickets count as stale too
        if pending.generation != self.generation || !self.selecting {
            tracing::debug!(
                generation = pending.generation,
                current = self.generation,
                "Stale pick, ignoring"
            );
            return None;
        }

        let index = index_for(rng.next_unit(), self.catalog.len());
        self.selected = Some(index);
        self.selecting = false;

        let movie = self.catalog.get(index)?;
        tracing::info!(index, title = %movie.title, "Picked movie");
        Some(movie)
    }

    /// Tear down: every outstanding ticket becomes a no-op
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Movie> {
        self.selected_index().and_then(|index| self.catalog.get(index))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn screen(&self) -> Screen<'_> {
        match (self.selected(), self.selecting) {
            (Some(movie), _) => Screen::Detail(movie),
            (None, true) => Screen::Selecting,
            (None, false) => Screen::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Always returns the same sample
    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    fn picker() -> Picker {
        Picker::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn test_starts_idle() {
        let picker = picker();
        assert_eq!(picker.screen(), Screen::Idle);
        assert!(!picker.is_selecting());
        assert!(picker.selected().is_none());
    }

    #[test]
    fn test_trigger_enters_selecting() {
        let mut picker = picker();
        picker.trigger().unwrap();

        assert!(picker.is_selecting());
        assert!(picker.selected().is_none());
        assert_eq!(picker.screen(), Screen::Selecting);
    }

    #[test]
    fn test_resolve_displays_one_movie() {
        let mut picker = picker();
        let pending = picker.trigger().unwrap();
        picker.resolve(pending, &mut Fixed(0.5)).unwrap();

        assert!(!picker.is_selecting());
        assert_eq!(picker.selected_index(), Some(2));
        assert!(matches!(picker.screen(), Screen::Detail(m) if m.title == "Interstellar"));
    }

    #[test]
    fn test_zero_sample_picks_first() {
        let mut picker = picker();
        let pending = picker.trigger().unwrap();
        let movie = picker.resolve(pending, &mut Fixed(0.0)).unwrap();

        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year, 2010);
        assert_eq!(movie.ratings.imdb, 8.8);
        assert_eq!(movie.ratings.kinopoisk, 8.7);
        assert_eq!(movie.ratings.rotten_tomatoes, 87);
    }

    #[test]
    fn test_near_one_sample_picks_last() {
        let mut picker = picker();
        let pending = picker.trigger().unwrap();
        let movie = picker.resolve(pending, &mut Fixed(0.999999)).unwrap();

        assert_eq!(movie.title, "Pulp Fiction");
        assert_eq!(picker.selected_index(), Some(4));
    }

    #[test]
    fn test_retrigger_clears_displayed_movie() {
        let mut picker = picker();
        let first = picker.trigger().unwrap();
        picker.resolve(first, &mut Fixed(0.0)).unwrap();
        assert!(picker.selected().is_some());

        let second = picker.trigger().unwrap();
        assert!(picker.selected().is_none());
        assert_eq!(picker.screen(), Screen::Selecting);

        picker.resolve(second, &mut Fixed(0.3)).unwrap();
        assert_eq!(picker.selected_index(), Some(1));
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut picker = picker();
        let first = picker.trigger().unwrap();
        let second = picker.trigger().unwrap();

        assert!(picker.resolve(first, &mut Fixed(0.0)).is_none());
        assert!(picker.is_selecting());
        assert!(picker.selected().is_none());

        let movie = picker.resolve(second, &mut Fixed(0.999999)).unwrap();
        assert_eq!(movie.title, "Pulp Fiction");
    }

    #[test]
    fn test_ticket_spent_after_resolve() {
        let mut picker = picker();
        let pending = picker.trigger().unwrap();
        picker.resolve(pending, &mut Fixed(0.0)).unwrap();

        assert!(picker.resolve(pending, &mut Fixed(0.999999)).is_none());
        assert_eq!(picker.selected_index(), Some(0));
        assert!(!picker.is_selecting());
    }

    #[test]
    fn test_unmount_while_pending() {
        let mut picker = picker();
        let pending = picker.trigger().unwrap();
        picker.unmount();

        assert!(picker.resolve(pending, &mut Fixed(0.0)).is_none());
        assert!(picker.selected().is_none());
        assert!(picker.is_selecting());
        assert!(!picker.is_mounted());
        assert!(picker.trigger().is_none());
    }

    #[test]
    fn test_index_always_in_bounds() {
        let mut picker = picker();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let pending = picker.trigger().unwrap();
            picker.resolve(pending, &mut rng).unwrap();
            let index = picker.selected_index().unwrap();
            assert!(index < picker.catalog().len());
        }
    }

    #[test]
    fn test_uniform_distribution() {
        let mut picker = picker();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; 5];

        for _ in 0..1000 {
            let pending = picker.trigger().unwrap();
            picker.resolve(pending, &mut rng).unwrap();
            counts[picker.selected_index().unwrap()] += 1;
        }

        // Expected 200 each; sd is about 12.6
        for count in counts {
            assert!((140..=260).contains(&count), "counts: {:?}", counts);
        }
    }
}
