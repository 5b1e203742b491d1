//! Ordered, fixed set of applications available for switching.
//!
//! The registry is assembled once, when the board is brought up, and
//! never changes afterwards. Slot 0 is the home application: the target
//! of idle timeouts and forced returns. Walking past the last slot wraps
//! around to home, so there is no terminator to detect.
use super::application::Application;
use crate::error::Error;
use core::ops::{Index, IndexMut};

/// Index of the home application.
pub const HOME: usize = 0;

pub struct Registry<'a, const N: usize> {
    applications: [&'a mut dyn Application; N],
}

impl<'a, const N: usize> Registry<'a, N> {
    /// Builds a registry from applications in walking order, the home
    /// application first.
    pub fn new(applications: [&'a mut dyn Application; N]) -> Result<Self, Error> {
        if N == 0 {
            return Err(Error::RegistryEmpty);
        }
        Ok(Self { applications })
    }

    pub fn len(&self) -> usize { N }

    /// A built registry always holds at least the home application.
    pub fn is_empty(&self) -> bool { false }

    pub fn contains(&self, index: usize) -> bool { index < N }

    /// Index visited after `index`, wrapping back to home.
    pub fn next_index(&self, index: usize) -> usize { (index + 1) % N }

    pub fn get(&self, index: usize) -> Option<&(dyn Application + 'a)> {
        self.applications.get(index).map(|a| &**a)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Application + 'a)> {
        self.applications.get_mut(index).map(|a| &mut **a)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ + use<'_, 'a, N> {
        self.applications.iter().map(|a| a.name())
    }
}

/// Slots are addressed directly by the manager, which only ever holds
/// indices obtained from [`Registry::contains`] checks, [`HOME`] or
/// [`Registry::next_index`].
impl<'a, const N: usize> Index<usize> for Registry<'a, N> {
    type Output = dyn Application + 'a;
    fn index(&self, index: usize) -> &Self::Output { &*self.applications[index] }
}

impl<'a, const N: usize> IndexMut<usize> for Registry<'a, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut *self.applications[index] }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::devices::doubles::{Journal, RecordingApp};

    #[test]
    fn empty_registry_is_rejected() {
        // Given
        let applications: [&mut dyn Application; 0] = [];

        // When
        let registry = Registry::new(applications);

        // Then
        assert_eq!(Some(Error::RegistryEmpty), registry.err());
    }

    #[test]
    fn walking_order_wraps_to_home() {
        // Given
        let journal = Journal::default();
        let mut home = RecordingApp::new("home", &journal);
        let mut first = RecordingApp::new("first", &journal);
        let mut second = RecordingApp::new("second", &journal);
        let registry = Registry::new([&mut home, &mut first, &mut second]).unwrap();

        // Then
        assert_eq!(3, registry.len());
        assert_eq!(1, registry.next_index(HOME));
        assert_eq!(2, registry.next_index(1));
        assert_eq!(HOME, registry.next_index(2));
        assert!(registry.contains(2));
        assert!(!registry.contains(3));
        assert!(registry.get(3).is_none());
        assert_eq!(vec!["home", "first", "second"], registry.names().collect::<Vec<_>>());
    }

    #[test]
    fn single_application_registry_walks_onto_itself() {
        // Given
        let journal = Journal::default();
        let mut home = RecordingApp::new("home", &journal);
        let registry = Registry::new([&mut home as &mut dyn Application]).unwrap();

        // Then
        assert_eq!(HOME, registry.next_index(HOME));
    }
}
