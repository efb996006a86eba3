//! Registry for managing several carousel instances keyed by [`CarouselKey`].
//!
//! Keyboard input is page-wide: a key release reaches every attached
//! carousel, which is what [`CarouselRegistry::broadcast_key`] models.

use std::collections::HashMap;
use std::fmt;

use revolve_contracts::CarouselHost;
use revolve_model::NavigationKey;
use tracing::debug;

use crate::carousel::Carousel;
use crate::input::InputEvent;

/// Strongly-typed carousel identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    Named(String),
    Custom(&'static str),
    Generated(u64),
}

impl fmt::Display for CarouselKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Custom(name) => f.write_str(name),
            Self::Generated(id) => write!(f, "carousel-{id}"),
        }
    }
}

pub struct CarouselRegistry<H: CarouselHost> {
    carousels: HashMap<CarouselKey, Carousel<H>>,
    next_generated: u64,
}

impl<H: CarouselHost> Default for CarouselRegistry<H> {
    fn default() -> Self {
        Self {
            carousels: HashMap::new(),
            next_generated: 0,
        }
    }
}

impl<H: CarouselHost> CarouselRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a carousel, returning the one it replaced. The replaced
    /// instance is detached when the caller drops it.
    pub fn insert(
        &mut self,
        key: CarouselKey,
        carousel: Carousel<H>,
    ) -> Option<Carousel<H>> {
        self.carousels.insert(key, carousel)
    }

    /// Insert under a fresh [`CarouselKey::Generated`] key.
    pub fn insert_generated(&mut self, carousel: Carousel<H>) -> CarouselKey {
        loop {
            self.next_generated += 1;
            let key = CarouselKey::Generated(self.next_generated);
            if !self.carousels.contains_key(&key) {
                self.carousels.insert(key.clone(), carousel);
                return key;
            }
        }
    }

    /// Get a mutable reference, creating the carousel with `init` when absent.
    pub fn get_or_insert_with<F>(
        &mut self,
        key: CarouselKey,
        init: F,
    ) -> &mut Carousel<H>
    where
        F: FnOnce() -> Carousel<H>,
    {
        self.carousels.entry(key).or_insert_with(init)
    }

    pub fn get(&self, key: &CarouselKey) -> Option<&Carousel<H>> {
        self.carousels.get(key)
    }

    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut Carousel<H>> {
        self.carousels.get_mut(key)
    }

    /// Remove a carousel, detaching it and handing back its host.
    pub fn remove(&mut self, key: &CarouselKey) -> Option<H> {
        let mut carousel = self.carousels.remove(key)?;
        debug!(%key, "carousel removed from registry");
        carousel.detach()
    }

    /// Deliver a key release to every attached carousel.
    pub fn broadcast_key(&mut self, key: NavigationKey) -> usize {
        let mut delivered = 0;
        for carousel in self.carousels.values_mut() {
            if carousel.is_attached() {
                carousel.handle_input(InputEvent::Key(key));
                delivered += 1;
            }
        }
        delivered
    }

    /// Return a snapshot of all keys currently in the registry.
    pub fn keys(&self) -> Vec<CarouselKey> {
        self.carousels.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }
}

impl<H: CarouselHost> fmt::Debug for CarouselRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselRegistry")
            .field("carousels", &self.carousels)
            .field("next_generated", &self.next_generated)
            .finish()
    }
}
