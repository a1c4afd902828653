//! Cart read model definition.

use serde::Deserialize;

use crate::domain::cart::{pricing, LineItem, Totals};

/// Authoritative state of a cart, as the backend last reported it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Summary {
    /// [`LineItem`]s of the cart.
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Summary {
    /// Returns the number of [`LineItem`]s in the cart.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Derives the [`Totals`] of the cart under the provided
    /// [`pricing::Policy`].
    #[must_use]
    pub fn totals(&self, policy: pricing::Policy) -> Totals {
        Totals::compute(&self.items, policy)
    }
}
