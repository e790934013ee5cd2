//! Cart store and line item types.

use crate::error::CommerceError;
use crate::ids::{LineItemId, SubscriberId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique line item identifier, stable for the item's lifetime.
    pub id: LineItemId,
    /// Product name (the de-duplication key within a cart).
    pub name: String,
    /// Unit price recorded when the item was first added. Later
    /// additions of the same name never change it.
    pub unit_price: Money,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    fn new(name: String, unit_price: Money) -> Self {
        Self {
            id: LineItemId::generate(),
            name,
            unit_price,
            quantity: 1,
        }
    }

    /// Line total (unit price times quantity).
    pub fn total(&self) -> Money {
        self.unit_price.multiply(i64::from(self.quantity))
    }
}

/// A point-in-time, read-only view of cart contents and derived totals.
///
/// Both totals are recomputed from the items on every `snapshot()`
/// call; the store keeps no separate counters that could drift.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,
    /// Sum of all quantities.
    pub total_item_count: u64,
    /// Sum of unit price times quantity over all items.
    pub total_amount: Money,
}

impl CartSnapshot {
    /// Check if the cart was empty at the time of the snapshot.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A change-notification callback.
///
/// Called with a fresh snapshot after every successful mutation.
type Subscriber = Box<dyn FnMut(&CartSnapshot)>;

/// The session-scoped shopping cart.
///
/// Owns the list of line items and notifies registered subscribers
/// after every successful mutation. Created empty at session start,
/// discarded with the session; nothing is persisted.
///
/// All operations are synchronous and run to completion on the
/// calling thread. The store is owned by a single execution context
/// and is intentionally not `Send`.
///
/// # Example
///
/// ```
/// use sweet_commerce::cart::CartStore;
/// use sweet_commerce::money::{Currency, Money};
///
/// let mut cart = CartStore::new();
/// cart.add_item("Brigadeiro", Money::from_decimal(3.5, Currency::BRL))?;
/// cart.add_item("Brigadeiro", Money::from_decimal(3.5, Currency::BRL))?;
///
/// let snapshot = cart.snapshot();
/// assert_eq!(snapshot.total_item_count, 2);
/// assert_eq!(snapshot.total_amount.display(), "R$7.00");
/// # Ok::<(), sweet_commerce::CommerceError>(())
/// ```
pub struct CartStore {
    currency: Currency,
    items: Vec<LineItem>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
}

impl CartStore {
    /// Create an empty cart priced in BRL.
    pub fn new() -> Self {
        Self::with_currency(Currency::BRL)
    }

    /// Create an empty cart priced in the given currency.
    ///
    /// Every price passed to `add_item` must be in this currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// The currency this cart is priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add one unit of a product to the cart.
    ///
    /// If an item with the same name already exists, its quantity is
    /// incremented and its recorded unit price is kept even when the
    /// supplied price differs. Otherwise a new line item with
    /// quantity 1 and a fresh id is appended.
    ///
    /// Returns the added or updated line item. Subscribers are
    /// notified after the mutation.
    ///
    /// Fails with `InvalidArgument` if `name` is blank, `unit_price`
    /// is negative, or `unit_price` is not in the cart currency; on
    /// failure nothing is mutated and nobody is notified.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
    ) -> Result<LineItem, CommerceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CommerceError::InvalidArgument(
                "product name must not be empty".to_string(),
            ));
        }
        if unit_price.is_negative() {
            return Err(CommerceError::InvalidArgument(format!(
                "unit price must not be negative, got {}",
                unit_price.display_amount()
            )));
        }
        if unit_price.currency != self.currency {
            return Err(CommerceError::InvalidArgument(format!(
                "price currency {} does not match cart currency {}",
                unit_price.currency, self.currency
            )));
        }

        let item = match self.items.iter_mut().find(|i| i.name == name) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
                existing.clone()
            }
            None => {
                let item = LineItem::new(name, unit_price);
                self.items.push(item.clone());
                item
            }
        };

        debug!(name = %item.name, quantity = item.quantity, "cart item added");
        self.notify();
        Ok(item)
    }

    /// Remove the item with the given id.
    ///
    /// Returns whether an item was actually removed. Subscribers are
    /// notified only when a removal occurred.
    pub fn remove_item(&mut self, id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            debug!(id = %id, "cart item removed");
            self.notify();
        }
        removed
    }

    /// Empty the cart (used after checkout simulation).
    ///
    /// Subscribers are notified.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cart cleared");
        self.notify();
    }

    /// Get a read-only view of the cart plus derived totals.
    ///
    /// Totals are computed fresh from the items on every call. Two
    /// snapshots taken with no intervening mutation compare equal.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total_item_count: self.items.iter().map(|i| u64::from(i.quantity)).sum(),
            total_amount: Money::sum(self.items.iter().map(LineItem::total), self.currency),
        }
    }

    /// Register a change subscriber.
    ///
    /// The callback receives a fresh snapshot after every successful
    /// mutation. Returns an id for `unsubscribe`.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&CartSnapshot) + 'static) -> SubscriberId {
        let id = SubscriberId::generate();
        self.subscribers.push((id.clone(), Box::new(subscriber)));
        id
    }

    /// Remove a previously registered subscriber.
    ///
    /// Returns whether a subscriber was actually removed.
    pub fn unsubscribe(&mut self, id: &SubscriberId) -> bool {
        let len_before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| sid != id);
        self.subscribers.len() < len_before
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by id.
    pub fn get_item(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("currency", &self.currency)
            .field("items", &self.items)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
