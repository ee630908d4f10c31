// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Observable value stores.
//!
//! A [`Store`] owns one slice of application state. Updates replace the
//! value synchronously and then call every subscriber, in subscription
//! order, before returning, so the next render pass always sees the new
//! value.

use std::fmt;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&T)>;

pub struct Store<T> {
	value: T,
	listeners: Vec<(SubscriptionId, Listener<T>)>,
	next_id: u64,
}

impl<T> Store<T> {
	pub fn new(value: T) -> Self {
		Self {
			value,
			listeners: Vec::new(),
			next_id: 0,
		}
	}

	pub fn get(&self) -> &T {
		&self.value
	}

	/// Replace the value and notify subscribers.
	pub fn set(&mut self, value: T) {
		self.value = value;
		self.notify();
	}

	/// Modify the value in place and notify subscribers.
	pub fn update(&mut self, f: impl FnOnce(&mut T)) {
		f(&mut self.value);
		self.notify();
	}

	pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
		let id = SubscriptionId(self.next_id);
		self.next_id += 1;
		self.listeners.push((id, Box::new(listener)));
		id
	}

	/// Returns false if `id` was not subscribed.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let before = self.listeners.len();
		self.listeners.retain(|(existing, _)| *existing != id);
		self.listeners.len() != before
	}

	pub fn subscriber_count(&self) -> usize {
		self.listeners.len()
	}

	fn notify(&mut self) {
		for (_, listener) in &mut self.listeners {
			listener(&self.value);
		}
	}
}

impl<T: Default> Default for Store<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Store")
			.field("value", &self.value)
			.field("subscribers", &self.listeners.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;
	use std::rc::Rc;

	#[test]
	fn test_set_notifies_in_subscription_order() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let mut store = Store::new(0);

		let a = Rc::clone(&seen);
		store.subscribe(move |v| a.borrow_mut().push(("a", *v)));
		let b = Rc::clone(&seen);
		store.subscribe(move |v| b.borrow_mut().push(("b", *v)));

		store.set(5);
		assert_eq!(*seen.borrow(), vec![("a", 5), ("b", 5)]);
	}

	#[test]
	fn test_update_in_place() {
		let mut store = Store::new(vec![1]);
		store.update(|v| v.push(2));
		assert_eq!(store.get(), &vec![1, 2]);
	}

	#[test]
	fn test_unsubscribe_stops_notifications() {
		let count = Rc::new(RefCell::new(0));
		let mut store = Store::new("x");
		let c = Rc::clone(&count);
		let id = store.subscribe(move |_| *c.borrow_mut() += 1);

		store.set("y");
		assert!(store.unsubscribe(id));
		assert!(!store.unsubscribe(id));
		store.set("z");

		assert_eq!(*count.borrow(), 1);
		assert_eq!(store.subscriber_count(), 0);
	}
}
