//! Handler interception by explicit composition.
//!
//! Setup code that wants to hook a host-dispatched event (for example a
//! button's pointer-entered callback) asks a [`HandlerRegistry`] to
//! intercept it. The registry remembers the handler that was installed
//! before, and hands back a decorated handler that runs the new behavior
//! first and then chains to the original.
//!
//! The registry is an ordinary value passed to whoever needs it. There is
//! no process-wide table.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::OverlayError;

/// A host event handler.
pub type Handler<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Identifies one intercepted event on one kind of target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerKey {
    /// Kind of control the handler belongs to, e.g. `"Button"`.
    pub target: &'static str,
    /// Event name, e.g. `"mouse_entered"`.
    pub event: &'static str,
}

impl HandlerKey {
    pub const fn new(target: &'static str, event: &'static str) -> Self {
        Self { target, event }
    }
}

impl fmt::Display for HandlerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.target, self.event)
    }
}

/// Wrap `prior` so that `before` runs first, then `prior`.
pub fn decorate<E, F>(prior: Handler<E>, before: F) -> Handler<E>
where
    E: 'static,
    F: Fn(&E) + Send + Sync + 'static,
{
    Arc::new(move |event: &E| {
        before(event);
        prior(event);
    })
}

/// Remembers the original handler for every intercepted key.
pub struct HandlerRegistry<E> {
    originals: RwLock<HashMap<HandlerKey, Handler<E>>>,
}

impl<E: 'static> HandlerRegistry<E> {
    pub fn new() -> Self {
        Self { originals: RwLock::new(HashMap::new()) }
    }

    /// Record `prior` as the original handler for `key`.
    ///
    /// A key can be intercepted once; a second registration would chain the
    /// override to itself.
    pub fn register_override(
        &self,
        key: HandlerKey,
        prior: Handler<E>,
    ) -> Result<(), OverlayError> {
        let mut originals = self.originals.write();
        if originals.contains_key(&key) {
            tracing::warn!(%key, "Handler already intercepted");
            return Err(OverlayError::already_intercepted(key));
        }
        tracing::debug!(%key, "Intercepting handler");
        originals.insert(key, prior);
        Ok(())
    }

    /// Record several originals at once. Either every key is registered or,
    /// if any key is already intercepted (or listed twice), none is.
    pub fn register_overrides(
        &self,
        entries: impl IntoIterator<Item = (HandlerKey, Handler<E>)>,
    ) -> Result<(), OverlayError> {
        let entries: Vec<_> = entries.into_iter().collect();
        let mut originals = self.originals.write();
        for (i, (key, _)) in entries.iter().enumerate() {
            let listed_twice = entries[..i].iter().any(|(earlier, _)| earlier == key);
            if listed_twice || originals.contains_key(key) {
                tracing::warn!(%key, "Handler already intercepted");
                return Err(OverlayError::already_intercepted(*key));
            }
        }
        for (key, prior) in entries {
            tracing::debug!(%key, "Intercepting handler");
            originals.insert(key, prior);
        }
        Ok(())
    }

    /// The original handler for `key`, if it was intercepted.
    pub fn prior(&self, key: &HandlerKey) -> Option<Handler<E>> {
        self.originals.read().get(key).cloned()
    }

    /// Register `prior` for `key` and return `prior` decorated with `before`.
    pub fn intercept<F>(
        &self,
        key: HandlerKey,
        prior: Handler<E>,
        before: F,
    ) -> Result<Handler<E>, OverlayError>
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.register_override(key, prior.clone())?;
        Ok(decorate(prior, before))
    }

    pub fn is_intercepted(&self, key: &HandlerKey) -> bool {
        self.originals.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.originals.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.originals.read().is_empty()
    }
}

impl<E: 'static> Default for HandlerRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}
