//! Widget registry: maps widget-kind names to renderable implementations.
//!
//! Implementations may be registered eagerly or behind a lazy loader.
//! Resolution is an explicit state machine per name: `Loading → Ready |
//! Error`, terminal and never re-attempted within the process lifetime
//! (names are a closed, versionless set per deployment). Concurrent
//! resolutions of the same name share one in-flight load; callers observe
//! transitions through [`WidgetRegistry::subscribe`] rather than blocking.
//!
//! Lazy loads run as `spawn_local` tasks, so resolving a lazily-registered
//! name requires a current-thread tokio runtime with a `LocalSet` — the
//! same cooperative, single-threaded model the rest of the core assumes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};

use slotmap::{new_key_type, SlotMap};

use crate::widget::Component;

new_key_type! {
    /// Identifies one watcher of a resolution.
    pub struct WatcherKey;
}

// ---------------------------------------------------------------------------
// Errors and loader types
// ---------------------------------------------------------------------------

/// A widget implementation failed to load.
#[derive(Debug, Clone, thiserror::Error)]
#[error("widget {name:?} failed to load: {message}")]
pub struct LoadError {
    pub name: String,
    pub message: String,
}

impl LoadError {
    /// Create a load error for the given widget-kind name.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// The future produced by a lazy loader.
pub type LoadFuture = Pin<Box<dyn Future<Output = Result<Component, LoadError>>>>;

type Loader = Box<dyn FnOnce() -> LoadFuture>;
type Watcher = Rc<dyn Fn(&Resolution)>;
type Reporter = Rc<dyn Fn(&LoadError)>;

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// The lifecycle state of mapping one widget-kind name to its
/// implementation.
///
/// `Ready` and `Error` are terminal; while `Loading`, callers render
/// nothing (no placeholder, no stale content).
#[derive(Clone)]
pub enum Resolution {
    Loading,
    Ready(Component),
    Error,
}

impl Resolution {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Whether this state will never change again.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// The resolved component, when ready.
    pub fn component(&self) -> Option<&Component> {
        match self {
            Self::Ready(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading"),
            Self::Ready(c) => write!(f, "Ready({})", c.widget_type()),
            Self::Error => write!(f, "Error"),
        }
    }
}

// ---------------------------------------------------------------------------
// WidgetRegistry
// ---------------------------------------------------------------------------

struct Entry {
    loader: Option<Loader>,
    /// None until the first resolve consumes the loader.
    state: Option<Resolution>,
    watchers: SlotMap<WatcherKey, Watcher>,
}

struct Inner {
    entries: HashMap<String, Entry>,
    reporter: Option<Reporter>,
}

/// The process-wide widget-kind → implementation mapping.
///
/// Cheap to clone: clones share the same mapping. Writes are append-only
/// and idempotent — the first registration of a name wins, and terminal
/// resolution states never change.
#[derive(Clone)]
pub struct WidgetRegistry {
    inner: Rc<RefCell<Inner>>,
}

impl WidgetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                entries: HashMap::new(),
                reporter: None,
            })),
        }
    }

    /// Register a lazy loader for a widget-kind name.
    ///
    /// The loader runs at most once, on the first [`resolve`](Self::resolve)
    /// of the name. Registering an already-registered name is a no-op.
    pub fn register(
        &self,
        name: impl Into<String>,
        loader: impl FnOnce() -> LoadFuture + 'static,
    ) {
        let mut inner = self.inner.borrow_mut();
        inner.entries.entry(name.into()).or_insert_with(|| Entry {
            loader: Some(Box::new(loader)),
            state: None,
            watchers: SlotMap::with_key(),
        });
    }

    /// Register an eagerly-available component (immediately `Ready`).
    pub fn register_component(&self, name: impl Into<String>, component: Component) {
        let mut inner = self.inner.borrow_mut();
        inner.entries.entry(name.into()).or_insert_with(|| Entry {
            loader: None,
            state: Some(Resolution::Ready(component)),
            watchers: SlotMap::with_key(),
        });
    }

    /// Whether the name has been registered at all.
    pub fn is_registered(&self, name: &str) -> bool {
        self.inner.borrow().entries.contains_key(name)
    }

    /// Resolve a widget-kind name without blocking.
    ///
    /// Returns `None` for unregistered names. The first resolve of a lazy
    /// entry transitions it to `Loading` and starts the load; concurrent
    /// resolves of the same name share that single in-flight load, and once
    /// a terminal state is reached it is returned synchronously forever.
    pub fn resolve(&self, name: &str) -> Option<Resolution> {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            let entry = inner.entries.get_mut(name)?;
            if let Some(state) = &entry.state {
                return Some(state.clone());
            }
            let loader = entry.loader.take();
            entry.state = Some(Resolution::Loading);
            loader
        };
        match pending {
            Some(loader) => self.start_load(name.to_owned(), loader),
            // Registered with neither loader nor state: treat as a failed
            // acquisition rather than waiting forever.
            None => self.finish(name, Err(LoadError::new(name, "no loader"))),
        }
        Some(Resolution::Loading)
    }

    /// Watch a name for its terminal transition.
    ///
    /// Returns `None` for unregistered names. The callback fires once, when
    /// the resolution reaches `Ready` or `Error`; if the state is already
    /// terminal it does not fire (the caller has the state from
    /// [`resolve`](Self::resolve)). Dropping the returned [`Watch`] guard
    /// removes the callback without cancelling the shared load.
    pub fn subscribe(
        &self,
        name: &str,
        callback: impl Fn(&Resolution) + 'static,
    ) -> Option<Watch> {
        let mut inner = self.inner.borrow_mut();
        let entry = inner.entries.get_mut(name)?;
        let key = entry.watchers.insert(Rc::new(callback));
        Some(Watch {
            registry: Rc::downgrade(&self.inner),
            name: name.to_owned(),
            key,
        })
    }

    /// Install the observability hook invoked with every load failure.
    pub fn set_reporter(&self, reporter: impl Fn(&LoadError) + 'static) {
        self.inner.borrow_mut().reporter = Some(Rc::new(reporter));
    }

    fn start_load(&self, name: String, loader: Loader) {
        let registry = self.clone();
        let future = loader();
        tokio::task::spawn_local(async move {
            let result = future.await;
            registry.finish(&name, result);
        });
    }

    fn finish(&self, name: &str, result: Result<Component, LoadError>) {
        let (resolution, watchers, reporter, error) = {
            let mut inner = self.inner.borrow_mut();
            let Some(entry) = inner.entries.get_mut(name) else {
                return;
            };
            // A terminal state never transitions again.
            if entry.state.as_ref().is_some_and(Resolution::is_terminal) {
                return;
            }
            let (resolution, error) = match result {
                Ok(component) => (Resolution::Ready(component), None),
                Err(err) => (Resolution::Error, Some(err)),
            };
            entry.state = Some(resolution.clone());
            let watchers: Vec<Watcher> = entry.watchers.drain().map(|(_, w)| w).collect();
            (resolution, watchers, inner.reporter.clone(), error)
        };
        // Callbacks run after the borrow is released so they may re-enter
        // the registry.
        if let (Some(reporter), Some(error)) = (reporter, error.as_ref()) {
            reporter(error);
        }
        for watcher in watchers {
            watcher(&resolution);
        }
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("WidgetRegistry")
            .field("entries", &inner.entries.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Watch
// ---------------------------------------------------------------------------

/// RAII guard for a resolution watcher; dropping it removes the callback.
///
/// The shared load itself keeps running — other consumers still get their
/// notification — but a dropped watcher observes no side effects after
/// teardown.
#[derive(Debug)]
pub struct Watch {
    registry: Weak<RefCell<Inner>>,
    name: String,
    key: WatcherKey,
}

impl Drop for Watch {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            if let Some(entry) = inner.borrow_mut().entries.get_mut(&self.name) {
                entry.watchers.remove(self.key);
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
