//! Outside-click dismissal
//!
//! A [`Dismissible`] watches the environment's pointer-down stream while its
//! region is active and reports `false` through its callback when a pointer
//! goes down outside the region.
//!
//! The subscription is a scoped resource: it exists only while the binding is
//! active and is released on deactivation, rebinding, [`Dismissible::release`]
//! or drop. At most one subscription is alive per `Dismissible`.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Pointer-down handler registered with a [`PointerSource`]
pub type PointerHandler<T> = Rc<dyn Fn(&T)>;

/// Callback receiving the new active flag (always `false` from a dismissal)
pub type ActiveChange = Rc<dyn Fn(bool)>;

/// A stream of pointer-down events carrying a target of type `T`.
///
/// Dropping the returned subscription must unregister the handler. `None`
/// means the handler could not be registered.
pub trait PointerSource<T> {
    type Subscription;

    fn subscribe(&self, handler: PointerHandler<T>) -> Option<Self::Subscription>;
}

/// A rendered region that can tell whether a pointer target lies inside it.
pub trait Region<T> {
    fn contains(&self, target: &T) -> bool;
}

// ─────────────────────────────────────────────────────────────────────────────
// Region Handle
// ─────────────────────────────────────────────────────────────────────────────

/// Shared handle to a region that may not be rendered yet.
///
/// Filled when the region mounts, emptied when it unmounts. Clones share the
/// same slot; identity is the slot, not its contents.
pub struct RegionRef<R> {
    slot: Rc<RefCell<Option<R>>>,
}

impl<R> RegionRef<R> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    pub fn mount(&self, region: R) {
        *self.slot.borrow_mut() = Some(region);
    }

    pub fn unmount(&self) {
        self.slot.borrow_mut().take();
    }

    pub fn is_mounted(&self) -> bool {
        self.slot.borrow().is_some()
    }

    pub fn with<O>(&self, f: impl FnOnce(Option<&R>) -> O) -> O {
        f(self.slot.borrow().as_ref())
    }

    pub fn ptr_eq(&self, other: &RegionRef<R>) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<R> Clone for RegionRef<R> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<R> Default for RegionRef<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for RegionRef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionRef")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

/// What a pointer-down means while the region handle is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRegion {
    /// Nothing to compare against, so nothing is dismissed
    #[default]
    Ignore,
    /// Fail closed: every pointer-down counts as outside
    TreatAsOutside,
}

// ─────────────────────────────────────────────────────────────────────────────
// Dismissible
// ─────────────────────────────────────────────────────────────────────────────

struct Binding<R> {
    is_active: bool,
    region: RegionRef<R>,
    on_change: ActiveChange,
}

/// Outside-click detector bound to one region.
///
/// `S` is the subscription type of the [`PointerSource`] it is synced with.
pub struct Dismissible<R, S> {
    policy: MissingRegion,
    binding: Option<Binding<R>>,
    subscription: Option<S>,
}

impl<R, S> Dismissible<R, S> {
    pub fn new(policy: MissingRegion) -> Self {
        Self {
            policy,
            binding: None,
            subscription: None,
        }
    }

    pub fn policy(&self) -> MissingRegion {
        self.policy
    }

    /// Whether a pointer subscription is currently held
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Bring the subscription in line with the current inputs.
    ///
    /// Re-subscribes only when `is_active`, the region handle or the callback
    /// identity changed since the last call. Returns whether anything changed.
    pub fn sync<T, P>(
        &mut self,
        source: &P,
        is_active: bool,
        region: &RegionRef<R>,
        on_change: &ActiveChange,
    ) -> bool
    where
        P: PointerSource<T, Subscription = S>,
        R: Region<T> + 'static,
        T: 'static,
    {
        let unchanged = self.binding.as_ref().is_some_and(|b| {
            b.is_active == is_active
                && b.region.ptr_eq(region)
                && Rc::ptr_eq(&b.on_change, on_change)
        });
        if unchanged {
            return false;
        }

        // Old subscription goes before the new one is taken
        self.subscription = None;
        self.binding = Some(Binding {
            is_active,
            region: region.clone(),
            on_change: Rc::clone(on_change),
        });

        if is_active {
            let handler = outside_click_handler(region.clone(), Rc::clone(on_change), self.policy);
            self.subscription = source.subscribe(handler);
            if self.subscription.is_some() {
                tracing::debug!(policy = ?self.policy, "Outside-click subscription acquired");
            } else {
                tracing::warn!("Pointer source refused the outside-click handler");
            }
        }
        true
    }

    /// Drop the subscription and forget the binding
    pub fn release(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("Outside-click subscription released");
        }
        self.binding = None;
    }
}

impl<R, S> Default for Dismissible<R, S> {
    fn default() -> Self {
        Self::new(MissingRegion::default())
    }
}

fn outside_click_handler<T, R>(
    region: RegionRef<R>,
    on_change: ActiveChange,
    policy: MissingRegion,
) -> PointerHandler<T>
where
    R: Region<T> + 'static,
    T: 'static,
{
    Rc::new(move |target: &T| {
        let outside = region.with(|r| match r {
            Some(r) => !r.contains(target),
            None => policy == MissingRegion::TreatAsOutside,
        });
        if outside {
            on_change(false);
        }
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// In-process Pointer Source
// ─────────────────────────────────────────────────────────────────────────────

type HandlerList<T> = RefCell<Vec<(u64, PointerHandler<T>)>>;

/// Pointer source driven by explicit [`dispatch`](Self::dispatch) calls.
///
/// Used by hosts without a DOM and by tests.
pub struct LocalPointerSource<T> {
    handlers: Rc<HandlerList<T>>,
    next_id: Cell<u64>,
}

/// Registration in a [`LocalPointerSource`]; unregisters on drop.
pub struct LocalSubscription<T> {
    id: u64,
    handlers: Weak<HandlerList<T>>,
}

impl<T> LocalPointerSource<T> {
    pub fn new() -> Self {
        Self {
            handlers: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
        }
    }

    /// Deliver one pointer-down event to every live handler
    pub fn dispatch(&self, target: &T) {
        // Handlers may unsubscribe while running
        let snapshot: Vec<PointerHandler<T>> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in snapshot {
            handler(target);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl<T> Default for LocalPointerSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PointerSource<T> for LocalPointerSource<T> {
    type Subscription = LocalSubscription<T>;

    fn subscribe(&self, handler: PointerHandler<T>) -> Option<LocalSubscription<T>> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.handlers.borrow_mut().push((id, handler));
        Some(LocalSubscription {
            id,
            handlers: Rc::downgrade(&self.handlers),
        })
    }
}

impl<T> Drop for LocalSubscription<T> {
    fn drop(&mut self) {
        if let Some(handlers) = self.handlers.upgrade() {
            handlers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
