//! Browser binding for outside-click dismissal
//!
//! Connects the core [`Dismissible`] to a `mousedown` listener on `document`.
//! The listener exists only while the bound region is open and is removed on
//! close and on unmount.

use std::cell::RefCell;
use std::rc::Rc;

use article_params_core::dismiss::PointerHandler;
use article_params_core::{ActiveChange, Dismissible, MissingRegion, PointerSource, Region, RegionRef};
use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Mounted DOM element acting as a dismiss region
pub struct DomRegion(web_sys::Element);

impl Region<web_sys::Node> for DomRegion {
    fn contains(&self, target: &web_sys::Node) -> bool {
        self.0.contains(Some(target))
    }
}

/// `mousedown` events on the document
pub struct DocumentPointerSource;

/// Registered document listener; removed on drop
pub struct DocumentListener {
    document: web_sys::Document,
    closure: Closure<dyn Fn(web_sys::Event)>,
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("mousedown", self.closure.as_ref().unchecked_ref());
    }
}

impl PointerSource<web_sys::Node> for DocumentPointerSource {
    type Subscription = DocumentListener;

    fn subscribe(&self, handler: PointerHandler<web_sys::Node>) -> Option<DocumentListener> {
        let document = web_sys::window()?.document()?;
        let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
            if let Some(node) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            {
                handler(&node);
            }
        });
        if let Err(e) = document
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?e, "Failed to register mousedown listener");
            return None;
        }
        Some(DocumentListener { document, closure })
    }
}

type DomDismissible = Dismissible<DomRegion, DocumentListener>;

/// Region handle for the element passed to [`mount_region`]
pub fn use_region() -> RegionRef<DomRegion> {
    use_hook(RegionRef::new)
}

/// `onmounted` handler body: bind the mounted element to `region`
pub fn mount_region(region: &RegionRef<DomRegion>, event: &MountedEvent) {
    match event.data().downcast::<web_sys::Element>() {
        Some(element) => region.mount(DomRegion(element.clone())),
        None => tracing::warn!("Mounted node is not a DOM element, outside clicks are ignored"),
    }
}

/// Close an open region when the pointer goes down outside it.
///
/// `on_change(false)` runs inside the Dioxus runtime once per outside
/// pointer-down; the latest closure passed in is the one called.
pub fn use_outside_click_close(
    is_open: bool,
    region: &RegionRef<DomRegion>,
    on_change: impl FnMut(bool) + 'static,
) {
    let latest = use_hook(|| Rc::new(RefCell::new(None::<Box<dyn FnMut(bool)>>)));
    *latest.borrow_mut() = Some(Box::new(on_change));

    // Written from the DOM listener, read by the effect below. Pointer-downs
    // landing before the effect runs collapse into one close.
    let dismissals = use_signal(|| 0u64);
    let notify = use_hook(|| {
        let notify: ActiveChange = Rc::new(move |open: bool| {
            let mut dismissals = dismissals;
            if !open {
                let _ = dismissals.try_write().map(|mut n| *n += 1);
            }
        });
        notify
    });

    let dismissible = use_hook(|| Rc::new(RefCell::new(DomDismissible::new(MissingRegion::Ignore))));

    {
        let dismissible = Rc::clone(&dismissible);
        let region = region.clone();
        use_effect(use_reactive!(|is_open| {
            dismissible
                .borrow_mut()
                .sync(&DocumentPointerSource, is_open, &region, &notify);
        }));
    }

    use_effect(move || {
        if dismissals() == 0 {
            return;
        }
        if let Some(on_change) = latest.borrow_mut().as_mut() {
            on_change(false);
        }
    });

    use_drop(move || dismissible.borrow_mut().release());
}
