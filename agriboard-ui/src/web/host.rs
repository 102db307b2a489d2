//! Browser Resize Host
//!
//! Binds the resize core to the DOM: `ResizeObserver` for content-box
//! changes, a window `resize` listener for the fallback channel, and
//! `gloo-timers` for debounce timeouts (dropping a `Timeout` clears it).

use std::time::Duration;

use agriboard::resize::{
    BoxSize, MeasureBox, Registration, ResizeError, ResizeHost, ResizeResult, TimerHost,
    CONTENT_BOX_CHANNEL, WINDOW_CHANNEL,
};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ResizeObserver, ResizeObserverEntry};

/// The page's event loop as a resize host.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebHost;

/// A chart's hosting element.
#[derive(Debug, Clone)]
pub struct PanelElement(pub web_sys::Element);

impl PanelElement {
    pub fn new(element: impl Into<web_sys::Element>) -> Self {
        Self(element.into())
    }
}

impl MeasureBox for PanelElement {
    fn bounding_box(&self) -> BoxSize {
        let rect = self.0.get_bounding_client_rect();
        BoxSize::new(rect.width(), rect.height())
    }
}

impl TimerHost for WebHost {
    type Handle = Timeout;

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback)
    }
}

impl ResizeHost for WebHost {
    type Element = PanelElement;

    fn observe_content_box(
        &self,
        element: &PanelElement,
        mut on_change: Box<dyn FnMut(BoxSize)>,
    ) -> ResizeResult<Registration> {
        let callback = Closure::<dyn FnMut(js_sys::Array, ResizeObserver)>::new(
            move |entries: js_sys::Array, _observer: ResizeObserver| {
                // One element per observer, so the first entry is ours.
                let Ok(entry) = entries.get(0).dyn_into::<ResizeObserverEntry>() else {
                    return;
                };
                let rect = entry.content_rect();
                on_change(BoxSize::new(rect.width(), rect.height()));
            },
        );

        let observer =
            ResizeObserver::new(callback.as_ref().unchecked_ref()).map_err(|err| {
                ResizeError::Attach {
                    channel: CONTENT_BOX_CHANNEL,
                    reason: describe(&err),
                }
            })?;
        observer.observe(&element.0);

        Ok(Registration::new(CONTENT_BOX_CHANNEL, move || {
            observer.disconnect();
            drop(callback);
            Ok(())
        }))
    }

    fn listen_window_resize(&self, mut on_resize: Box<dyn FnMut()>) -> ResizeResult<Registration> {
        let window = web_sys::window().ok_or(ResizeError::Unsupported("window"))?;
        let listener = Closure::<dyn FnMut()>::new(move || on_resize());

        window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            .map_err(|err| ResizeError::Attach {
                channel: WINDOW_CHANNEL,
                reason: describe(&err),
            })?;

        Ok(Registration::new(WINDOW_CHANNEL, move || {
            let removed = window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
                .map_err(|err| ResizeError::Detach {
                    channel: WINDOW_CHANNEL,
                    reason: describe(&err),
                });
            drop(listener);
            removed
        }))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agriboard::resize::{observe, BridgeOptions, PixelSize};
    use gloo_timers::future::TimeoutFuture;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_div(width: u32, height: u32) -> web_sys::Element {
        let document = web_sys::window().and_then(|w| w.document()).unwrap();
        let div = document.create_element("div").unwrap();
        div.set_attribute("style", &format!("width: {}px; height: {}px;", width, height))
            .unwrap();
        document.body().unwrap().append_child(&div).unwrap();
        div
    }

    #[wasm_bindgen_test]
    fn test_panel_element_measures_bounding_box() {
        let panel = PanelElement::new(mount_div(120, 80));
        assert_eq!(panel.bounding_box().rounded(), PixelSize::new(120, 80));
        panel.0.remove();
    }

    #[wasm_bindgen_test]
    fn test_window_listener_removed_on_detach() {
        let window = web_sys::window().unwrap();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut registration = WebHost
            .listen_window_resize(Box::new(move || counter.set(counter.get() + 1)))
            .unwrap();
        assert_eq!(registration.channel(), WINDOW_CHANNEL);

        window
            .dispatch_event(&web_sys::Event::new("resize").unwrap())
            .unwrap();
        assert_eq!(calls.get(), 1);

        registration.detach().unwrap();
        assert!(!registration.is_attached());
        window
            .dispatch_event(&web_sys::Event::new("resize").unwrap())
            .unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_content_box_observer_stops_after_detach() {
        let div = mount_div(200, 100);
        let panel = PanelElement::new(div.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let mut registration = WebHost
            .observe_content_box(&panel, Box::new(move |size| sink.borrow_mut().push(size.rounded())))
            .unwrap();
        assert_eq!(registration.channel(), CONTENT_BOX_CHANNEL);

        TimeoutFuture::new(100).await;
        assert_eq!(seen.borrow().last(), Some(&PixelSize::new(200, 100)));

        registration.detach().unwrap();
        let before = seen.borrow().len();
        div.set_attribute("style", "width: 260px; height: 100px;").unwrap();
        TimeoutFuture::new(100).await;
        assert_eq!(seen.borrow().len(), before);

        div.remove();
    }

    #[wasm_bindgen_test]
    async fn test_timeout_fires_and_drop_cancels() {
        let fired = Rc::new(Cell::new(0));

        let counter = Rc::clone(&fired);
        let _kept = WebHost.set_timeout(
            Duration::from_millis(10),
            Box::new(move || counter.set(counter.get() + 1)),
        );
        let counter = Rc::clone(&fired);
        drop(WebHost.set_timeout(
            Duration::from_millis(10),
            Box::new(move || counter.set(counter.get() + 10)),
        ));

        TimeoutFuture::new(50).await;
        assert_eq!(fired.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_bridge_reports_initial_box_on_web_host() {
        let div = mount_div(300, 150);
        let panel = PanelElement::new(div.clone());
        let reports = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&reports);
        let subscription = observe(
            &WebHost,
            &panel,
            move |size| sink.borrow_mut().push(size),
            BridgeOptions::default(),
        );
        assert_eq!(subscription.channel_count(), 2);

        TimeoutFuture::new(250).await;
        assert_eq!(reports.borrow().last(), Some(&PixelSize::new(300, 150)));

        subscription.unsubscribe();
        assert!(!subscription.is_active());
        div.remove();
    }
}
