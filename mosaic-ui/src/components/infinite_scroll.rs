//! Window-scrolled container that asks for more content near the bottom
//!
//! A document scroll listener only bumps a counter; the effect re-reads the
//! page metrics and decides whether to call `next`. The effect also re-runs
//! when `data_length` or `has_more` change, which keeps pulling pages while
//! the content is still shorter than the viewport.
//!
//! While the caller reports a failed page the container neither shows the
//! loader nor asks again; clearing `failed` re-arms it.

use crate::browser;
use crate::components::helpers::LoadingSpinner;
use crate::wasm_utils::DomEventListener;
use dioxus::prelude::*;
use mosaic_core::ScrollDemand;

#[component]
pub fn InfiniteScroll(
    /// Number of items currently rendered
    data_length: usize,
    has_more: bool,
    /// Request the next page
    next: EventHandler<()>,
    #[props(default = 0.8)] threshold: f64,
    /// The last requested page failed
    #[props(default)]
    failed: bool,
    /// Shown while a page is pending
    #[props(default = rsx! { LoadingSpinner {} })]
    loader: Element,
    /// Shown once `has_more` is false
    #[props(default = VNode::empty())]
    end_message: Element,
    children: Element,
) -> Element {
    // Plain value: scroll events must not re-render the children
    let mut demand = use_hook(|| CopyValue::new(ScrollDemand::new(threshold)));
    let mut pending = use_signal(|| false);
    let mut scroll_events = use_signal(|| 0u64);
    let mut listener: Signal<Option<DomEventListener>> = use_signal(|| None);

    // Mirror props into signals so the effect below tracks them
    let mut length = use_signal(|| data_length);
    let mut more = use_signal(|| has_more);
    let mut failure = use_signal(|| failed);
    if *length.peek() != data_length {
        length.set(data_length);
    }
    if *more.peek() != has_more {
        more.set(has_more);
    }
    if *failure.peek() != failed {
        failure.set(failed);
    }

    use_hook(move || {
        listener.set(DomEventListener::on_current_document("scroll", move |_| {
            *scroll_events.write() += 1;
        }));
    });

    use_effect(move || {
        let _ = scroll_events();
        let data_length = length();
        let has_more = more();

        demand.write().observe_data_length(data_length);
        let requested = if failure() {
            demand.write().abandon();
            false
        } else {
            browser::page_scroll_metrics()
                .is_some_and(|metrics| demand.write().should_request(metrics, has_more))
        };

        let is_pending = demand.read().is_pending();
        if *pending.peek() != is_pending {
            pending.set(is_pending);
        }
        if requested {
            next.call(());
        }
    });

    rsx! {
        div { class: "w-full",
            {children}
            if pending() && has_more && !failed {
                {loader}
            }
            if !has_more {
                {end_message}
            }
        }
    }
}
