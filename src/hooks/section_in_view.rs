use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::config::SectionName;
use crate::error::{SiteError, SiteResult};
use crate::hooks::active_section::{now_ms, use_active_section, ActiveSectionAction};

/// Fraction of a section that must be visible before it takes the highlight.
pub const DEFAULT_SECTION_THRESHOLD: f64 = 0.75;

#[wasm_bindgen(inline_js = r#"
export function observeIntersection(element, threshold, callback) {
  if (typeof IntersectionObserver === "undefined") {
    throw new Error("IntersectionObserver is not available");
  }
  const observer = new IntersectionObserver((entries) => {
    for (const entry of entries) {
      callback(entry.isIntersecting, entry.intersectionRatio);
    }
  }, { threshold });
  observer.observe(element);
  return observer;
}

export function disconnectObserver(observer) {
  observer.disconnect();
}
"#)]
extern "C" {
    #[wasm_bindgen(catch, js_name = observeIntersection)]
    fn observe_intersection(
        element: &web_sys::Element,
        threshold: f64,
        callback: &Closure<dyn Fn(bool, f64)>,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = disconnectObserver)]
    fn disconnect_observer(observer: &JsValue);
}

/// The observer also reports when a section drops back below the threshold,
/// so only entries at or above it count as "in view".
pub fn reaches_threshold(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio >= threshold
}

struct Observation {
    observer: JsValue,
    _callback: Closure<dyn Fn(bool, f64)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        disconnect_observer(&self.observer);
    }
}

fn observe(node: &NodeRef, threshold: f64, on_visible: impl Fn() + 'static) -> SiteResult<Observation> {
    let element = node.cast::<web_sys::Element>().ok_or(SiteError::Detached)?;
    let callback = Closure::wrap(Box::new(move |intersecting: bool, ratio: f64| {
        if reaches_threshold(intersecting, ratio, threshold) {
            on_visible();
        }
    }) as Box<dyn Fn(bool, f64)>);
    let observer = observe_intersection(&element, threshold, &callback).map_err(|e| SiteError::js(&e))?;
    Ok(Observation { observer, _callback: callback })
}

/// Returns a ref for the section element. While mounted, the section becomes
/// the active one whenever at least `threshold` of it is in the viewport.
#[hook]
pub fn use_section_in_view(section: SectionName, threshold: f64) -> NodeRef {
    let node = use_node_ref();
    let active = use_active_section();
    let handle: Rc<RefCell<Option<Observation>>> = use_mut_ref(|| None);

    {
        let dispatcher = active.map(|ctx| ctx.dispatcher());
        use_effect_with((node.clone(), section, threshold.to_bits()), move |(node, section, _)| {
            let section = *section;
            match dispatcher {
                Some(dispatcher) => {
                    let result = observe(node, threshold, move || {
                        dispatcher.dispatch(ActiveSectionAction::Entered {
                            section,
                            at_ms: now_ms(),
                        });
                    });
                    match result {
                        Ok(observation) => *handle.borrow_mut() = Some(observation),
                        Err(e) => gloo::console::warn!(format!(
                            "{} section visibility unavailable: {}",
                            section.label(),
                            e
                        )),
                    }
                }
                None => gloo::console::warn!(format!(
                    "{} section rendered outside ActiveSectionProvider",
                    section.label()
                )),
            }

            move || {
                handle.borrow_mut().take();
            }
        });
    }

    node
}
