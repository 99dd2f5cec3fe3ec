use std::cell::{Cell, RefCell};
use std::rc::Rc;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use yew::prelude::*;

use crate::error::{SiteError, SiteResult};
use crate::motion::ScrollOffset;

fn measure(target: &NodeRef, offset: ScrollOffset) -> SiteResult<f64> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let element = target.cast::<web_sys::Element>().ok_or(SiteError::Detached)?;
    let viewport = window
        .inner_height()
        .map_err(|e| SiteError::js(&e))?
        .as_f64()
        .ok_or_else(|| SiteError::Js("innerHeight is not a number".into()))?;
    let rect = element.get_bounding_client_rect();
    Ok(offset.progress(rect.top(), rect.height(), viewport))
}

/// Scroll/resize listeners for one target. Measurements are coalesced to at
/// most one per animation frame.
struct ScrollWatch {
    _listeners: [EventListener; 2],
    _frame: Rc<RefCell<Option<AnimationFrame>>>,
}

fn watch(target: NodeRef, offset: ScrollOffset, on_progress: UseStateSetter<Option<f64>>) -> SiteResult<ScrollWatch> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    on_progress.set(Some(measure(&target, offset)?));

    let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
    let scheduled = Rc::new(Cell::new(false));

    let schedule = {
        let frame = frame.clone();
        Rc::new(move || {
            if scheduled.replace(true) {
                return;
            }
            let scheduled = scheduled.clone();
            let target = target.clone();
            let on_progress = on_progress.clone();
            // Replacing drops the previous, already fired handle.
            *frame.borrow_mut() = Some(request_animation_frame(move |_| {
                scheduled.set(false);
                if let Ok(p) = measure(&target, offset) {
                    on_progress.set(Some(p));
                }
            }));
        })
    };

    let on_scroll = {
        let schedule = schedule.clone();
        EventListener::new(&window, "scroll", move |_| (*schedule)())
    };
    let on_resize = EventListener::new(&window, "resize", move |_| (*schedule)());

    Ok(ScrollWatch {
        _listeners: [on_scroll, on_resize],
        _frame: frame,
    })
}

/// Raw scroll progress of `target` through the viewport, or `None` when it
/// cannot be measured in this rendering context.
#[hook]
pub fn use_scroll_progress(target: NodeRef, offset: ScrollOffset) -> Option<f64> {
    let progress = use_state_eq(|| None::<f64>);

    {
        let setter = progress.setter();
        use_effect_with(target, move |target| {
            let watch = match watch(target.clone(), offset, setter) {
                Ok(watch) => Some(watch),
                Err(e) => {
                    gloo::console::warn!(format!("scroll progress unavailable: {}", e));
                    None
                }
            };
            move || drop(watch)
        });
    }

    *progress
}
