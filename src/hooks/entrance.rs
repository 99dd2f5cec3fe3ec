use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Delay before switching to the rest state, long enough for the initial
/// style to be painted so the CSS transition actually runs.
const ENTER_AFTER_MS: u32 = 16;

/// `false` on the first render, `true` shortly after mount. Without a
/// browser window the rest state is used straight away.
#[hook]
pub fn use_entrance() -> bool {
    let entered = use_state_eq(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let setter = entered.setter();
        use_effect_with((), move |_| {
            if web_sys::window().is_some() {
                *pending.borrow_mut() = Some(Timeout::new(ENTER_AFTER_MS, move || setter.set(true)));
            } else {
                setter.set(true);
            }
            move || {
                pending.borrow_mut().take();
            }
        });
    }

    *entered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_state_follows_within_one_frame() {
        assert!(ENTER_AFTER_MS > 0);
        assert!(ENTER_AFTER_MS <= 17);
    }
}
