use std::rc::Rc;
use yew::prelude::*;

use crate::config::SectionName;

/// How long a nav click owns the highlight before scroll visibility may take
/// it back.
pub const CLICK_SUPPRESS_MS: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSection {
    pub current: SectionName,
    pub last_click_ms: Option<f64>,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self {
            current: SectionName::Home,
            last_click_ms: None,
        }
    }
}

pub enum ActiveSectionAction {
    /// A section crossed its visibility threshold.
    Entered { section: SectionName, at_ms: f64 },
    /// The user picked a section from the navigation.
    Clicked { section: SectionName, at_ms: f64 },
}

impl Reducible for ActiveSection {
    type Action = ActiveSectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ActiveSectionAction::Entered { section, at_ms } => {
                let suppressed = self
                    .last_click_ms
                    .map_or(false, |clicked| at_ms - clicked <= CLICK_SUPPRESS_MS);
                if suppressed || self.current == section {
                    self
                } else {
                    Rc::new(ActiveSection {
                        current: section,
                        last_click_ms: self.last_click_ms,
                    })
                }
            }
            ActiveSectionAction::Clicked { section, at_ms } => Rc::new(ActiveSection {
                current: section,
                last_click_ms: Some(at_ms),
            }),
        }
    }
}

pub type ActiveSectionContext = UseReducerHandle<ActiveSection>;

#[derive(Properties, PartialEq)]
pub struct ActiveSectionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ActiveSectionProvider)]
pub fn active_section_provider(props: &ActiveSectionProviderProps) -> Html {
    let state = use_reducer_eq(ActiveSection::default);

    html! {
        <ContextProvider<ActiveSectionContext> context={state}>
            { for props.children.iter() }
        </ContextProvider<ActiveSectionContext>>
    }
}

#[hook]
pub fn use_active_section() -> Option<ActiveSectionContext> {
    use_context::<ActiveSectionContext>()
}

/// Milliseconds on the page clock used for click suppression.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ActiveSection, action: ActiveSectionAction) -> ActiveSection {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn starts_on_home() {
        assert_eq!(ActiveSection::default().current, SectionName::Home);
    }

    #[test]
    fn entering_a_section_activates_it() {
        let next = reduce(
            ActiveSection::default(),
            ActiveSectionAction::Entered { section: SectionName::Projects, at_ms: 10.0 },
        );
        assert_eq!(next.current, SectionName::Projects);
        assert_eq!(next.last_click_ms, None);
    }

    #[test]
    fn click_wins_over_visibility_for_a_second() {
        let clicked = reduce(
            ActiveSection::default(),
            ActiveSectionAction::Clicked { section: SectionName::Projects, at_ms: 5_000.0 },
        );
        assert_eq!(clicked.current, SectionName::Projects);

        let passing_through = reduce(
            clicked.clone(),
            ActiveSectionAction::Entered { section: SectionName::About, at_ms: 5_600.0 },
        );
        assert_eq!(passing_through.current, SectionName::Projects);

        let at_boundary = reduce(
            clicked.clone(),
            ActiveSectionAction::Entered { section: SectionName::About, at_ms: 6_000.0 },
        );
        assert_eq!(at_boundary.current, SectionName::Projects);

        let later = reduce(
            clicked,
            ActiveSectionAction::Entered { section: SectionName::About, at_ms: 6_000.5 },
        );
        assert_eq!(later.current, SectionName::About);
        assert_eq!(later.last_click_ms, Some(5_000.0));
    }

    #[test]
    fn re_entering_the_current_section_keeps_the_same_state() {
        let state = Rc::new(ActiveSection::default());
        let next = state.clone().reduce(ActiveSectionAction::Entered {
            section: SectionName::Home,
            at_ms: 1.0,
        });
        assert!(Rc::ptr_eq(&state, &next));
    }
}
