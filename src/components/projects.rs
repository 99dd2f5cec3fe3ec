use yew::prelude::*;

use crate::components::project::{CardSide, Project};
use crate::components::section_heading::SectionHeading;
use crate::config::SectionName;
use crate::data::{ProjectRecord, PROJECTS_DATA};
use crate::hooks::use_section_in_view;

/// The section only takes the highlight once half of it is visible.
pub const PROJECTS_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct CardPlan {
    pub key: String,
    pub record: &'static ProjectRecord,
    pub side: CardSide,
}

/// One card per record, in input order.
pub fn card_plan(records: &'static [ProjectRecord]) -> Vec<CardPlan> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| CardPlan {
            key: format!("project-{}", i),
            record,
            side: CardSide::for_index(i),
        })
        .collect()
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let section_ref = use_section_in_view(SectionName::Projects, PROJECTS_THRESHOLD);

    html! {
        <section ref={section_ref} id={SectionName::Projects.anchor()} class="projects">
            <SectionHeading>{"Our Projects"}</SectionHeading>
            <div class="project-list">
                { for card_plan(&PROJECTS_DATA).into_iter().map(|card| html! {
                    <Project key={card.key} record={card.record} side={card.side} />
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_one_card_per_record_in_order() {
        let plan = card_plan(&PROJECTS_DATA);
        assert_eq!(plan.len(), 4);
        for (i, card) in plan.iter().enumerate() {
            assert_eq!(card.record.title, PROJECTS_DATA[i].title);
            assert_eq!(card.key, format!("project-{}", i));
        }
    }

    #[test]
    fn layout_alternates_starting_on_the_default_side() {
        let sides: Vec<_> = card_plan(&PROJECTS_DATA).iter().map(|c| c.side).collect();
        assert_eq!(
            sides,
            vec![CardSide::Default, CardSide::Mirrored, CardSide::Default, CardSide::Mirrored]
        );
    }

    #[test]
    fn empty_dataset_plans_nothing() {
        assert!(card_plan(&[]).is_empty());
    }
}
