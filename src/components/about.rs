use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::config::SectionName;
use crate::hooks::{use_entrance, use_section_in_view, DEFAULT_SECTION_THRESHOLD};
use crate::motion::ABOUT_ENTRANCE;

#[function_component(About)]
pub fn about() -> Html {
    let section_ref = use_section_in_view(SectionName::About, DEFAULT_SECTION_THRESHOLD);
    let entered = use_entrance();

    html! {
        <section ref={section_ref} id={SectionName::About.anchor()} class="about" style={ABOUT_ENTRANCE.style(entered)}>
            <SectionHeading>{"About Us"}</SectionHeading>
            <p>
                {"Galah Studio is dedicated to crafting exquisite "}<b>{"animation shows and commercials"}</b>
                {". Our team of experienced filmmakers and animators brings stories to life with creativity and passion. We also specialize in producing high-quality "}
                <b>{"live-action commercials"}</b>
                {", ensuring top-notch visual storytelling in every project."}
            </p>
            <p>
                {"Our focus is on delivering visually stunning and emotionally engaging content. We believe in the power of storytelling and strive to create works that resonate with audiences. Whether it's an animation show or a live-action commercial, our goal is to captivate and inspire."}
            </p>
        </section>
    }
}
