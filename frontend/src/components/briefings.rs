use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::reveal::Reveal;
use crate::content::{Briefing, Icon, STRATEGIES, VECTORS};
use crate::motion::{Hover, CARD_ENTRANCE, SECTION_ENTRANCE};

const VECTOR_HOVER: Hover = Hover::lift(5);
const STRATEGY_HOVER: Hover = Hover::lift(10);

#[derive(Clone, Copy, PartialEq)]
enum Kind {
    Vector,
    Strategy,
}

#[derive(Properties, PartialEq)]
struct BriefingCardProps {
    briefing: &'static Briefing,
    index: usize,
    kind: Kind,
}

#[function_component(BriefingCard)]
fn briefing_card(props: &BriefingCardProps) -> Html {
    let briefing = props.briefing;
    let (hover, card_class) = match props.kind {
        Kind::Vector => (VECTOR_HOVER, "briefing-vector"),
        Kind::Strategy => (STRATEGY_HOVER, "briefing-strategy"),
    };

    let badge = match props.kind {
        Kind::Vector => html! { <IconGlyph icon={briefing.icon} /> },
        Kind::Strategy => html! {
            <div class="strategy-badge">
                <IconGlyph icon={briefing.icon} />
            </div>
        },
    };

    html! {
        <Reveal motion={CARD_ENTRANCE} index={props.index}>
            <div class="hover-fx" style={hover.css_vars()}>
                <div class={classes!("briefing-card", card_class)}>
                    { badge }
                    <h3 class="briefing-title mono">{briefing.title}</h3>
                    <p class="briefing-text">{briefing.description}</p>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(VectorsSection)]
pub fn vectors_section() -> Html {
    html! {
        <section id="vectors" class="section">
            <div class="section-inner">
                <Reveal motion={SECTION_ENTRANCE} class={classes!("section-header")}>
                    <h2 class="section-title mono">
                        <span class="tone-white">{"ATTACK"}</span>
                        <br />
                        <span class="tone-orange">{"VECTORS"}</span>
                    </h2>
                    <p class="section-lead mono">
                        {"Common pathways through which attackers compromise systems and steal data."}
                    </p>
                </Reveal>

                <div class="grid-2">
                    { for VECTORS.iter().enumerate().map(|(index, briefing)| html! {
                        <BriefingCard key={briefing.title} briefing={briefing} index={index} kind={Kind::Vector} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(PreventionSection)]
pub fn prevention_section() -> Html {
    html! {
        <section id="prevention" class="section">
            <div class="section-inner">
                <Reveal motion={SECTION_ENTRANCE} class={classes!("section-header")}>
                    <div class="section-eyebrow mono tone-green">
                        <span class="eyebrow-rule"></span>
                        <IconGlyph icon={Icon::Check} />
                        <span>{"DEFENSE STRATEGY"}</span>
                        <IconGlyph icon={Icon::Check} />
                        <span class="eyebrow-rule"></span>
                    </div>
                    <h2 class="section-title mono">
                        <span class="tone-white">{"PREVENTION"}</span>
                        <br />
                        <span class="tone-green">{"STRATEGIES"}</span>
                    </h2>
                    <p class="section-lead mono">
                        {"Essential security measures and best practices to defend against cyber threats."}
                    </p>
                </Reveal>

                <div class="grid-3">
                    { for STRATEGIES.iter().enumerate().map(|(index, briefing)| html! {
                        <BriefingCard key={briefing.title} briefing={briefing} index={index} kind={Kind::Strategy} />
                    }) }
                </div>
            </div>
        </section>
    }
}
