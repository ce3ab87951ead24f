use web_sys::MouseEvent;
use yew::prelude::*;

use crate::cards::CardFocus;
use crate::components::icon::IconGlyph;
use crate::components::reveal::Reveal;
use crate::content::{Icon, ThreatRecord, THREATS};
use crate::motion::{CARD_ENTRANCE, SECTION_ENTRANCE};

#[derive(Properties, PartialEq)]
pub struct ThreatsSectionProps {
    pub focus: CardFocus,
    pub on_toggle: Callback<usize>,
}

#[function_component(ThreatsSection)]
pub fn threats_section(props: &ThreatsSectionProps) -> Html {
    html! {
        <section id="threats" class="section">
            <div class="section-inner">
                <Reveal motion={SECTION_ENTRANCE} class={classes!("section-header")}>
                    <div class="section-eyebrow mono tone-red">
                        <span class="eyebrow-rule"></span>
                        <IconGlyph icon={Icon::Alert} />
                        <span>{"MAJOR THREATS"}</span>
                        <IconGlyph icon={Icon::Alert} />
                        <span class="eyebrow-rule"></span>
                    </div>
                    <h2 class="section-title mono">
                        <span class="tone-white">{"CYBER ATTACK"}</span>
                        <br />
                        <span class="tone-red">{"THREAT CATALOG"}</span>
                    </h2>
                    <p class="section-lead mono">
                        {"Learn about the most dangerous cyber threats targeting organizations worldwide and how they operate."}
                    </p>
                </Reveal>

                <div class="grid-2">
                    { for THREATS.iter().enumerate().map(|(index, threat)| html! {
                        <ThreatCard
                            key={threat.ordinal}
                            threat={threat}
                            index={index}
                            expanded={props.focus.is_expanded(index)}
                            on_toggle={props.on_toggle.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThreatCardProps {
    pub threat: &'static ThreatRecord,
    pub index: usize,
    pub expanded: bool,
    pub on_toggle: Callback<usize>,
}

#[function_component(ThreatCard)]
pub fn threat_card(props: &ThreatCardProps) -> Html {
    let threat = props.threat;

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <Reveal motion={CARD_ENTRANCE} index={props.index}>
            <div
                class={classes!("threat-card", props.expanded.then(|| "expanded"))}
                role="button"
                aria-expanded={props.expanded.to_string()}
                onclick={onclick}
            >
                <div class="card-dots"></div>
                <div class="card-body">
                    <div class="card-head">
                        <div>
                            <div class="card-ordinal mono">{threat.ordinal}</div>
                            <h3 class="card-title mono">{threat.title}</h3>
                        </div>
                        <div class="card-glyph">{threat.glyph}</div>
                    </div>

                    <p class="card-description">{threat.description}</p>

                    <div class="card-details" aria-hidden={(!props.expanded).to_string()}>
                        <div class="card-details-inner">
                            <div class="detail-block">
                                <p class="detail-label mono">{"HOW IT WORKS:"}</p>
                                <p class="detail-text mono">{threat.mechanism}</p>
                                <ol class="stage-list mono">
                                    { for threat.mechanism_stages().into_iter().enumerate().map(|(step, stage)| html! {
                                        <li>{format!("{}. {}", step + 1, stage)}</li>
                                    }) }
                                </ol>
                            </div>

                            <div class="detail-block">
                                <p class="detail-label mono">{"IMPACT:"}</p>
                                <p class="detail-text mono">{threat.impact}</p>
                            </div>

                            <div class="impact-tags">
                                { for threat.impact_tags().into_iter().map(|tag| html! {
                                    <span class="impact-tag mono">{tag}</span>
                                }) }
                            </div>
                        </div>
                    </div>

                    <div class="card-foot mono">
                        <span>{ if props.expanded { "Click to collapse" } else { "Click to expand" } }</span>
                        <IconGlyph icon={Icon::Arrow} class={classes!("card-arrow")} />
                    </div>
                </div>
            </div>
        </Reveal>
    }
}
