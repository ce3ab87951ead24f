use yew::prelude::*;

use crate::cards::CardFocus;
use crate::components::{
    background::MatrixBackground,
    briefings::{PreventionSection, VectorsSection},
    closing::{CtaSection, Footer},
    hero::HeroSection,
    threat_card::ThreatsSection,
};

#[function_component(CatalogPage)]
pub fn catalog_page() -> Html {
    // Reducer so back-to-back clicks always see the latest focus.
    let focus = use_reducer(CardFocus::default);

    let on_toggle = {
        let dispatcher = focus.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(index))
    };

    html! {
        <div class="catalog-page">
            <MatrixBackground />
            <div class="cyber-grid"></div>

            <HeroSection />
            <ThreatsSection focus={*focus} on_toggle={on_toggle} />
            <VectorsSection />
            <PreventionSection />
            <CtaSection />
            <Footer />
        </div>
    }
}
