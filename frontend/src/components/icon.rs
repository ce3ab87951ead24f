use yew::prelude::*;

use crate::content::Icon;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconProps) -> Html {
    html! {
        <i
            class={classes!("icon", format!("icon-{}", props.icon.id()), props.class.clone())}
            aria-hidden="true"
        >
            { props.icon.symbol() }
        </i>
    }
}
