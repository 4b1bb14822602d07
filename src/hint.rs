use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct HintModalProps {
    pub text: AttrValue,
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Hint overlay. Clicking the backdrop or the close button dismisses it;
/// clicks inside the panel stay put.
#[function_component(HintModal)]
pub(crate) fn hint_modal(props: &HintModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_panel = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    html! {
        <div class="hint-backdrop" onclick={on_backdrop}>
            <div class="hint-panel" onclick={on_panel}>
                <p class="hint-text">{ props.text.clone() }</p>
                <button class="hint-close" onclick={on_button}>{ "Close" }</button>
            </div>
        </div>
    }
}
