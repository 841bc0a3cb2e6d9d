use stylist::yew::styled_component;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    #[prop_or_default]
    pub centered: bool,
    pub children: Children,
}

/// Dimmed full-screen overlay with a white card in the middle.
#[styled_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let overlay = css!(
        r#"
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.5);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 50;
        padding: 1rem;
    "#
    );
    let card = css!(
        r#"
        background: #fff;
        padding: 2rem;
        border-radius: 0.5rem;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
        width: 100%;
        max-width: 42rem;
        font-family: sans-serif;
    "#
    );

    html! {
        <div class={overlay}>
            <div class={classes!(card, props.centered.then(|| "modal-centered"))} role="dialog" aria-modal="true">
                { for props.children.iter() }
            </div>
        </div>
    }
}
