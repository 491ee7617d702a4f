use std::rc::Rc;

use yew::prelude::*;

use crate::animation::AnimationAsset;
use crate::components::lottie_player::LottiePlayer;

#[derive(Clone, Copy, PartialEq)]
pub enum ConfirmationKind {
    Success,
    Failure,
}

#[derive(Properties, PartialEq)]
pub struct ConfirmationProps {
    pub kind: ConfirmationKind,
    #[prop_or_default]
    pub animation: Option<Rc<AnimationAsset>>,
    pub on_close: Callback<()>,
}

#[function_component(Confirmation)]
pub fn confirmation(props: &ConfirmationProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let (title, body) = match props.kind {
        ConfirmationKind::Success => ("Application Received 🎉", "Our team will contact you shortly."),
        ConfirmationKind::Failure => ("Something went wrong.", "Your details are still in the form."),
    };

    html! {
        <div class="confirmation-overlay">
            <div class={classes!("confirmation-card", (props.kind == ConfirmationKind::Failure).then(|| "failed"))}>
                {
                    match (&props.animation, props.kind) {
                        (Some(asset), ConfirmationKind::Success) => html! {
                            <LottiePlayer asset={asset.clone()} looping={false} />
                        },
                        _ => html! {},
                    }
                }
                <h3>{title}</h3>
                <p>{body}</p>
                <button class="confirmation-close" onclick={on_close}>{"Close"}</button>
            </div>
            <style>
                {r#"
                .confirmation-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.75);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    backdrop-filter: blur(8px);
                    animation: confirmationFade 0.3s ease-out;
                    z-index: 50;
                }
                .confirmation-card {
                    background: #13174B;
                    padding: 40px;
                    border-radius: 30px;
                    text-align: center;
                    width: 90%;
                    max-width: 420px;
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    color: white;
                    animation: confirmationPop 0.3s ease-out;
                }
                .confirmation-card.failed {
                    border-color: rgba(255, 94, 126, 0.5);
                }
                .confirmation-card h3 {
                    font-size: 26px;
                    font-weight: 800;
                    margin-top: 10px;
                }
                .confirmation-card p {
                    opacity: 0.6;
                    margin-top: 10px;
                }
                .confirmation-close {
                    margin-top: 20px;
                    padding: 12px 24px;
                    border-radius: 12px;
                    border: none;
                    cursor: pointer;
                    background: #4F2DFF;
                    color: white;
                    font-weight: 600;
                }
                @keyframes confirmationFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes confirmationPop {
                    from { opacity: 0; transform: scale(0.8); }
                    to { opacity: 1; transform: scale(1); }
                }
                "#}
            </style>
        </div>
    }
}
