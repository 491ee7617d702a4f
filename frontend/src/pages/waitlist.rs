use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{use_animation_asset, AnimationAsset};
use crate::components::confirmation::{Confirmation, ConfirmationKind};
use crate::config;
use crate::effects::confetti;
use crate::waitlist::entry::{Field, Role};
use crate::waitlist::state::{SubmissionState, SubmitBlocked, WaitlistModel};
use crate::waitlist::submit::{submit, SubmissionError};
use crate::Route;

pub enum WaitlistMsg {
    Edit(Field, String),
    Submit,
    Submitted(Result<(), SubmissionError>),
    Dismiss(u32),
}

#[derive(Properties, PartialEq)]
pub struct WaitlistFormProps {
    #[prop_or_default]
    pub success_animation: Option<Rc<AnimationAsset>>,
}

pub struct WaitlistForm {
    model: WaitlistModel,
    // Dropping the handle cancels the pending dismiss.
    dismiss_timer: Option<Timeout>,
}

impl Component for WaitlistForm {
    type Message = WaitlistMsg;
    type Properties = WaitlistFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            model: WaitlistModel::default(),
            dismiss_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WaitlistMsg::Edit(field, value) => {
                self.model.edit(field, value);
                true
            }
            WaitlistMsg::Submit => match self.model.begin_submit() {
                Ok(entry) => {
                    self.dismiss_timer = None;
                    ctx.link().send_future(async move {
                        WaitlistMsg::Submitted(submit(config::get_form_endpoint(), &entry).await)
                    });
                    true
                }
                Err(SubmitBlocked::InFlight) => false,
                Err(SubmitBlocked::Missing(field)) => {
                    warn!("Waitlist submit blocked, {:?} is empty", field);
                    false
                }
            },
            WaitlistMsg::Submitted(outcome) => {
                if let Err(e) = &outcome {
                    warn!("Waitlist submission failed: {}", e);
                }
                let Some(confirmation_id) = self.model.finish(&outcome) else {
                    return false;
                };

                if self.model.state == SubmissionState::Succeeded {
                    info!("Waitlist entry submitted");
                    spawn_local(confetti::celebrate());
                }

                let link = ctx.link().clone();
                self.dismiss_timer = Some(Timeout::new(config::CONFIRMATION_DISMISS_MS, move || {
                    link.send_message(WaitlistMsg::Dismiss(confirmation_id));
                }));
                true
            }
            WaitlistMsg::Dismiss(confirmation_id) => {
                if self.model.dismiss(confirmation_id) {
                    self.dismiss_timer = None;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let entry = &self.model.entry;

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            WaitlistMsg::Submit
        });
        let on_input = |field: Field| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                WaitlistMsg::Edit(field, input.value())
            })
        };
        let on_role = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            WaitlistMsg::Edit(Field::Role, select.value())
        });
        let on_close = {
            let confirmation_id = self.model.confirmation_id();
            link.callback(move |_: ()| WaitlistMsg::Dismiss(confirmation_id))
        };

        let confirmation = match self.model.state {
            SubmissionState::Succeeded => Some(ConfirmationKind::Success),
            SubmissionState::Failed => Some(ConfirmationKind::Failure),
            _ => None,
        };

        html! {
            <div class="waitlist-page">
                <form class="waitlist-card" {onsubmit}>
                    <h2>{"Join Early Access"}</h2>
                    <p class="waitlist-subtitle">{"Be among the first healthcare leaders onboarded."}</p>

                    <div class="waitlist-fields">
                        <input
                            placeholder="Full Name"
                            required=true
                            value={entry.name.clone()}
                            oninput={on_input(Field::Name)}
                        />
                        <input
                            placeholder="Institutional Email"
                            type="email"
                            required=true
                            value={entry.email.clone()}
                            oninput={on_input(Field::Email)}
                        />
                        <select required=true onchange={on_role}>
                            <option value="" selected={entry.role.is_none()}>{"Select Professional Role"}</option>
                            {
                                for Role::ALL.iter().map(|role| html! {
                                    <option value={role.label()} selected={entry.role == Some(*role)}>
                                        {role.label()}
                                    </option>
                                })
                            }
                        </select>
                        <input
                            placeholder="Clinic / Organization"
                            value={entry.organization.clone()}
                            oninput={on_input(Field::Organization)}
                        />

                        <button type="submit" class="waitlist-submit" disabled={self.model.is_submitting()}>
                            {self.model.button_label()}
                        </button>

                        <Link<Route> to={Route::Home} classes="waitlist-back">
                            {"← Back to homepage"}
                        </Link<Route>>
                    </div>
                </form>

                {
                    if let Some(kind) = confirmation {
                        html! {
                            <Confirmation
                                {kind}
                                animation={ctx.props().success_animation.clone()}
                                {on_close}
                            />
                        }
                    } else {
                        html! {}
                    }
                }

                <style>
                    {r#"
                    .waitlist-page {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #0B0F2F;
                        padding: 20px;
                    }
                    .waitlist-card {
                        width: 100%;
                        max-width: 520px;
                        padding: 40px;
                        border-radius: 28px;
                        background: rgba(255, 255, 255, 0.06);
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 30px 80px rgba(0, 0, 0, 0.4);
                        color: white;
                        animation: waitlistRise 0.6s ease-out;
                    }
                    .waitlist-card h2 {
                        font-size: 34px;
                        font-weight: 800;
                        text-align: center;
                    }
                    .waitlist-subtitle {
                        opacity: 0.6;
                        text-align: center;
                        margin-top: 10px;
                    }
                    .waitlist-fields {
                        margin-top: 30px;
                        display: grid;
                        gap: 16px;
                    }
                    .waitlist-fields input,
                    .waitlist-fields select {
                        width: 100%;
                        padding: 16px 18px;
                        border-radius: 14px;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        background: rgba(255, 255, 255, 0.06);
                        color: white;
                        font-size: 16px;
                        outline: none;
                    }
                    .waitlist-submit {
                        padding: 18px;
                        border-radius: 16px;
                        border: none;
                        font-size: 18px;
                        font-weight: 700;
                        cursor: pointer;
                        background: linear-gradient(90deg, #4F2DFF, #6C63FF);
                        color: white;
                    }
                    .waitlist-submit:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .waitlist-back {
                        text-align: center;
                        opacity: 0.6;
                        margin-top: 10px;
                        color: white;
                    }
                    @keyframes waitlistRise {
                        from { opacity: 0; transform: translateY(40px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    "#}
                </style>
            </div>
        }
    }
}

#[function_component(Waitlist)]
pub fn waitlist() -> Html {
    let success_animation = use_animation_asset(config::SUCCESS_ANIMATION_URL);

    html! {
        <WaitlistForm {success_animation} />
    }
}
