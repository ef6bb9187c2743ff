mod claim_form;
mod spin_button;
mod success_overlay;
mod wheel_svg;

use gloo_events::EventListener;
use shared::contact::ContactField;
use shared::spin_session::Phase;
use shared::widget_config::WidgetConfig;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::hooks::{use_reduced_motion, use_spin_session};
use crate::styles;
use claim_form::ClaimForm;
use spin_button::SpinButton;
use success_overlay::SuccessOverlay;
use wheel_svg::WheelSvg;

#[derive(Properties, PartialEq)]
pub struct SpinWheelProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub config: WidgetConfig,
}

#[function_component(SpinWheel)]
pub fn spin_wheel(props: &SpinWheelProps) -> Html {
    let controller = use_spin_session(props.config.clone());
    let reduced_motion = use_reduced_motion();

    // Widget animations
    use_effect_with((), move |_| {
        let style = window()
            .and_then(|w| w.document())
            .and_then(|document| {
                let head = document.head()?;
                let style = document.create_element("style").ok()?;
                style.set_text_content(Some(styles::WIDGET_CSS));
                head.append_child(&style).ok()?;
                Some(style)
            });

        move || {
            if let Some(style) = style {
                style.remove();
            }
        }
    });

    {
        let controller = controller.clone();
        use_effect_with(props.is_open, move |is_open| {
            if *is_open {
                controller.open();
            } else {
                controller.close();
            }
            || ()
        });
    }

    let close = {
        let controller = controller.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            controller.close();
            on_close.emit(());
        })
    };

    {
        let controller = controller.clone();
        let close = close.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                EventListener::new(&w, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let phase = controller.session().phase();
                    match event.key().as_str() {
                        "Enter" if phase == Phase::Idle => {
                            event.prevent_default();
                            controller.spin();
                        }
                        "Escape" if phase != Phase::Closed => close.emit(()),
                        _ => {}
                    }
                })
            });

            move || drop(listener)
        });
    }

    let session = controller.session();
    let phase = session.phase();
    let config = session.config().clone();
    let announcement = session.announcement().unwrap_or_default().to_string();

    // Stays mounted while closed so a pending announcement is still read out.
    let live_region = html! {
        <div role="status" aria-live="polite" aria-atomic="true" class={styles::SR_ONLY}>
            { announcement }
        </div>
    };

    if phase == Phase::Closed {
        return live_region;
    }

    let outcome = session.outcome().cloned();
    let form = session.form().clone();
    let missing = session.missing_fields().to_vec();
    let last_error = session.last_error().map(str::to_string);
    let submitting = session.is_submitting();
    let spin_angle = session.spin_angle();
    let has_spun = session.has_spun();
    drop(session);

    let on_spin = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.spin())
    };

    let on_input = {
        let controller = controller.clone();
        Callback::from(move |(field, value): (ContactField, String)| {
            controller.update_field(field, value)
        })
    };

    let on_submit = {
        let controller = controller.clone();
        Callback::from(move |_: ()| controller.submit())
    };

    let on_acknowledge = {
        let controller = controller.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            controller.acknowledge();
            on_close.emit(());
        })
    };

    let on_backdrop_click = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_close_click = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let body = match (phase, outcome) {
        (Phase::Submitted, Some(outcome)) => html! {
            <SuccessOverlay
                prize={outcome.prize}
                confetti_colors={config.catalog.iter().map(|prize| prize.color.clone()).collect::<Vec<_>>()}
                {reduced_motion}
                on_close={on_acknowledge}
            />
        },
        (phase, Some(outcome)) if phase.shows_form() => html! {
            <ClaimForm
                prize={outcome.prize.label}
                {form}
                {missing}
                error={last_error}
                {submitting}
                {on_input}
                {on_submit}
            />
        },
        (phase, outcome) => html! {
            <>
                <WheelSvg
                    catalog={config.catalog.clone()}
                    rotation={spin_angle}
                    duration_ms={config.spin_duration_ms}
                />
                if let (Phase::Revealed, Some(outcome)) = (phase, &outcome) {
                    <div class={styles::PRIZE_BANNER}>
                        { format!("You won: {}", outcome.prize.label) }
                    </div>
                } else {
                    <SpinButton
                        is_spinning={phase == Phase::Spinning}
                        {has_spun}
                        onclick={on_spin}
                    />
                }
            </>
        },
    };

    html! {
        <>
            { live_region }
            <div class={styles::MODAL_BACKDROP} onclick={on_backdrop_click}>
                <div
                    class={classes!(styles::MODAL_CARD, (!reduced_motion).then_some(styles::MODAL_ENTER))}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="spin-wheel-title"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <button
                        type="button"
                        class={styles::MODAL_CLOSE}
                        aria-label="Close"
                        onclick={on_close_click}
                    >
                        <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                            <path d="M6 6l12 12M18 6L6 18" stroke-linecap="round" />
                        </svg>
                    </button>
                    <h2 id="spin-wheel-title" class={styles::MODAL_TITLE}>{ "Spin & Win" }</h2>
                    <p class={styles::MODAL_SUBTITLE}>{ "One spin per visit. Every wedge is a gift." }</p>
                    { body }
                </div>
            </div>
        </>
    }
}
