use shared::constants::REQUIRED_FIELD_ERROR;
use shared::contact::{ContactField, ContactForm};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ClaimFormProps {
    pub prize: String,
    pub form: ContactForm,
    pub missing: Vec<ContactField>,
    pub error: Option<String>,
    pub submitting: bool,
    pub on_input: Callback<(ContactField, String)>,
    pub on_submit: Callback<()>,
}

fn input_id(field: ContactField) -> String {
    format!("spin-claim-{}", field.key())
}

fn error_id(field: ContactField) -> String {
    format!("spin-claim-{}-error", field.key())
}

fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        ContactField::Phone => "tel",
        _ => "text",
    }
}

fn autocomplete(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "name",
        ContactField::Email => "email",
        ContactField::Phone => "tel",
        ContactField::Note => "off",
    }
}

#[function_component(ClaimForm)]
pub fn claim_form(props: &ClaimFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let required_input = |field: ContactField| {
        let is_missing = props.missing.contains(&field);
        let oninput = {
            let on_input = props.on_input.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_input.emit((field, input.value()));
            })
        };

        html! {
            <div>
                <label for={input_id(field)} class={styles::TEXT_LABEL}>
                    { field.label() }<span aria-hidden="true">{" *"}</span>
                </label>
                <input
                    id={input_id(field)}
                    name={field.key()}
                    type={input_type(field)}
                    autocomplete={autocomplete(field)}
                    required=true
                    value={props.form.value(field).to_string()}
                    disabled={props.submitting}
                    aria-invalid={is_missing.to_string()}
                    aria-describedby={is_missing.then(|| error_id(field))}
                    class={if is_missing { styles::INPUT_ERROR } else { styles::INPUT }}
                    {oninput}
                />
                if is_missing {
                    <p id={error_id(field)} class={styles::TEXT_ERROR}>{ REQUIRED_FIELD_ERROR }</p>
                }
            </div>
        }
    };

    let on_note_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit((ContactField::Note, input.value()));
        })
    };

    html! {
        <form class={styles::FORM} onsubmit={onsubmit} novalidate=true>
            <p class="text-center text-stone-600">
                { "You won " }<strong class="text-stone-900">{ props.prize.clone() }</strong>
                { ". Tell us where to send it." }
            </p>
            { for ContactField::REQUIRED.iter().map(|field| required_input(*field)) }
            <div>
                <label for={input_id(ContactField::Note)} class={styles::TEXT_LABEL}>
                    { "Note for a stranger (optional)" }
                </label>
                <textarea
                    id={input_id(ContactField::Note)}
                    name={ContactField::Note.key()}
                    rows="2"
                    value={props.form.note.clone()}
                    disabled={props.submitting}
                    class={styles::INPUT}
                    oninput={on_note_input}
                />
            </div>
            if let Some(error) = &props.error {
                <div role="alert" class={styles::ALERT_ERROR}>{ error.clone() }</div>
            }
            <button type="submit" class={styles::SUBMIT_BUTTON} disabled={props.submitting}>
                { if props.submitting { "Submitting..." } else { "Claim my offer" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_are_distinct() {
        assert_eq!(input_id(ContactField::Phone), "spin-claim-phone");
        assert_eq!(error_id(ContactField::Phone), "spin-claim-phone-error");
        assert_eq!(input_type(ContactField::Email), "email");
    }
}
