use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub has_spun: bool,
    pub onclick: Callback<MouseEvent>,
}

fn button_text(is_spinning: bool, has_spun: bool) -> &'static str {
    if is_spinning {
        "Spinning..."
    } else if has_spun {
        "Good luck!"
    } else {
        "Spin the wheel"
    }
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_disabled = props.is_spinning || props.has_spun;

    let button_class = if is_disabled {
        "bg-gradient-to-r from-stone-300 to-stone-400 opacity-80 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-rose-400 to-amber-400 hover:from-rose-500 hover:to-amber-500 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let animation_class = if is_disabled { "" } else { "animate-pulse-subtle" };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class="relative mt-6">
            <div class={classes!(
                "relative",
                "overflow-hidden",
                "rounded-full",
                "w-full",
                button_class,
                animation_class
            )}>
                <button
                    type="button"
                    onclick={props.onclick.clone()}
                    disabled={is_disabled}
                    aria-busy={props.is_spinning.to_string()}
                    class={classes!(
                        "relative",
                        "w-full",
                        "px-8",
                        "py-4",
                        "font-bold",
                        "text-lg",
                        "transition-all",
                        "duration-300",
                        "focus:outline-none",
                        "focus:ring-4",
                        "focus:ring-rose-300",
                        "bg-transparent",
                    )}
                >
                    <div class="flex items-center justify-center relative z-10">
                        <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <circle cx="12" cy="12" r="10" />
                            <path d="M12 6v6l4 2" />
                        </svg>
                        <span>{ button_text(props.is_spinning, props.has_spun) }</span>
                    </div>
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_text() {
        assert_eq!(button_text(false, false), "Spin the wheel");
        assert_eq!(button_text(true, true), "Spinning...");
        assert_eq!(button_text(false, true), "Good luck!");
    }
}
