use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::SpinWheel;
use crate::config::widget_config;
use crate::styles;

struct Collection {
    title: &'static str,
    description: &'static str,
    tint: &'static str,
}

const COLLECTIONS: [Collection; 3] = [
    Collection {
        title: "In-house Wellness Products",
        description: "Journals, self-love kits and wellness goods curated by a certified counsellor.",
        tint: "bg-[#A8C3A0]/30",
    },
    Collection {
        title: "Corporate Gifting",
        description: "From simple diaries to fully curated hampers that fit a company's culture.",
        tint: "bg-[#FFC83D]/30",
    },
    Collection {
        title: "Personalised Products",
        description: "Frames, desk standees and keepsakes made for one person or a whole team.",
        tint: "bg-[#F4B6C2]/30",
    },
];

const WHATSAPP_URL: &str = "https://wa.me/919326544572";
const EMAIL: &str = "gift.simplykhushi@gmail.com";
const INSTAGRAM_URL: &str = "https://instagram.com/gift_simplykhushi";

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_memo((), |_| widget_config());
    let is_spin_wheel_open = use_state(|| false);

    {
        let is_spin_wheel_open = is_spin_wheel_open.clone();
        let delay = config.auto_open_delay_ms;
        use_effect_with((), move |_| {
            let timeout = Timeout::new(delay, move || is_spin_wheel_open.set(true));
            move || drop(timeout)
        });
    }

    let open_wheel = {
        let is_spin_wheel_open = is_spin_wheel_open.clone();
        Callback::from(move |_: MouseEvent| is_spin_wheel_open.set(true))
    };

    let close_wheel = {
        let is_spin_wheel_open = is_spin_wheel_open.clone();
        Callback::from(move |_: ()| is_spin_wheel_open.set(false))
    };

    html! {
        <div class={styles::CONTAINER}>
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <span class={styles::NAV_BRAND}>{ "SimplyKhushi" }</span>
                    <div class="flex items-center space-x-2">
                        <a href="#collections" class={styles::NAV_LINK}>{ "Collections" }</a>
                        <a href="#contact" class={styles::NAV_LINK}>{ "Contact" }</a>
                    </div>
                </div>
            </nav>

            <main class={styles::CONTAINER_LG}>
                <section class={styles::HERO_SECTION}>
                    <p class="text-lg text-stone-500">{ "Gifts that curate joy and meaningful connections" }</p>
                    <h1 class={styles::HERO_TITLE}>{ "Thoughtful gifts, delivered with love" }</h1>
                    <p class={styles::HERO_SUBTITLE}>
                        { "Wellness products, corporate gifting, hampers and personalised keepsakes for a little " }
                        <span class="font-semibold text-stone-900">{ "#Simplykhushi" }</span>
                        { " every day." }
                    </p>
                    <button type="button" class={styles::HERO_CTA_BUTTON} onclick={open_wheel}>
                        { "Spin & Win" }
                    </button>
                </section>

                <section id="collections" class={styles::SECTION}>
                    <h2 class={styles::SECTION_TITLE}>{ "Collections" }</h2>
                    <p class={styles::SECTION_TEXT}>{ "Something for every occasion and every relationship." }</p>
                    <div class={styles::COLLECTION_GRID}>
                        { for COLLECTIONS.iter().map(|collection| html! {
                            <div class={classes!(styles::COLLECTION_CARD, collection.tint)}>
                                <h3 class="text-lg font-semibold text-stone-900">{ collection.title }</h3>
                                <p class="mt-2 text-sm text-stone-600">{ collection.description }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="contact" class={styles::SECTION}>
                    <h2 class={styles::SECTION_TITLE}>{ "Get in touch" }</h2>
                    <p class={styles::SECTION_TEXT}>
                        { "WhatsApp " }
                        <a href={WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class={styles::CONTACT_LINK}>{ "9326544572" }</a>
                        { ", email " }
                        <a href={format!("mailto:{}", EMAIL)} class={styles::CONTACT_LINK}>{ EMAIL }</a>
                        { " or find us on Instagram at " }
                        <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class={styles::CONTACT_LINK}>{ "@gift_simplykhushi" }</a>
                        { "." }
                    </p>
                </section>
            </main>

            <footer class={styles::FOOTER}>{ "© SimplyKhushi" }</footer>

            <SpinWheel
                is_open={*is_spin_wheel_open}
                on_close={close_wheel}
                config={(*config).clone()}
            />
        </div>
    }
}
