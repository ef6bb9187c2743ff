use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{styles, Route};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <section class={styles::HERO_SECTION}>
                <h1 class={styles::HERO_TITLE}>{ "Page not found" }</h1>
                <p class={styles::HERO_SUBTITLE}>{ "This gift box is empty." }</p>
                <Link<Route> to={Route::Home} classes={classes!(styles::HERO_CTA_BUTTON)}>
                    { "Back to SimplyKhushi" }
                </Link<Route>>
            </section>
        </div>
    }
}
