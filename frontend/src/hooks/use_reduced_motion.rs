use web_sys::window;
use yew::prelude::*;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Read once per mount.
#[hook]
pub fn use_reduced_motion() -> bool {
    let reduced = use_state(prefers_reduced_motion);
    *reduced
}
