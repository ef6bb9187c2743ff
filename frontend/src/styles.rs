pub const CONTAINER: &str = "min-h-screen w-full bg-[#FFF8F0] text-stone-800";
pub const CONTAINER_LG: &str = "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8";
pub const NAV: &str = "sticky top-0 z-40 w-full bg-[#FFF8F0]/80 backdrop-blur-md border-b border-stone-200/60";
pub const NAV_INNER: &str = "max-w-6xl mx-auto h-16 px-4 sm:px-6 lg:px-8 flex items-center justify-between";
pub const NAV_BRAND: &str = "text-xl font-bold tracking-tight text-stone-900";
pub const NAV_LINK: &str = "px-3 py-2 text-sm font-medium text-stone-600 hover:text-rose-500 transition-colors duration-200";

// Landing page
pub const HERO_SECTION: &str = "flex flex-col items-center justify-center min-h-[70vh] py-16 px-4 text-center";
pub const HERO_TITLE: &str = "text-5xl sm:text-6xl font-black tracking-tight text-stone-900";
pub const HERO_SUBTITLE: &str = "mt-6 text-xl text-stone-600 max-w-2xl mx-auto";
pub const HERO_CTA_BUTTON: &str = "mt-10 px-8 py-4 text-lg font-semibold text-white bg-gradient-to-r from-rose-400 to-amber-400 rounded-full hover:from-rose-500 hover:to-amber-500 shadow-lg hover:shadow-xl transition-all duration-300";
pub const SECTION: &str = "py-16";
pub const SECTION_TITLE: &str = "text-3xl font-bold text-stone-900 text-center";
pub const SECTION_TEXT: &str = "mt-4 text-lg leading-8 text-stone-600 max-w-3xl mx-auto text-center";
pub const COLLECTION_GRID: &str = "mt-10 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6";
pub const COLLECTION_CARD: &str = "rounded-2xl p-6 shadow-md hover:shadow-lg hover:-translate-y-1 transition-all duration-300";
pub const CONTACT_LINK: &str = "text-rose-500 hover:text-rose-600 underline-offset-4 hover:underline";
pub const FOOTER: &str = "w-full border-t border-stone-200 py-8 text-center text-sm text-stone-500";

// Spin widget
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/50 backdrop-blur-sm p-4";
pub const MODAL_CARD: &str = "relative w-full max-w-md rounded-3xl bg-white p-6 sm:p-8 shadow-2xl";
pub const MODAL_ENTER: &str = "animate-pop-in";
pub const MODAL_CLOSE: &str = "absolute top-3 right-3 p-2 rounded-full text-stone-500 hover:text-stone-900 hover:bg-stone-100 transition-colors duration-200";
pub const MODAL_TITLE: &str = "text-2xl font-bold text-center text-stone-900";
pub const MODAL_SUBTITLE: &str = "mt-1 text-sm text-center text-stone-500";
pub const WHEEL_FRAME: &str = "relative mx-auto mt-6 w-64 h-64 sm:w-72 sm:h-72";
pub const PRIZE_BANNER: &str = "mt-6 rounded-xl px-4 py-3 text-center font-semibold text-stone-900 bg-amber-100 animate-fade-in";
pub const SR_ONLY: &str = "sr-only";

// Claim form
pub const FORM: &str = "mt-4 space-y-4";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-stone-800";
pub const INPUT: &str = "mt-1 block w-full rounded-lg border-0 bg-white py-2 px-3 text-stone-900 shadow-sm ring-1 ring-inset ring-stone-300 placeholder:text-stone-400 focus:ring-2 focus:ring-rose-400";
pub const INPUT_ERROR: &str = "mt-1 block w-full rounded-lg border-0 bg-white py-2 px-3 text-stone-900 shadow-sm ring-2 ring-inset ring-red-500 focus:ring-2 focus:ring-inset focus:ring-red-500";
pub const TEXT_ERROR: &str = "mt-1 text-sm text-red-500";
pub const ALERT_ERROR: &str = "rounded-lg border border-red-200 bg-red-50 p-3 text-sm text-red-700";
pub const SUBMIT_BUTTON: &str = "w-full py-3 px-4 text-sm font-semibold text-white bg-gradient-to-r from-rose-400 to-amber-400 hover:from-rose-500 hover:to-amber-500 rounded-lg transition-all duration-200 disabled:opacity-60 disabled:cursor-not-allowed focus:outline-none focus:ring-2 focus:ring-rose-400 focus:ring-offset-2";

// Success overlay
pub const SUCCESS_CARD: &str = "relative overflow-hidden text-center py-6";
pub const SUCCESS_TITLE: &str = "text-2xl font-bold text-stone-900";
pub const SUCCESS_PRIZE: &str = "mt-4 inline-block rounded-full px-5 py-2 font-semibold text-stone-900";
pub const SUCCESS_TEXT: &str = "mt-4 text-stone-600";
pub const BUTTON_SECONDARY: &str = "mt-6 inline-flex items-center justify-center px-6 py-2 rounded-lg font-medium border border-stone-300 text-stone-900 hover:bg-stone-50";

pub const WIDGET_CSS: &str = r#"
@keyframes pop-in {
    0% { opacity: 0; transform: scale(0.92); }
    100% { opacity: 1; transform: scale(1); }
}

@keyframes fade-in {
    0% { opacity: 0; }
    100% { opacity: 1; }
}

@keyframes confetti-fall {
    0% { transform: translateY(-20px) rotate(0deg); opacity: 1; }
    100% { transform: translateY(420px) rotate(540deg); opacity: 0; }
}

@keyframes pulse-subtle {
    0% { transform: scale(1); box-shadow: 0 0 0 0 rgba(251, 113, 133, 0.4); }
    70% { transform: scale(1.02); box-shadow: 0 0 0 10px rgba(251, 113, 133, 0); }
    100% { transform: scale(1); box-shadow: 0 0 0 0 rgba(251, 113, 133, 0); }
}

.animate-pop-in { animation: pop-in 250ms ease-out; }
.animate-fade-in { animation: fade-in 400ms ease-out; }
.animate-pulse-subtle { animation: pulse-subtle 2s infinite; }
.confetti-piece { position: absolute; top: 0; width: 8px; height: 14px; border-radius: 2px; animation: confetti-fall 2.4s ease-in forwards; }

@media (prefers-reduced-motion: reduce) {
    .animate-pop-in, .animate-fade-in, .animate-pulse-subtle { animation-duration: 1ms; animation-iteration-count: 1; }
    .confetti-piece { display: none; }
}
"#;
