use shared::constants::SUCCESS_MESSAGE;
use shared::prize_wheel::Prize;
use yew::prelude::*;

use crate::styles;

const CONFETTI_PIECES: usize = 24;

#[derive(Properties, PartialEq)]
pub struct SuccessOverlayProps {
    pub prize: Prize,
    pub confetti_colors: Vec<String>,
    pub reduced_motion: bool,
    pub on_close: Callback<()>,
}

#[derive(Debug, Clone, PartialEq)]
struct ConfettiPiece {
    left_pct: usize,
    delay_ms: usize,
    color: String,
}

fn confetti(count: usize, colors: &[String]) -> Vec<ConfettiPiece> {
    if colors.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|i| ConfettiPiece {
            left_pct: (i * 37 + 5) % 100,
            delay_ms: (i % 6) * 120,
            color: colors[i % colors.len()].clone(),
        })
        .collect()
}

#[function_component(SuccessOverlay)]
pub fn success_overlay(props: &SuccessOverlayProps) -> Html {
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let pieces = if props.reduced_motion {
        Vec::new()
    } else {
        confetti(CONFETTI_PIECES, &props.confetti_colors)
    };

    html! {
        <div class={styles::SUCCESS_CARD}>
            <div class="pointer-events-none absolute inset-0" aria-hidden="true">
                { for pieces.into_iter().map(|piece| html! {
                    <span
                        class="confetti-piece"
                        style={format!(
                            "left: {}%; background: {}; animation-delay: {}ms;",
                            piece.left_pct, piece.color, piece.delay_ms
                        )}
                    />
                }) }
            </div>
            <h2 class={styles::SUCCESS_TITLE}>{ "You're all set!" }</h2>
            <div class={styles::SUCCESS_PRIZE} style={format!("background: {};", props.prize.color)}>
                { props.prize.label.clone() }
            </div>
            <p class={styles::SUCCESS_TEXT}>{ SUCCESS_MESSAGE }</p>
            <button type="button" class={styles::BUTTON_SECONDARY} {onclick}>{ "Close" }</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confetti_cycles_colors() {
        let colors = vec!["#FFC83D".to_string(), "#F4B6C2".to_string()];
        let pieces = confetti(4, &colors);
        assert_eq!(pieces.len(), 4);
        assert_eq!(pieces[2].color, "#FFC83D");
        assert!(pieces.iter().all(|p| p.left_pct < 100));
    }

    #[test]
    fn test_no_colors_no_confetti() {
        assert!(confetti(10, &[]).is_empty());
    }
}
