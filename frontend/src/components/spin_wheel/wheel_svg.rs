use shared::prize_wheel::PrizeCatalog;
use shared::wheel_layout::{label_transform, label_lines, wedges, LABEL_LINE_HEIGHT, VIEW_CENTER};
use yew::prelude::*;

use crate::styles;

const SPIN_EASING: &str = "cubic-bezier(0.17, 0.67, 0.12, 0.99)";

#[derive(Properties, PartialEq)]
pub struct WheelSvgProps {
    pub catalog: PrizeCatalog,
    pub rotation: f64,
    pub duration_ms: u32,
}

fn wheel_style(rotation: f64, duration_ms: u32) -> String {
    format!(
        "transform: rotate({}deg); transform-origin: {c}px {c}px; transition: transform {}ms {};",
        rotation,
        duration_ms,
        SPIN_EASING,
        c = VIEW_CENTER,
    )
}

#[function_component(WheelSvg)]
pub fn wheel_svg(props: &WheelSvgProps) -> Html {
    let layout = wedges(props.catalog.len());

    let slices = props.catalog.iter().zip(layout.iter()).enumerate().map(|(index, (prize, wedge))| {
        let lines = label_lines(&prize.label);
        // Center the block of lines on the label anchor.
        let first_offset = -(lines.len().saturating_sub(1) as f64) * LABEL_LINE_HEIGHT / 2.0;

        html! {
            <g key={index}>
                <path d={wedge.path.clone()} fill={prize.color.clone()} stroke="#FFFFFF" stroke-width="0.6" />
                <text
                    x={VIEW_CENTER.to_string()}
                    y={VIEW_CENTER.to_string()}
                    transform={label_transform(wedge)}
                    text-anchor="middle"
                    font-size="3.2"
                    font-weight="600"
                    fill="#3F3F46"
                >
                    { for lines.iter().enumerate().map(|(line_index, line)| {
                        let dy = if line_index == 0 { first_offset } else { LABEL_LINE_HEIGHT };
                        html! {
                            <tspan x={VIEW_CENTER.to_string()} dy={dy.to_string()}>{ *line }</tspan>
                        }
                    }) }
                </text>
            </g>
        }
    });

    html! {
        <div class={styles::WHEEL_FRAME}>
            <svg viewBox="0 0 100 100" class="w-full h-full drop-shadow-xl" role="img" aria-label="Prize wheel">
                <g style={wheel_style(props.rotation, props.duration_ms)}>
                    { for slices }
                </g>
                <circle cx="50" cy="50" r="6" fill="#FFFFFF" stroke="#F4B6C2" stroke-width="1.2" />
            </svg>
            <div
                class="absolute left-1/2 -top-2 -translate-x-1/2 w-0 h-0 border-l-[10px] border-r-[10px] border-t-[18px] border-l-transparent border-r-transparent border-t-rose-500"
                aria-hidden="true"
            ></div>
        </div>
    }
}
