use shared::constants::API_BASE_URL;
use shared::widget_config::WidgetConfig;
use web_sys::window;

/// Element id of an optional `<script type="application/json">` block that
/// overrides the widget settings for a deployment.
pub const WIDGET_CONFIG_ELEMENT_ID: &str = "spin-widget-config";

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    API_BASE_URL.to_string()
}

pub fn widget_config() -> WidgetConfig {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(WIDGET_CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) => parse_widget_config(&raw).unwrap_or_else(|e| {
            log::error!("Ignoring widget config: {}", e);
            WidgetConfig::default()
        }),
        None => WidgetConfig::default(),
    }
}

fn parse_widget_config(raw: &str) -> Result<WidgetConfig, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid widget config: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_keeps_other_defaults() {
        let config = parse_widget_config(r#"{ "auto_open_delay_ms": 0 }"#).unwrap();
        assert_eq!(config.auto_open_delay_ms, 0);
        assert_eq!(config.submit_timeout_ms, 8000);
    }

    #[test]
    fn test_bad_override_reported() {
        assert!(parse_widget_config(r#"{ "catalog": [] }"#).is_err());
        assert!(parse_widget_config("not json").is_err());
    }
}
