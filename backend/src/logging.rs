use tracing::{Event, Level, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "info,sqlx=warn,tower_http=info,backend=info";

#[derive(Default)]
struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0.push_str(&format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }
}

struct CustomLayer;

impl<S: Subscriber> Layer<S> for CustomLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Query text can carry visitor contact details
        if metadata.target().starts_with("sqlx") {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        if let Some(line) = render(&timestamp, *metadata.level(), metadata.target(), &visitor.0) {
            println!("{}", line);
        }
    }
}

fn render(timestamp: &str, level: Level, target: &str, message: &str) -> Option<String> {
    if message.is_empty() {
        return None;
    }
    match level {
        Level::ERROR => Some(format!("[{}] ❌ Error: {} - {}", timestamp, target, message)),
        Level::WARN => Some(format!("[{}] ⚠️ Warning: {} - {}", timestamp, target, message)),
        Level::INFO => Some(format!("[{}] ℹ️ {} - {}", timestamp, target, message)),
        Level::DEBUG if target.starts_with("backend") => {
            Some(format!("[{}] 🔄 {} - {}", timestamp, target, message))
        }
        _ => None,
    }
}

pub fn setup() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = Registry::default().with(env_filter).with(CustomLayer);

    tracing::subscriber::set_global_default(subscriber)
}
