//! Logging setup
//!
//! `RUST_LOG` takes precedence when set; otherwise the environment picks the
//! default directives. Prod emits JSON lines, everything else pretty output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Environment;

fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "helpermatch_web=debug,tower_http=debug,reqwest=info,info",
        Environment::Staging => "helpermatch_web=debug,tower_http=info,info",
        Environment::Prod => "helpermatch_web=info,tower_http=info,warn",
    }
}

pub fn init_logging(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    if matches!(env, Environment::Prod) {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.pretty())
            .init();
    }

    tracing::info!("Logging initialized for {:?} environment", env);
}
