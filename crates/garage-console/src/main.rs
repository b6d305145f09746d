#![allow(non_snake_case)]

mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Clone, Debug, Default)]
    pub struct Config {
        #[serde(default)]
        pub server: ServerConfig,
        #[serde(default)]
        pub site: SiteConfig,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct SiteConfig {
        pub root: String,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: "0.0.0.0".into(),
                port: 3000,
            }
        }
    }

    impl Default for SiteConfig {
        fn default() -> Self {
            Self {
                root: "crates/garage-ui/dist".into(),
            }
        }
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn full_config_parses() {
            let parsed: Config = toml::from_str(
                r#"
                [server]
                bind = "127.0.0.1"
                port = 8088

                [site]
                root = "/srv/garage/dist"
                "#,
            )
            .unwrap();
            assert_eq!(parsed.server.bind, "127.0.0.1");
            assert_eq!(parsed.server.port, 8088);
            assert_eq!(parsed.site.root, "/srv/garage/dist");
        }

        #[test]
        fn missing_sections_fall_back_to_defaults() {
            let parsed: Config = toml::from_str("[server]\nbind = \"::\"\nport = 9000\n").unwrap();
            assert_eq!(parsed.site.root, "crates/garage-ui/dist");

            let empty: Config = toml::from_str("").unwrap();
            assert_eq!(empty.server.port, 3000);
            assert_eq!(empty.server.bind, "0.0.0.0");
        }
    }
}

#[tokio::main]
async fn main() {
    use axum::Router;
    use tower_http::services::{ServeDir, ServeFile};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "garage.toml".into())
    } else {
        "garage.toml".into()
    };

    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: bind={}:{}, site root={}",
        appConfig.server.bind,
        appConfig.server.port,
        appConfig.site.root
    );

    let siteRoot = std::path::PathBuf::from(&appConfig.site.root);
    let indexFile = siteRoot.join("index.html");

    // Client-side routing: any path that is not a real file must resolve
    // to the shell document so the router can take over in the browser.
    let site = ServeDir::new(&siteRoot).not_found_service(ServeFile::new(&indexFile));

    let app = Router::new()
        .fallback_service(site)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", appConfig.server.bind, appConfig.server.port);
    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}
