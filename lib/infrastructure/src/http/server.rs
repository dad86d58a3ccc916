use actix_web::*;
use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct HttpServerConfig {
    pub port: u16,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

// Two endpoints and a handful of clients; a second worker only covers a
// request arriving while another waits on the database.
fn default_workers() -> usize {
    2
}

impl HttpServerConfig {
    pub async fn run_server<F>(&self, scopes: F) -> anyhow::Result<()>
    where
        F: Fn() -> Vec<Scope> + Send + Clone + 'static,
    {
        let http_server = HttpServer::new(move || {
            let mut app = App::new().wrap(tracing_actix_web::TracingLogger::default());

            for scope in scopes() {
                app = app.service(scope);
            }

            app
        })
        .workers(self.workers)
        .bind((self.bind_address.as_str(), self.port))?;

        http_server
            .run()
            .await
            .with_context(|| format!("Error starting HTTP server on {}:{}", self.bind_address, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::HttpServerConfig;

    #[test]
    fn test_bind_policy_defaults() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 3089}"#).unwrap();

        assert_eq!(config.port, 3089);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.workers, 2);
    }

    #[test]
    fn test_bind_policy_overrides() {
        let config: HttpServerConfig =
            serde_json::from_str(r#"{"port": 8080, "bind_address": "127.0.0.1", "workers": 1}"#).unwrap();

        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.workers, 1);
    }
}
