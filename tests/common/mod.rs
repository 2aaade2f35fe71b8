//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use house_projects::{HttpServer, Project, ServiceConfig, Shutdown};

/// A running service bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
    handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    /// Start a server seeded with `projects`.
    pub async fn start(projects: Vec<Project>) -> Self {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "127.0.0.1:0".to_string();
        config.projects = projects;

        let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = Shutdown::new();
        let server = HttpServer::new(config);
        let server_shutdown = shutdown.subscribe();
        let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        Self {
            addr,
            client,
            shutdown,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        let result = tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("server did not stop in time")
            .expect("server task panicked");
        assert!(result.is_ok());
    }
}

#[allow(dead_code)]
pub fn seed() -> Vec<Project> {
    vec![
        Project::new("first project", 1, 1.11, "The first project"),
        Project::new("second project", 2, 2.22, "The second project"),
    ]
}
