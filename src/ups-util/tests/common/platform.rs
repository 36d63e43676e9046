use assert_cmd::assert::Assert;
use assert_cmd::Command;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SPACE_GUID: &str = "space-1";
pub const TOKEN: &str = "bearer integration";

/// A fake platform API plus an isolated CF home directory.
pub struct TestPlatform {
    pub server: MockServer,
    home: TempDir,
}

impl TestPlatform {
    pub async fn launch() -> anyhow::Result<Self> {
        let server = MockServer::start().await;
        let home = TempDir::new()?;
        Ok(Self { server, home })
    }

    /// Registers applications for both the space listing and lookup by name.
    pub async fn with_apps(&self, apps: &[(&str, &str, Value)]) {
        for (guid, name, env) in apps {
            Mock::given(method("GET"))
                .and(path(format!("/v2/spaces/{SPACE_GUID}/apps")))
                .and(query_param("q", format!("name:{name}")))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "resources": [resource(guid, name)]
                })))
                .mount(&self.server)
                .await;

            Mock::given(method("GET"))
                .and(path(format!("/v2/apps/{guid}/env")))
                .and(header("authorization", TOKEN))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!({ "environment_json": env })),
                )
                .mount(&self.server)
                .await;
        }

        let resources: Vec<Value> = apps
            .iter()
            .map(|(guid, name, _)| resource(guid, name))
            .collect();
        Mock::given(method("GET"))
            .and(path(format!("/v2/spaces/{SPACE_GUID}/apps")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "next_url": null,
                "resources": resources
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn run(&self, args: &[&str]) -> Assert {
        let mut cmd = Command::cargo_bin("ups-util").unwrap();
        cmd.env_clear();
        cmd.env("CF_HOME", self.home.path());
        cmd.env("UPS_UTIL_API_ENDPOINT", self.server.uri());
        cmd.env("UPS_UTIL_ACCESS_TOKEN", TOKEN);
        cmd.env("UPS_UTIL_SPACE_GUID", SPACE_GUID);
        cmd.env("RUST_BACKTRACE", "1");
        cmd.args(args);
        cmd.timeout(std::time::Duration::from_secs(30));

        tokio::task::spawn_blocking(move || cmd.assert())
            .await
            .unwrap()
    }
}

fn resource(guid: &str, name: &str) -> Value {
    json!({ "metadata": { "guid": guid }, "entity": { "name": name } })
}
