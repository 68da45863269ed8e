use service_templates::{profile::BACKEND_SERVICE, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run(&BACKEND_SERVICE).await
}
