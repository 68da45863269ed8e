use service_templates::{profile::SERVICE_TEMPLATE_1, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run(&SERVICE_TEMPLATE_1).await
}
