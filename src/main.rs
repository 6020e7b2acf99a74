//! Hello World MCP server over stdio.

use hello_world_uv::{SayHello, ToolDispatcher, SAY_HELLO};
use pmcp::{Server, ServerCapabilities};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> pmcp::Result<()> {
    // stdout carries the protocol stream; logs must go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let server = Server::builder()
        .name("hello-world-uv")
        .version("1.0.0")
        .capabilities(ServerCapabilities::tools_only())
        .tool(SAY_HELLO, SayHello::new(ToolDispatcher::new()))
        .build()?;

    tracing::info!("hello-world-uv listening on stdio");
    server.run_stdio().await
}
