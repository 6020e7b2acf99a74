//! Hello World MCP server built on the `pmcp` SDK.
//!
//! The server exposes a single tool, `say_hello`, over a stdio transport.
//! The protocol runtime — JSON-RPC framing, initialization, request
//! dispatch, transport lifecycle — comes entirely from `pmcp`; this crate
//! only supplies the tool catalog and its dispatch logic.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hello_world_uv::{SayHello, ToolDispatcher, SAY_HELLO};
//! use pmcp::{Server, ServerCapabilities};
//!
//! # async fn example() -> pmcp::Result<()> {
//! let server = Server::builder()
//!     .name("hello-world-uv")
//!     .version("1.0.0")
//!     .capabilities(ServerCapabilities::tools_only())
//!     .tool(SAY_HELLO, SayHello::new(ToolDispatcher::new()))
//!     .build()?;
//!
//! server.run_stdio().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod tools;

pub use error::ToolError;
pub use tools::{SayHello, ToolDispatcher, SAY_HELLO};
