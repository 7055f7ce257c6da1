//! # scout-runtime
//!
//! Gateway implementations for the wallet-scout system.
//!
//! ## Gateways
//!
//! - **Gemini**: Google generative-language REST API with web-search
//!   grounding via the `googleSearch` tool
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scout_runtime::GeminiGateway;
//!
//! let gateway = GeminiGateway::from_env()?;
//! let reply = gateway.generate(&request).await?;
//! ```

pub mod gemini;

pub use gemini::{GeminiConfig, GeminiGateway};

// Re-export core types for convenience
pub use scout_core::{AiGateway, GroundedReply, GroundedRequest, Result, ScoutError};
