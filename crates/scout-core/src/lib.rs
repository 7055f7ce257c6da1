//! # scout-core
//!
//! Core contracts for the wallet analysis pipeline: the `AiGateway`
//! abstraction over the external generative-language service, the shared
//! error taxonomy, and per-session search sequencing.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Analysis Pipeline                        │
//! │  ┌──────────┐  ┌───────────────┐  ┌───────────────────────┐  │
//! │  │  Search  │  │   AiGateway   │  │     ScoutError /      │  │
//! │  │ Registry │──│   (Strategy)  │──│    user messages      │  │
//! │  └──────────┘  └───────────────┘  └───────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `AiGateway` trait enables swapping between the live Gemini gateway
//! and the scripted mock without changing pipeline logic; the
//! `SearchRegistry` guarantees that committed state reflects only the most
//! recently submitted search per session.

pub mod error;
pub mod gateway;
pub mod sequence;

pub use error::{Result, ScoutError};
pub use gateway::{AiGateway, GroundedReply, GroundedRequest, MockGateway};
pub use sequence::{CommittedSearch, SearchRegistry, SearchTicket, SessionId};
