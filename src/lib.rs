//! Hostwatch: terminal console for single-host telemetry.
//!
//! An external client tool that polls a host-monitoring agent over plain
//! HTTP GET and reconciles its independently-shaped, independently-failing
//! feeds (CPU, GPU, RAM/disk, LXC containers, live stats) into one tabbed,
//! single-active-section view.
//!
//! ## Architecture
//!
//! ```text
//! key press ──▶ Section ──▶ App (orchestrator)
//!                            │  sequential: cpu → gpu → ram/disk → lxc → live
//!                            ▼
//!                       HostApi (HTTP GET /api/<feed>)
//!                            │
//!                       FeedValue::classify   (Error | NotApplicable |
//!                            │                 Structured | Empty | Missing)
//!                            ▼
//!                        Surfaces ──projection──▶ ratatui frame
//! ```
//!
//! Every failure is folded into display text before it reaches a surface;
//! one feed's failure never prevents another feed's load.

pub mod api;
pub mod domain;
pub mod ui;

pub use domain::{App, Feed, FeedValue, Section, Surfaces};
