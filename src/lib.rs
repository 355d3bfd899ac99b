//! `botbook` — the Telegram Bot Playbook as a single static page.
//!
//! This library holds the content tables, the pure page renderer, and the
//! thin delivery surfaces (HTTP serving and static emission) around them.

pub mod cli;
pub mod content;
pub mod error;
pub mod observability;
pub mod render;
pub mod server;
