//! Voting service adapter
//!
//! Implements [`VotingGateway`](anipoll_application::VotingGateway) over
//! HTTP and JSON.

mod client;
mod wire;

pub use client::HttpVotingGateway;
