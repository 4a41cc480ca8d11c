//! LiteLLM proxy API data models
//!
//! Request payloads sent to the `/team/*` endpoints and the subset of the
//! `/team/info` response the reconcilers read back.

mod team;

pub use team::{MemberAddRequest, MemberDeleteRequest, MemberUpdateRequest, NewMember, TeamInfo};
