//! Page behaviours outside the chart loader.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns its own DOM subtree and state; none of them talk to each
//! other. Pure decision logic lives at module level so it is testable
//! natively, browser wiring sits behind the `hydrate` feature.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod flash;
pub mod navbar;
pub mod theme;
