//! dietdesk-engine - session gating and the notification center.
//!
//! Two collaborating pieces sit here, both pure client-side logic on
//! top of the store ([`dietdesk_core`]) and the wire ([`dietdesk_api`]):
//!
//! - [`SessionGuard`] decides whether protected operations may run, and
//!   exposes the change-signal subscription long-lived front-ends use to
//!   notice an external logout.
//! - [`NotificationCenter`] owns the panel lifecycle: fetch, filter,
//!   normalize, optimistic read dispatch, bulk acknowledgement.
//!
//! The center is deliberately fail-soft: transport and application
//! failures degrade to an empty list with a log line. The worst failure
//! mode of this subsystem is a panel that silently shows nothing.

pub mod center;
pub mod guard;
pub mod normalize;
pub mod route;

pub use center::{Dispatch, NotificationCenter, PanelState, Remote};
pub use guard::{RouteDecision, SessionGuard};
pub use normalize::normalize;
pub use route::Route;
