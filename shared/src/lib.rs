pub mod models {
    pub mod access;
    pub mod consent;
    pub mod load_state;
    pub mod organizer;
    pub mod session;
    pub mod tournament;
}

pub mod dto {
    pub mod auth;
    pub mod common;
    pub mod organizer;
    pub mod tournament;
}

pub mod error;
pub mod forms;
pub mod loose;
pub mod storage;
pub mod token;

// Re-export commonly used items
pub use error::{ErrorCategory, Result, SharedError};
pub use forms::FieldErrors;
pub use storage::{MemoryStorage, SessionStorage, SessionStore};

// Re-export models
pub use models::{
    access::{authorize, post_login_target, reconcile, AccessDecision, RouteAccess, VerifyOutcome},
    consent::ConsentChoice,
    load_state::LoadState,
    organizer::{DashboardStats, Organizer, OrganizerStatus},
    session::{Role, Session, SessionUser, UserUpdate},
    tournament::{Sport, Tournament, SPORTS},
};

// Re-export DTOs
pub use dto::{
    auth::{CreateUserRequest, LoginUserRequest, LoginUserResponse, RefreshResponse, VerifyResponse},
    common::{ApiEnvelope, ApiErrorBody, MessageResponse},
    organizer::{CreateOrganizerRequest, OrganizerPayload},
    tournament::{ApplyRequest, TournamentList},
};
