//! The segment catalog: the fixed vocabulary of audience types and funnel
//! stages, the identifier newtypes built on it, and the likelihood lookup
//! table used when intake answers become engagement scores.

mod audience;
mod engagement;
mod ids;
mod stage;

pub use audience::{AudienceType, OFFICIAL_AUDIENCES};
pub use engagement::{engagement_scale, likelihood_score, DEFAULT_LIKELIHOOD};
pub use ids::{StageId, TagId, TriggerId};
pub use stage::{FunnelStage, OFFICIAL_STAGES};
