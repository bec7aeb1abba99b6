use serde::{Deserialize, Serialize};

/// Icon identifiers understood by the rendering layer.
///
/// Content records reference icons by name only; mapping a variant to an
/// actual glyph or component is the front end's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Network,
    Monitor,
    Brain,
    Database,
    Server,
    Zap,
    Cloud,
    Mail,
    Github,
    Linkedin,
}
