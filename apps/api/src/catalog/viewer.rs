use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::models::catalog::{Concept, ConceptDetails, Difficulty, Problem, Technique};

/// Modal state of the concept detail viewer.
///
/// `Open` carries the concept's details alongside it, so an open modal always
/// refers to a concept that has details.
#[derive(Debug, Clone, Copy, Default)]
pub enum ModalState<'a> {
    #[default]
    Closed,
    Open {
        concept: &'a Concept,
        details: &'a ConceptDetails,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConceptViewer<'a> {
    state: ModalState<'a>,
}

impl<'a> ConceptViewer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `concept`, replacing whatever is currently shown.
    /// Concepts without details leave the state unchanged; returns whether
    /// the concept is now displayed.
    pub fn open(&mut self, concept: &'a Concept) -> bool {
        match &concept.details {
            Some(details) => {
                self.state = ModalState::Open { concept, details };
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    pub fn state(&self) -> ModalState<'a> {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    pub fn selected(&self) -> Option<&'a Concept> {
        match self.state {
            ModalState::Open { concept, .. } => Some(concept),
            ModalState::Closed => None,
        }
    }

    pub fn detail(&self) -> Option<DetailView<'a>> {
        match self.state {
            ModalState::Open { concept, details } => Some(DetailView::of(concept, details)),
            ModalState::Closed => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplexityView<'a> {
    pub time: &'a str,
    pub space: &'a str,
}

/// Everything the detail panel renders for one concept.
#[derive(Debug, Clone, Serialize)]
pub struct DetailView<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub difficulty: Difficulty,
    pub topics: &'a [String],
    pub overview: &'a str,
    /// Present only when both time and space complexity are known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<ComplexityView<'a>>,
    pub techniques: &'a [Technique],
    pub problems: &'a [Problem],
}

impl<'a> DetailView<'a> {
    fn of(concept: &'a Concept, details: &'a ConceptDetails) -> Self {
        let complexity = match (&details.time_complexity, &details.space_complexity) {
            (Some(time), Some(space)) => Some(ComplexityView { time, space }),
            _ => None,
        };
        Self {
            name: &concept.name,
            description: &concept.description,
            difficulty: concept.difficulty,
            topics: &concept.topics,
            overview: &details.overview,
            complexity,
            techniques: &details.key_techniques,
            problems: &details.common_problems,
        }
    }
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard access denied")]
    PermissionDenied,

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// System clipboard seam; implemented by whatever hosts the viewer.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies a code example to the clipboard. Failures are logged and returned.
pub fn copy_to_clipboard<C>(clipboard: &mut C, text: &str) -> Result<(), ClipboardError>
where
    C: Clipboard + ?Sized,
{
    clipboard.write_text(text).inspect_err(|e| {
        warn!("Clipboard copy of {} bytes failed: {e}", text.len());
    })
}
