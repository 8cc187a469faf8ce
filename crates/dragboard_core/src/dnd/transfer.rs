//! Transferred payload carried across one drag gesture.
//!
//! # Responsibility
//! - Hold the typed payloads and the allowed-effect flag a drag source
//!   attaches for the drop target to inspect.
//!
//! # Invariants
//! - Payload kinds are unique: setting a kind twice replaces the payload.
//! - Declared kinds are reported in insertion order.

/// Payload kind used for plain-text identifiers.
pub const TEXT_PLAIN: &str = "text/plain";

/// Effect a drag source declares as allowed for the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    None,
    Copy,
    Move,
    Link,
}

impl DropEffect {
    /// Stable string id matching the host platform's effect vocabulary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Link => "link",
        }
    }

    /// Parses one platform effect string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "copy" => Some(Self::Copy),
            "move" => Some(Self::Move),
            "link" => Some(Self::Link),
            _ => None,
        }
    }
}

/// Typed payload container for one drag gesture.
///
/// Stands in for the host platform's drag-event data: the source writes
/// payloads and the allowed effect at drag start, the target inspects the
/// declared kinds on drag-over and reads the payload on drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragTransfer {
    entries: Vec<(String, String)>,
    effect_allowed: Option<DropEffect>,
}

impl DragTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches one payload, replacing any existing payload of that kind.
    pub fn set_data(&mut self, kind: impl Into<String>, payload: impl Into<String>) {
        let kind = kind.into();
        let payload = payload.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == kind) {
            entry.1 = payload;
        } else {
            self.entries.push((kind, payload));
        }
    }

    /// Reads the payload attached under `kind`.
    pub fn data(&self, kind: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, payload)| payload.as_str())
    }

    /// Returns whether a payload of `kind` was declared.
    pub fn has_kind(&self, kind: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == kind)
    }

    /// Declared payload kinds in insertion order.
    pub fn kinds(&self) -> Vec<&str> {
        self.entries.iter().map(|(kind, _)| kind.as_str()).collect()
    }

    pub fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = Some(effect);
    }

    pub fn effect_allowed(&self) -> Option<DropEffect> {
        self.effect_allowed
    }
}
