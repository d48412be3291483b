//! Deletion confirmation gate
//!
//! Every destructive action records a pending target here and opens the
//! shared confirm dialog. The dialog's confirm button is the only path
//! that hands the target back for dispatch; cancel or dismiss clears the
//! pending request without touching any store.

/// What a confirmed delete should remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// A stored campaign document, by bucket-relative path.
    Document { path: String },
    /// A palette color, by numeric id.
    PaletteColor { id: u32 },
    Logo { id: String },
    Photo { id: String },
    Font { id: String },
    Issue { id: String },
    Opponent { id: String },
    Draft { id: String },
    Project { name: String },
}

impl DeleteTarget {
    /// Dialog title. Brand kit sections share one; the rest name what
    /// is being deleted.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Document { .. } => "Delete File?",
            Self::PaletteColor { .. }
            | Self::Logo { .. }
            | Self::Photo { .. }
            | Self::Font { .. } => "Confirm Deletion",
            Self::Issue { .. } => "Delete Issue?",
            Self::Opponent { .. } => "Delete Opponent?",
            Self::Draft { .. } => "Delete Draft?",
            Self::Project { .. } => "Delete Project?",
        }
    }

    /// Noun for the brand kit dialog body; targets outside the brand kit
    /// quote their display label instead.
    fn noun(&self) -> Option<&'static str> {
        match self {
            Self::PaletteColor { .. } => Some("color"),
            Self::Logo { .. } => Some("logo"),
            Self::Photo { .. } => Some("photo"),
            Self::Font { .. } => Some("font style"),
            _ => None,
        }
    }
}

/// One pending deletion awaiting the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    /// Display name quoted in the dialog body.
    pub label: String,
    pub target: DeleteTarget,
}

impl PendingDelete {
    /// Dialog body text.
    pub fn body(&self) -> String {
        match self.target.noun() {
            Some(noun) => {
                format!("Are you sure you want to delete this {noun}? This action cannot be undone.")
            }
            None => format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                self.label
            ),
        }
    }
}

/// The gate itself; held in an `RwSignal` so the dialog is reactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteGate {
    pending: Option<PendingDelete>,
}

impl DeleteGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pending delete and open the dialog. A later request
    /// replaces an earlier one.
    pub fn request(&mut self, label: impl Into<String>, target: DeleteTarget) {
        self.pending = Some(PendingDelete {
            label: label.into(),
            target,
        });
    }

    /// Dismiss without deleting.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the pending target for dispatch. Only the dialog's confirm
    /// button calls this.
    pub fn confirm(&mut self) -> Option<DeleteTarget> {
        self.pending.take().map(|p| p.target)
    }

    pub fn pending(&self) -> Option<&PendingDelete> {
        self.pending.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn confirm_hands_back_the_requested_target() {
        let mut gate = DeleteGate::new();
        gate.request(
            "Fall Campaign",
            DeleteTarget::Project {
                name: "Fall Campaign".to_string(),
            },
        );
        assert!(gate.is_open());
        assert_eq!(gate.pending().unwrap().label, "Fall Campaign");

        let target = gate.confirm();
        assert_eq!(
            target,
            Some(DeleteTarget::Project {
                name: "Fall Campaign".to_string()
            })
        );
        assert!(!gate.is_open());
    }

    #[test]
    fn cancel_clears_without_handing_back() {
        let mut gate = DeleteGate::new();
        gate.request("Navy Blue", DeleteTarget::PaletteColor { id: 1 });
        gate.cancel();

        assert!(!gate.is_open());
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn later_request_replaces_earlier() {
        let mut gate = DeleteGate::new();
        gate.request(
            "one.pdf",
            DeleteTarget::Document {
                path: "ws-1/one.pdf".to_string(),
            },
        );
        gate.request("Navy Blue", DeleteTarget::PaletteColor { id: 1 });

        assert_eq!(gate.confirm(), Some(DeleteTarget::PaletteColor { id: 1 }));
    }

    #[test]
    fn brand_kit_targets_share_the_generic_copy() {
        let mut gate = DeleteGate::new();
        gate.request("Navy Blue", DeleteTarget::PaletteColor { id: 1 });
        let pending = gate.pending().unwrap();

        assert_eq!(pending.target.title(), "Confirm Deletion");
        assert_eq!(
            pending.body(),
            "Are you sure you want to delete this color? This action cannot be undone."
        );
    }

    #[test]
    fn named_targets_quote_their_label() {
        let mut gate = DeleteGate::new();
        gate.request(
            "Public Transport Expansion",
            DeleteTarget::Issue {
                id: "i-1".to_string(),
            },
        );
        let pending = gate.pending().unwrap();

        assert_eq!(pending.target.title(), "Delete Issue?");
        assert_eq!(
            pending.body(),
            "Are you sure you want to delete \"Public Transport Expansion\"? This action cannot be undone."
        );
    }
}
