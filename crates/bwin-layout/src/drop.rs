#![forbid(unsafe_code)]

//! Drag-and-drop intent.
//!
//! The drop layer hands the tree a pointer position; the tree hit-tests the
//! hovered pane and classifies the pointer with a [`ZoneClassifier`]. Edge
//! zones ask for a split next to the hovered pane, the center zone asks for
//! a payload swap.

use std::mem;

use bwin_core::{Point, ZoneClassifier};
use serde::{Deserialize, Serialize};

use crate::error::SashError;
use crate::position::Position;
use crate::tree::{SashTree, SplitOptions, SplitSize};

/// What dropping a pane at a pointer position would do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DropIntent {
    /// Place the dragged pane beside `target` at `position`.
    Split { target: String, position: Position },
    /// Exchange payloads with `target`.
    Swap { target: String },
}

impl DropIntent {
    /// Id of the hovered pane.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Split { target, .. } | Self::Swap { target } => target,
        }
    }
}

/// Result of [`SashTree::apply_drop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped onto itself.
    Unchanged,
    Swapped,
    /// The dragged payload now lives in `created`, beside `existing`, which
    /// holds the hovered pane's payload.
    Moved { created: String, existing: String },
}

impl SashTree {
    /// Classify a drag hover at `pointer`. `None` when no pane is under it.
    #[must_use]
    pub fn drop_intent(&self, pointer: Point, classifier: &ZoneClassifier) -> Option<DropIntent> {
        let leaf = self.leaf_at(pointer)?;
        let target = leaf.id().to_string();
        let zone = classifier.classify(leaf.rect(), pointer);
        Some(match Position::from_zone(zone) {
            Some(position) => DropIntent::Split { target, position },
            None => DropIntent::Swap { target },
        })
    }

    /// Drop the pane `source` according to `intent`.
    ///
    /// A split drop moves `source`'s payload into a new pane beside the
    /// target (sized by the configured drop ratio) and removes `source`.
    pub fn apply_drop(
        &mut self,
        source: &str,
        intent: &DropIntent,
    ) -> Result<DropOutcome, SashError> {
        let _span = tracing::debug_span!("sash.drop", source, onto = intent.target()).entered();
        let source_key = self.resolve_leaf(source)?;
        let target_key = self.resolve_leaf(intent.target())?;
        if source_key == target_key {
            return Ok(DropOutcome::Unchanged);
        }

        match intent {
            DropIntent::Swap { .. } => {
                self.swap_stores(source_key, target_key);
                tracing::debug!(source, onto = intent.target(), "drop swapped stores");
                Ok(DropOutcome::Swapped)
            }
            DropIntent::Split { position, .. } => {
                let options =
                    SplitOptions::new(*position, SplitSize::Ratio(self.config.drop_split_ratio));
                let plan = self.plan_split(target_key, &options)?;
                let store = mem::take(&mut self.sashes[source_key].store);
                let outcome = self.commit_split(target_key, plan, None, store);
                let _ = self.remove_leaf(source_key)?;
                tracing::debug!(
                    source,
                    created = %outcome.created,
                    position = %position,
                    "drop moved pane"
                );
                Ok(DropOutcome::Moved {
                    created: outcome.created,
                    existing: outcome.existing,
                })
            }
        }
    }
}
