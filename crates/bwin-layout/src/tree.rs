#![forbid(unsafe_code)]

//! Arena-backed sash tree: construction, queries and structural mutation.
//!
//! The tree owns every [`Sash`] in a [`SlotMap`]; containers reference their
//! children by [`SashKey`] and children point back at their parent the same
//! way. Public calls address sashes by string id and resolve them with a
//! linear scan, so hosts that look up the same id repeatedly should keep the
//! result.
//!
//! Structural operations validate everything up front and only then write,
//! so a returned error always leaves the tree as it was.

use std::mem;

use bwin_core::{Point, Rect, approx_eq};
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::config::LayoutConfig;
use crate::error::{SashError, check_offset, check_size};
use crate::position::{Position, SplitAxis};
use crate::sash::{Inherited, Sash, SashKey};
use crate::store::Store;
use crate::strategy::ResizeStrategy;

/// Size of the fresh pane created by a split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SplitSize {
    /// Fraction of the target's extent along the split axis, in `(0, 1)`.
    Ratio(f64),
    /// Absolute extent in layout units.
    Absolute(f64),
}

impl SplitSize {
    /// Host convention: values below `1` are ratios, anything else is an
    /// absolute size.
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value < 1.0 {
            Self::Ratio(value)
        } else {
            Self::Absolute(value)
        }
    }

    /// Requested extent out of `available`, before minimum clamping.
    pub fn resolve(self, available: f64) -> Result<f64, SashError> {
        match self {
            Self::Ratio(ratio) if ratio > 0.0 && ratio < 1.0 => Ok(available * ratio),
            Self::Ratio(ratio) => Err(SashError::InvalidDimension {
                field: "ratio",
                value: ratio,
            }),
            Self::Absolute(size) => check_size("size", size),
        }
    }
}

impl Default for SplitSize {
    fn default() -> Self {
        Self::Ratio(0.5)
    }
}

/// Full argument set of [`SashTree::split_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOptions {
    /// Where the fresh pane goes relative to the existing content.
    pub position: Position,
    pub size: SplitSize,
    /// Id of the fresh pane; generated when `None`.
    pub id: Option<String>,
    /// Initial payload of the fresh pane.
    pub store: Store,
}

impl SplitOptions {
    #[must_use]
    pub fn new(position: Position, size: SplitSize) -> Self {
        Self {
            position,
            size,
            id: None,
            store: Store::default(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_store(mut self, store: Store) -> Self {
        self.store = store;
        self
    }
}

/// Ids involved in a successful split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    /// The former leaf, now a container. Keeps the original id.
    pub container: String,
    /// New leaf holding the original payload, opposite the fresh pane.
    pub existing: String,
    /// New leaf at the requested position.
    pub created: String,
}

/// Validated geometry of a pending split.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SplitPlan {
    position: Position,
    created_rect: Rect,
    existing_rect: Rect,
}

/// A binary space-partitioning tree of sashes.
#[derive(Debug, Clone)]
pub struct SashTree {
    pub(crate) sashes: SlotMap<SashKey, Sash>,
    pub(crate) root: SashKey,
    pub(crate) config: LayoutConfig,
    next_generated: u64,
}

impl SashTree {
    /// Single-leaf tree covering `rect`, with default configuration.
    pub fn new(rect: Rect) -> Result<Self, SashError> {
        Self::with_config(LayoutConfig::default(), rect)
    }

    /// Single-leaf tree covering `rect`, with a generated root id.
    pub fn with_config(config: LayoutConfig, rect: Rect) -> Result<Self, SashError> {
        let mut tree = Self::with_root(config, "", rect, Store::default())?;
        let id = tree.generate_id(None);
        tree.sashes[tree.root].id = id;
        Ok(tree)
    }

    /// Single-leaf tree with an explicit root id and payload.
    ///
    /// The root takes its minimums and resize strategy from `config`; a
    /// `rect` smaller than those minimums grows to meet them.
    pub fn with_root(
        config: LayoutConfig,
        id: impl Into<String>,
        rect: Rect,
        store: Store,
    ) -> Result<Self, SashError> {
        let min_width = check_size("min_width", config.min_width)?;
        let min_height = check_size("min_height", config.min_height)?;
        check_offset("left", rect.left)?;
        check_offset("top", rect.top)?;
        let width = check_size("width", rect.width)?.max(min_width);
        let height = check_size("height", rect.height)?.max(min_height);

        let inherited = Inherited {
            min_width,
            min_height,
            strategy: config.resize_strategy,
        };
        let mut sashes = SlotMap::with_key();
        let root = sashes.insert(Sash::leaf(
            id.into(),
            Position::Root,
            Rect::new(rect.left, rect.top, width, height),
            inherited,
            None,
            store,
        ));
        Ok(Self {
            sashes,
            root,
            config,
            next_generated: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[must_use]
    pub fn root(&self) -> &Sash {
        &self.sashes[self.root]
    }

    /// Number of sashes, containers included.
    #[must_use]
    pub fn sash_count(&self) -> usize {
        self.sashes.len()
    }

    /// Look up a sash by arena key.
    #[must_use]
    pub fn get(&self, key: SashKey) -> Option<&Sash> {
        self.sashes.get(key)
    }

    /// Look up a sash by id. O(n).
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Sash> {
        self.find_key(id).map(|key| &self.sashes[key])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.find_key(id).is_some()
    }

    #[must_use]
    pub fn parent_of(&self, sash: &Sash) -> Option<&Sash> {
        sash.parent.and_then(|key| self.sashes.get(key))
    }

    /// `(leading, trailing)` children of a container.
    #[must_use]
    pub fn children_of(&self, sash: &Sash) -> Option<(&Sash, &Sash)> {
        let [leading, trailing] = sash.children?;
        Some((self.sashes.get(leading)?, self.sashes.get(trailing)?))
    }

    /// The other child of this sash's parent.
    #[must_use]
    pub fn sibling_of(&self, sash: &Sash) -> Option<&Sash> {
        let (leading, trailing) = self.children_of(self.parent_of(sash)?)?;
        Some(if leading.id == sash.id { trailing } else { leading })
    }

    /// Orientation of a container's split; `None` for leaves.
    #[must_use]
    pub fn split_axis(&self, sash: &Sash) -> Option<SplitAxis> {
        let [leading, _] = sash.children?;
        self.sashes.get(leading)?.position.axis()
    }

    /// Leaves of the whole tree, leading child first (left-to-right,
    /// top-to-bottom).
    #[must_use]
    pub fn all_leaf_descendants(&self) -> Vec<&Sash> {
        self.leaves_under(self.root)
    }

    /// Leaves under the sash `id`; a leaf yields itself.
    pub fn leaf_descendants_of(&self, id: &str) -> Result<Vec<&Sash>, SashError> {
        Ok(self.leaves_under(self.resolve(id)?))
    }

    /// Visit every sash children-first (post-order), leading child before
    /// trailing child.
    pub fn walk<F>(&self, mut visitor: F)
    where
        F: FnMut(&Sash),
    {
        self.walk_from(self.root, &mut visitor);
    }

    /// Every id in [`walk`](Self::walk) order.
    #[must_use]
    pub fn all_ids(&self) -> Vec<&str> {
        let mut ids = Vec::with_capacity(self.sashes.len());
        self.walk_keys(self.root, &mut |key| ids.push(self.sashes[key].id.as_str()));
        ids
    }

    pub fn store(&self, id: &str) -> Result<&Store, SashError> {
        Ok(&self.sashes[self.resolve(id)?].store)
    }

    pub fn store_mut(&mut self, id: &str) -> Result<&mut Store, SashError> {
        let key = self.resolve(id)?;
        Ok(&mut self.sashes[key].store)
    }

    /// Change how the sash `id` distributes future size changes between its
    /// children.
    pub fn set_resize_strategy(
        &mut self,
        id: &str,
        strategy: ResizeStrategy,
    ) -> Result<(), SashError> {
        let key = self.resolve(id)?;
        self.sashes[key].strategy = strategy;
        Ok(())
    }

    /// Leaf whose rectangle contains `point` (right/bottom edges exclusive).
    #[must_use]
    pub fn leaf_at(&self, point: Point) -> Option<&Sash> {
        let mut current = &self.sashes[self.root];
        if !current.rect.contains(point) {
            return None;
        }
        while let Some((leading, trailing)) = self.children_of(current) {
            current = if leading.rect.contains(point) {
                leading
            } else if trailing.rect.contains(point) {
                trailing
            } else {
                return None;
            };
        }
        Some(current)
    }

    /// Split the leaf `target`, placing a fresh empty pane at `position`.
    pub fn split(
        &mut self,
        target: &str,
        position: Position,
        size: SplitSize,
    ) -> Result<SplitOutcome, SashError> {
        self.split_with(target, SplitOptions::new(position, size))
    }

    /// Split the leaf `target` into a container with two leaf children.
    ///
    /// The container keeps `target`'s id, rectangle and parent slot. The
    /// original payload moves to a new leaf opposite `options.position`; the
    /// fresh pane is sized by `options.size`, clamped so both children meet
    /// the inherited minimum.
    pub fn split_with(
        &mut self,
        target: &str,
        options: SplitOptions,
    ) -> Result<SplitOutcome, SashError> {
        let _span = tracing::debug_span!("sash.split", sash = target, position = %options.position)
            .entered();
        let key = self.resolve(target)?;
        let plan = self.plan_split(key, &options)?;
        Ok(self.commit_split(key, plan, options.id, options.store))
    }

    /// Delete the leaf `id` and promote its sibling into the parent's slot.
    ///
    /// The sibling takes over the parent's id, position, parent link and
    /// rectangle; its subtree is resized to fill it. Returns the removed
    /// pane's payload.
    pub fn remove(&mut self, id: &str) -> Result<Store, SashError> {
        let _span = tracing::debug_span!("sash.remove", sash = id).entered();
        let key = self.resolve(id)?;
        self.remove_leaf(key)
    }

    /// Exchange the payloads of two leaves. Geometry and ids stay put.
    pub fn swap(&mut self, first: &str, second: &str) -> Result<(), SashError> {
        let _span = tracing::debug_span!("sash.swap", first, second).entered();
        let first_key = self.resolve_leaf(first)?;
        let second_key = self.resolve_leaf(second)?;
        self.swap_stores(first_key, second_key);
        tracing::debug!(first, second, "stores swapped");
        Ok(())
    }

    pub(crate) fn find_key(&self, id: &str) -> Option<SashKey> {
        self.sashes
            .iter()
            .find_map(|(key, sash)| (sash.id == id).then_some(key))
    }

    pub(crate) fn resolve(&self, id: &str) -> Result<SashKey, SashError> {
        self.find_key(id).ok_or_else(|| SashError::not_found(id))
    }

    pub(crate) fn resolve_leaf(&self, id: &str) -> Result<SashKey, SashError> {
        let key = self.resolve(id)?;
        if self.sashes[key].is_leaf() {
            Ok(key)
        } else {
            Err(SashError::not_leaf(id))
        }
    }

    /// Split axis of the container `key`.
    pub(crate) fn axis_of(&self, key: SashKey) -> Option<SplitAxis> {
        self.split_axis(&self.sashes[key])
    }

    pub(crate) fn swap_stores(&mut self, first: SashKey, second: SashKey) {
        if first == second {
            return;
        }
        let first_store = mem::take(&mut self.sashes[first].store);
        let second_store = mem::replace(&mut self.sashes[second].store, first_store);
        self.sashes[first].store = second_store;
    }

    pub(crate) fn plan_split(
        &self,
        key: SashKey,
        options: &SplitOptions,
    ) -> Result<SplitPlan, SashError> {
        let sash = &self.sashes[key];
        if !sash.is_leaf() {
            return Err(SashError::not_leaf(&sash.id));
        }
        let axis = options
            .position
            .axis()
            .ok_or_else(|| SashError::InvalidPosition {
                value: options.position.to_string(),
            })?;
        let dimension = axis.dimension();
        let available = dimension.size(&sash.rect);
        let requested = options.size.resolve(available)?;
        if let Some(id) = &options.id
            && self.contains(id)
        {
            return Err(SashError::DuplicateId { id: id.clone() });
        }

        let min = sash.own_min(dimension);
        let required = min * 2.0;
        if available < required && !approx_eq(available, required) {
            return Err(SashError::InsufficientSpace {
                id: sash.id.clone(),
                axis,
                available,
                required,
            });
        }

        let created_size = requested.min(available - min).max(min);
        let existing_size = available - created_size;
        let offset = dimension.offset(&sash.rect);
        let (created_offset, existing_offset) = if options.position.is_leading() {
            (offset, offset + created_size)
        } else {
            (offset + existing_size, offset)
        };

        let mut created_rect = sash.rect;
        *dimension.offset_mut(&mut created_rect) = created_offset;
        *dimension.size_mut(&mut created_rect) = created_size;
        let mut existing_rect = sash.rect;
        *dimension.offset_mut(&mut existing_rect) = existing_offset;
        *dimension.size_mut(&mut existing_rect) = existing_size;

        Ok(SplitPlan {
            position: options.position,
            created_rect,
            existing_rect,
        })
    }

    pub(crate) fn commit_split(
        &mut self,
        key: SashKey,
        plan: SplitPlan,
        id: Option<String>,
        store: Store,
    ) -> SplitOutcome {
        let created_id = match id {
            Some(id) => id,
            None => self.generate_id(None),
        };
        let existing_id = self.generate_id(Some(&created_id));

        let (inherited, existing_store) = {
            let sash = &mut self.sashes[key];
            (sash.inherited(), mem::take(&mut sash.store))
        };
        let existing = self.sashes.insert(Sash::leaf(
            existing_id.clone(),
            plan.position.opposite(),
            plan.existing_rect,
            inherited,
            Some(key),
            existing_store,
        ));
        let created = self.sashes.insert(Sash::leaf(
            created_id.clone(),
            plan.position,
            plan.created_rect,
            inherited,
            Some(key),
            store,
        ));
        let children = if plan.position.is_leading() {
            [created, existing]
        } else {
            [existing, created]
        };
        let container = &mut self.sashes[key];
        container.children = Some(children);

        tracing::debug!(
            container = %container.id,
            existing = %existing_id,
            created = %created_id,
            position = %plan.position,
            width = plan.created_rect.width,
            height = plan.created_rect.height,
            "split committed"
        );
        SplitOutcome {
            container: container.id.clone(),
            existing: existing_id,
            created: created_id,
        }
    }

    pub(crate) fn remove_leaf(&mut self, key: SashKey) -> Result<Store, SashError> {
        let sash = &self.sashes[key];
        if !sash.is_leaf() {
            return Err(SashError::not_leaf(&sash.id));
        }
        let Some(parent) = sash.parent else {
            return Err(SashError::CannotRemoveRoot {
                id: sash.id.clone(),
            });
        };
        let Some([leading, trailing]) = self.sashes[parent].children else {
            // A child whose parent lists no children means the arena is corrupt.
            return Err(SashError::SashNotContainer {
                id: self.sashes[parent].id.clone(),
            });
        };
        let sibling = if leading == key { trailing } else { leading };
        let removed_id = self.sashes[key].id.clone();
        if !self.sashes.contains_key(sibling) {
            return Err(SashError::not_found(&format!("sibling of {removed_id}")));
        }

        let removed = self
            .sashes
            .remove(key)
            .ok_or_else(|| SashError::not_found(&removed_id))?;
        let promoted = self
            .sashes
            .remove(sibling)
            .ok_or_else(|| SashError::not_found(&removed_id))?;

        let parent_rect = {
            let slot = &mut self.sashes[parent];
            let rect = slot.rect;
            slot.rect = promoted.rect;
            slot.children = promoted.children;
            slot.store = promoted.store;
            slot.min_width = promoted.min_width;
            slot.min_height = promoted.min_height;
            slot.strategy = promoted.strategy;
            rect
        };
        if let Some(children) = promoted.children {
            for child in children {
                self.sashes[child].parent = Some(parent);
            }
        }
        self.fill_rect(parent, parent_rect);

        tracing::debug!(
            removed = %removed.id,
            promoted = %promoted.id,
            into = %self.sashes[parent].id,
            "leaf removed"
        );
        Ok(removed.store)
    }

    /// Next `{prefix}-{n}` id not used in the tree and not equal to `reserved`.
    pub(crate) fn generate_id(&mut self, reserved: Option<&str>) -> String {
        loop {
            self.next_generated = self.next_generated.saturating_add(1);
            let candidate = format!("{}-{}", self.config.id_prefix, self.next_generated);
            if reserved != Some(candidate.as_str()) && !self.contains(&candidate) {
                return candidate;
            }
        }
    }

    fn leaves_under(&self, key: SashKey) -> Vec<&Sash> {
        let mut leaves = Vec::new();
        let mut stack = vec![key];
        while let Some(key) = stack.pop() {
            let sash = &self.sashes[key];
            match sash.children {
                Some([leading, trailing]) => {
                    stack.push(trailing);
                    stack.push(leading);
                }
                None => leaves.push(sash),
            }
        }
        leaves
    }

    fn walk_from<F>(&self, key: SashKey, visitor: &mut F)
    where
        F: FnMut(&Sash),
    {
        let sash = &self.sashes[key];
        if let Some([leading, trailing]) = sash.children {
            self.walk_from(leading, visitor);
            self.walk_from(trailing, visitor);
        }
        visitor(sash);
    }

    pub(crate) fn walk_keys<F>(&self, key: SashKey, visitor: &mut F)
    where
        F: FnMut(SashKey),
    {
        if let Some([leading, trailing]) = self.sashes[key].children {
            self.walk_keys(leading, visitor);
            self.walk_keys(trailing, visitor);
        }
        visitor(key);
    }
}
