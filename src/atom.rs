use crate::{
    geometry::{Axis, Vector2, SLOTS},
    label::Label,
    placement::{recommend, Directed, Next},
    Error,
};
use indexmap::IndexMap;

/// Outgoing bonds of an atom, grouped by a caller-chosen type tag.
///
/// Groups keep the order in which their tags were first used.
pub type AttachedBonds<B> = IndexMap<String, Vec<B>>;

/// One atom of a structure diagram.
///
/// An atom tracks two unrelated bond lists:
///
/// - `bonds` which end at this atom. These play no part in direction planning.
/// - attached bonds which start at this atom, grouped by tag. After every attachment the atom
///   recomputes which way its next bond should point.
///
/// Bonds and labels belong to the surrounding diagram; `B` is typically a shared reference or
/// an id, anything which can report its [`Direction`](crate::Direction).
///
/// ## Which group drives the recommendation
///
/// The recommendation is computed for a single tag-group: the one most recently attached to.
/// A freshly constructed atom considers the last group in insertion order. Use
/// [`AtomNode::next_for`] to ask about any other group.
#[derive(Clone, Debug)]
pub struct AtomNode<B, L = Label> {
    coords: Vector2,
    bonds: Vec<B>,
    attached_bonds: AttachedBonds<B>,
    considered: Option<String>,
    next: Next,
    selected: bool,
    preceding: Option<Vector2>,
    label: Option<L>,
}

impl<B: Directed, L> AtomNode<B, L> {
    /// Create an atom with no attached bonds.
    pub fn new(coords: Vector2, bonds: Vec<B>) -> AtomNode<B, L> {
        AtomNode {
            coords,
            bonds,
            attached_bonds: IndexMap::new(),
            considered: None,
            next: Next::Unset,
            selected: false,
            preceding: None,
            label: None,
        }
    }

    /// Create an atom which already has some attached bonds.
    ///
    /// The first recommendation is computed for the last group in `attached_bonds`.
    pub fn with_attached(
        coords: Vector2,
        bonds: Vec<B>,
        attached_bonds: AttachedBonds<B>,
    ) -> Result<AtomNode<B, L>, Error> {
        let mut atom = AtomNode::new(coords, bonds);
        atom.considered = attached_bonds.keys().last().cloned();
        atom.attached_bonds = attached_bonds;
        atom.calculate_next()?;
        Ok(atom)
    }

    fn calculate_next(&mut self) -> Result<Next, Error> {
        let attached_bonds = &self.attached_bonds;
        let group = self
            .considered
            .as_ref()
            .and_then(|tag| attached_bonds.get(tag))
            .map(Vec::as_slice)
            .unwrap_or_default();
        let next = recommend(group)?;
        log::debug!(
            "recommending {:?} after {} bonds in group {:?}",
            next,
            group.len(),
            self.considered
        );
        self.next = next;
        Ok(next)
    }

    /// Attach an outgoing bond under `tag` and recompute the recommendation for that group.
    ///
    /// This never refuses a bond. Once the returned recommendation is [`Next::Max`], the caller
    /// is responsible for not attaching more; see [`AtomNode::try_attach_bond`] for a checked
    /// alternative.
    pub fn attach_bond(&mut self, tag: impl Into<String>, bond: B) -> Result<Next, Error> {
        let tag = tag.into();
        self.attached_bonds
            .entry(tag.clone())
            .or_insert_with(Vec::new)
            .push(bond);
        self.considered = Some(tag);
        self.calculate_next()
    }

    /// Attach an outgoing bond under `tag`, unless that group is already saturated.
    pub fn try_attach_bond(&mut self, tag: impl Into<String>, bond: B) -> Result<Next, Error> {
        let tag = tag.into();
        let len = self.attached_bonds.get(&tag).map_or(0, Vec::len);
        if len >= SLOTS {
            log::warn!("refusing to attach a bond to saturated group {:?}", tag);
            return Err(Error::Saturated(tag));
        }
        self.attach_bond(tag, bond)
    }

    /// Recommendation for the group `tag`, without changing which group this atom considers.
    ///
    /// A tag which was never used is treated as an empty group.
    pub fn next_for(&self, tag: &str) -> Result<Next, Error> {
        recommend(self.attached_group(tag).unwrap_or_default())
    }
}

impl<B, L> AtomNode<B, L> {
    /// Direction recommended for the next attached bond.
    #[inline]
    pub fn next(&self) -> Next {
        self.next
    }

    /// Override the recommendation until the next attachment recomputes it.
    pub fn set_next(&mut self, next: Next) {
        self.next = next;
    }

    /// Tag of the group the current recommendation was computed for.
    pub fn considered_group(&self) -> Option<&str> {
        self.considered.as_deref()
    }

    /// All attached bonds, by tag.
    pub fn attached_bonds(&self) -> &AttachedBonds<B> {
        &self.attached_bonds
    }

    /// The attached bonds under `tag`.
    ///
    /// `None` means the tag was never used, which is distinct from an empty group.
    pub fn attached_group(&self, tag: &str) -> Option<&[B]> {
        self.attached_bonds.get(tag).map(Vec::as_slice)
    }

    #[inline]
    pub fn coords(&self) -> Vector2 {
        self.coords
    }

    #[inline]
    pub fn coord(&self, axis: Axis) -> f64 {
        self.coords.get(axis)
    }

    pub fn set_coords(&mut self, coords: Vector2) {
        self.coords = coords;
    }

    /// Coordinates of the atom preceding this one along the drawing path.
    pub fn preceding(&self) -> Result<Vector2, Error> {
        self.preceding.ok_or(Error::NotInitialized("preceding"))
    }

    pub fn preceding_coord(&self, axis: Axis) -> Result<f64, Error> {
        self.preceding().map(|preceding| preceding.get(axis))
    }

    pub fn set_preceding(&mut self, coords: Vector2) {
        self.preceding = Some(coords);
    }

    /// Bonds which end at this atom.
    pub fn bonds(&self) -> &[B] {
        &self.bonds
    }

    pub fn bond(&self, index: usize) -> Option<&B> {
        self.bonds.get(index)
    }

    pub fn set_bonds(&mut self, bonds: Vec<B>) {
        self.bonds = bonds;
    }

    pub fn add_bond(&mut self, bond: B) {
        self.bonds.push(bond);
    }

    pub fn add_bonds(&mut self, bonds: impl IntoIterator<Item = B>) {
        self.bonds.extend(bonds);
    }

    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    pub fn set_label(&mut self, label: L) {
        self.label = Some(label);
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }
}
