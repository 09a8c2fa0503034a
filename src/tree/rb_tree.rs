//! RbTree: a red-black tree over an injected 3-way comparator.
//!
//! A balanced binary search tree supporting search, insertion, and deletion
//! in O(log n). Between operations the tree holds the red-black properties:
//!
//! 1. The root, if present, has no parent and is black.
//! 2. An absent child counts as an implicit black leaf.
//! 3. A red node never has a red child.
//! 4. Every root-to-leaf path crosses the same number of black nodes.
//! 5. For any node, `left < node < right` under the comparator. Values that
//!    compare `Equal` to a stored element are rejected, not stored.
//!
//! Nodes live in an arena (`Vec` of slots plus a freelist) and link to each
//! other through `u32` handles with a nil sentinel, so the node graph has a
//! single owner and parent links are plain bookkeeping. All mutation paths
//! are iterative; the only recursion is the diagnostic deep check, whose
//! depth is bounded by the tree height.

use crate::compare::{Comparator, Natural};
use crate::error::{DatakitError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::mem;

type NodeId = u32;

/// Sentinel handle for an absent node. Treated as a black leaf.
const NIL: NodeId = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

impl Direction {
    fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

struct Node<T> {
    value: T,
    color: Color,
    parent: NodeId,
    left: NodeId,
    right: NodeId,
}

/// An ordered set keyed by a [`Comparator`].
///
/// # Examples
///
/// ```rust
/// use datakit::RbTree;
///
/// let mut tree = RbTree::new();
/// assert!(tree.insert(3));
/// assert!(tree.insert(1));
/// assert!(tree.insert(2));
/// assert!(!tree.insert(2)); // duplicates are rejected
///
/// assert_eq!(tree.elements(), vec![&1, &2, &3]);
/// assert_eq!(tree.predecessor(&3), Some(&2));
/// assert_eq!(tree.remove(&1), Some(1));
/// assert_eq!(tree.len(), 2);
/// ```
pub struct RbTree<T, C: Comparator<T> = Natural> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
    root: NodeId,
    len: usize,
    cmp: C,
}

impl<T: Ord> RbTree<T, Natural> {
    /// Create an empty tree ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T: Ord> Default for RbTree<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> RbTree<T, C> {
    /// Create an empty tree ordered by `cmp`.
    ///
    /// `cmp` must be a strict total order and stay consistent for the
    /// lifetime of the tree.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NIL,
            len: 0,
            cmp,
        }
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.root = NIL;
        self.len = 0;
    }

    // ---- arena plumbing ----

    #[inline]
    fn node(&self, id: NodeId) -> &Node<T> {
        self.slots[id as usize]
            .as_ref()
            .expect("rb-tree: stale node handle")
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots[id as usize]
            .as_mut()
            .expect("rb-tree: stale node handle")
    }

    fn alloc_node(&mut self, value: T, color: Color, parent: NodeId) -> NodeId {
        let node = Node {
            value,
            color,
            parent,
            left: NIL,
            right: NIL,
        };
        if let Some(id) = self.free.pop() {
            self.slots[id as usize] = Some(node);
            return id;
        }
        let id = self.slots.len();
        assert!(id < NIL as usize, "rb-tree: node handle space exhausted");
        self.slots.push(Some(node));
        id as NodeId
    }

    fn free_node(&mut self, id: NodeId) -> T {
        let node = self.slots[id as usize]
            .take()
            .expect("rb-tree: stale node handle");
        self.free.push(id);
        node.value
    }

    // Swap the payloads of two distinct live nodes, leaving links and colors
    // in place.
    fn swap_values(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);
        let (lo, hi) = if a < b {
            (a as usize, b as usize)
        } else {
            (b as usize, a as usize)
        };
        let (head, tail) = self.slots.split_at_mut(hi);
        let x = head[lo].as_mut().expect("rb-tree: stale node handle");
        let y = tail[0].as_mut().expect("rb-tree: stale node handle");
        mem::swap(&mut x.value, &mut y.value);
    }

    // ---- link helpers ----

    #[inline]
    fn child(&self, id: NodeId, d: Direction) -> NodeId {
        let node = self.node(id);
        match d {
            Direction::Left => node.left,
            Direction::Right => node.right,
        }
    }

    // Wire `child` (which may be nil) as `parent`'s child on side `d`.
    fn adopt(&mut self, parent: NodeId, child: NodeId, d: Direction) {
        debug_assert_ne!(parent, NIL, "nil parent cannot adopt");
        match d {
            Direction::Left => self.node_mut(parent).left = child,
            Direction::Right => self.node_mut(parent).right = child,
        }
        if child != NIL {
            self.node_mut(child).parent = parent;
        }
    }

    // Which side of its parent `id` hangs from. `id` must have a parent.
    fn parent_direction(&self, id: NodeId) -> Direction {
        let parent = self.node(id).parent;
        debug_assert_ne!(parent, NIL);
        if self.node(parent).left == id {
            Direction::Left
        } else {
            debug_assert_eq!(self.node(parent).right, id, "mismatched parent link");
            Direction::Right
        }
    }

    fn sibling(&self, id: NodeId) -> NodeId {
        let parent = self.node(id).parent;
        match self.parent_direction(id) {
            Direction::Left => self.node(parent).right,
            Direction::Right => self.node(parent).left,
        }
    }

    #[inline]
    fn is_red(&self, id: NodeId) -> bool {
        id != NIL && self.node(id).color == Color::Red
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        debug_assert_ne!(id, NIL);
        while self.node(id).left != NIL {
            id = self.node(id).left;
        }
        id
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        debug_assert_ne!(id, NIL);
        while self.node(id).right != NIL {
            id = self.node(id).right;
        }
        id
    }

    // Rotate about `n` in direction `d`. The child opposite `d` becomes
    // `n`'s new parent, inheriting `n`'s old parent link (or the root), and
    // that child's subtree on side `d` transfers to `n`.
    //
    // Example left rotation about N:
    //
    //   N            C
    //  / \          / \
    // a   C   ->   N   c
    //    / \      / \
    //   b   c    a   b
    fn rotate(&mut self, n: NodeId, d: Direction) {
        let parent = self.node(n).parent;
        let parent_direction = if parent != NIL {
            Some(self.parent_direction(n))
        } else {
            None
        };

        let up = self.child(n, d.opposite());
        assert_ne!(
            up, NIL,
            "rb-tree: rotation requires the child opposite the rotation direction"
        );
        self.adopt(n, self.child(up, d), d.opposite());
        self.adopt(up, n, d);

        match parent_direction {
            Some(pd) => self.adopt(parent, up, pd),
            None => {
                self.root = up;
                self.node_mut(up).parent = NIL;
            }
        }
    }

    // ---- insertion ----

    /// Insert `value`. Returns `false`, dropping `value`, if an element that
    /// compares `Equal` is already stored.
    pub fn insert(&mut self, value: T) -> bool {
        if self.root == NIL {
            let id = self.alloc_node(value, Color::Black, NIL);
            self.root = id;
            self.len = 1;
            return true;
        }

        let mut cur = self.root;
        loop {
            let d = match self.cmp.compare(&value, &self.node(cur).value) {
                Ordering::Equal => return false,
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
            };
            let next = self.child(cur, d);
            if next == NIL {
                let id = self.alloc_node(value, Color::Red, cur);
                self.adopt(cur, id, d);
                self.len += 1;
                self.insert_fixup(id);
                return true;
            }
            cur = next;
        }
    }

    // Restore the red-black properties after hanging the red node `n` at a
    // leaf position. Ascends the tree: the red-uncle case pushes the
    // potential violation to the grandparent, the triangle case rotates into
    // a straight line, and the straight-line case finishes with one rotation
    // and a recolor.
    fn insert_fixup(&mut self, mut n: NodeId) {
        loop {
            debug_assert_eq!(self.node(n).color, Color::Red);

            let parent = self.node(n).parent;
            if parent == NIL {
                // n is the root
                self.node_mut(n).color = Color::Black;
                self.root = n;
                return;
            }
            let grandparent = self.node(parent).parent;
            if grandparent == NIL || self.node(parent).color == Color::Black {
                return;
            }

            let uncle = self.sibling(parent);
            if self.is_red(uncle) {
                self.node_mut(grandparent).color = Color::Red;
                self.node_mut(parent).color = Color::Black;
                self.node_mut(uncle).color = Color::Black;
                n = grandparent;
                continue;
            }

            let parent_direction = self.parent_direction(n);
            let grandparent_direction = self.parent_direction(parent);
            let line_parent = if parent_direction != grandparent_direction {
                // Triangle: rotate the parent toward the grandparent's side;
                // the old n takes the parent role for the line step.
                self.rotate(parent, grandparent_direction);
                n
            } else {
                parent
            };

            self.rotate(grandparent, grandparent_direction.opposite());
            self.node_mut(grandparent).color = Color::Red;
            self.node_mut(line_parent).color = Color::Black;
            return;
        }
    }

    // ---- search ----

    // Descend by `probe`, where `probe(elem)` reports how the sought key
    // orders relative to `elem`.
    fn find_by<F: Fn(&T) -> Ordering>(&self, probe: F) -> NodeId {
        let mut cur = self.root;
        while cur != NIL {
            cur = match probe(&self.node(cur).value) {
                Ordering::Equal => return cur,
                Ordering::Less => self.node(cur).left,
                Ordering::Greater => self.node(cur).right,
            };
        }
        NIL
    }

    /// Get the stored element that compares `Equal` to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        let cmp = &self.cmp;
        self.get_by(|elem| cmp.compare(value, elem))
    }

    /// Whether an element comparing `Equal` to `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Get an element through a probe function, where `probe(elem)` reports
    /// how the sought key orders relative to `elem`.
    ///
    /// The probe must be consistent with the tree's comparator. This is the
    /// seam key-only lookups use when the stored elements are key/value
    /// pairs.
    pub fn get_by<F: Fn(&T) -> Ordering>(&self, probe: F) -> Option<&T> {
        let id = self.find_by(probe);
        if id == NIL {
            None
        } else {
            Some(&self.node(id).value)
        }
    }

    /// [`RbTree::get_by`], reduced to a presence check.
    pub fn contains_by<F: Fn(&T) -> Ordering>(&self, probe: F) -> bool {
        self.find_by(probe) != NIL
    }

    // ---- deletion ----

    /// Remove the element comparing `Equal` to `value`, returning it.
    /// Returns `None`, leaving the tree unchanged, if no such element is
    /// stored.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let cmp = &self.cmp;
        let id = self.find_by(|elem| cmp.compare(value, elem));
        if id == NIL {
            return None;
        }
        self.len -= 1;
        Some(self.delete_node(id))
    }

    /// Remove through a probe function; see [`RbTree::get_by`].
    pub fn remove_by<F: Fn(&T) -> Ordering>(&mut self, probe: F) -> Option<T> {
        let id = self.find_by(probe);
        if id == NIL {
            return None;
        }
        self.len -= 1;
        Some(self.delete_node(id))
    }

    // Structurally remove `id` and return its payload.
    fn delete_node(&mut self, mut id: NodeId) -> T {
        // Two children: swap payloads with the in-order predecessor (the
        // rightmost node of the left subtree) and delete there instead. Only
        // values move, so ordering holds, and the predecessor has no right
        // child, leaving a one-child or leaf deletion.
        if self.node(id).left != NIL && self.node(id).right != NIL {
            let pred = self.rightmost(self.node(id).left);
            self.swap_values(id, pred);
            id = pred;
        }

        let left = self.node(id).left;
        let right = self.node(id).right;

        if left != NIL || right != NIL {
            // Exactly one child: promote it. Deleting a black node costs the
            // path a black level; a red child absorbs it by recoloring,
            // otherwise the child carries a double black to resolve.
            let child = if left != NIL { left } else { right };
            let parent = self.node(id).parent;
            if parent != NIL {
                let d = self.parent_direction(id);
                self.adopt(parent, child, d);
            } else {
                self.node_mut(child).parent = NIL;
                self.root = child;
            }

            if self.node(id).color == Color::Black {
                if self.node(child).color == Color::Red {
                    self.node_mut(child).color = Color::Black;
                } else {
                    self.resolve_double_black(child);
                }
            }
            return self.free_node(id);
        }

        // Leaf: a red leaf unlinks directly; a black leaf is a double black
        // that must resolve before it unlinks.
        if self.node(id).color == Color::Black {
            self.resolve_double_black(id);
        }
        if id == self.root {
            self.root = NIL;
        } else {
            let parent = self.node(id).parent;
            match self.parent_direction(id) {
                Direction::Left => self.node_mut(parent).left = NIL,
                Direction::Right => self.node_mut(parent).right = NIL,
            }
        }
        self.free_node(id)
    }

    // `n` counts for two black levels. Redistribute blackness by the sibling
    // case analysis, ascending when both the sibling's children and the
    // parent are black.
    fn resolve_double_black(&mut self, mut n: NodeId) {
        loop {
            debug_assert_eq!(self.node(n).color, Color::Black);

            let parent = self.node(n).parent;
            if parent == NIL {
                // The root absorbs the extra black level.
                self.root = n;
                return;
            }

            let toward = self.parent_direction(n);
            let away = toward.opposite();
            let mut sibling = self.sibling(n);

            // Case 1: red sibling. Rotate the parent toward n and recolor;
            // the new sibling is a former child of a red node and therefore
            // black, so one of the cases below applies.
            if self.is_red(sibling) {
                self.rotate(parent, toward);
                self.node_mut(sibling).color = Color::Black;
                self.node_mut(parent).color = Color::Red;
                sibling = self.sibling(n);
                debug_assert!(sibling != NIL && !self.is_red(sibling));
            }

            // Case 2: the sibling's outer child (away from n) is red.
            // Rotate the parent toward n; the sibling takes the parent's
            // prior color, parent and outer child turn black. Resolved.
            let outer = self.child(sibling, away);
            if self.is_red(outer) {
                self.rotate(parent, toward);
                let parent_color = self.node(parent).color;
                self.node_mut(sibling).color = parent_color;
                self.node_mut(parent).color = Color::Black;
                self.node_mut(outer).color = Color::Black;
                return;
            }

            // Case 3: only the inner child is red. Rotate the sibling away
            // from n and recolor, converting into case 2 on the next pass.
            let inner = self.child(sibling, toward);
            if self.is_red(inner) {
                self.rotate(sibling, away);
                self.node_mut(sibling).color = Color::Red;
                self.node_mut(inner).color = Color::Black;
                continue;
            }

            // Case 4: sibling and both its children black. Recolor the
            // sibling red; a red parent absorbs the black level, a black
            // parent becomes the double black.
            self.node_mut(sibling).color = Color::Red;
            if self.is_red(parent) {
                self.node_mut(parent).color = Color::Black;
                return;
            }
            n = parent;
        }
    }

    // ---- ordered queries ----

    /// The least element, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        if self.root == NIL {
            None
        } else {
            Some(&self.node(self.leftmost(self.root)).value)
        }
    }

    /// The greatest element, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        if self.root == NIL {
            None
        } else {
            Some(&self.node(self.rightmost(self.root)).value)
        }
    }

    /// The greatest stored element strictly less than `value`.
    ///
    /// `value` itself does not need to be stored; the predecessor resolves
    /// relative to where it would sit.
    pub fn predecessor(&self, value: &T) -> Option<&T> {
        let mut cur = self.root;
        let mut best = NIL;
        while cur != NIL {
            if self.cmp.compare(&self.node(cur).value, value) == Ordering::Less {
                best = cur;
                cur = self.node(cur).right;
            } else {
                cur = self.node(cur).left;
            }
        }
        if best == NIL {
            None
        } else {
            Some(&self.node(best).value)
        }
    }

    /// The least stored element strictly greater than `value`.
    pub fn successor(&self, value: &T) -> Option<&T> {
        let mut cur = self.root;
        let mut best = NIL;
        while cur != NIL {
            if self.cmp.compare(&self.node(cur).value, value) == Ordering::Greater {
                best = cur;
                cur = self.node(cur).left;
            } else {
                cur = self.node(cur).right;
            }
        }
        if best == NIL {
            None
        } else {
            Some(&self.node(best).value)
        }
    }

    // In-order node handles, by explicit stack.
    fn inorder_ids(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<NodeId> = Vec::new();
        let mut cur = self.root;
        loop {
            while cur != NIL {
                stack.push(cur);
                cur = self.node(cur).left;
            }
            match stack.pop() {
                Some(id) => {
                    out.push(id);
                    cur = self.node(id).right;
                }
                None => break,
            }
        }
        out
    }

    /// The full in-order sequence, materialized into a fresh `Vec` on every
    /// call.
    pub fn elements(&self) -> Vec<&T> {
        self.inorder_ids()
            .into_iter()
            .map(|id| &self.node(id).value)
            .collect()
    }

    /// Consume the tree into its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let ids = self.inorder_ids();
        ids.into_iter()
            .map(|id| {
                self.slots[id as usize]
                    .take()
                    .expect("rb-tree: stale node handle")
                    .value
            })
            .collect()
    }

    // ---- diagnostics ----

    /// Cheap structural check: root color, root parent link, and length
    /// consistency. Never runs as part of a mutation.
    pub fn check(&self) -> Result<()> {
        if self.root == NIL {
            if self.len != 0 {
                return Err(DatakitError::invalid_structure(
                    "empty tree with nonzero length",
                ));
            }
            return Ok(());
        }
        let root = self.node(self.root);
        if root.parent != NIL {
            return Err(DatakitError::invalid_structure("root has a parent"));
        }
        if root.color != Color::Black {
            return Err(DatakitError::invalid_structure("root is not black"));
        }
        Ok(())
    }

    /// Full-tree check: everything [`RbTree::check`] verifies plus parent
    /// links, strict ordering, the red-red prohibition, and equal black
    /// height on every path. O(n); intended for tests and debugging.
    pub fn check_deep(&self) -> Result<()> {
        self.check()?;
        if self.root == NIL {
            return Ok(());
        }
        let (_, count) = self.check_node(self.root)?;
        if count != self.len {
            return Err(DatakitError::invalid_structure(format!(
                "tree holds {} nodes but reports length {}",
                count, self.len
            )));
        }
        Ok(())
    }

    // Returns (black height, node count) of the subtree at `id`.
    fn check_node(&self, id: NodeId) -> Result<(u32, usize)> {
        let node = self.node(id);
        if node.color == Color::Red && (self.is_red(node.left) || self.is_red(node.right)) {
            return Err(DatakitError::invalid_structure("red node with red child"));
        }

        let (left_height, left_count) = if node.left != NIL {
            if self.node(node.left).parent != id {
                return Err(DatakitError::invalid_structure("mismatched parent link"));
            }
            if self.cmp.compare(&self.node(node.left).value, &node.value) != Ordering::Less {
                return Err(DatakitError::invalid_structure("left child out of order"));
            }
            self.check_node(node.left)?
        } else {
            (0, 0)
        };

        let (right_height, right_count) = if node.right != NIL {
            if self.node(node.right).parent != id {
                return Err(DatakitError::invalid_structure("mismatched parent link"));
            }
            if self.cmp.compare(&self.node(node.right).value, &node.value) != Ordering::Greater {
                return Err(DatakitError::invalid_structure("right child out of order"));
            }
            self.check_node(node.right)?
        } else {
            (0, 0)
        };

        if left_height != right_height {
            return Err(DatakitError::invalid_structure("unequal black height"));
        }

        let own = if node.color == Color::Black { 1 } else { 0 };
        Ok((left_height + own, 1 + left_count + right_count))
    }
}

impl<T: fmt::Debug, C: Comparator<T>> fmt::Debug for RbTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements()).finish()
    }
}
