use crate::arena::NodeId;
use crate::bst_tree::tree::swap_positions;
use crate::node::{weight, Link, Node, Nodes};
use std::cmp::Ordering;

fn subtree_weight<T>(nodes: &Nodes<T>, id: NodeId) -> usize {
    1 + weight(nodes, nodes[id].left) + weight(nodes, nodes[id].right)
}

// a single rotation per check: no second look at the heavier child's own
// skew, so no double rotations
fn balance<T>(nodes: &mut Nodes<T>, id: NodeId) -> NodeId {
    let lw = weight(nodes, nodes[id].left) as isize;
    let rw = weight(nodes, nodes[id].right) as isize;

    if lw - rw > 2 {
        rotate_right(nodes, id)
    } else if rw - lw > 2 {
        rotate_left(nodes, id)
    } else {
        id
    }
}

// returns the subtree's new root; the caller is responsible for noticing
// when the rotated node was the tree root
fn rotate_left<T>(nodes: &mut Nodes<T>, id: NodeId) -> NodeId {
    let pivot = nodes[id]
        .right
        .expect("Expected a right child to rotate left.");

    // the pivot's left subtree becomes the rotated node's right subtree
    let transfer = nodes[pivot].left;
    if let Some(t) = transfer {
        nodes[t].parent = Some(id);
    }
    nodes[id].right = transfer;

    // the slot that held the rotated node now holds the pivot
    let parent = nodes[id].parent;
    if let Some(p) = parent {
        if nodes[p].left == Some(id) {
            nodes[p].left = Some(pivot);
        } else {
            nodes[p].right = Some(pivot);
        }
    }
    nodes[pivot].parent = parent;

    nodes[pivot].left = Some(id);
    nodes[id].parent = Some(pivot);

    // recompute weights bottom-up: the demoted node first
    nodes[id].weight = subtree_weight(nodes, id);
    nodes[pivot].weight = subtree_weight(nodes, pivot);

    pivot
}

fn rotate_right<T>(nodes: &mut Nodes<T>, id: NodeId) -> NodeId {
    let pivot = nodes[id]
        .left
        .expect("Expected a left child to rotate right.");

    let transfer = nodes[pivot].right;
    if let Some(t) = transfer {
        nodes[t].parent = Some(id);
    }
    nodes[id].left = transfer;

    let parent = nodes[id].parent;
    if let Some(p) = parent {
        if nodes[p].left == Some(id) {
            nodes[p].left = Some(pivot);
        } else {
            nodes[p].right = Some(pivot);
        }
    }
    nodes[pivot].parent = parent;

    nodes[pivot].right = Some(id);
    nodes[id].parent = Some(pivot);

    nodes[id].weight = subtree_weight(nodes, id);
    nodes[pivot].weight = subtree_weight(nodes, pivot);

    pivot
}

pub fn insert<T>(nodes: &mut Nodes<T>, root: &mut Link, value: T)
where
    T: Ord,
{
    match *root {
        None => *root = Some(nodes.insert(Node::new(value, None))),
        Some(id) => insert_at(nodes, root, value, id),
    }
}

// descend, bumping each visited weight before recursing; on the way back up,
// balance-check the node whose recursive call just returned and adopt its
// replacement as root if it held that position
fn insert_at<T>(nodes: &mut Nodes<T>, root: &mut Link, value: T, id: NodeId)
where
    T: Ord,
{
    nodes[id].weight += 1;

    if value > nodes[id].value {
        match nodes[id].right {
            None => {
                let leaf = nodes.insert(Node::new(value, Some(id)));
                nodes[id].right = Some(leaf);
                return;
            }
            Some(right) => insert_at(nodes, root, value, right),
        }
    } else {
        match nodes[id].left {
            None => {
                let leaf = nodes.insert(Node::new(value, Some(id)));
                nodes[id].left = Some(leaf);
                return;
            }
            Some(left) => insert_at(nodes, root, value, left),
        }
    }

    let was_root = *root == Some(id);
    let subtree = balance(nodes, id);
    if was_root {
        *root = Some(subtree);
    }
}

// walks toward `value`, decrementing the weight of every node strictly above
// an actually-found target; a miss leaves every weight untouched
fn find_delete_node<T>(nodes: &mut Nodes<T>, id: NodeId, value: &T) -> Option<NodeId>
where
    T: Ord,
{
    let found = match value.cmp(&nodes[id].value) {
        Ordering::Equal => return Some(id),
        Ordering::Less => {
            let left = nodes[id].left?;
            find_delete_node(nodes, left, value)
        }
        Ordering::Greater => {
            let right = nodes[id].right?;
            find_delete_node(nodes, right, value)
        }
    };

    if found.is_some() {
        nodes[id].weight -= 1;
    }
    found
}

pub fn delete<T>(nodes: &mut Nodes<T>, root: &mut Link, value: &T) -> Option<T>
where
    T: Ord,
{
    let target = find_delete_node(nodes, (*root)?, value)?;
    Some(delete_node(nodes, root, target))
}

fn delete_node<T>(nodes: &mut Nodes<T>, root: &mut Link, id: NodeId) -> T
where
    T: Ord,
{
    let (left, right, parent) = {
        let node = &nodes[id];
        (node.left, node.right, node.parent)
    };

    match (left, right) {
        (None, None) => {
            let parent = match parent {
                None => {
                    *root = None;
                    return nodes.remove(id).value;
                }
                Some(p) => p,
            };
            if nodes[parent].left == Some(id) {
                nodes[parent].left = None;
            } else {
                nodes[parent].right = None;
            }

            let checked = balance(nodes, parent);
            if nodes[checked].parent.is_none() {
                *root = Some(checked);
            }
            nodes.remove(id).value
        }
        (None, Some(child)) | (Some(child), None) => {
            nodes[child].parent = parent;
            let parent = match parent {
                None => {
                    *root = Some(child);
                    return nodes.remove(id).value;
                }
                Some(p) => p,
            };
            if nodes[parent].left == Some(id) {
                nodes[parent].left = Some(child);
            } else {
                nodes[parent].right = Some(child);
            }

            // the spliced subtree kept its own balance; only the parent is
            // checked
            let checked = balance(nodes, parent);
            if nodes[checked].parent.is_none() {
                *root = Some(checked);
            }
            nodes.remove(id).value
        }
        (Some(left), Some(right)) => {
            // the replacement comes from the heavier subtree; every node on
            // the walk loses one descendant, the replacement included
            let partner = if nodes[left].weight > nodes[right].weight {
                let mut cur = left;
                nodes[cur].weight -= 1;
                while let Some(r) = nodes[cur].right {
                    cur = r;
                    nodes[cur].weight -= 1;
                }
                cur
            } else {
                let mut cur = right;
                nodes[cur].weight -= 1;
                while let Some(l) = nodes[cur].left {
                    cur = l;
                    nodes[cur].weight -= 1;
                }
                cur
            };

            swap_positions(nodes, root, id, partner);

            // the relocated target inherits the replacement's adjusted
            // weight; the replacement recomputes its own from the adopted
            // children
            let inherited = nodes[partner].weight;
            nodes[id].weight = inherited;
            let recomputed = subtree_weight(nodes, partner);
            nodes[partner].weight = recomputed;

            delete_node(nodes, root, id)
        }
    }
}
