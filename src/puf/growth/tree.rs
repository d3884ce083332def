use crate::puf::transaction::RankedItem;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct PufNode {
    pub item: Option<usize>,
    pub weight: f64,
    pub parent: Option<usize>,
    pub children: HashMap<usize, usize>,
}

/// Prefix tree over ranked items. Nodes live in an arena; `header_table` maps an
/// item to every node bearing it and `item_order` remembers when each item got
/// its first node.
#[derive(Debug, Clone)]
pub struct PufTree {
    pub nodes: Vec<PufNode>,
    pub header_table: HashMap<usize, Vec<usize>>,
    pub item_order: Vec<usize>,
    pub info: HashMap<usize, f64>,
    pub root_index: usize,
}

impl PufNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            weight: 0.0,
            parent: None,
            children: HashMap::new(),
        }
    }

    pub fn new_item(item: usize, weight: f64, parent: Option<usize>) -> Self {
        Self {
            item: Some(item),
            weight,
            parent,
            children: HashMap::new(),
        }
    }
}

impl Default for PufTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PufTree {
    pub fn new() -> Self {
        Self::with_info(HashMap::new())
    }

    pub fn with_info(info: HashMap<usize, f64>) -> Self {
        Self {
            nodes: vec![PufNode::new_root()],
            header_table: HashMap::new(),
            item_order: Vec::new(),
            info,
            root_index: 0,
        }
    }

    /// Number of item nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.header_table.is_empty()
    }

    /// Adds `weight` to the child of `parent` labelled `item`, creating it if needed.
    fn add_to_child(&mut self, parent: usize, item: usize, weight: f64) -> usize {
        if let Some(&child_index) = self.nodes[parent].children.get(&item) {
            self.nodes[child_index].weight += weight;
            return child_index;
        }

        let new_index = self.nodes.len();
        self.nodes
            .push(PufNode::new_item(item, weight, Some(parent)));
        self.nodes[parent].children.insert(item, new_index);

        let entry = self.header_table.entry(item).or_default();
        if entry.is_empty() {
            self.item_order.push(item);
        }
        entry.push(new_index);

        new_index
    }

    /// Inserts a ranked transaction. The node at position `i > 0` receives
    /// `max(p[0..i]) * p[i]`, the first node receives `p[0]`.
    pub fn insert_transaction(&mut self, transaction: &[RankedItem]) {
        let mut current_index = self.root_index;
        let mut predecessor_max: Option<f64> = None;

        for ranked in transaction {
            let contribution = match predecessor_max {
                Some(max) => max * ranked.probability,
                None => ranked.probability,
            };
            current_index = self.add_to_child(current_index, ranked.item, contribution);
            predecessor_max = Some(predecessor_max.map_or(ranked.probability, |max| {
                max.max(ranked.probability)
            }));
        }
    }

    /// Inserts a conditional pattern path; every node on it receives `weight`.
    pub fn insert_path(&mut self, path: &[usize], weight: f64) {
        let mut current_index = self.root_index;

        for &item in path {
            current_index = self.add_to_child(current_index, item, weight);
        }
    }

    /// Sum of the weights of every node bearing `item`.
    pub fn item_weight(&self, item: usize) -> f64 {
        self.header_table.get(&item).map_or(0.0, |nodes| {
            nodes.iter().map(|&idx| self.nodes[idx].weight).sum()
        })
    }

    /// Conditional pattern base of `item`: root-to-parent label paths, each
    /// paired with the weight of the node it was collected from.
    pub fn get_prefix_paths(&self, item: usize) -> Vec<(Vec<usize>, f64)> {
        self.header_table.get(&item).map_or(Vec::new(), |nodes| {
            nodes
                .iter()
                .filter_map(|&idx| {
                    let mut path = Vec::new();
                    let mut current = self.nodes[idx].parent;

                    while let Some(i) = current {
                        if let Some(item) = self.nodes[i].item {
                            path.push(item);
                        }
                        current = self.nodes[i].parent;
                    }

                    path.reverse();
                    (!path.is_empty()).then_some((path, self.nodes[idx].weight))
                })
                .collect()
        })
    }

    /// Items in mining order: ascending local support, ties in first-node order.
    pub fn mining_order(&self) -> Vec<usize> {
        let mut order = self.item_order.clone();
        order.sort_by(|a, b| {
            let sa = self.info.get(a).copied().unwrap_or(0.0);
            let sb = self.info.get(b).copied().unwrap_or(0.0);
            sa.total_cmp(&sb)
        });
        order
    }

    /// Unlinks every node bearing `item` from its parent's children. Parent
    /// links of the detached subtrees stay intact.
    pub fn detach_item(&mut self, item: usize) {
        let Some(node_indices) = self.header_table.get(&item) else {
            return;
        };

        for &idx in node_indices {
            if let Some(parent) = self.nodes[idx].parent {
                self.nodes[parent].children.remove(&item);
            }
        }
    }

    /// True when `item` still hangs under at least one parent.
    pub fn is_attached(&self, item: usize) -> bool {
        self.header_table.get(&item).is_some_and(|nodes| {
            nodes.iter().any(|&idx| {
                self.nodes[idx]
                    .parent
                    .is_some_and(|parent| self.nodes[parent].children.get(&item) == Some(&idx))
            })
        })
    }
}
