//! Layered decision-tree graph
//!
//! One layer per activity, in decision order (the master slot has no layer).
//! A layer holds a "drop" decision node, a "keep" decision node and one chance
//! node per outcome hanging from "keep". Every node on the previous frontier
//! (the root, or the previous layer's "drop" node and chance nodes) links to
//! both decision nodes of the next layer, so the graph grows linearly with the
//! number of activities rather than as a full tree.

use serde::{Deserialize, Serialize};

use crate::model::{DecisionKey, Scenario};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Root,
    Decision { keep: bool },
    Chance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: usize,
    pub kind: NodeKind,
    /// 0 for the root, `i + 1` for the i-th activity layer
    pub depth: usize,
    pub decision_key: Option<DecisionKey>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEdge {
    pub from: usize,
    pub to: usize,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
    pub edges: Vec<TreeEdge>,
}

impl DecisionTree {
    /// Build the graph for a scenario
    #[must_use]
    pub fn build(scenario: &Scenario) -> Self {
        let mut tree = DecisionTree::default();
        let root = tree.add_node(NodeKind::Root, 0, None, "Start".to_string());
        let mut frontier = vec![root];

        let activities = scenario
            .decision_order()
            .iter()
            .filter_map(|slot| scenario.slot_activity(slot));

        for (layer, activity) in activities.enumerate() {
            let depth = layer + 1;
            let key = Some(activity.decision_key.clone());

            let drop = tree.add_node(
                NodeKind::Decision { keep: false },
                depth,
                key.clone(),
                format!("{}: NO", activity.name),
            );
            let keep = tree.add_node(
                NodeKind::Decision { keep: true },
                depth,
                key.clone(),
                format!("{}: YES", activity.name),
            );
            for &parent in &frontier {
                tree.add_edge(parent, drop, "0".to_string());
                tree.add_edge(parent, keep, "1".to_string());
            }

            let mut next = Vec::with_capacity(activity.outcomes.len() + 1);
            next.push(drop);
            for outcome in &activity.outcomes {
                let chance = tree.add_node(
                    NodeKind::Chance,
                    depth,
                    key.clone(),
                    format!(
                        "{} (p={:.2}, value={:.0})",
                        outcome.label, outcome.probability, outcome.value
                    ),
                );
                tree.add_edge(keep, chance, format!("p={:.2}", outcome.probability));
                next.push(chance);
            }
            frontier = next;
        }

        tree
    }

    fn add_node(
        &mut self,
        kind: NodeKind,
        depth: usize,
        decision_key: Option<DecisionKey>,
        label: String,
    ) -> usize {
        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            id,
            kind,
            depth,
            decision_key,
            label,
        });
        id
    }

    fn add_edge(&mut self, from: usize, to: usize, label: String) {
        self.edges.push(TreeEdge { from, to, label });
    }

    /// Nodes of one layer
    pub fn layer(&self, depth: usize) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter().filter(move |n| n.depth == depth)
    }

    /// Outgoing edges of a node
    pub fn children(&self, id: usize) -> impl Iterator<Item = &TreeEdge> {
        self.edges.iter().filter(move |e| e.from == id)
    }
}
