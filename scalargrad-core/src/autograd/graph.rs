use crate::graph::{Node, NodeId};

/// Orders every node reachable from `root` so that each node comes after all
/// of its children.
///
/// Post-order depth-first search with an explicit stack, so graph depth is
/// bounded by heap rather than the call stack. Visited nodes are keyed by
/// index; a node reachable along several paths appears exactly once.
pub(crate) fn topological_sort(nodes: &[Node], root: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; nodes.len()];
    let mut sorted = Vec::new();
    // (node, children already pushed)
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            sorted.push(id);
            continue;
        }
        if visited[id.0] {
            continue;
        }
        visited[id.0] = true;
        stack.push((id, true));

        // Reverse so the first operand is explored first.
        let children: Vec<NodeId> = nodes[id.0].children().collect();
        for child in children.into_iter().rev() {
            if !visited[child.0] {
                stack.push((child, false));
            }
        }
    }
    sorted
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
