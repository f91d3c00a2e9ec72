use crate::error::NewickError;
use crate::phylo::engine::Tree;

/// How to pick the leaf excluded from a Newick rendering and used to root
/// the otherwise-unrooted NJ tree.
#[derive(Debug, Clone)]
pub enum OutlierSelector {
    /// Pick the leaf with the greatest summed distance to the other
    /// leaves, tie-broken by lowest leaf index.
    Auto,
    /// Use the leaf with this exact label; error if no such leaf exists.
    Named(String),
}

fn select_outlier(tree: &Tree, selector: &OutlierSelector) -> Result<usize, NewickError> {
    match selector {
        OutlierSelector::Named(name) => (0..tree.num_leaves())
            .find(|&i| &*tree.node(i).name == name.as_str())
            .ok_or_else(|| NewickError::UnknownOutlier(name.clone())),
        OutlierSelector::Auto => {
            let mut best = 0;
            let mut best_sum = f64::NEG_INFINITY;
            for l in 0..tree.num_leaves() {
                let sum: f64 = (0..tree.num_leaves())
                    .filter(|&k| k != l)
                    .map(|k| tree.dist(l, k))
                    .sum();
                if sum > best_sum {
                    best_sum = sum;
                    best = l;
                }
            }
            Ok(best)
        }
    }
}

/// Renders `tree` as a Newick string, rooted at the chosen outlier's
/// unique neighbor.
///
/// For `n = 1` there is no outlier to choose and the sole leaf is the
/// whole tree. For `n = 2` the outlier's neighbor is itself a leaf with
/// no remaining edges to print once the outlier is excluded; this
/// degenerate case is rendered as a bare `<label>;`.
pub fn to_newick(tree: &Tree, selector: &OutlierSelector) -> Result<String, NewickError> {
    if tree.num_leaves() == 1 {
        return Ok(format!("{};", tree.node(0).name));
    }

    let outlier = select_outlier(tree, selector)?;
    let root = tree
        .node(outlier)
        .neighbors[0]
        .expect("every leaf has exactly one neighbor");

    if tree.num_leaves() == 2 {
        return Ok(format!("{};", tree.node(root).name));
    }

    let mut s = String::new();
    write_subtree(tree, root, None, outlier, &mut s);
    s.push(';');
    Ok(s)
}

/// Writes the subtree rooted at `node_idx`, excluding the path back to
/// `parent` and the excluded `outlier` node. Internal nodes carry no
/// name in the output; only leaves and edge lengths are emitted.
fn write_subtree(tree: &Tree, node_idx: usize, parent: Option<usize>, outlier: usize, out: &mut String) {
    let node = tree.node(node_idx);
    let children: Vec<usize> = node
        .neighbor_iter()
        .filter(|&nb| Some(nb) != parent && nb != outlier)
        .collect();

    if children.is_empty() {
        out.push_str(&node.name);
        return;
    }

    out.push('(');
    for (i, &child) in children.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_subtree(tree, child, Some(node_idx), outlier, out);
        if let Some(len) = tree.node(child).length_to(node_idx) {
            out.push(':');
            out.push_str(&format!("{len:.2}"));
        }
    }
    out.push(')');
}
