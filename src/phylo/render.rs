use std::io::{self, Write};

use crate::phylo::engine::Tree;

/// Writes the full expanded distance matrix (leaves plus synthesized
/// internal nodes) in the same CSV shape as the input.
///
/// Streams directly to `out` rather than building the whole CSV in
/// memory first: the matrix is `O(n²)` rows by columns and there is no
/// reason to hold the rendered text twice.
pub fn render_matrix<W: Write>(tree: &Tree, out: &mut W) -> io::Result<()> {
    let n = tree.num_all_nodes();

    for node in tree.nodes() {
        write!(out, ",{}", node.name)?;
    }
    writeln!(out)?;

    for i in 0..n {
        write!(out, "{}", tree.node(i).name)?;
        for j in 0..n {
            write!(out, ",{:.2}", tree.dist(i, j))?;
        }
        if i + 1 < n {
            writeln!(out)?;
        }
    }

    Ok(())
}
