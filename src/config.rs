use std::io::{self, Write};

use crate::error::Failed;
use crate::phylo::{build, render_matrix, to_newick, Edge, EdgeSink, OutlierSelector};

/// The crate's one configuration surface: which rendering to produce
/// once a distance matrix has been joined into a tree.
///
/// This is the only place that knows about all three pipeline stages
/// (parser, engine, renderer) together; argument parsing, help text, and
/// process exit codes stay external collaborators and never appear here.
#[derive(Debug, Clone)]
pub enum RenderMode {
    /// Run `build`, streaming each joined edge to the primary sink as it happens.
    Default,
    /// Run `build` with edge emission suppressed, then render the expanded matrix.
    Matrix,
    /// Run `build` with edge emission suppressed, then render a Newick tree.
    Newick { outlier: Option<String> },
}

struct StreamEdges<'a, W> {
    out: &'a mut W,
    result: io::Result<()>,
}

impl<'a, W: Write> EdgeSink for StreamEdges<'a, W> {
    fn emit(&mut self, edge: Edge) {
        if self.result.is_ok() {
            self.result = writeln!(self.out, "{},{},{:.2}", edge.u, edge.v, edge.length);
        }
    }
}

/// Runs the full parse -> build -> render pipeline for one `mode`. On
/// failure, a single human-readable diagnostic is written to `err`
/// before returning; any edges already streamed to `out` under
/// `RenderMode::Default` before the failure was detected are left in
/// place rather than retracted.
pub fn run<O: Write, E: Write>(bytes: &[u8], mode: &RenderMode, out: &mut O, err: &mut E) -> Result<(), Failed> {
    match run_inner(bytes, mode, out) {
        Ok(()) => Ok(()),
        Err(failed) => {
            let _ = writeln!(err, "{failed}");
            Err(failed)
        }
    }
}

fn run_inner<O: Write>(bytes: &[u8], mode: &RenderMode, out: &mut O) -> Result<(), Failed> {
    let matrix = crate::io::parse(bytes)?;

    match mode {
        RenderMode::Default => {
            let mut sink = StreamEdges { out, result: Ok(()) };
            let _tree = build(&matrix, Some(&mut sink))?;
            sink.result?;
        }
        RenderMode::Matrix => {
            let tree = build(&matrix, None)?;
            render_matrix(&tree, out)?;
        }
        RenderMode::Newick { outlier } => {
            let tree = build(&matrix, None)?;
            let selector = match outlier {
                Some(name) => OutlierSelector::Named(name.clone()),
                None => OutlierSelector::Auto,
            };
            let newick = to_newick(&tree, &selector)?;
            out.write_all(newick.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }

    Ok(())
}
