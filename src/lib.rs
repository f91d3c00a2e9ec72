pub mod config;
pub mod error;
pub mod io;
pub mod limits;
pub mod phylo;

pub use config::{run, RenderMode};
pub use error::{BuildError, Failed, NewickError, ParseError};
pub use phylo::{
    build, render_matrix, to_newick, DistanceMatrix, Edge, EdgeSink, Node, OutlierSelector, Tree,
};
