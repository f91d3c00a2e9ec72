pub mod engine;
pub mod matrix;
pub mod newick;
pub mod render;

pub use engine::{build, Edge, EdgeSink, Node, Tree};
pub use matrix::DistanceMatrix;
pub use newick::{to_newick, OutlierSelector};
pub use render::render_matrix;
