mod node;
mod react;

pub use node::NODE_TEMPLATE;
pub use react::REACT_TEMPLATE;
