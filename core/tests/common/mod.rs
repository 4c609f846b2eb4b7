mod error;
mod node_builder;
mod notifier;
mod utils;

#[allow(unused_imports)]
pub use error::*;
pub use node_builder::*;
#[allow(unused_imports)]
pub use notifier::*;
pub use utils::*;
