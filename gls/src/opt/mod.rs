pub mod greedy;
pub mod local_search;

mod gls_optimizer;

#[doc(inline)]
pub use gls_optimizer::GLSOptimizer;
