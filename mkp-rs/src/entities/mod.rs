mod instance;
mod item;
mod knapsack;
mod problem;
mod solution;

#[doc(inline)]
pub use instance::MKInstance;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use knapsack::Knapsack;
#[doc(inline)]
pub use problem::MKProblem;
#[doc(inline)]
pub use solution::MKSolution;
