use crate::config::GLSConfig;
use mkp_rs::io::ext_repr::{ExtMKInstance, ExtMKSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct GLSOutput {
    #[serde(flatten)]
    pub instance: ExtMKInstance,
    /// Solution after the greedy construction, before any local search
    pub greedy_solution: ExtMKSolution,
    pub solution: ExtMKSolution,
    pub config: GLSConfig,
}
