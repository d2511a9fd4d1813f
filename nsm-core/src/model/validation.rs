//! Dependency resolution for model building.

use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;
use petgraph::Direction;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::errors::{NsmError, NsmResult};
use crate::variable::{VariableKind, VariableRegistry};

use super::types::DependencyGraph;

/// The evaluation plan for the dynamic variables of a model.
#[derive(Debug)]
pub(crate) struct Resolution {
    pub graph: DependencyGraph,
    pub order: Vec<String>,
}

/// Check that every variable a process reads is registered.
///
/// State variables must name a dynamic variable as their derivative.
pub(crate) fn verify_references(registry: &VariableRegistry) -> NsmResult<()> {
    for variable in registry.iter() {
        for input in variable.inputs() {
            if !registry.contains(input) {
                return Err(NsmError::UnknownVariable {
                    variable: variable.name.clone(),
                    reference: input.to_string(),
                });
            }
        }

        if variable.kind == VariableKind::State {
            let derivative = variable.derivative.clone().unwrap_or_default();
            match registry.get(&derivative) {
                Some(v) if v.kind == VariableKind::Dynamic => {}
                _ => {
                    return Err(NsmError::InvalidDerivative {
                        state: variable.name.clone(),
                        derivative,
                    })
                }
            }
        }
    }
    Ok(())
}

/// Build the dependency graph between dynamic variables and order it topologically.
///
/// Static and state variables are not part of the graph as their values are known at the
/// start of a timestep.
/// Independent variables are ordered by registration.
/// Any cycle, including a process that reads its own output, is an error.
pub(crate) fn resolve(registry: &VariableRegistry) -> NsmResult<Resolution> {
    let mut graph = DependencyGraph::new();
    let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();

    for variable in registry.dynamics() {
        let node = graph.add_node(variable.name.clone());
        nodes.insert(variable.name.as_str(), node);
    }

    for variable in registry.dynamics() {
        let target = nodes[variable.name.as_str()];
        for input in variable.inputs() {
            if let Some(&source) = nodes.get(input) {
                graph.update_edge(source, target, ());
            }
        }
    }

    // Kahn's algorithm with a min-heap keyed on registration order
    let mut in_degree: Vec<usize> = graph
        .node_indices()
        .map(|n| graph.neighbors_directed(n, Direction::Incoming).count())
        .collect();
    let mut ready: BinaryHeap<Reverse<usize>> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree == 0)
        .map(|(i, _)| Reverse(i))
        .collect();

    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(Reverse(i)) = ready.pop() {
        let node = NodeIndex::new(i);
        order.push(graph[node].clone());
        for next in graph.neighbors_directed(node, Direction::Outgoing) {
            let degree = &mut in_degree[next.index()];
            *degree -= 1;
            if *degree == 0 {
                ready.push(Reverse(next.index()));
            }
        }
    }

    if order.len() != graph.node_count() {
        return Err(NsmError::Cycle {
            cycle: find_cycle(&graph),
        });
    }

    Ok(Resolution { graph, order })
}

/// Names of the variables in the first strongly connected component that forms a cycle.
fn find_cycle(graph: &DependencyGraph) -> Vec<String> {
    let mut components = tarjan_scc(graph);
    for component in components.iter_mut() {
        component.sort();
    }
    components.sort();

    components
        .into_iter()
        .find(|component| {
            component.len() > 1 || graph.contains_edge(component[0], component[0])
        })
        .map(|component| component.iter().map(|n| graph[*n].clone()).collect())
        .unwrap_or_default()
}
