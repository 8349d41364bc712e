//! Tarjan's strongly connected components, driven by an explicit work stack.
//!
//! The recursive formulation needs call-stack depth proportional to the
//! longest simple path. Here each DFS frame is a `(state, next_edge)` pair on
//! a heap-allocated stack, so long chains cannot overflow.

use chainscope_graph::Graph;
use tracing::debug;

use crate::partition::{Class, Partition};

/// Per-state bookkeeping for one decomposition run.
#[derive(Debug, Clone, Copy)]
struct Visit {
    /// Discovery order, `None` until the state is first reached.
    index: Option<usize>,
    /// Smallest discovery index reachable from the state's DFS subtree.
    lowlink: usize,
    on_stack: bool,
}

struct Tarjan<'g> {
    graph: &'g Graph,
    visits: Vec<Visit>,
    counter: usize,
    stack: Vec<usize>,
    frames: Vec<(usize, usize)>,
    classes: Vec<Class>,
}

impl<'g> Tarjan<'g> {
    fn new(graph: &'g Graph) -> Self {
        let n = graph.n_states();
        Self {
            graph,
            visits: vec![
                Visit {
                    index: None,
                    lowlink: 0,
                    on_stack: false,
                };
                n
            ],
            counter: 0,
            stack: Vec::with_capacity(n),
            frames: Vec::new(),
            classes: Vec::new(),
        }
    }

    fn discover(&mut self, v: usize) {
        self.visits[v] = Visit {
            index: Some(self.counter),
            lowlink: self.counter,
            on_stack: true,
        };
        self.counter += 1;
        self.stack.push(v);
        self.frames.push((v, 0));
    }

    fn visit_from(&mut self, root: usize) {
        let graph = self.graph;
        self.discover(root);

        while let Some(&(v, pos)) = self.frames.last() {
            let edges = graph.out_edges_by_index(v);
            if let Some(edge) = edges.get(pos) {
                let top = self.frames.len() - 1;
                self.frames[top].1 += 1;

                let w = edge.to_index();
                match self.visits[w].index {
                    None => self.discover(w),
                    Some(w_index) if self.visits[w].on_stack => {
                        let low = &mut self.visits[v].lowlink;
                        *low = (*low).min(w_index);
                    }
                    // Finished in an earlier component.
                    Some(_) => {}
                }
                continue;
            }

            // All edges of v explored.
            self.frames.pop();
            let v_visit = self.visits[v];
            if Some(v_visit.lowlink) == v_visit.index {
                self.pop_class(v);
            }
            if let Some(&(parent, _)) = self.frames.last() {
                let low = &mut self.visits[parent].lowlink;
                *low = (*low).min(v_visit.lowlink);
            }
        }
    }

    fn pop_class(&mut self, root: usize) {
        let mut members = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.visits[w].on_stack = false;
            members.push(w + 1);
            if w == root {
                break;
            }
        }
        let name = format!("C{}", self.classes.len() + 1);
        self.classes.push(Class::new(name, members));
    }
}

/// Decomposes the graph into strongly connected components.
///
/// Classes are numbered `C1, C2, ...` in the order their roots complete;
/// members are listed in stack-pop order, the root last. Every state ends up
/// in exactly one class.
#[tracing::instrument(skip_all, fields(n_states = graph.n_states(), n_edges = graph.n_edges()))]
pub fn tarjan(graph: &Graph) -> Partition {
    let mut run = Tarjan::new(graph);
    for root in 0..graph.n_states() {
        if run.visits[root].index.is_none() {
            run.visit_from(root);
        }
    }
    debug!(n_classes = run.classes.len(), "decomposition complete");
    Partition::new(run.classes, graph.n_states())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, edges: &[(usize, usize, f64)]) -> Graph {
        let mut g = Graph::new(n).unwrap();
        for &(from, to, p) in edges {
            g.add_edge(from, to, p).unwrap();
        }
        g
    }

    fn sorted_members(p: &Partition) -> Vec<Vec<usize>> {
        let mut out: Vec<Vec<usize>> = p
            .classes()
            .iter()
            .map(|c| {
                let mut m = c.members().to_vec();
                m.sort_unstable();
                m
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn single_self_loop() {
        let p = tarjan(&graph(1, &[(1, 1, 1.0)]));
        assert_eq!(p.len(), 1);
        assert_eq!(p.classes()[0].name(), "C1");
        assert_eq!(p.classes()[0].members(), &[1]);
    }

    #[test]
    fn linear_chain_gives_singletons() {
        let p = tarjan(&graph(3, &[(1, 2, 1.0), (2, 3, 1.0), (3, 3, 1.0)]));
        assert_eq!(p.len(), 3);
        // Sinks complete first.
        let members: Vec<&[usize]> = p.classes().iter().map(|c| c.members()).collect();
        assert_eq!(members, vec![&[3][..], &[2][..], &[1][..]]);
        let names: Vec<&str> = p.classes().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn two_cycle_is_one_class() {
        let p = tarjan(&graph(2, &[(1, 2, 1.0), (2, 1, 1.0)]));
        assert_eq!(p.len(), 1);
        // Pop order: 2 was pushed last, root 1 comes off last.
        assert_eq!(p.classes()[0].members(), &[2, 1]);
    }

    #[test]
    fn mixed_components() {
        // {1,2,3} cycle feeding {4,5} cycle, plus isolated 6.
        let p = tarjan(&graph(
            6,
            &[
                (1, 2, 0.5),
                (2, 3, 1.0),
                (3, 1, 1.0),
                (1, 4, 0.5),
                (4, 5, 1.0),
                (5, 4, 1.0),
                (6, 6, 1.0),
            ],
        ));
        assert_eq!(
            sorted_members(&p),
            vec![vec![1, 2, 3], vec![4, 5], vec![6]]
        );
    }

    #[test]
    fn states_without_edges_are_singletons() {
        let p = tarjan(&graph(3, &[]));
        assert_eq!(sorted_members(&p), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn cross_edge_to_finished_component_is_ignored() {
        // 1 -> 2 -> 3 -> 2, and 1 -> 3 reaches a finished class later.
        let p = tarjan(&graph(3, &[(1, 2, 0.5), (1, 3, 0.5), (2, 3, 1.0), (3, 2, 1.0)]));
        assert_eq!(sorted_members(&p), vec![vec![1], vec![2, 3]]);
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let n = 200_000;
        let mut g = Graph::new(n).unwrap();
        for s in 1..n {
            g.add_edge(s, s + 1, 1.0).unwrap();
        }
        g.add_edge(n, 1, 1.0).unwrap();
        let p = tarjan(&g);
        assert_eq!(p.len(), 1);
        assert_eq!(p.classes()[0].len(), n);
    }
}
