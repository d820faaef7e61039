//! Helper algorithms over [`Graph`].

use super::Graph;

/// Strongly connected components with more than one node, plus nodes carrying a self-loop.
///
/// Each cycle lists its nodes in graph insertion order; cycles are ordered by their first
/// node's insertion index.
pub fn find_cycles<N, E>(g: &Graph<N, E>) -> Vec<Vec<String>>
where
    N: Default + 'static,
    E: Default + 'static,
{
    const UNVISITED: usize = usize::MAX;

    // Tarjan's algorithm with an explicit stack of (node, next out-edge) frames, so long
    // dummy chains cannot overflow the call stack.
    struct Tarjan<'a, N, E>
    where
        N: Default + 'static,
        E: Default + 'static,
    {
        g: &'a Graph<N, E>,
        next_index: usize,
        index: Vec<usize>,
        lowlink: Vec<usize>,
        on_stack: Vec<bool>,
        stack: Vec<usize>,
        frames: Vec<(usize, usize)>,
        sccs: Vec<Vec<usize>>,
    }

    impl<N, E> Tarjan<'_, N, E>
    where
        N: Default + 'static,
        E: Default + 'static,
    {
        fn enter(&mut self, v: usize) {
            self.index[v] = self.next_index;
            self.lowlink[v] = self.next_index;
            self.next_index += 1;
            self.stack.push(v);
            self.on_stack[v] = true;
            self.frames.push((v, 0));
        }

        fn run(&mut self, root: usize) {
            let g = self.g;
            self.enter(root);

            while let Some(frame) = self.frames.last_mut() {
                let v = frame.0;
                if let Some(&edge_idx) = g.nodes[v].out_edges.get(frame.1) {
                    frame.1 += 1;
                    let w = g.edges[edge_idx].w_ix;
                    if self.index[w] == UNVISITED {
                        self.enter(w);
                    } else if self.on_stack[w] {
                        self.lowlink[v] = self.lowlink[v].min(self.index[w]);
                    }
                    continue;
                }

                self.frames.pop();
                if self.lowlink[v] == self.index[v] {
                    let mut scc: Vec<usize> = Vec::new();
                    while let Some(w) = self.stack.pop() {
                        self.on_stack[w] = false;
                        scc.push(w);
                        if w == v {
                            break;
                        }
                    }
                    self.sccs.push(scc);
                }
                if let Some(&(parent, _)) = self.frames.last() {
                    self.lowlink[parent] = self.lowlink[parent].min(self.lowlink[v]);
                }
            }
        }
    }

    let n = g.node_count();
    let mut tarjan = Tarjan {
        g,
        next_index: 0,
        index: vec![UNVISITED; n],
        lowlink: vec![0; n],
        on_stack: vec![false; n],
        stack: Vec::new(),
        frames: Vec::new(),
        sccs: Vec::new(),
    };
    for v in 0..n {
        if tarjan.index[v] == UNVISITED {
            tarjan.run(v);
        }
    }

    let mut cycles: Vec<Vec<usize>> = Vec::new();
    for mut scc in tarjan.sccs {
        if scc.len() > 1 {
            scc.sort_unstable();
            cycles.push(scc);
        } else {
            let v = scc[0];
            let self_loop = g.nodes[v]
                .out_edges
                .iter()
                .any(|&e| g.edges[e].w_ix == v);
            if self_loop {
                cycles.push(scc);
            }
        }
    }
    cycles.sort_by_key(|c| c[0]);

    cycles
        .into_iter()
        .map(|c| c.into_iter().map(|ix| g.nodes[ix].id.clone()).collect())
        .collect()
}

pub fn is_acyclic<N, E>(g: &Graph<N, E>) -> bool
where
    N: Default + 'static,
    E: Default + 'static,
{
    find_cycles(g).is_empty()
}

/// Depth-first preorder from `roots`, following out-edges in insertion order.
pub fn preorder<N, E>(g: &Graph<N, E>, roots: &[&str]) -> Vec<String>
where
    N: Default + 'static,
    E: Default + 'static,
{
    let mut visited = vec![false; g.node_count()];
    let mut out: Vec<String> = Vec::new();

    for root in roots {
        let Some(root_ix) = g.node_ix(root) else {
            continue;
        };
        let mut stack: Vec<usize> = vec![root_ix];
        while let Some(v) = stack.pop() {
            if visited[v] {
                continue;
            }
            visited[v] = true;
            out.push(g.nodes[v].id.clone());
            // Reverse so the first out-edge is explored first.
            for &edge_idx in g.nodes[v].out_edges.iter().rev() {
                let w = g.edges[edge_idx].w_ix;
                if !visited[w] {
                    stack.push(w);
                }
            }
        }
    }

    out
}
