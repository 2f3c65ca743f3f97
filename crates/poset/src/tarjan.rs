//! Tarjan's strongly connected components, used to report cycles in a
//! relation before it's accepted as a partial order.

use crate::partial_order::BitMatrix;

struct Tarjan<'a> {
    edges: &'a BitMatrix,
    index: usize,
    stack: Vec<usize>,
    indices: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    onstack: Vec<bool>,
    components: Vec<Vec<usize>>,
}

/// Every strongly connected component of the directed graph where `(v, w)`
/// being set means an edge `v -> w`. Components are listed in reverse
/// topological order, a component is listed before any component with an edge
/// into it.
pub(crate) fn tarjan(edges: &BitMatrix) -> Vec<Vec<usize>> {
    let vertices = edges.dim;
    let mut state = Tarjan {
        edges,
        index: 0,
        stack: Vec::new(),
        indices: vec![None; vertices],
        lowlink: vec![0; vertices],
        onstack: vec![false; vertices],
        components: Vec::new(),
    };
    for v in 0..vertices {
        if state.indices[v].is_none() {
            state.strongconnect(v);
        }
    }
    state.components
}

impl Tarjan<'_> {
    fn strongconnect(&mut self, v: usize) {
        self.indices[v] = Some(self.index);
        self.lowlink[v] = self.index;
        self.index += 1;
        self.stack.push(v);
        self.onstack[v] = true;

        let edges = self.edges;
        for w in edges.row(v) {
            if v == w {
                continue;
            }
            match self.indices[w] {
                None => {
                    self.strongconnect(w);
                    self.lowlink[v] = self.lowlink[v].min(self.lowlink[w]);
                }
                Some(index) if self.onstack[w] => {
                    self.lowlink[v] = self.lowlink[v].min(index);
                }
                Some(_) => {}
            }
        }

        if Some(self.lowlink[v]) == self.indices[v] {
            let mut component = Vec::new();
            while let Some(w) = self.stack.pop() {
                debug_assert!(self.onstack[w]);
                self.onstack[w] = false;
                component.push(w);
                if v == w {
                    break;
                }
            }
            component.sort_unstable();
            self.components.push(component);
        }
    }
}

/// The first strongly connected component with more than one vertex, i.e. a
/// set of vertices lying on a common cycle.
pub(crate) fn find_cycle(edges: &BitMatrix) -> Option<Vec<usize>> {
    tarjan(edges).into_iter().find(|c| c.len() > 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(tarjan(&BitMatrix::new(0)), Vec::<Vec<usize>>::new());
    }

    #[test]
    fn single() {
        assert_eq!(tarjan(&BitMatrix::new(1)), vec![vec![0]]);
    }

    #[test]
    fn two() {
        assert_eq!(tarjan(&BitMatrix::new(2)), vec![vec![0], vec![1]]);
    }

    #[test]
    fn path_is_reverse_topological() {
        let mut m = BitMatrix::new(3);
        m.set(0, 1);
        m.set(1, 2);
        assert_eq!(tarjan(&m), vec![vec![2], vec![1], vec![0]]);
        assert_eq!(find_cycle(&m), None);
    }

    #[test]
    fn cycle_found() {
        let mut m = BitMatrix::new(4);
        m.set(0, 1);
        m.set(1, 2);
        m.set(2, 1);
        m.set(2, 3);
        assert_eq!(find_cycle(&m), Some(vec![1, 2]));
    }
}
