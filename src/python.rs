use crate::graph::{DirectedGraph, Edge, Graph};
use crate::Error;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

#[pyclass(name = "Graph")]
pub struct PyGraph {
    graph: DirectedGraph<String, f64>,
}

#[pymethods]
impl PyGraph {
    #[new]
    fn new(edges: Vec<(String, String, f64)>) -> Self {
        PyGraph {
            graph: edges.into_iter().map(Edge::from).collect(),
        }
    }

    fn contains(&self, node: String) -> bool {
        self.graph.contains(&node)
    }

    fn edges_from(&self, node: String) -> Vec<(String, String, f64)> {
        self.graph
            .edges_from(&node)
            .map(|e| (e.source.clone(), e.dest.clone(), e.cost))
            .collect()
    }

    fn nodes(&self) -> Vec<String> {
        self.graph.nodes().cloned().collect()
    }

    /// Returns `(predecessors, cost)` for the cheapest route
    fn distance(&self, source: String, target: String) -> PyResult<(Vec<String>, f64)> {
        match self.graph.distance(&source, &target) {
            Ok(route) => Ok((route.nodes, route.cost)),
            Err(e @ Error::InvalidNode { .. }) => Err(PyKeyError::new_err(e.to_string())),
            Err(e) => Err(PyValueError::new_err(e.to_string())),
        }
    }

    fn __len__(&self) -> usize {
        self.graph.node_count()
    }

    fn __contains__(&self, node: String) -> bool {
        self.graph.contains(&node)
    }
}

#[pymodule]
#[pyo3(name = "route_finder")]
fn route_finder_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyGraph>()?;
    Ok(())
}
