use crate::algorithm::Route;
use crate::graph::{DirectedGraph, Edge, Graph};
use crate::Error;
use libc::{c_char, c_double};
use std::ffi::{CStr, CString};

#[repr(C)]
pub struct FfiGraph {
    graph: DirectedGraph<String, f64>,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiStatus {
    Ok = 0,
    InvalidNode = 1,
    Unreachable = 2,
    InvalidArgument = 3,
}

#[repr(C)]
pub struct FfiRoute {
    nodes: *mut *mut c_char,
    len: usize,
    cost: c_double,
}

fn label(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok().map(str::to_owned)
}

/// Builds a graph from `len` parallel entries of `sources`, `dests` and `costs`.
///
/// Returns null if any pointer is null or any label is not UTF-8.
#[no_mangle]
pub extern "C" fn rf_graph_new(
    sources: *const *const c_char,
    dests: *const *const c_char,
    costs: *const c_double,
    len: usize,
) -> *mut FfiGraph {
    if len > 0 && (sources.is_null() || dests.is_null() || costs.is_null()) {
        return std::ptr::null_mut();
    }

    let mut edges = Vec::with_capacity(len);
    for i in 0..len {
        let (source, dest, cost) = unsafe { (*sources.add(i), *dests.add(i), *costs.add(i)) };
        match (label(source), label(dest)) {
            (Some(source), Some(dest)) => edges.push(Edge::new(source, dest, cost)),
            _ => return std::ptr::null_mut(),
        }
    }

    Box::into_raw(Box::new(FfiGraph {
        graph: DirectedGraph::new(edges),
    }))
}

#[no_mangle]
pub extern "C" fn rf_graph_contains(g: *const FfiGraph, node: *const c_char) -> bool {
    if g.is_null() {
        return false;
    }
    match label(node) {
        Some(node) => unsafe { &(*g).graph }.contains(&node),
        None => false,
    }
}

#[no_mangle]
pub extern "C" fn rf_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

fn into_ffi_route(route: Route<String, f64>) -> *mut FfiRoute {
    let nodes: Vec<*mut c_char> = route
        .nodes
        .into_iter()
        .map(|n| CString::new(n).unwrap_or_default().into_raw())
        .collect();
    let len = nodes.len();
    let nodes = Box::into_raw(nodes.into_boxed_slice()) as *mut *mut c_char;
    Box::into_raw(Box::new(FfiRoute {
        nodes,
        len,
        cost: route.cost,
    }))
}

/// Computes the route from `source` to `target` and stores it in `out`.
///
/// `out` is only written on `FfiStatus::Ok` and must be released with
/// `rf_route_free`.
#[no_mangle]
pub extern "C" fn rf_distance(
    g: *const FfiGraph,
    source: *const c_char,
    target: *const c_char,
    out: *mut *mut FfiRoute,
) -> FfiStatus {
    if g.is_null() || out.is_null() {
        return FfiStatus::InvalidArgument;
    }
    let (source, target) = match (label(source), label(target)) {
        (Some(s), Some(t)) => (s, t),
        _ => return FfiStatus::InvalidArgument,
    };

    let graph = unsafe { &(*g).graph };
    match graph.distance(&source, &target) {
        Ok(route) => {
            unsafe { *out = into_ffi_route(route) };
            FfiStatus::Ok
        }
        Err(Error::InvalidNode { .. }) => FfiStatus::InvalidNode,
        Err(Error::Unreachable { .. }) => FfiStatus::Unreachable,
        Err(Error::NegativeCost { .. }) => FfiStatus::InvalidArgument,
    }
}

#[no_mangle]
pub extern "C" fn rf_route_len(r: *const FfiRoute) -> usize {
    if r.is_null() {
        0
    } else {
        unsafe { (*r).len }
    }
}

#[no_mangle]
pub extern "C" fn rf_route_cost(r: *const FfiRoute) -> c_double {
    if r.is_null() {
        f64::NAN
    } else {
        unsafe { (*r).cost }
    }
}

/// Borrowed label of the `index`-th node of the route, or null when out of range
#[no_mangle]
pub extern "C" fn rf_route_node(r: *const FfiRoute, index: usize) -> *const c_char {
    if r.is_null() || index >= unsafe { (*r).len } {
        return std::ptr::null();
    }
    unsafe { *(*r).nodes.add(index) }
}

#[no_mangle]
pub extern "C" fn rf_route_free(r: *mut FfiRoute) {
    if !r.is_null() {
        unsafe {
            let route = Box::from_raw(r);
            let nodes = Box::from_raw(std::ptr::slice_from_raw_parts_mut(route.nodes, route.len));
            for node in nodes.iter() {
                drop(CString::from_raw(*node));
            }
        }
    }
}
