//! Crate to find minimum weight routes in small undirected networks.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! // Create a new graph, every edge can be travelled in both directions
//! let mut g = Graph::new();
//! g.add_edge("Parque Explora", "Jardín Botánico", 5.0);
//! g.add_edge("Jardín Botánico", "Plaza Botero", 20.0);
//! g.add_edge("Plaza Botero", "Museo de Antioquia", 1.0);
//! g.add_edge("Parque Explora", "Museo de Antioquia", 40.0);
//!
//! // Search
//! let mut dijkstra = Dijkstra::new(&g);
//! let sp = dijkstra
//!     .search(&"Parque Explora", &"Museo de Antioquia")
//!     .expect("Failed to find path");
//!
//! assert_eq!(sp.weight, 26.0);
//! assert_eq!(
//!     sp.nodes,
//!     ["Parque Explora", "Jardín Botánico", "Plaza Botero", "Museo de Antioquia"]
//! );
//!
//! // Unknown nodes are reported as errors
//! assert_eq!(
//!     shortest_path(&g, &"Parque Explora", &"Parque Arví"),
//!     Err(RouteError::UnknownNode("Parque Arví"))
//! );
//!```
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
