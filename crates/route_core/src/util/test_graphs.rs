use crate::{constants::Weight, graph::Graph};

/// Tourist sights of Medellín as `(a, b, minutes)` triples.
///
/// ```text
/// Parque de los Deseos
///   | 2
/// Jardín Botánico --20-- Plaza Botero
///   | 5                     | 1
/// Parque Explora         Museo de Antioquia
///   | 30                    | 15
/// Parque Arví ----40---- Pueblito Paisa
/// ```
pub const MEDELLIN_ROUTES: [(&str, &str, Weight); 7] = [
    ("Parque Explora", "Jardín Botánico", 5.0),
    ("Jardín Botánico", "Parque de los Deseos", 2.0),
    ("Parque Explora", "Parque Arví", 30.0),
    ("Parque Arví", "Pueblito Paisa", 40.0),
    ("Pueblito Paisa", "Museo de Antioquia", 15.0),
    ("Museo de Antioquia", "Plaza Botero", 1.0),
    ("Plaza Botero", "Jardín Botánico", 20.0),
];

/// Graph of [`MEDELLIN_ROUTES`]
pub fn medellin_sights() -> Graph<&'static str> {
    let mut g = Graph::with_capacity(7, MEDELLIN_ROUTES.len());
    g.add_edges(MEDELLIN_ROUTES);
    g
}

pub fn generate_complex_graph() -> Graph<&'static str> {
    let mut graph = Graph::with_capacity(11, 20);

    graph.add_edge("A", "B", 3.0);
    graph.add_edge("A", "C", 5.0);
    graph.add_edge("A", "K", 3.0);

    graph.add_edge("B", "D", 5.0);
    graph.add_edge("B", "C", 3.0);

    graph.add_edge("C", "D", 2.0);
    graph.add_edge("C", "J", 2.0);

    graph.add_edge("D", "J", 4.0);
    graph.add_edge("D", "E", 7.0);

    graph.add_edge("E", "J", 3.0);
    graph.add_edge("E", "F", 6.0);

    graph.add_edge("F", "H", 2.0);
    graph.add_edge("F", "G", 4.0);

    graph.add_edge("G", "H", 3.0);
    graph.add_edge("G", "I", 5.0);

    graph.add_edge("H", "I", 3.0);
    graph.add_edge("H", "J", 2.0);

    graph.add_edge("I", "J", 4.0);
    graph.add_edge("I", "K", 6.0);

    graph.add_edge("J", "K", 3.0);

    graph
}

pub fn generate_simple_graph() -> Graph<&'static str> {
    //           B
    //           |
    // E -- A -- C
    //      |  /
    //      D
    let mut g = Graph::new();

    g.add_edge("A", "C", 1.0);
    g.add_edge("A", "D", 1.0);
    g.add_edge("E", "A", 1.0);
    g.add_edge("C", "B", 1.0);
    g.add_edge("C", "D", 1.0);

    g
}

/// 0 -- 1 -- 2 and 3 -- 4 -- 5 without a connection between them
pub fn two_components() -> Graph<u32> {
    [(0, 1, 1.0), (1, 2, 1.0), (3, 4, 3.0), (4, 5, 1.0)]
        .into_iter()
        .collect()
}
