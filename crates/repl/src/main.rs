//! Interactive shell over the Medellín sights network
use std::path::PathBuf;

use route_core::graph::node_index;
use route_core::prelude::*;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

type Node = &'static str;

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "{}, average degree {:.2}",
        context.graph,
        route_core::statistics::average_degree(&context.graph)
    )))
}

/// List all nodes with their ids
fn nodes(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let list = context
        .graph
        .nodes()
        .enumerate()
        .map(|(id, node)| format!("{}: {}", id, node))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(Some(list))
}

fn neighbors(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let Some(node) = context.node(&args, "id") else {
        return Ok(Some("Unknown node id".to_string()));
    };

    let out = match context.graph.neighbors(&node) {
        Ok(neighbors) => neighbors
            .map(|(neighbor, weight)| format!("{} ({})", neighbor, weight))
            .collect::<Vec<_>>()
            .join("\n"),
        Err(e) => e.to_string(),
    };
    Ok(Some(out))
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (Some(src), Some(dst)) = (context.node(&args, "src"), context.node(&args, "dst")) else {
        return Ok(Some("Unknown node id".to_string()));
    };

    let mut dijkstra = Dijkstra::new(&context.graph);
    match dijkstra.search(&src, &dst) {
        Ok(sp) => {
            let mut path = String::new();
            for node in &sp.nodes {
                path.push_str(&format!("{}\n", node));
            }
            path.push_str(&format!("Total: {}\n", sp.weight));
            path.push_str(&format!("Took: {:?}", dijkstra.stats.duration));
            Ok(Some(path))
        }
        Err(e) => Ok(Some(format!("No path found: {}", e))),
    }
}

fn measure_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);
    let num_nodes = context.graph.num_nodes();
    if num_nodes == 0 {
        return Ok(Some("Graph is empty".to_string()));
    }

    // Select n random start and end nodes
    let mut rng = rand::thread_rng();
    let pairs: Vec<(Node, Node)> = (0..n)
        .map(|_| {
            (
                context.graph[node_index(rng.gen_range(0..num_nodes))],
                context.graph[node_index(rng.gen_range(0..num_nodes))],
            )
        })
        .collect();

    let mut res = String::new();
    // Run Dijkstra for each pair of nodes
    for (src, dst) in pairs {
        let mut dijkstra = Dijkstra::new(&context.graph);
        if dijkstra.search(&src, &dst).is_err() {
            continue;
        }
        res.push_str(&format!(
            "{} -> {}: {:?}\n",
            src, dst, dijkstra.stats.duration
        ));
    }

    Ok(Some(res))
}

struct Context {
    graph: Graph<Node>,
}

impl Context {
    fn new(graph: Graph<Node>) -> Self {
        Self { graph }
    }

    /// Resolves the numeric id argument `name` to a node
    fn node(&self, args: &ArgMatches, name: &str) -> Option<Node> {
        let id = *args.get_one::<usize>(name)?;
        self.graph.node(node_index(id)).copied()
    }
}

fn id_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .value_parser(value_parser!(usize))
        .required(true)
        .help(help)
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let context = Context::new(medellin_sights());

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to query routes between Medellín sights")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("nodes").about("List all nodes with their ids"),
            nodes,
        )
        .with_command(
            Command::new("neighbors")
                .arg(id_arg("id", "ID of the node"))
                .about("List the neighbors of a node"),
            neighbors,
        )
        .with_command(
            Command::new("dijk")
                .arg(id_arg("src", "ID of source node"))
                .arg(id_arg("dst", "ID of destination node"))
                .about("Calculate shortest path using Dijkstra's algorithm"),
            run_dijkstra,
        )
        .with_command(
            Command::new("dijkm")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random shortest paths to calculate"),
                )
                .about("Measure `n` random shortest paths calculations"),
            measure_dijkstra,
        );

    repl.run()
}
