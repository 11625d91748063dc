use anyhow::Context;
use log::info;
use route_core::prelude::*;
use route_core::util::{cli, test_graphs::MEDELLIN_ROUTES};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    // Build the sample network
    let g: Graph<String> = MEDELLIN_ROUTES
        .iter()
        .map(|&(a, b, weight)| (a.to_owned(), b.to_owned(), weight))
        .collect();
    info!("{}", g);

    if cfg.list {
        for node in g.nodes() {
            let neighbors = g
                .neighbors(node)?
                .map(|(neighbor, weight)| format!("{} ({})", neighbor, weight))
                .collect::<Vec<_>>()
                .join(", ");
            println!("{}: {}", node, neighbors);
        }
    }

    // Search
    let mut dijkstra = Dijkstra::new(&g);
    let shortest_path = dijkstra
        .search(&cfg.from, &cfg.to)
        .with_context(|| format!("Failed to find route from {} to {}", cfg.from, cfg.to))?;

    println!(
        "Best route: {} (total {} minutes)",
        shortest_path.nodes.join(" -> "),
        shortest_path.weight
    );
    if cfg.stats {
        println!("{}", dijkstra.stats);
    }

    Ok(())
}
