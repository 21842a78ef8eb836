//! `pathfind dijkstra` command
use std::time::Instant;

use pathfind_core::config::PathfindConfig;
use pathfind_core::error::Result;
use pathfind_core::format::join_spaced;
use pathfind_core::graph::{shortest_paths, Graph, ShortestPaths, Weight};
use pathfind_core::{ensure_vertex, trace_time};
use serde::Serialize;

use crate::cli::{Cli, DijkstraArgs, OutputFormat};

/// Path report for one destination vertex
#[derive(Debug, Serialize)]
struct PathEntry {
    to: usize,
    reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<Weight>,
    path: Vec<usize>,
}

/// Execute the dijkstra command
pub fn execute(cli: &Cli, config: &PathfindConfig, args: &DijkstraArgs) -> Result<()> {
    let start = Instant::now();

    let graph = Graph::load(&args.graph)?;
    trace_time!(start, "load_graph", vertices = graph.vertex_count());

    let source = args.source.unwrap_or(config.graph.source);
    let result = shortest_paths(&graph, source)?;
    trace_time!(start, "shortest_paths");

    let destinations: Vec<usize> = match args.to {
        Some(to) => {
            ensure_vertex!(to, graph.vertex_count());
            vec![to]
        }
        None => (0..graph.vertex_count()).filter(|&v| v != source).collect(),
    };

    let entries = destinations
        .into_iter()
        .map(|to| path_entry(&result, to))
        .collect::<Result<Vec<_>>>()?;

    match cli.format {
        OutputFormat::Json => output_json(&graph, &result, &entries, args.to.is_none())?,
        OutputFormat::Human => output_human(cli, &graph, &result, &entries, args),
    }

    Ok(())
}

fn path_entry(result: &ShortestPaths, to: usize) -> Result<PathEntry> {
    let path = result.path_to(to)?;
    Ok(PathEntry {
        to,
        reachable: result.is_reachable(to),
        cost: result.distance(to),
        path,
    })
}

fn output_json(
    graph: &Graph,
    result: &ShortestPaths,
    entries: &[PathEntry],
    include_distances: bool,
) -> Result<()> {
    let mut output = serde_json::json!({
        "source": result.source,
        "vertices": graph.vertex_count(),
        "edges": graph.edge_count(),
        "paths": entries,
    });
    if include_distances {
        let distances: Vec<Option<Weight>> = (0..graph.vertex_count())
            .map(|v| result.distance(v))
            .collect();
        output["distances"] = serde_json::json!(distances);
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(
    cli: &Cli,
    graph: &Graph,
    result: &ShortestPaths,
    entries: &[PathEntry],
    args: &DijkstraArgs,
) {
    if !cli.quiet {
        println!("Running Dijkstra's algorithm on {}", args.graph.display());
        println!("Graph has {} vertices", graph.vertex_count());
        println!("Shortest paths from vertex {}:", result.source);
    }

    for entry in entries {
        match entry.cost {
            Some(cost) => {
                println!("To vertex {}: {}", entry.to, join_spaced(&entry.path));
                println!("Total cost is {}", cost);
            }
            None => println!("No path to vertex {}", entry.to),
        }
    }

    if args.to.is_some() {
        return;
    }

    println!();
    println!("Total costs from vertex {}:", result.source);
    for vertex in 0..graph.vertex_count() {
        match result.distance(vertex) {
            Some(distance) => println!("Vertex {}: {}", vertex, distance),
            None => println!("Vertex {}: Unreachable", vertex),
        }
    }
}
