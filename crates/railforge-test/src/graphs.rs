//! Parametric network fixtures.
//!
//! Stations are named `s0, s1, ...` and laid out on a small grid near
//! 52N 4E so that every pair has a distinct position.

use railforge_core::{Network, NetworkBuilder, StationId};

const ORIGIN: (f64, f64) = (52.0, 4.0);
const SPACING_DEG: f64 = 0.02;

fn add_stations(builder: &mut NetworkBuilder, count: usize, columns: usize) -> Vec<StationId> {
    let columns = columns.max(1);
    (0..count)
        .map(|i| {
            let row = (i / columns) as f64;
            let column = (i % columns) as f64;
            builder
                .add_station(
                    format!("s{i}"),
                    ORIGIN.0 + row * SPACING_DEG,
                    ORIGIN.1 + column * SPACING_DEG,
                )
                .expect("fixture station")
        })
        .collect()
}

/// Builds a network from `(start, end, duration)` station-index triples.
///
/// Self-loops are skipped so that generated edge lists can be used as is.
pub fn network_from_edges(station_count: usize, edges: &[(usize, usize, f64)]) -> Network {
    let mut builder = Network::builder();
    let columns = (station_count as f64).sqrt().ceil() as usize;
    let stations = add_stations(&mut builder, station_count, columns);
    for &(start, end, duration) in edges {
        if start == end {
            continue;
        }
        builder
            .connect(stations[start], stations[end], duration)
            .expect("fixture connection");
    }
    builder.build()
}

/// `s0 - s1 - ... - s{n-1}`, every connection taking `duration`.
pub fn chain(n: usize, duration: f64) -> Network {
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i, duration)).collect();
    network_from_edges(n, &edges)
}

/// A closed ring of `n >= 3` stations.
pub fn ring(n: usize, duration: f64) -> Network {
    let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n, duration)).collect();
    network_from_edges(n, &edges)
}

/// A `rows x columns` lattice with horizontal and vertical connections.
pub fn grid(rows: usize, columns: usize, duration: f64) -> Network {
    let mut builder = Network::builder();
    let stations = add_stations(&mut builder, rows * columns, columns);
    for r in 0..rows {
        for c in 0..columns {
            let here = stations[r * columns + c];
            if c + 1 < columns {
                builder
                    .connect(here, stations[r * columns + c + 1], duration)
                    .expect("fixture connection");
            }
            if r + 1 < rows {
                builder
                    .connect(here, stations[(r + 1) * columns + c], duration)
                    .expect("fixture connection");
            }
        }
    }
    builder.build()
}
