//! CSV loading of stations and connections.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use railforge::{Network, NetworkBuilder};

use crate::error::CliError;

#[derive(Debug, Deserialize)]
struct StationRow(String, f64, f64);

#[derive(Debug, Deserialize)]
struct ConnectionRow(String, String, f64);

fn reader(path: &Path) -> Result<csv::Reader<std::fs::File>, CliError> {
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?)
}

/// Loads `name,lat,long` stations and `start,end,duration` connections.
///
/// Columns are read by position; each file's first row is a header and is
/// skipped. Any malformed row aborts loading.
pub fn load_network(stations: &Path, connections: &Path) -> Result<Network, CliError> {
    let mut builder = Network::builder();
    load_stations(&mut builder, stations)?;
    load_connections(&mut builder, connections)?;
    let network = builder.build();
    info!(
        event = "network_loaded",
        stations = network.station_count(),
        connections = network.connection_count(),
        total_minutes = network.total_duration(),
    );
    Ok(network)
}

fn load_stations(builder: &mut NetworkBuilder, path: &Path) -> Result<(), CliError> {
    let mut reader = reader(path)?;
    for row in reader.deserialize::<StationRow>() {
        let StationRow(name, latitude, longitude) = row?;
        let line = line_of(builder.station_count());
        builder
            .add_station(name, latitude, longitude)
            .map_err(|source| CliError::Row {
                path: path.to_path_buf(),
                line,
                source,
            })?;
    }
    Ok(())
}

fn load_connections(builder: &mut NetworkBuilder, path: &Path) -> Result<(), CliError> {
    let mut reader = reader(path)?;
    for row in reader.deserialize::<ConnectionRow>() {
        let ConnectionRow(start, end, duration) = row?;
        let line = line_of(builder.connection_count());
        builder
            .add_connection(&start, &end, duration)
            .map_err(|source| CliError::Row {
                path: path.to_path_buf(),
                line,
                source,
            })?;
    }
    Ok(())
}

/// File line of the `index`-th data row, counting the header as line 1.
fn line_of(index: usize) -> u64 {
    index as u64 + 2
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use railforge::ConstructionError;
    use tempfile::NamedTempFile;

    use super::*;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_network() {
        let stations = csv_file(
            "station,y,x\nAlkmaar,52.637,4.739\nHoorn,52.644,5.060\nZaandam,52.439,4.814\n",
        );
        let connections = csv_file(
            "station1,station2,distance\nAlkmaar,Hoorn,24\nAlkmaar, Zaandam ,19.5\n",
        );
        let network = load_network(stations.path(), connections.path()).unwrap();

        assert_eq!(network.station_count(), 3);
        assert_eq!(network.connection_count(), 2);
        assert_eq!(network.total_duration(), 43.5);
        assert!(network.station_by_name("Zaandam").is_some());
    }

    #[test]
    fn test_unknown_station_names_the_row() {
        let stations = csv_file("name,lat,long\nAlkmaar,52.637,4.739\n");
        let connections = csv_file("start,end,duration\nAlkmaar,Hoorn,24\n");
        let err = load_network(stations.path(), connections.path()).unwrap_err();
        match err {
            CliError::Row { line, source, .. } => {
                assert_eq!(line, 2);
                assert_eq!(source, ConstructionError::UnknownStation("Hoorn".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_duration_is_fatal() {
        let stations = csv_file("name,lat,long\na,52.0,4.0\nb,52.1,4.1\n");
        let connections = csv_file("start,end,duration\na,b,-3\n");
        let err = load_network(stations.path(), connections.path()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Row {
                source: ConstructionError::InvalidDuration { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_non_numeric_field_is_csv_error() {
        let stations = csv_file("name,lat,long\na,north,4.0\n");
        let connections = csv_file("start,end,duration\n");
        let err = load_network(stations.path(), connections.path()).unwrap_err();
        assert!(matches!(err, CliError::Csv(_)));
    }

    #[test]
    fn test_missing_file() {
        let connections = csv_file("start,end,duration\n");
        let err = load_network(Path::new("/nonexistent/stations.csv"), connections.path())
            .unwrap_err();
        assert!(matches!(err, CliError::Csv(_)));
    }
}
