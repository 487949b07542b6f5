//! The diamond network.
//!
//! ```text
//!        b
//!   5  / | \ 10
//!     a  |10 c
//!   2  \ |
//!        d
//! ```
//!
//! Stations `a, b, c, d`; connections `a-b = 5`, `b-c = 10`, `b-d = 10`,
//! `d-a = 2` minutes, created in that order.

use railforge_core::{ConnectionId, Network, StationId};

/// The diamond network with handles to every station and connection.
#[derive(Debug, Clone)]
pub struct Diamond {
    pub network: Network,
    pub a: StationId,
    pub b: StationId,
    pub c: StationId,
    pub d: StationId,
    pub ab: ConnectionId,
    pub bc: ConnectionId,
    pub bd: ConnectionId,
    pub da: ConnectionId,
}

impl Diamond {
    /// All connections in creation order.
    pub fn connections(&self) -> [ConnectionId; 4] {
        [self.ab, self.bc, self.bd, self.da]
    }
}

/// Builds the diamond network.
pub fn diamond() -> Diamond {
    let mut builder = Network::builder();
    let a = builder.add_station("a", 52.00, 4.00).expect("station a");
    let b = builder.add_station("b", 52.05, 4.05).expect("station b");
    let c = builder.add_station("c", 52.10, 4.10).expect("station c");
    let d = builder.add_station("d", 52.00, 4.10).expect("station d");
    let ab = builder.connect(a, b, 5.0).expect("a-b");
    let bc = builder.connect(b, c, 10.0).expect("b-c");
    let bd = builder.connect(b, d, 10.0).expect("b-d");
    let da = builder.connect(d, a, 2.0).expect("d-a");
    Diamond {
        network: builder.build(),
        a,
        b,
        c,
        d,
        ab,
        bc,
        bd,
        da,
    }
}
