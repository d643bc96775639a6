//! commute — smallest end-to-end example for the odflow engine.
//!
//! Aggregates a hand-written commute dataset around Mobile, Alabama into
//! a cell flow graph, then walks through the interaction sequence a map
//! front end would drive: hover, isolate a flow, focus a cell, clear.
//! Swap the embedded CSV for a real dataset via `odf_store::FileSource`
//! to run at city scale.

use std::io::Cursor;

use anyhow::Result;

use odf_core::{FlowConfig, TimeBand};
use odf_session::{FlowGeometry, FlowSession, LayerFilters, PointerEvent, RenderAdapter};
use odf_store::load_trips_reader;

// ── Trip CSV ──────────────────────────────────────────────────────────────────

// Morning commutes into downtown (7-9), evening returns (17-19), plus a
// couple of short hops that stay inside one 100 m cell.
const TRIP_CSV: &str = "\
origin_lon,origin_lat,dest_lon,dest_lat,weight,interval\n\
-88.0900,30.6500,-88.0430,30.6920,18,7-9\n\
-88.0910,30.6510,-88.0430,30.6920,11,7-9\n\
-88.1100,30.6300,-88.0430,30.6920,9,7-9\n\
-88.0430,30.6920,-88.0900,30.6500,14,17-19\n\
-88.0430,30.6920,-88.1100,30.6300,7,17-19\n\
-88.0430,30.6920,-88.0431,30.6921,6,12-13\n\
-88.0900,30.6500,-88.0901,30.6501,3,\n\
";

// ── Render adapter ────────────────────────────────────────────────────────────

/// Adapter standing in for the map surface: counts what would be redrawn.
#[derive(Default)]
struct ConsoleSurface {
    geometry_uploads: usize,
    filter_updates:   usize,
}

impl RenderAdapter for ConsoleSurface {
    fn on_geometry(&mut self, geometry: &FlowGeometry) {
        self.geometry_uploads += 1;
        println!(
            "  [surface] geometry upload #{}: {} arcs, {} bubbles, {} stops, {} cells",
            self.geometry_uploads,
            geometry.paths.len(),
            geometry.self_points.len(),
            geometry.stops.len(),
            geometry.cells.len(),
        );
    }

    fn on_filters(&mut self, _filters: &LayerFilters) {
        self.filter_updates += 1;
    }

    fn on_clear(&mut self) {
        println!("  [surface] cleared");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== commute — odflow engine demo ===");
    println!();

    // 1. Load the embedded trip dataset.
    let dataset = load_trips_reader(Cursor::new(TRIP_CSV))?;
    println!(
        "Loaded {} trips ({} rows skipped)",
        dataset.trips.len(),
        dataset.skipped_rows
    );

    // 2. Build the session: envelope, grid, and initial aggregation.
    let mut session = FlowSession::new(dataset.trips, FlowConfig::default())?;
    let mut surface = ConsoleSurface::default();
    session.attach(&mut surface);

    let grid = session.grid();
    println!(
        "Grid: {} x {} cells of ~{} m over {:.4}° x {:.4}°",
        grid.rows(),
        grid.cols(),
        session.config().base_cell_size_meters,
        grid.envelope().width(),
        grid.envelope().height(),
    );
    println!();

    // 3. Full-day flow table.
    print_flows(&session);

    // 4. Morning band only — re-aggregates, same grid.
    println!("Applying time band 7-9 ...");
    session.set_time_band(Some(TimeBand::new(7.0, 9.0)), &mut surface)?;
    print_flows(&session);

    // 5. Isolate the heaviest morning flow, then click empty canvas.
    let heaviest = session
        .graph()
        .flows
        .iter()
        .max_by(|a, b| a.1.weight.total_cmp(&b.1.weight))
        .map(|(key, _)| *key)
        .expect("morning flows present");
    println!("Isolating {heaviest} ...");
    session.handle_pointer(PointerEvent::FlowClick(heaviest), &mut surface);
    let visible = session
        .graph()
        .flows
        .iter()
        .filter(|(key, flow)| session.filters().flow.matches(**key, flow))
        .count();
    println!("  flows passing the filter while isolated: {visible}");

    session.handle_pointer(PointerEvent::EmptyClick, &mut surface);
    let visible = session
        .graph()
        .flows
        .iter()
        .filter(|(key, flow)| session.filters().flow.matches(**key, flow))
        .count();
    println!("  flows passing after empty click:         {visible}");
    println!();

    // 6. Done.
    session.deactivate(&mut surface);
    println!(
        "Surface saw {} geometry uploads and {} filter updates",
        surface.geometry_uploads, surface.filter_updates
    );

    Ok(())
}

fn print_flows(session: &FlowSession) {
    let graph = session.graph();
    println!(
        "{:<16} {:>8}   (self-flows: {}, skipped: {})",
        "Pair", "Weight", graph.self_flows.len(), graph.skipped.total(),
    );
    println!("{}", "-".repeat(28));
    let mut flows: Vec<_> = graph.flows.iter().collect();
    flows.sort_unstable_by_key(|(key, _)| **key);
    for (key, flow) in flows {
        println!("{:<16} {:>8.1}", key.to_string(), flow.weight);
    }
    println!(
        "{:<16} {:>8.1}",
        "total",
        graph.flow_weight_total() + graph.self_flow_weight_total()
    );
    println!();
}
