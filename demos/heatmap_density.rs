use quadex::{Bounds, Located, Point, QuadTreeBuilder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to see node splits)
    env_logger::init();

    println!("=== quadex - Heatmap Density ===\n");

    let mut tree = QuadTreeBuilder::new()
        .bounds(Bounds::default())
        .build::<Located<u32>>()?;

    // === LOAD CLUSTERED POINTS ===
    println!("1. Loading clustered points");
    println!("---------------------------");

    let clusters = [(-0.5, -0.4, 0.15), (0.4, 0.3, 0.25), (0.1, -0.7, 0.05)];
    let mut rng = StdRng::seed_from_u64(7);
    let mut id = 0;
    for (cx, cy, spread) in clusters {
        for _ in 0..3000 {
            let x = cx + rng.random_range(-spread..spread);
            let y = cy + rng.random_range(-spread..spread);
            if tree.add(Located::new(Point::new(x, y), id)) {
                id += 1;
            }
        }
    }

    let stats = tree.stats();
    println!("   Stored {} points", tree.len());
    println!(
        "   {} nodes ({} leaves), deepest level {}, avg {:.1} items per leaf\n",
        stats.node_count,
        stats.leaf_count,
        stats.max_depth,
        stats.avg_leaf_items()
    );

    // === DENSITY TILES ===
    println!("2. Density per tile (16 x 16)");
    println!("-----------------------------");

    const TILES: usize = 16;
    let universe = *tree.bounds();
    let tile_w = universe.width() / TILES as f64;
    let tile_h = universe.height() / TILES as f64;
    let shades = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    let mut counts = vec![vec![0usize; TILES]; TILES];
    let mut peak = 0;
    for (row, line) in counts.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            let tile = Bounds::new(
                universe.min_x() + col as f64 * tile_w,
                universe.min_y() + row as f64 * tile_h,
                universe.min_x() + (col + 1) as f64 * tile_w,
                universe.min_y() + (row + 1) as f64 * tile_h,
            );
            *cell = tree.count_within(&tile);
            peak = peak.max(*cell);
        }
    }

    for line in &counts {
        let row: String = line
            .iter()
            .map(|&count| {
                let level = if peak == 0 { 0 } else { count * (shades.len() - 1) / peak };
                shades[level]
            })
            .collect();
        println!("   |{}|", row);
    }
    println!("   Peak tile holds {} points\n", peak);

    // === REMOVAL ===
    println!("3. Removing a cluster");
    println!("---------------------");

    let hotspot = Bounds::new(0.05, -0.75, 0.15, -0.65);
    let doomed: Vec<Located<u32>> = tree.search(&hotspot).into_iter().cloned().collect();
    let removed = doomed.iter().filter(|item| tree.remove(item)).count();
    println!("   Removed {} points, {} remain", removed, tree.len());
    println!("   Hotspot now holds {} points", tree.count_within(&hotspot));

    Ok(())
}
