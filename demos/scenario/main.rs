/// Walks through a few edits of a small graph and prints the forest after each.
/// Usage: `RUST_LOG=debug cargo run --example scenario`
use adaptive_mst::{MstEngine, MstError};

fn show(title: &str, engine: &MstEngine) {
    println!("== {title}");
    println!("{}", engine.stats());
    for e in engine.mst_edges() {
        println!("  {e}");
    }
}

fn main() -> Result<(), MstError> {
    env_logger::init();

    let mut engine = MstEngine::new(4);
    engine.add_edge(0, 1, 1.0)?;
    engine.add_edge(1, 2, 2.0)?;
    engine.add_edge(2, 3, 3.0)?;
    engine.add_edge(0, 3, 10.0)?;
    show("square", &engine);

    engine.add_edge(0, 2, 0.5)?;
    show("with diagonal (0, 2)", &engine);

    engine.delete_edge(0, 1)?;
    show("without (0, 1)", &engine);

    engine.delete_node(1)?;
    show("without node 1", &engine);

    engine.build_initial_mst("prim")?;
    show("rebuilt with prim", &engine);

    Ok(())
}
